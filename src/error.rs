//! Error types for the Golf engine.
//!
//! ## Taxonomy
//!
//! - **Contract violations** (`GolfError::ContractViolation`): a participant
//!   returned a decision the rules cannot apply. These are fatal: the match
//!   halts and no partial result is produced.
//! - **Setup errors** (`InvalidPlayerCount`, `DuplicateName`,
//!   `InvalidCardValue`): rejected before a match starts.
//! - **Engine invariants** (`EmptyDiscard`, `DeckExhausted`): unreachable from
//!   a legal table state, reported instead of panicking.
//! - **Driver misuse** (`PhaseMismatch`, `TurnLimitExceeded`): the stepping API
//!   was called out of order, or a match failed to terminate.

use thiserror::Error;

/// Ways a participant can break the decision contract.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Violation {
    /// A 1-indexed coordinate that does not address a card on the table.
    #[error("coordinate ({row}, {col}) is outside the table")]
    CoordinateOutOfRange { row: usize, col: usize },

    /// Initial flips must name every row exactly once.
    #[error("initial flips must name each of the {rows} rows exactly once")]
    InitialFlips { rows: usize },

    /// Chose to draw from the discard pile while it was empty.
    #[error("drew from an empty discard pile")]
    DrawFromEmptyDiscard,

    /// A textual decision token that is not part of the protocol.
    #[error("unrecognized token {0:?}")]
    UnrecognizedToken(String),
}

/// Errors produced by the Golf engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GolfError {
    #[error("invalid player count {0}: a match needs 2 to 4 participants")]
    InvalidPlayerCount(usize),

    #[error("card value {0} is outside 0..=12")]
    InvalidCardValue(u8),

    /// Names key the score map, so they must be unique within a match.
    #[error("participant name {0:?} is used more than once")]
    DuplicateName(String),

    #[error("contract violation by {participant}: {violation}")]
    ContractViolation {
        participant: String,
        violation: Violation,
    },

    #[error("discard pile is empty")]
    EmptyDiscard,

    #[error("draw pile and discard pile are both exhausted")]
    DeckExhausted,

    #[error("expected phase {expected}, game is in {actual}")]
    PhaseMismatch {
        expected: &'static str,
        actual: &'static str,
    },

    #[error("match did not finish within {0} turns")]
    TurnLimitExceeded(u32),
}

impl GolfError {
    /// Attach a participant name to a contract violation.
    pub fn violation(participant: impl Into<String>, violation: Violation) -> Self {
        GolfError::ContractViolation {
            participant: participant.into(),
            violation,
        }
    }

    /// True for errors caused by a misbehaving participant.
    #[must_use]
    pub fn is_contract_violation(&self) -> bool {
        matches!(self, GolfError::ContractViolation { .. })
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, GolfError>;
