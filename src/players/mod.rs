//! Participants and their tables.
//!
//! ## Key Types
//!
//! - `Table`: A participant's rows of cards, owned by the engine
//! - `Coord`: 1-indexed table coordinate used in decisions
//! - `Participant`: The decision interface strategies implement
//! - `DrawChoice` / `PlayChoice`: The answers a participant can give
//!
//! ## Reference Strategies
//!
//! - `RandomParticipant`: uniformly random legal decisions
//! - `HeuristicParticipant`: simple value-minimizing rules
//!
//! Both take an injected `GameRng` so matches replay exactly under a seed.

pub mod heuristic;
pub mod participant;
pub mod random;
pub mod table;

pub use heuristic::HeuristicParticipant;
pub use participant::{DrawChoice, Participant, PlayChoice};
pub use random::RandomParticipant;
pub use table::{Coord, Row, Table, ROWS, ROW_WIDTH};
