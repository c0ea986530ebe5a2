//! Match orchestration.
//!
//! - `GameBuilder`: roster checks, seating, deal and initial flips
//! - `Game`: the turn state machine, termination and scoring
//! - `MatchResult`: turns played, final scores and the winner

pub mod builder;
pub mod engine;
pub mod result;

pub use builder::GameBuilder;
pub use engine::{Game, Phase};
pub use result::MatchResult;
