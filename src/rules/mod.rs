//! Game rules.
//!
//! - Round resolution: higher rank strength wins, equal strengths tie
//! - End of game: the higher score wins, equal scores tie

pub mod resolver;

pub use resolver::{GameVerdict, RoundOutcome, RoundResolver};
