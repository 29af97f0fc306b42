//! Core types: players, ranks, errors, configuration, RNG.
//!
//! Everything here is free of I/O. Storage, the deck service and the
//! controller build on these types.

pub mod config;
pub mod error;
pub mod player;
pub mod rank;
pub mod rng;

pub use config::{ClientConfig, DEFAULT_BACK_IMAGE, DEFAULT_BASE_URL};
pub use error::GameError;
pub use player::{Player, Scores};
pub use rank::{CardValueTable, Rank};
pub use rng::DeckRng;
