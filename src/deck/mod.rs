//! Deck service clients.
//!
//! - `api`: the `DeckApi` trait and its result types
//! - `wire`: JSON payloads of the remote service
//! - `http`: `HttpDeckClient`, the remote service over `reqwest`
//! - `simulated`: `SimulatedDeck`, a seeded in-process service

pub mod api;
pub mod http;
pub mod simulated;
pub mod wire;

pub use api::{DeckApi, DrawnCard, DrawnCards, ShuffledDeck, CARDS_PER_ROUND};
pub use http::HttpDeckClient;
pub use simulated::SimulatedDeck;
