//! Client-side persistence: key-value stores, the game session, scores.

pub mod scores;
pub mod session;
pub mod store;

pub use scores::{score_key, ScoreStore};
pub use session::{image_key, GameSession};
pub use store::{keys, FileStore, KeyValueStore, MemoryStore};
