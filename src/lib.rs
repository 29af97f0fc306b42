//! # deck-war
//!
//! Two-player "War" played against a remote deck-of-cards service.
//!
//! Each round draws two cards from the remote deck, player 1 taking the
//! first and player 2 the second. The higher rank scores a point (aces are
//! low), equal ranks tie. When the deck is drained the higher total wins.
//!
//! ## Design
//!
//! - **Explicit session**: all persisted state is one `GameSession` value,
//!   loaded once and written back by the controller after every action.
//!
//! - **Explicit state machine**: `UiMode` is computed at start-up from the
//!   session and changes only through `shuffle` and `draw`.
//!
//! - **Pluggable edges**: the deck service (`DeckApi`), storage
//!   (`KeyValueStore`) and presentation (`Presenter`) are traits, so the
//!   same controller runs against the real service, a seeded offline deck,
//!   or test doubles.
//!
//! ## Modules
//!
//! - `core`: players, ranks, errors, configuration, RNG
//! - `storage`: key-value stores, session, scores
//! - `rules`: round resolution and final verdict
//! - `deck`: deck service trait, HTTP client, offline deck
//! - `game`: controller and presenter

pub mod core;
pub mod deck;
pub mod game;
pub mod rules;
pub mod storage;

// Re-export commonly used types
pub use crate::core::{CardValueTable, ClientConfig, DeckRng, GameError, Player, Rank, Scores};

pub use crate::storage::{FileStore, GameSession, KeyValueStore, MemoryStore, ScoreStore};

pub use crate::rules::{GameVerdict, RoundOutcome, RoundResolver};

pub use crate::deck::{
    DeckApi, DrawnCard, DrawnCards, HttpDeckClient, ShuffledDeck, SimulatedDeck, CARDS_PER_ROUND,
};

pub use crate::game::{DrawReport, GameController, Presenter, TerminalPresenter, UiMode};
