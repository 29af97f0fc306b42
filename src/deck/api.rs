//! The deck service contract.
//!
//! Two operations: shuffle a new deck, draw one round's pair from it.
//! Implementations never retry; failures are reported to the caller.

use serde::{Deserialize, Serialize};

use crate::core::GameError;

/// Cards drawn per round.
pub const CARDS_PER_ROUND: u32 = 2;

/// A card as returned by the deck service.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawnCard {
    /// Rank label ("ACE", "2".."10", "JACK", "QUEEN", "KING").
    pub value: String,
    /// URL of the card face.
    pub image: String,
}

impl DrawnCard {
    pub fn new(value: impl Into<String>, image: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            image: image.into(),
        }
    }
}

/// Result of a shuffle.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShuffledDeck {
    pub deck_id: String,
    pub remaining: u32,
}

/// Result of a draw.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawnCards {
    /// The pair for player 1 and player 2. `None` when the deck was already
    /// drained and the service handed out nothing.
    pub cards: Option<[DrawnCard; 2]>,
    /// Cards left after this draw.
    pub remaining: u32,
}

/// A deck-of-cards service.
#[allow(async_fn_in_trait)]
pub trait DeckApi {
    /// Request a freshly shuffled deck.
    async fn new_shuffled_deck(&mut self) -> Result<ShuffledDeck, GameError>;

    /// Draw `CARDS_PER_ROUND` cards from the deck `deck_id`.
    async fn draw_cards(&mut self, deck_id: &str) -> Result<DrawnCards, GameError>;
}
