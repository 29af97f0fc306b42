//! JSON payloads of the deck service.
//!
//! Shapes follow deckofcardsapi.com. Only the fields the game reads are
//! declared; the rest (`shuffled`, card `code` and `suit`) are ignored.

use serde::{Deserialize, Serialize};

use super::api::{DrawnCard, DrawnCards, ShuffledDeck};
use crate::core::GameError;

/// `GET /api/deck/new/shuffle/?deck_count=N`
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ShuffleResponse {
    #[serde(default = "default_success")]
    pub success: bool,
    pub deck_id: String,
    pub remaining: u32,
    #[serde(default)]
    pub error: Option<String>,
}

/// `GET /api/deck/{id}/draw/?count=N`
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DrawResponse {
    #[serde(default = "default_success")]
    pub success: bool,
    #[serde(default)]
    pub deck_id: Option<String>,
    #[serde(default)]
    pub cards: Vec<CardPayload>,
    pub remaining: u32,
    #[serde(default)]
    pub error: Option<String>,
}

/// One card in a draw response.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CardPayload {
    pub value: String,
    pub image: String,
}

fn default_success() -> bool {
    true
}

impl ShuffleResponse {
    /// Validate and convert.
    pub fn into_shuffled(self) -> Result<ShuffledDeck, GameError> {
        if !self.success {
            return Err(GameError::MalformedResponse(
                self.error.unwrap_or_else(|| "shuffle was not successful".to_string()),
            ));
        }
        if self.deck_id.trim().is_empty() {
            return Err(GameError::MalformedResponse("empty deck_id".to_string()));
        }
        Ok(ShuffledDeck {
            deck_id: self.deck_id,
            remaining: self.remaining,
        })
    }
}

impl DrawResponse {
    /// Validate and convert.
    ///
    /// A drained deck (no cards, `remaining == 0`) is a normal result, even
    /// though the service flags it with `success: false`.
    pub fn into_drawn(self) -> Result<DrawnCards, GameError> {
        if self.cards.is_empty() && self.remaining == 0 {
            return Ok(DrawnCards {
                cards: None,
                remaining: 0,
            });
        }
        if !self.success {
            return Err(GameError::MalformedResponse(
                self.error.unwrap_or_else(|| "draw was not successful".to_string()),
            ));
        }

        let count = self.cards.len();
        let mut cards = self
            .cards
            .into_iter()
            .map(|c| DrawnCard::new(c.value, c.image));
        match (cards.next(), cards.next(), cards.next()) {
            (Some(first), Some(second), None) => Ok(DrawnCards {
                cards: Some([first, second]),
                remaining: self.remaining,
            }),
            _ => Err(GameError::MalformedResponse(format!(
                "expected 2 cards, got {}",
                count
            ))),
        }
    }
}
