//! The persisted game session.
//!
//! `GameSession` is the single value the controller reads at start-up and
//! writes back after every action. Scores live under their own keys and are
//! maintained through `ScoreStore`; the session carries a copy for rendering.

use serde::{Deserialize, Serialize};

use crate::core::{GameError, Player, Scores};

use super::scores::ScoreStore;
use super::store::{keys, KeyValueStore};

/// Storage key holding the last image shown for a player.
#[must_use]
pub const fn image_key(player: Player) -> &'static str {
    match player {
        Player::One => keys::PLAYER1_IMAGE,
        Player::Two => keys::PLAYER2_IMAGE,
    }
}

/// Deck session and scores.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSession {
    /// Remote deck id. `None` before the first shuffle and after a game ends.
    pub deck_id: Option<String>,

    /// Cards left in the remote deck.
    pub remaining_cards: Option<u32>,

    pub scores: Scores,
}

impl GameSession {
    /// A session for a freshly shuffled deck with zeroed scores.
    pub fn new_deck(deck_id: impl Into<String>, remaining: u32) -> Self {
        Self {
            deck_id: Some(deck_id.into()),
            remaining_cards: Some(remaining),
            scores: Scores::default(),
        }
    }

    /// Read the session from `store`.
    ///
    /// An empty deck id counts as absent; an unparsable remaining count
    /// counts as absent; scores default to 0.
    pub fn load<S: KeyValueStore + ?Sized>(store: &mut S) -> Self {
        let deck_id = store.get(keys::DECK_ID).filter(|id| !id.trim().is_empty());
        let remaining_cards = store.get_u32(keys::REMAINING_CARDS);
        let scores = ScoreStore::new(store).read();
        Self {
            deck_id,
            remaining_cards,
            scores,
        }
    }

    /// Write the deck fields and scores to `store`.
    pub fn save<S: KeyValueStore + ?Sized>(&self, store: &mut S) -> Result<(), GameError> {
        match &self.deck_id {
            Some(id) => store.set(keys::DECK_ID, id.clone())?,
            None => store.remove(keys::DECK_ID)?,
        }
        match self.remaining_cards {
            Some(n) => store.set(keys::REMAINING_CARDS, n.to_string())?,
            None => store.remove(keys::REMAINING_CARDS)?,
        }
        for (player, score) in self.scores.iter() {
            store.set(super::scores::score_key(player), score.to_string())?;
        }
        Ok(())
    }

    /// True when a deck id exists and cards remain to be drawn.
    #[must_use]
    pub fn has_playable_deck(&self) -> bool {
        self.deck_id.is_some() && self.remaining_cards.map_or(false, |n| n > 0)
    }

    /// Last-drawn image URLs, if both are stored.
    pub fn last_images<S: KeyValueStore + ?Sized>(store: &S) -> Option<(String, String)> {
        let first = store.get(image_key(Player::One))?;
        let second = store.get(image_key(Player::Two))?;
        Some((first, second))
    }

    /// Remember the images of the latest round.
    pub fn set_last_images<S: KeyValueStore + ?Sized>(
        store: &mut S,
        player1: &str,
        player2: &str,
    ) -> Result<(), GameError> {
        store.set(image_key(Player::One), player1.to_string())?;
        store.set(image_key(Player::Two), player2.to_string())
    }

    /// Forget the stored images.
    pub fn clear_last_images<S: KeyValueStore + ?Sized>(store: &mut S) -> Result<(), GameError> {
        for player in Player::BOTH {
            store.remove(image_key(player))?;
        }
        Ok(())
    }
}
