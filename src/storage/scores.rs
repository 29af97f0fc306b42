//! Persisted score counters.

use crate::core::{GameError, Player, Scores};

use super::store::{keys, KeyValueStore};

/// Storage key holding a player's score.
#[must_use]
pub const fn score_key(player: Player) -> &'static str {
    match player {
        Player::One => keys::PLAYER1_SCORE,
        Player::Two => keys::PLAYER2_SCORE,
    }
}

/// Score counters for both players, written through to a `KeyValueStore`.
///
/// ```
/// use deck_war::core::Player;
/// use deck_war::storage::{MemoryStore, ScoreStore};
///
/// let mut store = MemoryStore::new();
/// let mut scores = ScoreStore::new(&mut store);
/// scores.increment(Player::Two).unwrap();
/// assert_eq!(scores.read().as_tuple(), (0, 1));
/// ```
pub struct ScoreStore<'a, S: KeyValueStore + ?Sized> {
    store: &'a mut S,
}

impl<'a, S: KeyValueStore + ?Sized> ScoreStore<'a, S> {
    pub fn new(store: &'a mut S) -> Self {
        Self { store }
    }

    /// Set both scores to 0.
    pub fn reset(&mut self) -> Result<(), GameError> {
        for player in Player::BOTH {
            self.store.set(score_key(player), "0".to_string())?;
        }
        Ok(())
    }

    /// Add one point to `player` and return the new score.
    ///
    /// Fails with `Storage` if the stored score is already `u32::MAX`.
    pub fn increment(&mut self, player: Player) -> Result<u32, GameError> {
        let score = self.read_one(player).checked_add(1).ok_or_else(|| {
            GameError::Storage(format!("{} overflowed", score_key(player)))
        })?;
        self.store.set(score_key(player), score.to_string())?;
        Ok(score)
    }

    /// Current scores. Absent or unparsable values read as 0.
    #[must_use]
    pub fn read(&self) -> Scores {
        Scores::new(self.read_one(Player::One), self.read_one(Player::Two))
    }

    fn read_one(&self, player: Player) -> u32 {
        self.store.get_u32(score_key(player)).unwrap_or(0)
    }
}
