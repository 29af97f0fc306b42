//! Player identification and per-player scores.
//!
//! ## Player
//!
//! The game always has exactly two seats. Player 1 receives the first card
//! of every drawn pair, player 2 the second.
//!
//! ## Scores
//!
//! Round-win counters for both seats, indexable by `Player`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One of the two seats.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    One,
    Two,
}

impl Player {
    /// Both players in seat order.
    pub const BOTH: [Player; 2] = [Player::One, Player::Two];

    /// Seat index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Player::One => 0,
            Player::Two => 1,
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.index() + 1)
    }
}

/// Round wins for both players.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Scores {
    data: [u32; 2],
}

impl Scores {
    /// Create scores from explicit values.
    #[must_use]
    pub const fn new(player1: u32, player2: u32) -> Self {
        Self {
            data: [player1, player2],
        }
    }

    /// Both scores as a `(player1, player2)` tuple.
    #[must_use]
    pub const fn as_tuple(self) -> (u32, u32) {
        (self.data[0], self.data[1])
    }

    /// Sum of both scores: the number of non-tie rounds played.
    ///
    /// Saturates at `u32::MAX` for scores loaded from a tampered store.
    #[must_use]
    pub const fn total(self) -> u32 {
        self.data[0].saturating_add(self.data[1])
    }

    /// Iterate over (Player, score) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Player, u32)> + '_ {
        Player::BOTH.into_iter().map(|p| (p, self.data[p.index()]))
    }
}

impl Index<Player> for Scores {
    type Output = u32;

    fn index(&self, player: Player) -> &Self::Output {
        &self.data[player.index()]
    }
}

impl IndexMut<Player> for Scores {
    fn index_mut(&mut self, player: Player) -> &mut Self::Output {
        &mut self.data[player.index()]
    }
}
