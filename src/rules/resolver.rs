//! Round resolution and the end-of-game verdict.
//!
//! A round compares the strengths of the two drawn cards. The first card
//! belongs to player 1, the second to player 2. Equal strengths tie and
//! score nothing; otherwise the stronger card's owner scores one point.

use serde::{Deserialize, Serialize};

use crate::core::{CardValueTable, GameError, Player, Scores};
use crate::deck::DrawnCard;
use crate::storage::{KeyValueStore, ScoreStore};

/// Result of one round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoundOutcome {
    Player1Wins,
    Player2Wins,
    Tie,
}

impl RoundOutcome {
    /// Outcome for two card strengths.
    #[must_use]
    pub fn from_strengths(player1: u8, player2: u8) -> Self {
        match player1.cmp(&player2) {
            std::cmp::Ordering::Greater => RoundOutcome::Player1Wins,
            std::cmp::Ordering::Less => RoundOutcome::Player2Wins,
            std::cmp::Ordering::Equal => RoundOutcome::Tie,
        }
    }

    /// The player who scores, if any.
    #[must_use]
    pub fn winner(self) -> Option<Player> {
        match self {
            RoundOutcome::Player1Wins => Some(Player::One),
            RoundOutcome::Player2Wins => Some(Player::Two),
            RoundOutcome::Tie => None,
        }
    }

    /// The same round seen with the seats swapped.
    #[must_use]
    pub fn swapped(self) -> Self {
        match self {
            RoundOutcome::Player1Wins => RoundOutcome::Player2Wins,
            RoundOutcome::Player2Wins => RoundOutcome::Player1Wins,
            RoundOutcome::Tie => RoundOutcome::Tie,
        }
    }
}

/// Result of a finished game, decided purely by the final scores.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameVerdict {
    Winner(Player),
    Tie,
}

impl GameVerdict {
    #[must_use]
    pub fn from_scores(scores: Scores) -> Self {
        let (first, second) = scores.as_tuple();
        match first.cmp(&second) {
            std::cmp::Ordering::Greater => GameVerdict::Winner(Player::One),
            std::cmp::Ordering::Less => GameVerdict::Winner(Player::Two),
            std::cmp::Ordering::Equal => GameVerdict::Tie,
        }
    }

    /// Text shown to the players.
    #[must_use]
    pub fn announcement(self) -> String {
        match self {
            GameVerdict::Winner(player) => format!("{} wins!", player),
            GameVerdict::Tie => "It's a tie!".to_string(),
        }
    }
}

/// Compares drawn pairs and records round wins.
pub struct RoundResolver;

impl RoundResolver {
    /// Compare two cards without touching any state.
    ///
    /// Fails with `UnknownRank` if either card's label is not a known rank.
    pub fn compare(player1: &DrawnCard, player2: &DrawnCard) -> Result<RoundOutcome, GameError> {
        let first = CardValueTable::strength(&player1.value)?;
        let second = CardValueTable::strength(&player2.value)?;
        Ok(RoundOutcome::from_strengths(first, second))
    }

    /// Compare two cards and award the round.
    ///
    /// Increments the winner's score exactly once; ties and unknown ranks
    /// leave the scores untouched.
    pub fn resolve<S: KeyValueStore + ?Sized>(
        player1: &DrawnCard,
        player2: &DrawnCard,
        scores: &mut ScoreStore<'_, S>,
    ) -> Result<RoundOutcome, GameError> {
        let outcome = Self::compare(player1, player2)?;
        if let Some(winner) = outcome.winner() {
            scores.increment(winner)?;
        }
        Ok(outcome)
    }
}
