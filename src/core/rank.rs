//! Card ranks and their strengths.
//!
//! The deck service labels ranks as `ACE`, `2`..`10`, `JACK`, `QUEEN` and
//! `KING`. Aces are low in this variant:
//!
//! ```
//! use deck_war::core::{CardValueTable, Rank};
//!
//! assert_eq!(CardValueTable::strength("ACE").unwrap(), 1);
//! assert_eq!(CardValueTable::strength("7").unwrap(), 7);
//! assert_eq!(Rank::King.strength(), 13);
//! assert!(CardValueTable::strength("JOKER").is_err());
//! ```

use serde::{Deserialize, Serialize};

use super::error::GameError;

/// One of the 13 face ranks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Rank {
    Ace,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
}

impl Rank {
    /// All ranks, weakest first.
    pub const ALL: [Rank; 13] = [
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
    ];

    /// Parse the service's rank label.
    pub fn from_label(label: &str) -> Result<Self, GameError> {
        let rank = match label {
            "ACE" => Rank::Ace,
            "2" => Rank::Two,
            "3" => Rank::Three,
            "4" => Rank::Four,
            "5" => Rank::Five,
            "6" => Rank::Six,
            "7" => Rank::Seven,
            "8" => Rank::Eight,
            "9" => Rank::Nine,
            "10" => Rank::Ten,
            "JACK" => Rank::Jack,
            "QUEEN" => Rank::Queen,
            "KING" => Rank::King,
            other => return Err(GameError::UnknownRank(other.to_string())),
        };
        Ok(rank)
    }

    /// The label the deck service uses for this rank.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Rank::Ace => "ACE",
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "JACK",
            Rank::Queen => "QUEEN",
            Rank::King => "KING",
        }
    }

    /// Numeric strength: ACE=1, numerals at face value, JACK=11, QUEEN=12, KING=13.
    #[must_use]
    pub const fn strength(self) -> u8 {
        self as u8 + 1
    }

    /// Single-character code used in card codes ("KH", "0S", "AD").
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Rank::Ace => 'A',
            Rank::Two => '2',
            Rank::Three => '3',
            Rank::Four => '4',
            Rank::Five => '5',
            Rank::Six => '6',
            Rank::Seven => '7',
            Rank::Eight => '8',
            Rank::Nine => '9',
            Rank::Ten => '0',
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
        }
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Lookup from rank label to strength.
pub struct CardValueTable;

impl CardValueTable {
    /// Strength of the rank named by `label`.
    ///
    /// Fails with `UnknownRank` for anything outside the 13 defined labels.
    pub fn strength(label: &str) -> Result<u8, GameError> {
        Rank::from_label(label).map(Rank::strength)
    }
}
