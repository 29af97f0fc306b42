//! In-process stand-in for the deck service.
//!
//! Decks are shuffled with a seeded `DeckRng`, so a given seed always deals
//! the same games. Used for offline play and tests.

use rustc_hash::FxHashMap;

use super::api::{DeckApi, DrawnCard, DrawnCards, ShuffledDeck, CARDS_PER_ROUND};
use crate::core::{DeckRng, GameError, Rank, DEFAULT_BASE_URL};

const SUITS: [char; 4] = ['S', 'D', 'C', 'H'];
const DECK_ID_LEN: usize = 12;

/// Offline deck service.
#[derive(Clone, Debug)]
pub struct SimulatedDeck {
    rng: DeckRng,
    deck_count: u32,
    image_base: String,
    decks: FxHashMap<String, Vec<DrawnCard>>,
}

impl SimulatedDeck {
    /// One 52-card deck per shuffle, shuffled from `seed`.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: DeckRng::new(seed),
            deck_count: 1,
            image_base: DEFAULT_BASE_URL.to_string(),
            decks: FxHashMap::default(),
        }
    }

    /// Use `count` 52-card decks per shuffle.
    #[must_use]
    pub fn with_deck_count(mut self, count: u32) -> Self {
        self.deck_count = count.max(1);
        self
    }

    /// Cards left in `deck_id`, if it exists.
    #[must_use]
    pub fn remaining(&self, deck_id: &str) -> Option<usize> {
        self.decks.get(deck_id).map(Vec::len)
    }

    fn fresh_cards(&self) -> Vec<DrawnCard> {
        let mut cards = Vec::with_capacity(52 * self.deck_count as usize);
        for _ in 0..self.deck_count {
            for suit in SUITS {
                for rank in Rank::ALL {
                    let code = format!("{}{}", rank.code(), suit);
                    let image = format!("{}/static/img/{}.png", self.image_base, code);
                    cards.push(DrawnCard::new(rank.label(), image));
                }
            }
        }
        cards
    }
}

impl DeckApi for SimulatedDeck {
    async fn new_shuffled_deck(&mut self) -> Result<ShuffledDeck, GameError> {
        let mut cards = self.fresh_cards();
        self.rng.shuffle(&mut cards);

        let deck_id = self.rng.gen_id(DECK_ID_LEN);
        let remaining = cards.len() as u32;
        self.decks.insert(deck_id.clone(), cards);

        Ok(ShuffledDeck { deck_id, remaining })
    }

    async fn draw_cards(&mut self, deck_id: &str) -> Result<DrawnCards, GameError> {
        let cards = self.decks.get_mut(deck_id).ok_or_else(|| {
            GameError::MalformedResponse(format!("deck {} does not exist", deck_id))
        })?;

        if cards.len() < CARDS_PER_ROUND as usize {
            return Ok(DrawnCards {
                cards: None,
                remaining: cards.len() as u32,
            });
        }

        // The top of the deck is the end of the vector.
        let second = cards.pop();
        let first = cards.pop();
        let remaining = cards.len() as u32;
        match (first, second) {
            (Some(first), Some(second)) => Ok(DrawnCards {
                cards: Some([first, second]),
                remaining,
            }),
            _ => Ok(DrawnCards {
                cards: None,
                remaining,
            }),
        }
    }
}
