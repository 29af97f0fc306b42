//! Deck service over HTTP.

use serde::de::DeserializeOwned;

use super::api::{DeckApi, DrawnCards, ShuffledDeck, CARDS_PER_ROUND};
use super::wire::{DrawResponse, ShuffleResponse};
use crate::core::{ClientConfig, GameError};

/// `DeckApi` backed by a remote deckofcardsapi-compatible service.
#[derive(Clone, Debug)]
pub struct HttpDeckClient {
    client: reqwest::Client,
    config: ClientConfig,
}

impl HttpDeckClient {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: String,
        context: &str,
    ) -> Result<T, GameError> {
        tracing::debug!(%url, "deck service request");
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| GameError::network(context, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(GameError::HttpStatus {
                status: status.as_u16(),
                url,
            });
        }

        response.json::<T>().await.map_err(|e| {
            if e.is_decode() {
                GameError::MalformedResponse(e.to_string())
            } else {
                GameError::network(context, e)
            }
        })
    }
}

impl DeckApi for HttpDeckClient {
    async fn new_shuffled_deck(&mut self) -> Result<ShuffledDeck, GameError> {
        let url = self.config.shuffle_url();
        let response: ShuffleResponse = self.get_json(url, "shuffle").await?;
        response.into_shuffled()
    }

    async fn draw_cards(&mut self, deck_id: &str) -> Result<DrawnCards, GameError> {
        let url = self.config.draw_url(deck_id, CARDS_PER_ROUND);
        let response: DrawResponse = self.get_json(url, "draw").await?;
        response.into_drawn()
    }
}
