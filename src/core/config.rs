//! Client configuration.

use serde::{Deserialize, Serialize};

/// Default deck service.
pub const DEFAULT_BASE_URL: &str = "https://www.deckofcardsapi.com";

/// Image shown when no card is on the table.
pub const DEFAULT_BACK_IMAGE: &str = "https://www.deckofcardsapi.com/static/img/back.png";

/// Client configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Root URL of the deck service (no trailing slash).
    pub base_url: String,

    /// Number of 52-card decks per shuffle.
    pub deck_count: u32,

    /// Back-face image shown between games.
    pub back_image_url: String,

    /// File holding the persisted session.
    pub state_path: String,

    /// Seed for the offline simulated deck. `None` uses the remote service.
    pub seed: Option<u64>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            deck_count: 1,
            back_image_url: DEFAULT_BACK_IMAGE.to_string(),
            state_path: "war-state.json".to_string(),
            seed: None,
        }
    }
}

impl ClientConfig {
    /// Default config overlaid with `WAR_API_BASE`, `WAR_STATE_FILE` and `WAR_SEED`.
    ///
    /// An unparsable `WAR_SEED` is ignored.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(base) = std::env::var("WAR_API_BASE") {
            config = config.with_base_url(base);
        }
        if let Ok(path) = std::env::var("WAR_STATE_FILE") {
            config = config.with_state_path(path);
        }
        if let Some(seed) = std::env::var("WAR_SEED").ok().and_then(|s| s.trim().parse().ok()) {
            config = config.with_seed(seed);
        }
        config
    }

    /// Use a different deck service.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Persist the session to a different file.
    pub fn with_state_path(mut self, path: impl Into<String>) -> Self {
        self.state_path = path.into();
        self
    }

    /// Play offline against a simulated deck shuffled from `seed`.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Use a different back-face image.
    pub fn with_back_image(mut self, url: impl Into<String>) -> Self {
        self.back_image_url = url.into();
        self
    }

    /// URL requesting a freshly shuffled deck.
    #[must_use]
    pub fn shuffle_url(&self) -> String {
        format!(
            "{}/api/deck/new/shuffle/?deck_count={}",
            self.base_url, self.deck_count
        )
    }

    /// URL drawing `count` cards from `deck_id`.
    #[must_use]
    pub fn draw_url(&self, deck_id: &str, count: u32) -> String {
        format!(
            "{}/api/deck/{}/draw/?count={}",
            self.base_url, deck_id, count
        )
    }
}
