//! Error taxonomy for the game client.
//!
//! Network failures (transport errors and non-2xx responses) leave the game
//! in its current state and may be retried by the player. `UnknownRank`
//! means the deck service broke its contract and aborts the current round.

/// Errors produced by the game client.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GameError {
    /// Transport-level failure talking to the deck service.
    Network {
        /// What the client was doing ("shuffle", "draw").
        context: String,
        message: String,
    },
    /// The deck service answered with a non-2xx status.
    HttpStatus { status: u16, url: String },
    /// A card label outside the 13 known ranks.
    UnknownRank(String),
    /// The deck service answered with a payload we cannot use.
    MalformedResponse(String),
    /// Persisted state could not be read or written.
    Storage(String),
    /// A draw was requested with no usable deck session.
    NoDeck,
}

impl GameError {
    /// Build a transport error for the given action.
    pub fn network(context: impl Into<String>, message: impl std::fmt::Display) -> Self {
        GameError::Network {
            context: context.into(),
            message: message.to_string(),
        }
    }

    /// True for errors the player can retry (transport and status failures).
    #[must_use]
    pub fn is_network(&self) -> bool {
        matches!(self, GameError::Network { .. } | GameError::HttpStatus { .. })
    }
}

impl std::fmt::Display for GameError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameError::Network { context, message } => {
                write!(f, "network error during {}: {}", context, message)
            }
            GameError::HttpStatus { status, url } => {
                write!(f, "deck service returned HTTP {} for {}", status, url)
            }
            GameError::UnknownRank(label) => write!(f, "unknown card rank {:?}", label),
            GameError::MalformedResponse(msg) => write!(f, "malformed deck response: {}", msg),
            GameError::Storage(msg) => write!(f, "storage error: {}", msg),
            GameError::NoDeck => write!(f, "no deck session; shuffle first"),
        }
    }
}

impl std::error::Error for GameError {}
