//! Game controller: the shuffle/draw state machine.
//!
//! ## States
//!
//! - `AwaitingShuffle`: no usable deck. The button starts a new game.
//! - `AwaitingDraw`: a deck with cards left. The button draws a round.
//!
//! The mode is computed once from the persisted `GameSession` when the
//! controller is restored, and afterwards changes only through `shuffle`
//! and `draw`.
//!
//! ## Failures
//!
//! Deck service failures are logged, shown through the presenter and
//! returned; the state machine stays where it was so the player can retry.

use serde::{Deserialize, Serialize};

use super::presenter::Presenter;
use crate::core::{ClientConfig, GameError, Scores};
use crate::deck::{DeckApi, DrawnCard, ShuffledDeck};
use crate::rules::{GameVerdict, RoundOutcome, RoundResolver};
use crate::storage::{GameSession, KeyValueStore, ScoreStore};

/// What the single action button does.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UiMode {
    AwaitingShuffle,
    AwaitingDraw,
}

impl UiMode {
    /// Mode implied by a persisted session.
    #[must_use]
    pub fn from_session(session: &GameSession) -> Self {
        if session.has_playable_deck() {
            UiMode::AwaitingDraw
        } else {
            UiMode::AwaitingShuffle
        }
    }

    #[must_use]
    pub const fn button_label(self) -> &'static str {
        match self {
            UiMode::AwaitingShuffle => "New Game",
            UiMode::AwaitingDraw => "Draw Cards",
        }
    }
}

/// Everything that happened during one draw.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DrawReport {
    /// The drawn pair, or `None` if the deck was already drained.
    pub cards: Option<[DrawnCard; 2]>,
    /// Round result. `None` when no pair was drawn.
    pub outcome: Option<RoundOutcome>,
    /// Scores after the round.
    pub scores: Scores,
    /// Cards left in the deck.
    pub remaining: u32,
    /// Set when this draw ended the game.
    pub verdict: Option<GameVerdict>,
}

/// Drives a game against a deck service, persisting to a store and
/// rendering through a presenter.
pub struct GameController<D, S, P> {
    deck: D,
    store: S,
    presenter: P,
    config: ClientConfig,
    session: GameSession,
    mode: UiMode,
}

impl<D: DeckApi, S: KeyValueStore, P: Presenter> GameController<D, S, P> {
    /// Load the persisted session and render the initial screen.
    ///
    /// A session with a deck id and cards remaining resumes in
    /// `AwaitingDraw` showing the last drawn cards; anything else starts
    /// in `AwaitingShuffle` showing card backs.
    pub fn restore(deck: D, mut store: S, presenter: P, config: ClientConfig) -> Self {
        let session = GameSession::load(&mut store);
        let mode = UiMode::from_session(&session);

        let mut controller = Self {
            deck,
            store,
            presenter,
            config,
            session,
            mode,
        };
        controller.render_restored();
        tracing::info!(
            mode = ?controller.mode,
            deck_id = ?controller.session.deck_id,
            remaining = ?controller.session.remaining_cards,
            "session restored"
        );
        controller
    }

    /// Current button mode.
    #[must_use]
    pub fn mode(&self) -> UiMode {
        self.mode
    }

    /// Current session.
    #[must_use]
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    #[must_use]
    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn deck_mut(&mut self) -> &mut D {
        &mut self.deck
    }

    /// Press the action button: shuffle in `AwaitingShuffle`, draw in
    /// `AwaitingDraw`.
    ///
    /// Returns the draw report when a round was drawn.
    pub async fn press(&mut self) -> Result<Option<DrawReport>, GameError> {
        match self.mode {
            UiMode::AwaitingShuffle => self.shuffle().await.map(|_| None),
            UiMode::AwaitingDraw => self.draw().await.map(Some),
        }
    }

    /// Start a new game on a freshly shuffled deck.
    ///
    /// Scores are reset to 0 and the table shows card backs. Allowed in
    /// either mode; an unfinished game is abandoned.
    pub async fn shuffle(&mut self) -> Result<ShuffledDeck, GameError> {
        let shuffled = match self.deck.new_shuffled_deck().await {
            Ok(shuffled) => shuffled,
            Err(e) => return Err(self.report_failure("shuffle", e)),
        };

        ScoreStore::new(&mut self.store).reset()?;
        self.session = GameSession::new_deck(shuffled.deck_id.clone(), shuffled.remaining);
        self.session.save(&mut self.store)?;
        GameSession::clear_last_images(&mut self.store)?;

        self.show_card_backs();
        self.presenter.render_scores(self.session.scores);
        self.set_mode(UiMode::from_session(&self.session));

        tracing::info!(deck_id = %shuffled.deck_id, remaining = shuffled.remaining, "new game");
        Ok(shuffled)
    }

    /// Draw and resolve one round.
    ///
    /// When the deck runs out the final verdict is announced, the table
    /// shows card backs and the controller returns to `AwaitingShuffle`.
    /// A card with an unknown rank voids the round (no score change) but
    /// the draw still counts against the deck.
    pub async fn draw(&mut self) -> Result<DrawReport, GameError> {
        let deck_id = match (&self.session.deck_id, self.mode) {
            (Some(id), UiMode::AwaitingDraw) => id.clone(),
            _ => return Err(GameError::NoDeck),
        };

        let drawn = match self.deck.draw_cards(&deck_id).await {
            Ok(drawn) => drawn,
            Err(e) => return Err(self.report_failure("draw", e)),
        };

        let mut outcome = None;
        let mut round_error = None;
        if let Some([first, second]) = &drawn.cards {
            let mut scores = ScoreStore::new(&mut self.store);
            match RoundResolver::resolve(first, second, &mut scores) {
                Ok(result) => {
                    self.session.scores = scores.read();
                    GameSession::set_last_images(&mut self.store, &first.image, &second.image)?;
                    self.presenter.render_card_images(&first.image, &second.image);
                    self.presenter.render_scores(self.session.scores);
                    tracing::debug!(
                        player1 = %first.value,
                        player2 = %second.value,
                        ?result,
                        "round resolved"
                    );
                    outcome = Some(result);
                }
                Err(e) => round_error = Some(e),
            }
        }

        self.session.remaining_cards = Some(drawn.remaining);
        self.session.save(&mut self.store)?;

        let verdict = if drawn.remaining == 0 || drawn.cards.is_none() {
            Some(self.finish_game()?)
        } else {
            None
        };

        if let Some(e) = round_error {
            tracing::error!(error = %e, deck_id = %deck_id, "round voided");
            self.presenter.show_error(&e.to_string());
            return Err(e);
        }

        Ok(DrawReport {
            cards: drawn.cards,
            outcome,
            scores: self.session.scores,
            remaining: drawn.remaining,
            verdict,
        })
    }

    fn finish_game(&mut self) -> Result<GameVerdict, GameError> {
        let verdict = GameVerdict::from_scores(self.session.scores);
        let announcement = verdict.announcement();
        tracing::info!(scores = ?self.session.scores.as_tuple(), %announcement, "game over");

        self.presenter.show_winner_announcement(&announcement);
        self.show_card_backs();

        self.session.deck_id = None;
        self.session.remaining_cards = Some(0);
        self.session.save(&mut self.store)?;
        GameSession::clear_last_images(&mut self.store)?;

        self.set_mode(UiMode::AwaitingShuffle);
        Ok(verdict)
    }

    fn render_restored(&mut self) {
        let images = match self.mode {
            UiMode::AwaitingDraw => GameSession::last_images(&self.store),
            UiMode::AwaitingShuffle => None,
        };
        match images {
            Some((first, second)) => self.presenter.render_card_images(&first, &second),
            None => self.show_card_backs(),
        }
        self.presenter.render_scores(self.session.scores);
        self.presenter.render_button_mode(self.mode);
    }

    fn show_card_backs(&mut self) {
        let back = &self.config.back_image_url;
        self.presenter.render_card_images(back, back);
    }

    fn set_mode(&mut self, mode: UiMode) {
        self.mode = mode;
        self.presenter.render_button_mode(mode);
    }

    fn report_failure(&mut self, action: &str, e: GameError) -> GameError {
        tracing::error!(action, error = %e, mode = ?self.mode, "deck service request failed");
        self.presenter.show_error(&e.to_string());
        e
    }
}
