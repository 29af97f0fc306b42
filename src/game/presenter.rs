//! Presentation layer interface.
//!
//! The controller pushes every visible change through a `Presenter`. The
//! presentation layer calls back into the controller through
//! `GameController::press` (or `shuffle`/`draw` directly).

use std::io::Write;

use super::controller::UiMode;
use crate::core::Scores;

/// Receives everything the players should see.
pub trait Presenter {
    /// Show both scores.
    fn render_scores(&mut self, scores: Scores);

    /// Show the two card images (player 1 first).
    fn render_card_images(&mut self, player1: &str, player2: &str);

    /// Switch the action button between "New Game" and "Draw Cards".
    fn render_button_mode(&mut self, mode: UiMode);

    /// Announce the end-of-game result.
    fn show_winner_announcement(&mut self, text: &str);

    /// Report a failure to the players. Defaults to nothing.
    fn show_error(&mut self, _text: &str) {}
}

/// Line-oriented presenter for terminals.
#[derive(Debug)]
pub struct TerminalPresenter<W: Write> {
    out: W,
}

impl<W: Write> TerminalPresenter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Recover the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn line(&mut self, text: std::fmt::Arguments<'_>) {
        if let Err(e) = writeln!(self.out, "{}", text) {
            tracing::warn!(error = %e, "failed to write to terminal");
        }
    }
}

impl TerminalPresenter<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write> Presenter for TerminalPresenter<W> {
    fn render_scores(&mut self, scores: Scores) {
        let (first, second) = scores.as_tuple();
        self.line(format_args!("Score  Player 1: {}  Player 2: {}", first, second));
    }

    fn render_card_images(&mut self, player1: &str, player2: &str) {
        self.line(format_args!("Player 1 card: {}", player1));
        self.line(format_args!("Player 2 card: {}", player2));
    }

    fn render_button_mode(&mut self, mode: UiMode) {
        self.line(format_args!("[ {} ]", mode.button_label()));
    }

    fn show_winner_announcement(&mut self, text: &str) {
        self.line(format_args!("*** {} ***", text));
    }

    fn show_error(&mut self, text: &str) {
        self.line(format_args!("error: {}", text));
    }
}
