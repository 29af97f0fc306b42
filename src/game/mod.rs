//! Game orchestration and the presentation interface.

pub mod controller;
pub mod presenter;

pub use controller::{DrawReport, GameController, UiMode};
pub use presenter::{Presenter, TerminalPresenter};
