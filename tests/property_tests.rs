//! Property tests for round resolution and deck pacing.

use proptest::prelude::*;
use proptest::sample::select;

use deck_war::{
    ClientConfig, DrawnCard, GameController, MemoryStore, Presenter, Rank, RoundOutcome,
    RoundResolver, ScoreStore, Scores, SimulatedDeck, UiMode,
};

struct NullPresenter;

impl Presenter for NullPresenter {
    fn render_scores(&mut self, _scores: Scores) {}
    fn render_card_images(&mut self, _player1: &str, _player2: &str) {}
    fn render_button_mode(&mut self, _mode: UiMode) {}
    fn show_winner_announcement(&mut self, _text: &str) {}
}

fn card(rank: Rank) -> DrawnCard {
    DrawnCard::new(rank.label(), format!("{}.png", rank.code()))
}

fn rank() -> impl Strategy<Value = Rank> {
    select(Rank::ALL.to_vec())
}

proptest! {
    #[test]
    fn resolve_is_antisymmetric(a in rank(), b in rank()) {
        let forward = RoundResolver::compare(&card(a), &card(b)).unwrap();
        let backward = RoundResolver::compare(&card(b), &card(a)).unwrap();
        prop_assert_eq!(forward.swapped(), backward);
        prop_assert_eq!(forward == RoundOutcome::Tie, a == b);
    }

    #[test]
    fn scores_count_non_tie_rounds(rounds in prop::collection::vec((rank(), rank()), 0..60)) {
        let mut store = MemoryStore::new();
        let mut scores = ScoreStore::new(&mut store);

        let mut decided = 0u32;
        for (a, b) in &rounds {
            let outcome = RoundResolver::resolve(&card(*a), &card(*b), &mut scores).unwrap();
            if outcome != RoundOutcome::Tie {
                decided += 1;
            }
        }

        prop_assert_eq!(scores.read().total(), decided);
    }

    #[test]
    fn remaining_drops_by_two_until_game_over(seed in any::<u64>()) {
        let runtime = tokio::runtime::Builder::new_current_thread().build().unwrap();
        runtime.block_on(async {
            let mut game = GameController::restore(
                SimulatedDeck::new(seed),
                MemoryStore::new(),
                NullPresenter,
                ClientConfig::default(),
            );
            let mut previous = game.shuffle().await.unwrap().remaining;

            while game.mode() == UiMode::AwaitingDraw {
                let report = game.draw().await.unwrap();
                prop_assert_eq!(report.remaining + 2, previous);
                prop_assert_eq!(report.verdict.is_some(), report.remaining == 0);
                previous = report.remaining;
            }

            prop_assert_eq!(previous, 0);
            prop_assert_eq!(game.mode(), UiMode::AwaitingShuffle);
            prop_assert!(game.draw().await.is_err());
            Ok(())
        })?;
    }
}
