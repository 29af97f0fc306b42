use anyhow::{Context, Result};
use tokio::io::{AsyncBufReadExt, BufReader};

use deck_war::{
    ClientConfig, DeckApi, FileStore, GameController, HttpDeckClient, SimulatedDeck,
    TerminalPresenter,
};

const HELP: &str = "Enter: press the button   n: new game   q: quit";

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let config = ClientConfig::from_env();
    let store = FileStore::open(&config.state_path)
        .with_context(|| format!("opening state file {}", config.state_path))?;
    tracing::debug!(path = %store.path().display(), "state file opened");

    match config.seed {
        Some(seed) => {
            tracing::info!(seed, "playing against the offline deck");
            let deck = SimulatedDeck::new(seed).with_deck_count(config.deck_count);
            run(deck, store, config).await
        }
        None => {
            tracing::info!(base_url = %config.base_url, "playing against the deck service");
            let deck = HttpDeckClient::new(config.clone());
            run(deck, store, config).await
        }
    }
}

async fn run<D: DeckApi>(deck: D, store: FileStore, config: ClientConfig) -> Result<()> {
    let mut game = GameController::restore(deck, store, TerminalPresenter::stdout(), config);
    println!("{}", HELP);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await.context("reading stdin")? {
        let result = match line.trim() {
            "q" | "quit" => break,
            "n" | "new" => game.shuffle().await.map(|_| ()),
            "" => game.press().await.map(|_| ()),
            other => {
                println!("unknown command {:?}. {}", other, HELP);
                continue;
            }
        };
        // The controller has already logged and displayed the failure.
        if let Err(e) = result {
            tracing::debug!(error = %e, "action failed");
        }
    }

    tracing::info!(mode = ?game.mode(), "exiting");
    Ok(())
}
