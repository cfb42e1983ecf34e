use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use cognate_core::language::Language;
use tokio::signal;
use tracing_subscriber::EnvFilter;

pub mod config;
pub mod output;
pub mod state;

use self::config::load_config;
use self::state::AppState;

/// Rank frequent words of a language by how much they resemble your own
#[derive(Parser, Debug)]
#[command(name = "cognate", version)]
struct Cli {
    /// Language you want to learn (code or name)
    #[arg(short, long)]
    learn: Option<String>,

    /// Your native language (code or name)
    #[arg(short, long)]
    native: Option<String>,

    /// How many words to learn (5-100)
    #[arg(short, long)]
    count: Option<usize>,

    /// JSON config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print flashcards as JSON
    #[arg(long)]
    json: bool,

    /// List supported languages and exit
    #[arg(long)]
    list_languages: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    if cli.list_languages {
        print!("{}", output::render_languages());
        return Ok(());
    }

    let config = load_config(cli.config.as_deref())?;

    let learn: Language = cli
        .learn
        .as_deref()
        .unwrap_or(&config.learn_lang)
        .parse()?;
    let native: Language = cli
        .native
        .as_deref()
        .unwrap_or(&config.native_lang)
        .parse()?;
    let count = cli.count.unwrap_or(config.word_count);

    let state = AppState::new(&config)?;

    // Shutdown future (Ctrl+C)
    let shutdown = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("failed to listen for ctrl+c: {e}");
            std::future::pending::<()>().await;
        }
    };

    let cards = tokio::select! {
        _ = shutdown => {
            tracing::info!("Shutdown requested");
            return Ok(());
        }
        result = state.pipeline.run(learn, native, count) => {
            result.context("Invalid request")?
        }
    };

    if cli.json {
        println!("{}", output::render_json(&cards)?);
    } else {
        print!("{}", output::render_text(&cards, learn, native));
    }

    Ok(())
}
