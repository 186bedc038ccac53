//! Wordle Pro - CLI
//!
//! Word-guessing game with TUI and line modes, score and streak tracking.

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;
use wordle_pro::{
    commands::{run_simple, run_stats},
    config::Config,
    core::Word,
    game::GameController,
    interactive::{App, run_tui},
    logging::{LogSink, init_logging},
    output::print_stats,
    store::JsonFileStore,
    wordlists::Dictionary,
};

#[derive(Parser)]
#[command(
    name = "wordle_pro",
    about = "Guess the five-letter word in six tries",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Config file (JSON); defaults to the platform config directory
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Word list file, one word per line (default: embedded dictionary)
    #[arg(short = 'w', long, global = true)]
    wordlist: Option<PathBuf>,

    /// File holding score, streak and the help flag
    #[arg(long, global = true)]
    state_file: Option<PathBuf>,

    /// Milliseconds between revealed cells
    #[arg(long, global = true)]
    reveal_delay_ms: Option<u64>,

    /// Seed for reproducible target selection
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Write logs to this file (the TUI logs nowhere otherwise)
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand, Clone)]
enum Commands {
    /// Interactive TUI mode (default)
    Play {
        /// Play against a specific target word
        #[arg(long)]
        word: Option<String>,
    },

    /// Simple line mode (no TUI)
    Simple {
        /// Play against a specific target word
        #[arg(long)]
        word: Option<String>,
    },

    /// Show persisted score and streak
    Stats {
        /// Reset score and streak to zero
        #[arg(long)]
        reset: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli
        .command
        .clone()
        .unwrap_or(Commands::Play { word: None });

    let sink = match (&cli.log_file, &command) {
        (Some(path), _) => LogSink::File(path.clone()),
        (None, Commands::Play { .. }) => LogSink::Disabled,
        (None, _) => LogSink::Stderr,
    };
    init_logging(cli.verbose, sink)?;

    let config = load_config(&cli)?;

    match command {
        Commands::Play { word } => {
            let controller = build_controller(&config, cli.seed, word.as_deref())?;
            run_tui(App::new(controller, config.reveal_delay()))
        }
        Commands::Simple { word } => {
            let mut controller = build_controller(&config, cli.seed, word.as_deref())?;
            run_simple(&mut controller, config.reveal_delay())
        }
        Commands::Stats { reset } => {
            let mut store = JsonFileStore::open(&config.state_file);
            let stats = run_stats(&mut store, reset)
                .with_context(|| format!("failed to reset {}", config.state_file.display()))?;
            if reset {
                println!("Statistics reset.");
            }
            print_stats(stats);
            Ok(())
        }
    }
}

/// Load the config file and apply command-line overrides
fn load_config(cli: &Cli) -> Result<Config> {
    let mut config = Config::load(cli.config.as_deref())?;

    if let Some(path) = &cli.wordlist {
        config.wordlist = Some(path.clone());
    }
    if let Some(path) = &cli.state_file {
        config.state_file.clone_from(path);
    }
    if let Some(ms) = cli.reveal_delay_ms {
        config.reveal_delay_ms = ms;
    }

    tracing::debug!(?config, "effective config");
    Ok(config)
}

fn build_controller(
    config: &Config,
    seed: Option<u64>,
    word: Option<&str>,
) -> Result<GameController<JsonFileStore>> {
    let dictionary = match &config.wordlist {
        Some(path) => Dictionary::from_file(path)?,
        None => Dictionary::embedded(),
    };
    tracing::info!(words = dictionary.len(), "dictionary ready");

    let store = JsonFileStore::open(&config.state_file);
    let mut controller =
        GameController::with_seed(dictionary, store, seed).with_share_url(config.share_url.clone());

    if let Some(word) = word {
        let target = Word::new(word).with_context(|| format!("invalid target word '{word}'"))?;
        controller.new_game_with(target);
    }

    Ok(controller)
}
