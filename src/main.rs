//! Word Game - CLI
//!
//! Five-letter word guessing game with TUI and line modes.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::io;
use std::path::PathBuf;
use wordle_game::{
    commands::{run_simple, score_words},
    config::GameConfig,
    output::print_score_result,
};

#[derive(Parser)]
#[command(
    name = "wordle_game",
    about = "Guess the hidden five-letter word in six tries",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// TOML configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Dictionary file (one word per line); embedded list when omitted
    #[arg(short = 'w', long, global = true)]
    wordlist: Option<PathBuf>,

    /// Separate list of target words
    #[arg(long, global = true)]
    answers: Option<PathBuf>,

    /// Seed for reproducible target selection
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Attempts per round
    #[arg(long, global = true)]
    max_guesses: Option<usize>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Line-based mode without the TUI
    Simple,

    /// Score a guess against a target word
    Score {
        /// The target word
        target: String,

        /// The guessed word
        guess: String,
    },
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        _ => log::LevelFilter::Debug,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

/// Merge the config file (if any) with command line overrides
fn load_config(cli: &Cli) -> Result<GameConfig> {
    let mut config = match &cli.config {
        Some(path) => GameConfig::load(path)?,
        None => GameConfig::default(),
    };

    if let Some(path) = &cli.wordlist {
        config.dictionary = Some(path.clone());
    }
    if let Some(path) = &cli.answers {
        config.answers = Some(path.clone());
    }
    if let Some(seed) = cli.seed {
        config.seed = Some(seed);
    }
    if let Some(max_guesses) = cli.max_guesses {
        config.max_guesses = max_guesses;
    }

    config.validate()?;
    Ok(config)
}

fn main() -> Result<()> {
    let mut cli = Cli::parse();
    init_logging(cli.verbose);

    // Default to Play mode if no command given
    let command = cli.command.take().unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(&load_config(&cli)?),
        Commands::Simple => run_simple_command(&load_config(&cli)?),
        Commands::Score { target, guess } => run_score_command(&target, &guess),
    }
}

fn run_play_command(config: &GameConfig) -> Result<()> {
    use wordle_game::interactive::{App, run_tui};

    let app = App::new(config.build_session()?);
    run_tui(app)
}

fn run_simple_command(config: &GameConfig) -> Result<()> {
    let mut session = config.build_session()?;
    run_simple(&mut session, io::stdin().lock(), io::stdout().lock())
}

fn run_score_command(target: &str, guess: &str) -> Result<()> {
    let result = score_words(target, guess)?;
    print_score_result(&result);
    Ok(())
}
