//! Forca - CLI
//!
//! Picture-reveal hangman with TUI and plain-text modes.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use forca::{
    commands::{run_simple, run_simulation},
    core::{GameConfig, SecretWord},
    output::print_simulation_report,
    wordlists::{
        DEFAULT_WORDS,
        loader::{load_from_file, words_from_slice},
    },
};

#[derive(Parser)]
#[command(
    name = "forca",
    about = "Hangman that reveals a hidden picture as you guess",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Grid dimension of the reveal overlay (blocks per side)
    #[arg(short, long, global = true, default_value_t = 15)]
    grid_size: usize,

    /// Wrong guesses allowed before the round is lost
    #[arg(short, long, global = true, default_value_t = 50)]
    max_errors: u32,

    /// Wordlist: 'default' (embedded) or path to a file, one word per line
    #[arg(short = 'w', long, global = true, default_value = "default")]
    wordlist: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (plain text, no TUI)
    Simple,

    /// Play many automated rounds and report statistics
    Simulate {
        /// Number of rounds to simulate
        #[arg(short = 'n', long, default_value_t = 200)]
        count: usize,

        /// RNG seed for reproducible runs
        #[arg(short, long)]
        seed: Option<u64>,
    },
}

/// Load the candidate word list based on the -w flag
///
/// An empty list is a configuration fault and aborts startup.
fn load_wordlist(mode: &str) -> Result<Vec<SecretWord>> {
    let words = match mode {
        "default" => words_from_slice(DEFAULT_WORDS),
        path => load_from_file(path).with_context(|| format!("failed to read wordlist {path}"))?,
    };

    if words.is_empty() {
        bail!("wordlist has no usable words");
    }
    Ok(words)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.grid_size == 0 {
        bail!("grid size must be at least 1");
    }

    let words = load_wordlist(&cli.wordlist)?;
    let config = GameConfig {
        grid_size: cli.grid_size,
        max_errors: cli.max_errors,
        ..GameConfig::default()
    };

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => {
            use forca::interactive::{App, run_tui};

            let app = App::new(words, config)?;
            run_tui(app)
        }
        Commands::Simple => run_simple(&words, &config).map_err(|e| anyhow::anyhow!(e)),
        Commands::Simulate { count, seed } => {
            let report = run_simulation(&words, &config, count, seed);
            print_simulation_report(&report);
            Ok(())
        }
    }
}
