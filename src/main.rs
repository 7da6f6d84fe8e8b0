//! Lingo - CLI
//!
//! Terminal word-guessing game. The default command opens the interactive
//! TUI; `grade` checks a single guess from the command line.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use lingo::{
    commands::{grade_words, print_grade_report},
    game::GameSession,
    interactive::{App, run_tui},
    prefs::FilePrefs,
    wordlists::{Dictionary, WordPool, loader::load_from_file},
};

#[derive(Parser)]
#[command(
    name = "lingo",
    about = "Terminal Lingo: five guesses, first letter revealed, two difficulty modes",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Path to a custom validity dictionary (whitespace-delimited words)
    #[arg(short = 'd', long, global = true)]
    dictionary: Option<String>,

    /// Path to a custom target word pool (whitespace-delimited words)
    #[arg(short = 'w', long, global = true)]
    wordlist: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Grade a single guess against a target word
    Grade {
        /// The guessed word
        guess: String,

        /// The target word
        target: String,
    },
}

/// Build the word sources from the embedded lists or the override flags
fn load_word_sources(cli: &Cli) -> Result<(Dictionary, WordPool)> {
    let dictionary = match &cli.dictionary {
        Some(path) => {
            let words = load_from_file(path)
                .with_context(|| format!("failed to read dictionary from {path}"))?;
            Dictionary::new(&words)
        }
        None => Dictionary::embedded(),
    };

    let pool = match &cli.wordlist {
        Some(path) => {
            let words = load_from_file(path)
                .with_context(|| format!("failed to read wordlist from {path}"))?;
            WordPool::new(words)
        }
        None => WordPool::embedded(),
    };

    if dictionary.is_empty() {
        bail!("dictionary contains no valid five-letter words");
    }
    if pool.is_empty() {
        bail!("word pool contains no valid five-letter words");
    }

    Ok((dictionary, pool))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let command = cli.command.as_ref().unwrap_or(&Commands::Play);

    match command {
        Commands::Play => {
            let (dictionary, pool) = load_word_sources(&cli)?;
            let prefs = FilePrefs::at_home();
            let session = GameSession::new(dictionary, pool, Box::new(prefs), rand::rng());
            run_tui(App::new(session))
        }
        Commands::Grade { guess, target } => {
            let report = grade_words(guess, target)?;
            print_grade_report(&report);
            Ok(())
        }
    }
}
