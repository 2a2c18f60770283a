//! Hangman - CLI entry point

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use hangman::{
    commands::run_play,
    error::GameError,
    gallows::Illustrator,
    wordlists::{load_list, pick_secret},
};
use std::path::PathBuf;
use std::process::ExitCode;

/// Word-list path used when no argument is given
const DEFAULT_WORDS_FILE: &str = "words.txt";

#[derive(Parser)]
#[command(
    name = "hangman",
    about = "Guess the secret word one letter at a time - eight misses and you hang",
    version
)]
struct Cli {
    /// Path to the word list, one candidate secret per line
    #[arg(default_value = DEFAULT_WORDS_FILE)]
    words: PathBuf,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report(&err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let words =
        load_list(&cli.words).map_err(|err| GameError::from_words_io(err, &cli.words))?;
    let secret = pick_secret(&words, &mut rand::rng())?;

    run_play(secret, &Illustrator::default())?;
    Ok(())
}

/// One line on stderr per handled failure, no backtraces
fn report(err: &anyhow::Error) {
    match err.downcast_ref::<GameError>() {
        Some(GameError::Interrupted) => eprintln!("{}", "Interrupted by user.".yellow()),
        _ => eprintln!("{} {err:#}", "Error:".bright_red().bold()),
    }
}
