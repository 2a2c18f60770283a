//! Word list loading and secret selection

use crate::core::Secret;
use crate::error::GameError;
use rand::Rng;
use rand::seq::IndexedRandom;
use std::fs;
use std::io;
use std::path::Path;

/// Load candidate secrets from a file, one entry per line
///
/// Entries keep their surrounding whitespace; trimming happens when a
/// secret is picked. An empty file yields an empty list.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use hangman::wordlists::load_list;
///
/// let words = load_list("words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_list<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;

    Ok(content.lines().map(ToString::to_string).collect())
}

/// Pick a secret uniformly at random from the loaded list
///
/// # Errors
///
/// Returns `GameError::EmptyWordList` if there is nothing to choose from,
/// or `GameError::EmptySecret` if the chosen entry is blank.
pub fn pick_secret<R: Rng + ?Sized>(words: &[String], rng: &mut R) -> Result<Secret, GameError> {
    let entry = words.choose(rng).ok_or(GameError::EmptyWordList)?;

    Secret::new(entry).map_err(|_| GameError::EmptySecret)
}
