//! Top-level error taxonomy
//!
//! Every handled failure ends up here, is printed as a single line on
//! stderr and terminates the run without a panic.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// A failure that ends the current run
#[derive(Debug)]
pub enum GameError {
    /// The word-list file does not exist
    WordsNotFound(PathBuf),
    /// The word-list file exists but cannot be read
    WordsUnreadable(PathBuf),
    /// The word list has no entries to choose a secret from
    EmptyWordList,
    /// The chosen word-list entry is blank
    EmptySecret,
    /// A gallows image asset is missing
    ImageNotFound(PathBuf),
    /// The player interrupted the game during input
    Interrupted,
    /// Any other I/O failure
    Io(io::Error),
}

impl GameError {
    /// Classify an I/O failure while reading the word list at `path`.
    #[must_use]
    pub fn from_words_io(err: io::Error, path: &std::path::Path) -> Self {
        match err.kind() {
            io::ErrorKind::NotFound => Self::WordsNotFound(path.to_path_buf()),
            io::ErrorKind::PermissionDenied => Self::WordsUnreadable(path.to_path_buf()),
            _ => Self::Io(err),
        }
    }
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WordsNotFound(path) => {
                write!(f, "words could not be loaded from '{}'", path.display())
            }
            Self::WordsUnreadable(path) => {
                write!(
                    f,
                    "you do not have permission to read the words file '{}'",
                    path.display()
                )
            }
            Self::EmptyWordList => write!(f, "can't select a secret, the word list is empty"),
            Self::EmptySecret => write!(f, "the secret word cannot be empty"),
            Self::ImageNotFound(path) => {
                write!(f, "gallows image '{}' is missing", path.display())
            }
            Self::Interrupted => write!(f, "interrupted by user"),
            Self::Io(err) => write!(f, "{err}"),
        }
    }
}

// Display already includes the underlying error, so no source() chain
impl std::error::Error for GameError {}

impl From<io::Error> for GameError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn words_io_classification() {
        let path = Path::new("words.txt");

        let missing = io::Error::new(io::ErrorKind::NotFound, "missing");
        assert!(matches!(
            GameError::from_words_io(missing, path),
            GameError::WordsNotFound(_)
        ));

        let denied = io::Error::new(io::ErrorKind::PermissionDenied, "denied");
        assert!(matches!(
            GameError::from_words_io(denied, path),
            GameError::WordsUnreadable(_)
        ));

        let other = io::Error::other("broken pipe");
        assert!(matches!(
            GameError::from_words_io(other, path),
            GameError::Io(_)
        ));
    }

    #[test]
    fn display_mentions_path() {
        let err = GameError::WordsNotFound(PathBuf::from("lists/words.txt"));
        assert!(err.to_string().contains("lists/words.txt"));
    }
}
