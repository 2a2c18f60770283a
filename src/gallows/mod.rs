//! Gallows illustrations
//!
//! Maps the current miss count to an ASCII picture loaded from an indexed
//! asset file. Zero misses renders a blank block of the same height so the
//! frame layout does not jump on the first miss.

use crate::error::GameError;
use std::fs::File;
use std::io::Read;
use std::path::PathBuf;

/// Conventional asset directory, relative to the working directory
pub const IMAGES_DIR: &str = "images";

/// Upper bound on bytes read from one image asset
pub const MAX_IMAGE_BYTES: u64 = 4096;

/// Height of the blank placeholder drawn before the first miss
const BLANK_HEIGHT: usize = 10;

/// Loads gallows pictures indexed by miss count
#[derive(Debug, Clone)]
pub struct Illustrator {
    dir: PathBuf,
}

impl Illustrator {
    /// Create an illustrator reading assets from `dir`
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Render the picture for `misses` wrong guesses
    ///
    /// Zero misses yields a fixed block of blank lines without touching
    /// the filesystem. Otherwise the two-digit asset `NN.txt` is read,
    /// capped at [`MAX_IMAGE_BYTES`].
    ///
    /// # Errors
    ///
    /// Returns `GameError::ImageNotFound` if the asset for this index does
    /// not exist. A missing picture is a broken installation, not a
    /// recoverable game event.
    pub fn render(&self, misses: u8) -> Result<String, GameError> {
        if misses == 0 {
            return Ok("\n".repeat(BLANK_HEIGHT));
        }

        let path = self.dir.join(format!("{misses:02}.txt"));
        let file = File::open(&path).map_err(|err| {
            if err.kind() == std::io::ErrorKind::NotFound {
                GameError::ImageNotFound(path.clone())
            } else {
                GameError::Io(err)
            }
        })?;

        let mut image = String::new();
        file.take(MAX_IMAGE_BYTES).read_to_string(&mut image)?;
        Ok(image)
    }
}

impl Default for Illustrator {
    fn default() -> Self {
        Self::new(IMAGES_DIR)
    }
}
