//! Core domain types for hangman
//!
//! This module contains the fundamental domain types with zero I/O.
//! All types here are pure, testable, and have clear invariants.

mod mask;
mod secret;

pub use mask::{Mask, PLACEHOLDER};
pub use secret::{Secret, SecretError};

/// Case-insensitive letter comparison.
///
/// Equal chars compare directly; `to_lowercase` covers everything else,
/// including multi-char lowercase expansions.
pub(crate) fn letters_match(a: char, b: char) -> bool {
    a == b || a.to_lowercase().eq(b.to_lowercase())
}
