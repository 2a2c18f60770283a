//! Word lists for hangman
//!
//! The secret for each game comes from a line-oriented word-list file.

pub mod loader;

pub use loader::{load_list, pick_secret};
