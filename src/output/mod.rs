//! Console output framing
//!
//! Everything the player sees between keystrokes.

pub mod display;

pub use display::{print_banner, print_loss, print_notice, print_turn, print_win};
