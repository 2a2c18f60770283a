//! Display functions for the game screens

use crate::core::Mask;
use crate::game::MAX_ATTEMPTS;
use colored::Colorize;

/// Print the title banner and the framing story
pub fn print_banner() {
    println!("{}", "H A N G M A N".bright_yellow().bold());
    println!();
    println!("You've been sentenced to death. The only way");
    println!("to save yourself is to guess a secret word.");
    println!("Good luck!");
    println!();
}

/// Print the per-turn state: the masked word and the letters tried so far
pub fn print_turn(mask: &Mask, wrong: &[char]) {
    println!("\nSecret word:  {}", mask.to_string().bright_white().bold());

    let tried: String = wrong
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ");
    println!(
        "Tried so far: {}   ({} of {} misses)\n",
        tried.red(),
        wrong.len(),
        MAX_ATTEMPTS
    );
}

/// Print a rejected-input notice carried over from the previous turn
pub fn print_notice(notice: &str) {
    println!("{}\n", notice.yellow());
}

/// Print the success message with the revealed word
pub fn print_win(secret: &str) {
    println!("\n{}", "Congratulations!".bright_green().bold());
    println!(
        "You've successfully found the secret word '{}'.",
        secret.bright_white().bold()
    );
    println!();
}

/// Print the failure message
pub fn print_loss() {
    println!(
        "\n{}",
        "You've been hanged. What a bad luck!".bright_red().bold()
    );
    println!();
}
