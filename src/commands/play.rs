//! The interactive game loop
//!
//! Drives one game: draws a full frame each turn, blocks on a guess,
//! feeds it to the state machine and stops on win, loss or interrupt.

use crate::console::{self, ReadOutcome};
use crate::core::Secret;
use crate::error::GameError;
use crate::gallows::Illustrator;
use crate::game::{Game, GameState, GuessOutcome};
use crate::output::display;

/// Play one game of hangman over `secret`
///
/// Each turn redraws the whole frame: banner, gallows for the current miss
/// count (a blank block before the first miss, so the layout stays put),
/// the masked word, the letters tried so far and any notice from the
/// previous turn.
///
/// # Errors
///
/// Returns `GameError::Interrupted` when the player interrupts during
/// input, `GameError::ImageNotFound` for a missing gallows asset, or the
/// underlying I/O error from the terminal.
pub fn run_play(secret: Secret, illustrator: &Illustrator) -> Result<(), GameError> {
    let mut game = Game::new(secret);
    let mut notice: Option<&str> = None;

    loop {
        console::clear_screen()?;
        display::print_banner();
        print!("{}", illustrator.render(game.misses())?);
        display::print_turn(game.mask(), game.wrong_letters());
        if let Some(text) = notice.take() {
            display::print_notice(text);
        }

        match game.state() {
            GameState::Playing => {}
            GameState::Won => {
                display::print_win(game.secret().text());
                return Ok(());
            }
            GameState::Lost => {
                display::print_loss();
                return Ok(());
            }
            // Set below, the loop never comes back around on it
            GameState::Aborted => return Err(GameError::Interrupted),
        }

        match console::read_guess("Try to guess a letter")? {
            ReadOutcome::Interrupted => {
                game.abort();
                return Err(GameError::Interrupted);
            }
            ReadOutcome::Line(input) => match game.guess(&input) {
                GuessOutcome::Invalid => {
                    notice = Some("You have to enter a single letter. Try again.");
                }
                GuessOutcome::AlreadyRevealed(_) => {
                    notice = Some("The letter has been already discovered. Try another.");
                }
                GuessOutcome::Miss { .. } | GuessOutcome::Hit(_) => {}
            },
        }
    }
}
