//! The hangman turn state machine
//!
//! [`Game`] owns all per-game state and applies one guess at a time. It is
//! pure: reading input, clearing the screen and drawing gallows stay in
//! [`crate::commands`] and [`crate::console`].

use crate::core::{Mask, Secret, letters_match};

/// Misses allowed before the game is lost
pub const MAX_ATTEMPTS: u8 = 8;

/// Where the game currently stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    Playing,
    Won,
    Lost,
    Aborted,
}

/// What a single guess did to the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    /// Input was not exactly one alphabetic letter
    Invalid,
    /// The letter is already visible in the mask
    AlreadyRevealed(char),
    /// The letter is not in the secret; `repeated` means it was already
    /// tried and cost nothing new
    Miss { letter: char, repeated: bool },
    /// The letter is in the secret and has been revealed
    Hit(char),
}

/// One game of hangman
pub struct Game {
    secret: Secret,
    mask: Mask,
    wrong: Vec<char>,
    misses: u8,
    state: GameState,
}

impl Game {
    /// Start a new game over `secret` with a fully hidden mask
    #[must_use]
    pub fn new(secret: Secret) -> Self {
        let mask = Mask::hidden(secret.len());
        Self {
            secret,
            mask,
            wrong: Vec::new(),
            misses: 0,
            state: GameState::Playing,
        }
    }

    /// Apply one line of player input
    ///
    /// Only a single alphabetic character (surrounding whitespace ignored)
    /// counts as a guess; anything else is rejected without touching the
    /// game state, as is any guess made after the game has ended. A wrong
    /// letter is only counted once: repeating it neither grows the
    /// wrong-letter list nor costs another miss.
    pub fn guess(&mut self, input: &str) -> GuessOutcome {
        if self.state != GameState::Playing {
            return GuessOutcome::Invalid;
        }

        let mut chars = input.trim().chars();
        let letter = match (chars.next(), chars.next()) {
            (Some(c), None) if c.is_alphabetic() => c,
            _ => return GuessOutcome::Invalid,
        };

        if self.mask.contains(letter) {
            return GuessOutcome::AlreadyRevealed(letter);
        }

        if !self.secret.contains(letter) {
            let repeated = self.wrong.iter().any(|&w| letters_match(w, letter));
            if !repeated {
                self.wrong.push(letter);
                self.misses += 1;
                if self.misses >= MAX_ATTEMPTS {
                    self.state = GameState::Lost;
                }
            }
            return GuessOutcome::Miss { letter, repeated };
        }

        self.mask.reveal(letter, &self.secret);
        if self.mask.matches(&self.secret) {
            self.state = GameState::Won;
        }
        GuessOutcome::Hit(letter)
    }

    /// Abandon the game after an interrupt during input
    pub fn abort(&mut self) {
        self.state = GameState::Aborted;
    }

    #[inline]
    #[must_use]
    pub fn state(&self) -> GameState {
        self.state
    }

    #[inline]
    #[must_use]
    pub fn secret(&self) -> &Secret {
        &self.secret
    }

    #[inline]
    #[must_use]
    pub fn mask(&self) -> &Mask {
        &self.mask
    }

    /// Distinct wrong letters in the order they were tried
    #[inline]
    #[must_use]
    pub fn wrong_letters(&self) -> &[char] {
        &self.wrong
    }

    #[inline]
    #[must_use]
    pub fn misses(&self) -> u8 {
        self.misses
    }
}
