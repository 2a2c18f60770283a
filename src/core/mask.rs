//! The partially revealed display form of the secret

use super::{Secret, letters_match};
use std::fmt;

/// Placeholder shown for letters not yet discovered
pub const PLACEHOLDER: char = '-';

/// The masked word shown to the player
///
/// Same length as the secret; each slot is either [`PLACEHOLDER`] or a
/// revealed letter in the exact case the player typed. [`Mask::reveal`] is
/// the only mutator and never turns a revealed slot back into a
/// placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mask {
    slots: Vec<char>,
}

impl Mask {
    /// Create a fully hidden mask of `len` placeholders
    #[must_use]
    pub fn hidden(len: usize) -> Self {
        Self {
            slots: vec![PLACEHOLDER; len],
        }
    }

    /// Copy `letter` into every position where the secret matches it
    ///
    /// Positions are matched case-insensitively but receive the letter in
    /// the case the player typed. All other positions are left untouched,
    /// so applying the same letter twice is a no-op.
    ///
    /// # Examples
    /// ```
    /// use hangman::core::{Mask, Secret};
    ///
    /// let secret = Secret::new("speed").unwrap();
    /// let mut mask = Mask::hidden(secret.len());
    ///
    /// mask.reveal('E', &secret);
    /// assert_eq!(mask.to_string(), "--EE-");
    /// ```
    pub fn reveal(&mut self, letter: char, secret: &Secret) {
        for (slot, &s) in self.slots.iter_mut().zip(secret.letters()) {
            if letters_match(s, letter) {
                *slot = letter;
            }
        }
    }

    /// Check whether a letter has already been revealed, ignoring case
    #[must_use]
    pub fn contains(&self, letter: char) -> bool {
        self.slots
            .iter()
            .any(|&c| c != PLACEHOLDER && letters_match(c, letter))
    }

    /// Check whether the mask spells out the whole secret, ignoring case
    #[must_use]
    pub fn matches(&self, secret: &Secret) -> bool {
        self.slots.len() == secret.len()
            && self
                .slots
                .iter()
                .zip(secret.letters())
                .all(|(&m, &s)| letters_match(m, s))
    }

    /// Number of slots in the mask
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// True for a zero-length mask
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

impl fmt::Display for Mask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &c in &self.slots {
            write!(f, "{c}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secret(text: &str) -> Secret {
        Secret::new(text).unwrap()
    }

    #[test]
    fn hidden_mask_is_all_placeholders() {
        let mask = Mask::hidden(3);
        assert_eq!(mask.to_string(), "---");
        assert_eq!(mask.len(), 3);
    }

    #[test]
    fn reveal_sets_matching_positions_only() {
        let s = secret("speed");
        let mut mask = Mask::hidden(s.len());

        mask.reveal('e', &s);
        assert_eq!(mask.to_string(), "--ee-");

        mask.reveal('s', &s);
        assert_eq!(mask.to_string(), "s-ee-");
    }

    #[test]
    fn reveal_preserves_typed_case() {
        let s = secret("cat");
        let mut mask = Mask::hidden(s.len());

        mask.reveal('C', &s);
        assert_eq!(mask.to_string(), "C--");

        // Secret in mixed case, lowercase guess
        let s = secret("Dog");
        let mut mask = Mask::hidden(s.len());
        mask.reveal('d', &s);
        assert_eq!(mask.to_string(), "d--");
    }

    #[test]
    fn reveal_is_idempotent() {
        let s = secret("speed");
        let mut mask = Mask::hidden(s.len());

        mask.reveal('e', &s);
        let once = mask.clone();
        mask.reveal('e', &s);
        assert_eq!(mask, once);
    }

    #[test]
    fn reveal_never_hides_a_slot() {
        let s = secret("cat");
        let mut mask = Mask::hidden(s.len());

        mask.reveal('c', &s);
        mask.reveal('a', &s);
        mask.reveal('z', &s);
        assert_eq!(mask.to_string(), "ca-");
    }

    #[test]
    fn contains_ignores_case_of_revealed_letter() {
        let s = secret("cat");
        let mut mask = Mask::hidden(s.len());

        mask.reveal('C', &s);
        assert!(mask.contains('c'));
        assert!(mask.contains('C'));
        assert!(!mask.contains('a'));
    }

    #[test]
    fn matches_ignores_case() {
        let s = secret("Cat");
        let mut mask = Mask::hidden(s.len());

        mask.reveal('c', &s);
        mask.reveal('a', &s);
        assert!(!mask.matches(&s));

        mask.reveal('t', &s);
        assert!(mask.matches(&s));
        assert_eq!(mask.to_string(), "cat");
    }
}
