//! Component letter alphabets
//!
//! Two parallel letter sets name buffer slots:
//!
//! | size | positional | color       |
//! |------|------------|-------------|
//! | 2    | `x y`      | none        |
//! | 3    | `x y z`    | `r g b`     |
//! | 4    | `x y z`    | `r g b a`   |
//!
//! Any other size has no letters at all; only numeric indices reach its
//! components.

/// One of the two letter sets
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Alphabet {
    /// `x`, `y`, `z`
    Positional,
    /// `r`, `g`, `b`, `a`
    Color,
}

impl Alphabet {
    pub const ALL: [Alphabet; 2] = [Alphabet::Positional, Alphabet::Color];

    /// Every letter of the alphabet, in slot order
    #[inline]
    pub const fn letters(self) -> &'static [char] {
        match self {
            Alphabet::Positional => &['x', 'y', 'z'],
            Alphabet::Color => &['r', 'g', 'b', 'a'],
        }
    }

    /// Slot named by `letter` in this alphabet, ignoring vector size
    #[inline]
    pub fn slot(self, letter: char) -> Option<usize> {
        self.letters().iter().position(|&l| l == letter)
    }

    /// Number of letters usable on a vector of `size` components
    #[inline]
    pub const fn letter_count(self, size: usize) -> usize {
        match (self, size) {
            (Alphabet::Positional, 2) => 2,
            (Alphabet::Positional, 3..=4) => 3,
            (Alphabet::Color, 3..=4) => size,
            _ => 0,
        }
    }

    /// Letters usable on a vector of `size` components
    #[inline]
    pub fn letters_for(self, size: usize) -> &'static [char] {
        &self.letters()[..self.letter_count(size)]
    }

    /// Slot named by `letter` if the letter is valid for `size`
    #[inline]
    pub fn slot_for(self, letter: char, size: usize) -> Option<usize> {
        self.slot(letter).filter(|&slot| slot < self.letter_count(size))
    }

    /// Alphabet containing `letter`. The two sets are disjoint.
    pub fn of(letter: char) -> Option<Alphabet> {
        Self::ALL.into_iter().find(|a| a.slot(letter).is_some())
    }
}

/// Slot named by a single letter on a vector of `size`, from either alphabet
pub fn component_slot(letter: char, size: usize) -> Option<usize> {
    Alphabet::of(letter).and_then(|alphabet| alphabet.slot_for(letter, size))
}

/// Slots named by every letter of `key`, in key order, when all letters come
/// from one alphabet valid for `size`. Repeated letters repeat their slot.
pub fn uniform_slots(key: &str, size: usize) -> Option<Vec<usize>> {
    let alphabet = Alphabet::of(key.chars().next()?)?;
    key.chars()
        .map(|letter| alphabet.slot_for(letter, size))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letters_per_size() {
        assert_eq!(Alphabet::Positional.letters_for(2), &['x', 'y']);
        assert_eq!(Alphabet::Color.letters_for(2), &[] as &[char]);
        assert_eq!(Alphabet::Positional.letters_for(3), &['x', 'y', 'z']);
        assert_eq!(Alphabet::Color.letters_for(3), &['r', 'g', 'b']);
        assert_eq!(Alphabet::Positional.letters_for(4), &['x', 'y', 'z']);
        assert_eq!(Alphabet::Color.letters_for(4), &['r', 'g', 'b', 'a']);
        assert_eq!(Alphabet::Positional.letters_for(5), &[] as &[char]);
        assert_eq!(Alphabet::Positional.letters_for(1), &[] as &[char]);
    }

    #[test]
    fn test_component_slot() {
        assert_eq!(component_slot('b', 3), Some(2));
        assert_eq!(component_slot('z', 3), Some(2));
        assert_eq!(component_slot('a', 3), None);
        assert_eq!(component_slot('a', 4), Some(3));
        assert_eq!(component_slot('z', 2), None);
        assert_eq!(component_slot('r', 2), None);
        assert_eq!(component_slot('w', 4), None);
    }

    #[test]
    fn test_uniform_slots() {
        assert_eq!(uniform_slots("bgr", 4), Some(vec![2, 1, 0]));
        assert_eq!(uniform_slots("rrgb", 4), Some(vec![0, 0, 1, 2]));
        assert_eq!(uniform_slots("zyx", 3), Some(vec![2, 1, 0]));
        assert_eq!(uniform_slots("xr", 4), None);
        assert_eq!(uniform_slots("xyz", 2), None);
        assert_eq!(uniform_slots("", 4), None);
    }
}
