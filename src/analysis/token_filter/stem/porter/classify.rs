//! Vowel/consonant classification for the Porter stemmer.
//!
//! The letters `a`, `e`, `i`, `o` and `u` are vowels. `y` is a consonant at
//! the start of a word or after a vowel, and a vowel after a consonant. Every
//! other byte is a consonant.
//!
//! Because `y` only looks backward, a word is classified in a single forward
//! pass and the classification of a prefix is a prefix of the classification.
//!
//! # Examples
//!
//! ```
//! use stemma::analysis::token_filter::stem::porter::classify::{ClassifiedWord, LetterClass};
//!
//! let word = ClassifiedWord::new("toy");
//! assert_eq!(word.class_at(0), Some(LetterClass::Consonant));
//! assert_eq!(word.class_at(1), Some(LetterClass::Vowel));
//! assert_eq!(word.class_at(2), Some(LetterClass::Consonant));
//! assert_eq!(word.class_at(3), None);
//! ```

use serde::{Deserialize, Serialize};

/// Class of a single letter position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LetterClass {
    Vowel,
    Consonant,
}

impl LetterClass {
    /// Check if this is a consonant.
    pub fn is_consonant(self) -> bool {
        self == LetterClass::Consonant
    }

    /// Check if this is a vowel.
    pub fn is_vowel(self) -> bool {
        self == LetterClass::Vowel
    }
}

/// A word together with the class of every byte position.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClassifiedWord<'a> {
    text: &'a str,
    classes: Vec<LetterClass>,
}

impl<'a> ClassifiedWord<'a> {
    /// Classify every position of `text` in one left-to-right pass.
    pub fn new(text: &'a str) -> Self {
        let mut classes = Vec::with_capacity(text.len());

        for &byte in text.as_bytes() {
            let class = match byte {
                b'a' | b'e' | b'i' | b'o' | b'u' => LetterClass::Vowel,
                b'y' => match classes.last() {
                    Some(LetterClass::Consonant) => LetterClass::Vowel,
                    _ => LetterClass::Consonant,
                },
                _ => LetterClass::Consonant,
            };
            classes.push(class);
        }

        ClassifiedWord { text, classes }
    }

    /// Get the underlying text.
    pub fn text(&self) -> &'a str {
        self.text
    }

    /// Get the length of the word in bytes.
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    /// Check if the word is empty.
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// Get the class at position `i`, or `None` when `i` is out of range.
    pub fn class_at(&self, i: usize) -> Option<LetterClass> {
        self.classes.get(i).copied()
    }

    /// Check if position `i` holds a consonant. Out of range is not a consonant.
    pub fn is_consonant(&self, i: usize) -> bool {
        self.class_at(i).is_some_and(LetterClass::is_consonant)
    }

    /// Check if position `i` holds a vowel. Out of range is not a vowel.
    pub fn is_vowel(&self, i: usize) -> bool {
        self.class_at(i).is_some_and(LetterClass::is_vowel)
    }

    /// Get the classes of the first `len` positions.
    pub fn prefix(&self, len: usize) -> &[LetterClass] {
        &self.classes[..len.min(self.classes.len())]
    }

    /// Get the classes of every position.
    pub fn classes(&self) -> &[LetterClass] {
        &self.classes
    }
}

/// Check if the byte at position `i` of `word` is a consonant.
///
/// Returns `false` when `i` is out of range.
pub fn is_consonant(word: &str, i: usize) -> bool {
    ClassifiedWord::new(word).is_consonant(i)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_vowels_and_consonants() {
        let word = ClassifiedWord::new("trouble");

        assert!(word.is_consonant(0)); // t
        assert!(word.is_consonant(1)); // r
        assert!(word.is_vowel(2)); // o
        assert!(word.is_vowel(3)); // u
        assert!(word.is_consonant(4)); // b
        assert!(word.is_consonant(5)); // l
        assert!(word.is_vowel(6)); // e
    }

    #[test]
    fn test_y_classification() {
        // Leading y is a consonant.
        assert!(is_consonant("yes", 0));
        // y after a consonant is a vowel.
        assert!(!is_consonant("syzygy", 1));
        // y after a vowel is a consonant.
        assert!(is_consonant("toy", 2));
        // y after a y that acts as a vowel is a consonant.
        let word = ClassifiedWord::new("syyy");
        assert_eq!(
            word.classes(),
            &[
                LetterClass::Consonant,
                LetterClass::Vowel,
                LetterClass::Consonant,
                LetterClass::Vowel,
            ]
        );
    }

    #[test]
    fn test_out_of_range() {
        let word = ClassifiedWord::new("cat");
        assert_eq!(word.class_at(3), None);
        assert!(!word.is_consonant(10));
        assert!(!word.is_vowel(10));
        assert!(!is_consonant("cat", 3));
        assert!(!is_consonant("", 0));
    }

    #[test]
    fn test_prefix_matches_reclassification() {
        let word = ClassifiedWord::new("happy");
        let prefix = ClassifiedWord::new("happ");
        assert_eq!(word.prefix(4), prefix.classes());
        assert_eq!(word.prefix(100), word.classes());
    }

    #[test]
    fn test_non_letters_are_consonants() {
        let word = ClassifiedWord::new("a1-é");
        assert!(word.is_vowel(0));
        assert!(word.is_consonant(1));
        assert!(word.is_consonant(2));
        assert!(word.is_consonant(3));
        assert!(word.is_consonant(4));
    }
}
