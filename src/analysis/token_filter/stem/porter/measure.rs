//! Measure calculation and the condition predicates built on it.
//!
//! The measure `m` of a word is the number of vowel-run to consonant-run
//! transitions, i.e. the `m` in `[C](VC){m}[V]`:
//!
//! ```text
//! m=0  tr, ee, tree, y, by
//! m=1  trouble, oats, trees, ivy
//! m=2  troubles, private, oaten, orrery
//! ```
//!
//! Every predicate takes an excluded tail length so that a single
//! [`ClassifiedWord`] answers questions about the word with a suffix removed.

use super::classify::{ClassifiedWord, LetterClass};

impl ClassifiedWord<'_> {
    /// Measure of the word with the last `excluded` bytes removed.
    ///
    /// Returns 0 when nothing is left after the exclusion.
    pub fn measure(&self, excluded: usize) -> usize {
        if self.len() <= excluded {
            return 0;
        }
        let stem = self.prefix(self.len() - excluded);

        let mut last_was_vowel = stem[0].is_vowel();
        let mut m = 0;

        for class in stem {
            match class {
                LetterClass::Consonant if last_was_vowel => {
                    m += 1;
                    last_was_vowel = false;
                }
                LetterClass::Vowel => last_was_vowel = true,
                LetterClass::Consonant => {}
            }
        }

        m
    }

    /// Check if any position before the last `excluded` bytes is a vowel.
    pub fn contains_vowel(&self, excluded: usize) -> bool {
        let len = self.len().saturating_sub(excluded);
        self.prefix(len).iter().any(|class| class.is_vowel())
    }

    /// Check if the word ends with two identical consonants, e.g. `-tt`.
    pub fn ends_double_consonant(&self) -> bool {
        let bytes = self.text().as_bytes();
        let len = bytes.len();
        if len < 2 {
            return false;
        }

        // A trailing non-ASCII byte is never dropped as half of a double.
        let last = bytes[len - 1];
        last.is_ascii() && last == bytes[len - 2] && self.is_consonant(len - 1)
    }

    /// Check if the word, minus the last `excluded` bytes, ends
    /// consonant-vowel-consonant where the final consonant is not `w`, `x` or `y`.
    pub fn ends_cvc(&self, excluded: usize) -> bool {
        let len = self.len().saturating_sub(excluded);
        if len < 3 {
            return false;
        }

        let last = self.text().as_bytes()[len - 1];
        self.is_consonant(len - 3)
            && self.is_vowel(len - 2)
            && self.is_consonant(len - 1)
            && !matches!(last, b'w' | b'x' | b'y')
    }
}

/// Measure of `word` with the length of `suffix` excluded from its tail.
///
/// `suffix` is only used for its length; the word need not end with it.
pub fn measure(word: &str, suffix: &str) -> usize {
    ClassifiedWord::new(word).measure(suffix.len())
}

/// Check if `word` has a vowel before the length of `suffix`.
pub fn contains_vowel(word: &str, suffix: &str) -> bool {
    ClassifiedWord::new(word).contains_vowel(suffix.len())
}

/// Check if `word` ends with a double consonant.
pub fn ends_double_consonant(word: &str) -> bool {
    ClassifiedWord::new(word).ends_double_consonant()
}

/// Check if `word` ends with a consonant-vowel-consonant pattern.
pub fn ends_cvc(word: &str) -> bool {
    ClassifiedWord::new(word).ends_cvc(0)
}
