//! Suffix rewrite rules and the ordered rule-table scanner.
//!
//! A [`SuffixRule`] rewrites a word's suffix when the stem in front of it has
//! a measure strictly greater than the rule's minimum. A [`RuleTable`] tries its
//! rules in declaration order: the first rule that applies wins, and a rule
//! whose suffix matches but whose measure condition fails ends the scan with
//! no change, even if a later rule's suffix would also match.
//!
//! # Examples
//!
//! ```
//! use stemma::analysis::token_filter::stem::porter::rules::{RuleOutcome, RuleTable, SuffixRule};
//!
//! const RULES: &[SuffixRule] = &[SuffixRule::new("ational", "ate", 0)];
//! let table = RuleTable::new("example", RULES);
//!
//! assert_eq!(table.apply("relational"), RuleOutcome::Applied("relate".to_string()));
//! assert_eq!(table.apply("rational"), RuleOutcome::Blocked { suffix: "ational" });
//! assert_eq!(table.apply("running"), RuleOutcome::Unmatched);
//! ```

use std::fmt;

use log::trace;

use super::classify::ClassifiedWord;

/// A single suffix rewrite rule.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SuffixRule {
    /// Suffix to look for.
    pub suffix: &'static str,

    /// Text that replaces the suffix.
    pub replacement: &'static str,

    /// The stem in front of the suffix must have a measure above this value.
    pub min_measure: usize,
}

impl SuffixRule {
    /// Create a new suffix rule.
    pub const fn new(suffix: &'static str, replacement: &'static str, min_measure: usize) -> Self {
        SuffixRule {
            suffix,
            replacement,
            min_measure,
        }
    }

    /// Check if `word` ends with this rule's suffix.
    pub fn matches(&self, word: &str) -> bool {
        word.ends_with(self.suffix)
    }

    /// Apply the rule to `word`.
    ///
    /// Returns the rewritten word, or `None` if the word is not longer than
    /// the suffix, does not end with it, or fails the measure condition.
    pub fn apply(&self, word: &str) -> Option<String> {
        if self.suffix.len() >= word.len() || !self.matches(word) {
            return None;
        }

        let stem_len = word.len() - self.suffix.len();
        if ClassifiedWord::new(word).measure(self.suffix.len()) <= self.min_measure {
            return None;
        }

        let mut rewritten = String::with_capacity(stem_len + self.replacement.len());
        rewritten.push_str(&word[..stem_len]);
        rewritten.push_str(self.replacement);
        Some(rewritten)
    }
}

impl fmt::Display for SuffixRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "(m>{}) {} -> {}",
            self.min_measure,
            self.suffix,
            if self.replacement.is_empty() {
                "\"\""
            } else {
                self.replacement
            }
        )
    }
}

/// Result of scanning a rule table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RuleOutcome {
    /// A rule applied and produced this word.
    Applied(String),

    /// A rule's suffix matched but its condition failed, which ends the scan.
    Blocked {
        /// Suffix of the rule that stopped the scan.
        suffix: &'static str,
    },

    /// No rule's suffix matched.
    Unmatched,
}

impl RuleOutcome {
    /// Check if a rule applied.
    pub fn is_applied(&self) -> bool {
        matches!(self, RuleOutcome::Applied(_))
    }

    /// Get the rewritten word, falling back to `word` when nothing applied.
    pub fn into_word(self, word: &str) -> String {
        match self {
            RuleOutcome::Applied(rewritten) => rewritten,
            RuleOutcome::Blocked { .. } | RuleOutcome::Unmatched => word.to_string(),
        }
    }
}

/// An ordered table of suffix rules scoped to one pipeline step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RuleTable {
    name: &'static str,
    rules: &'static [SuffixRule],
}

impl RuleTable {
    /// Create a new rule table.
    pub const fn new(name: &'static str, rules: &'static [SuffixRule]) -> Self {
        RuleTable { name, rules }
    }

    /// Get the name of this table.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Get the rules in declaration order.
    pub fn rules(&self) -> &'static [SuffixRule] {
        self.rules
    }

    /// Get the number of rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Check if the table has no rules.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Scan the rules in order and apply the first one that fits.
    pub fn apply(&self, word: &str) -> RuleOutcome {
        for rule in self.rules {
            if let Some(rewritten) = rule.apply(word) {
                trace!("{}: {} applied to {word:?}", self.name, rule);
                return RuleOutcome::Applied(rewritten);
            }
            if rule.matches(word) {
                trace!("{}: {} blocked on {word:?}", self.name, rule);
                return RuleOutcome::Blocked {
                    suffix: rule.suffix,
                };
            }
        }
        RuleOutcome::Unmatched
    }
}

/// Replace `suffix` with `replacement` if `word` ends with it and the measure
/// of the stem in front of it is greater than `min_measure`.
///
/// Returns the resulting word and whether the replacement was applied.
pub fn replace(word: &str, suffix: &str, replacement: &str, min_measure: usize) -> (String, bool) {
    if suffix.len() >= word.len() || !word.ends_with(suffix) {
        return (word.to_string(), false);
    }
    if ClassifiedWord::new(word).measure(suffix.len()) <= min_measure {
        return (word.to_string(), false);
    }
    let stem = &word[..word.len() - suffix.len()];
    (format!("{stem}{replacement}"), true)
}

/// Apply `table` to `word`.
///
/// Returns the resulting word and whether a rule was applied.
pub fn replace_rules(word: &str, table: &RuleTable) -> (String, bool) {
    let outcome = table.apply(word);
    let applied = outcome.is_applied();
    (outcome.into_word(word), applied)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replace_applies_when_measure_exceeds_minimum() {
        assert_eq!(
            replace("relational", "ational", "ate", 0),
            ("relate".to_string(), true)
        );
        assert_eq!(
            replace("rational", "ational", "ate", 0),
            ("rational".to_string(), false)
        );
    }

    #[test]
    fn test_replace_fails_closed_on_long_suffix() {
        assert_eq!(replace("ion", "ion", "", 0), ("ion".to_string(), false));
        assert_eq!(replace("al", "ational", "ate", 0), ("al".to_string(), false));
    }

    #[test]
    fn test_replace_requires_suffix() {
        assert_eq!(
            replace("running", "ational", "ate", 0),
            ("running".to_string(), false)
        );
    }

    #[test]
    fn test_rule_apply_matches_replace() {
        let rule = SuffixRule::new("ement", "", 1);
        assert_eq!(rule.apply("replacement"), Some("replac".to_string()));
        assert_eq!(rule.apply("cement"), None);
        assert!(rule.matches("cement"));
    }

    #[test]
    fn test_blocked_rule_stops_the_scan() {
        const RULES: &[SuffixRule] = &[
            SuffixRule::new("ement", "", 1),
            SuffixRule::new("ment", "", 1),
            SuffixRule::new("ent", "", 0),
        ];
        let table = RuleTable::new("test", RULES);

        // "ent" on its own would rewrite "cement" to "cem" (m = 1).
        assert_eq!(RULES[2].apply("cement"), Some("cem".to_string()));

        // But "ement" matches first and fails on m("c") = 0, ending the scan.
        assert_eq!(table.apply("cement"), RuleOutcome::Blocked { suffix: "ement" });
        assert_eq!(replace_rules("cement", &table), ("cement".to_string(), false));
    }

    #[test]
    fn test_first_matching_rule_wins() {
        const RULES: &[SuffixRule] = &[
            SuffixRule::new("ational", "ate", 0),
            SuffixRule::new("tional", "tion", 0),
        ];
        let table = RuleTable::new("test", RULES);

        assert_eq!(
            table.apply("relational"),
            RuleOutcome::Applied("relate".to_string())
        );
        assert_eq!(
            table.apply("conditional"),
            RuleOutcome::Applied("condition".to_string())
        );
        assert_eq!(table.apply("hopping"), RuleOutcome::Unmatched);
    }

    #[test]
    fn test_outcome_into_word() {
        assert_eq!(RuleOutcome::Unmatched.into_word("cat"), "cat");
        assert_eq!(RuleOutcome::Blocked { suffix: "at" }.into_word("cat"), "cat");
        assert_eq!(RuleOutcome::Applied("ca".to_string()).into_word("cat"), "ca");
    }

    #[test]
    fn test_rule_display() {
        assert_eq!(SuffixRule::new("ness", "", 0).to_string(), "(m>0) ness -> \"\"");
        assert_eq!(SuffixRule::new("izer", "ize", 0).to_string(), "(m>0) izer -> ize");
    }
}
