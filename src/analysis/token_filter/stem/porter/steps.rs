//! The five steps of the Porter algorithm and their rule tables.
//!
//! Each step takes the previous step's output and returns a new word. Steps
//! never look back at earlier ones, so the whole algorithm is the composition
//! `step5(step4(step3(step2(step1(word)))))`.

use serde::{Deserialize, Serialize};

use super::classify::ClassifiedWord;
use super::rules::{RuleOutcome, RuleTable, SuffixRule};

/// Step 2 rules: double suffixes to single ones.
///
/// `bli -> ble` replaces the paper's `abli -> able`, and `logi -> log` is an
/// addition from Porter's own reference implementation.
pub const STEP2_RULES: RuleTable = RuleTable::new(
    "step2",
    &[
        SuffixRule::new("ational", "ate", 0),
        SuffixRule::new("tional", "tion", 0),
        SuffixRule::new("enci", "ence", 0),
        SuffixRule::new("anci", "ance", 0),
        SuffixRule::new("izer", "ize", 0),
        SuffixRule::new("bli", "ble", 0),
        SuffixRule::new("alli", "al", 0),
        SuffixRule::new("entli", "ent", 0),
        SuffixRule::new("eli", "e", 0),
        SuffixRule::new("ousli", "ous", 0),
        SuffixRule::new("ization", "ize", 0),
        SuffixRule::new("ation", "ate", 0),
        SuffixRule::new("ator", "ate", 0),
        SuffixRule::new("alism", "al", 0),
        SuffixRule::new("iveness", "ive", 0),
        SuffixRule::new("fulness", "ful", 0),
        SuffixRule::new("ousness", "ous", 0),
        SuffixRule::new("aliti", "al", 0),
        SuffixRule::new("iviti", "ive", 0),
        SuffixRule::new("biliti", "ble", 0),
        SuffixRule::new("logi", "log", 0),
    ],
);

/// Step 3 rules: `-ic-`, `-full`, `-ness` and friends.
pub const STEP3_RULES: RuleTable = RuleTable::new(
    "step3",
    &[
        SuffixRule::new("icate", "ic", 0),
        SuffixRule::new("ative", "", 0),
        SuffixRule::new("alize", "al", 0),
        SuffixRule::new("iciti", "ic", 0),
        SuffixRule::new("ical", "ic", 0),
        SuffixRule::new("ful", "", 0),
        SuffixRule::new("ness", "", 0),
    ],
);

/// Step 4 rules tried before the `-ion` special case.
pub const STEP4_RULES: RuleTable = RuleTable::new(
    "step4",
    &[
        SuffixRule::new("al", "", 1),
        SuffixRule::new("ance", "", 1),
        SuffixRule::new("ence", "", 1),
        SuffixRule::new("er", "", 1),
        SuffixRule::new("ic", "", 1),
        SuffixRule::new("able", "", 1),
        SuffixRule::new("ible", "", 1),
        SuffixRule::new("ant", "", 1),
        SuffixRule::new("ement", "", 1),
        SuffixRule::new("ment", "", 1),
        SuffixRule::new("ent", "", 1),
    ],
);

/// Step 4 rules tried after the `-ion` special case.
pub const STEP4_TAIL_RULES: RuleTable = RuleTable::new(
    "step4-tail",
    &[
        SuffixRule::new("ou", "", 1),
        SuffixRule::new("ism", "", 1),
        SuffixRule::new("ate", "", 1),
        SuffixRule::new("iti", "", 1),
        SuffixRule::new("ous", "", 1),
        SuffixRule::new("ive", "", 1),
        SuffixRule::new("ize", "", 1),
    ],
);

/// A named sub-step of the pipeline.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Step {
    Step1a,
    Step1b,
    Step1c,
    Step2,
    Step3,
    Step4,
    Step5a,
    Step5b,
}

impl Step {
    /// All sub-steps in execution order.
    pub const ALL: [Step; 8] = [
        Step::Step1a,
        Step::Step1b,
        Step::Step1c,
        Step::Step2,
        Step::Step3,
        Step::Step4,
        Step::Step5a,
        Step::Step5b,
    ];

    /// Get the short name of this step.
    pub fn name(self) -> &'static str {
        match self {
            Step::Step1a => "1a",
            Step::Step1b => "1b",
            Step::Step1c => "1c",
            Step::Step2 => "2",
            Step::Step3 => "3",
            Step::Step4 => "4",
            Step::Step5a => "5a",
            Step::Step5b => "5b",
        }
    }

    /// Run this step on `word`.
    pub fn apply(self, word: &str) -> String {
        match self {
            Step::Step1a => step1a(word),
            Step::Step1b => step1b(word),
            Step::Step1c => step1c(word),
            Step::Step2 => step2(word),
            Step::Step3 => step3(word),
            Step::Step4 => step4(word),
            Step::Step5a => step5a(word),
            Step::Step5b => step5b(word),
        }
    }
}

/// Drop the last `n` bytes of `word`.
///
/// Callers only drop ASCII tails, so the cut is always on a char boundary.
fn drop_tail(word: &str, n: usize) -> String {
    word[..word.len() - n].to_string()
}

/// Step 1: plurals, `-ed`/`-ing`, and terminal `y`.
pub fn step1(word: &str) -> String {
    step1c(&step1b(&step1a(word)))
}

/// Step 1a: plurals.
///
/// ```text
/// sses -> ss    caresses -> caress
/// ies  -> i     ponies   -> poni
/// ss   -> ss    caress   -> caress
/// s    ->       cats     -> cat
/// ```
pub fn step1a(word: &str) -> String {
    if word.ends_with("sses") || word.ends_with("ies") {
        drop_tail(word, 2)
    } else if word.ends_with("ss") {
        word.to_string()
    } else if word.ends_with('s') {
        drop_tail(word, 1)
    } else {
        word.to_string()
    }
}

/// Step 1b: past tense and progressive forms.
pub fn step1b(word: &str) -> String {
    let classified = ClassifiedWord::new(word);

    if word.ends_with("eed") {
        if classified.measure(3) > 0 {
            drop_tail(word, 1)
        } else {
            word.to_string()
        }
    } else if word.ends_with("ed") {
        if classified.contains_vowel(2) {
            step1b2(&word[..word.len() - 2])
        } else {
            word.to_string()
        }
    } else if word.ends_with("ing") {
        if classified.contains_vowel(3) {
            step1b2(&word[..word.len() - 3])
        } else {
            word.to_string()
        }
    } else {
        word.to_string()
    }
}

/// Step 1b, second part: tidy up after removing `-ed` or `-ing`.
pub fn step1b2(word: &str) -> String {
    if word.ends_with("at") || word.ends_with("bl") || word.ends_with("iz") {
        return format!("{word}e");
    }

    let classified = ClassifiedWord::new(word);
    if classified.ends_double_consonant() && !word.ends_with(['l', 's', 'z']) {
        drop_tail(word, 1)
    } else if classified.measure(0) == 1 && classified.ends_cvc(0) {
        format!("{word}e")
    } else {
        word.to_string()
    }
}

/// Step 1c: terminal `y` becomes `i` when there is another vowel in the stem.
pub fn step1c(word: &str) -> String {
    if word.ends_with('y') && ClassifiedWord::new(word).contains_vowel(1) {
        format!("{}i", &word[..word.len() - 1])
    } else {
        word.to_string()
    }
}

/// Step 2: map double suffixes to single ones.
pub fn step2(word: &str) -> String {
    STEP2_RULES.apply(word).into_word(word)
}

/// Step 3: strip or shorten `-ic-`, `-full`, `-ness` style suffixes.
pub fn step3(word: &str) -> String {
    STEP3_RULES.apply(word).into_word(word)
}

/// Step 4: remove suffixes from words with a measure above one.
pub fn step4(word: &str) -> String {
    if let RuleOutcome::Applied(rewritten) = STEP4_RULES.apply(word) {
        return rewritten;
    }

    // -ion is only removed after s or t.
    if (word.ends_with("sion") || word.ends_with("tion"))
        && ClassifiedWord::new(word).measure(3) > 1
    {
        return drop_tail(word, 3);
    }

    STEP4_TAIL_RULES.apply(word).into_word(word)
}

/// Step 5: tidy up a final `-e` and `-ll`.
pub fn step5(word: &str) -> String {
    step5b(&step5a(word))
}

/// Step 5a: remove a final `-e`.
pub fn step5a(word: &str) -> String {
    if !word.ends_with('e') {
        return word.to_string();
    }

    let classified = ClassifiedWord::new(word);
    let m = classified.measure(1);
    if m > 1 || (m == 1 && !classified.ends_cvc(1)) {
        drop_tail(word, 1)
    } else {
        word.to_string()
    }
}

/// Step 5b: `-ll` becomes `-l` when the measure is above one.
pub fn step5b(word: &str) -> String {
    let classified = ClassifiedWord::new(word);
    if classified.measure(1) > 1 && classified.ends_double_consonant() && word.ends_with('l') {
        drop_tail(word, 1)
    } else {
        word.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_sizes() {
        assert_eq!(STEP2_RULES.len(), 21);
        assert_eq!(STEP3_RULES.len(), 7);
        assert_eq!(STEP4_RULES.len(), 11);
        assert_eq!(STEP4_TAIL_RULES.len(), 7);
        assert!(STEP2_RULES.rules().iter().all(|r| r.min_measure == 0));
        assert!(STEP4_TAIL_RULES.rules().iter().all(|r| r.min_measure == 1));
    }

    #[test]
    fn test_step1a() {
        assert_eq!(step1a("caresses"), "caress");
        assert_eq!(step1a("ponies"), "poni");
        assert_eq!(step1a("ties"), "ti");
        assert_eq!(step1a("caress"), "caress");
        assert_eq!(step1a("cats"), "cat");
        assert_eq!(step1a("cat"), "cat");
    }

    #[test]
    fn test_step1b() {
        assert_eq!(step1b("feed"), "feed");
        assert_eq!(step1b("agreed"), "agree");
        assert_eq!(step1b("plastered"), "plaster");
        assert_eq!(step1b("bled"), "bled");
        assert_eq!(step1b("motoring"), "motor");
        assert_eq!(step1b("sing"), "sing");
    }

    #[test]
    fn test_step1b2() {
        assert_eq!(step1b("conflated"), "conflate");
        assert_eq!(step1b("troubled"), "trouble");
        assert_eq!(step1b("sized"), "size");
        assert_eq!(step1b("hopping"), "hop");
        assert_eq!(step1b("tanned"), "tan");
        assert_eq!(step1b("falling"), "fall");
        assert_eq!(step1b("hissing"), "hiss");
        assert_eq!(step1b("fizzed"), "fizz");
        assert_eq!(step1b("failing"), "fail");
        assert_eq!(step1b("filing"), "file");
    }

    #[test]
    fn test_step1c() {
        assert_eq!(step1c("happy"), "happi");
        assert_eq!(step1c("sky"), "sky");
    }

    #[test]
    fn test_step2() {
        assert_eq!(step2("relational"), "relate");
        assert_eq!(step2("conditional"), "condition");
        assert_eq!(step2("rational"), "rational");
        assert_eq!(step2("valenci"), "valence");
        assert_eq!(step2("digitizer"), "digitize");
        assert_eq!(step2("conformabli"), "conformable");
        assert_eq!(step2("radicalli"), "radical");
        assert_eq!(step2("differentli"), "different");
        assert_eq!(step2("vileli"), "vile");
        assert_eq!(step2("analogousli"), "analogous");
        assert_eq!(step2("vietnamization"), "vietnamize");
        assert_eq!(step2("predication"), "predicate");
        assert_eq!(step2("operator"), "operate");
        assert_eq!(step2("feudalism"), "feudal");
        assert_eq!(step2("decisiveness"), "decisive");
        assert_eq!(step2("hopefulness"), "hopeful");
        assert_eq!(step2("callousness"), "callous");
        assert_eq!(step2("formaliti"), "formal");
        assert_eq!(step2("sensitiviti"), "sensitive");
        assert_eq!(step2("sensibiliti"), "sensible");
        assert_eq!(step2("apologi"), "apolog");
    }

    #[test]
    fn test_step3() {
        assert_eq!(step3("triplicate"), "triplic");
        assert_eq!(step3("formative"), "form");
        assert_eq!(step3("formalize"), "formal");
        assert_eq!(step3("electriciti"), "electric");
        assert_eq!(step3("electrical"), "electric");
        assert_eq!(step3("hopeful"), "hope");
        assert_eq!(step3("goodness"), "good");
    }

    #[test]
    fn test_step4() {
        assert_eq!(step4("revival"), "reviv");
        assert_eq!(step4("allowance"), "allow");
        assert_eq!(step4("inference"), "infer");
        assert_eq!(step4("airliner"), "airlin");
        assert_eq!(step4("gyroscopic"), "gyroscop");
        assert_eq!(step4("adjustable"), "adjust");
        assert_eq!(step4("defensible"), "defens");
        assert_eq!(step4("irritant"), "irrit");
        assert_eq!(step4("replacement"), "replac");
        assert_eq!(step4("adjustment"), "adjust");
        assert_eq!(step4("dependent"), "depend");
        assert_eq!(step4("adoption"), "adopt");
        assert_eq!(step4("homologou"), "homolog");
        assert_eq!(step4("communism"), "commun");
        assert_eq!(step4("activate"), "activ");
        assert_eq!(step4("angulariti"), "angular");
        assert_eq!(step4("homologous"), "homolog");
        assert_eq!(step4("effective"), "effect");
        assert_eq!(step4("bowdlerize"), "bowdler");
    }

    #[test]
    fn test_step4_ion_requires_s_or_t() {
        assert_eq!(step4("adoption"), "adopt");
        assert_eq!(step4("decision"), "decis");
        assert_eq!(step4("onion"), "onion");
    }

    #[test]
    fn test_step4_blocked_first_table_still_tries_ion_and_tail() {
        // "-ent" matches in the first table but m("pat") = 1 blocks it; the
        // tail table is still consulted and has nothing for "-ent".
        assert_eq!(STEP4_RULES.apply("patent"), RuleOutcome::Blocked { suffix: "ent" });
        assert_eq!(step4("patent"), "patent");
    }

    #[test]
    fn test_step5a() {
        assert_eq!(step5a("probate"), "probat");
        assert_eq!(step5a("rate"), "rate");
        assert_eq!(step5a("cease"), "ceas");
    }

    #[test]
    fn test_step5b() {
        assert_eq!(step5b("controll"), "control");
        assert_eq!(step5b("roll"), "roll");
    }

    #[test]
    fn test_step_order_and_names() {
        let names: Vec<_> = Step::ALL.iter().map(|s| s.name()).collect();
        assert_eq!(names, ["1a", "1b", "1c", "2", "3", "4", "5a", "5b"]);
        assert_eq!(Step::Step3.apply("goodness"), "good");
    }
}
