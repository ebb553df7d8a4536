//! Step 1: plurals (1a), `-eed`/`-ed`/`-ing` (1b) and terminal `y` (1c).

use crate::rules::{apply_first, Condition, RuleMatch, SuffixRule};
use crate::suffix::replace_suffix;
use crate::word::Word;

const STEP_1A: &[SuffixRule] = &[
    SuffixRule::new("sses", "ss", Condition::Always),
    SuffixRule::new("ies", "i", Condition::Always),
    SuffixRule::new("ss", "ss", Condition::Always),
    SuffixRule::new("s", "", Condition::WordNotEndsWith("ss")),
];

// A word ending in "eed" never falls through to the "ed" rule.
const STEP_1B_EED: &[SuffixRule] = &[SuffixRule::new("eed", "ee", Condition::MeasureAbove(0))];

const STEP_1B: &[SuffixRule] = &[
    SuffixRule::new("ed", "", Condition::ContainsVowel),
    SuffixRule::new("ing", "", Condition::ContainsVowel),
];

const UNDOUBLE: Condition = Condition::EndsDoubleConsonantExcept(&['l', 's', 'z']);
const RESTORE_E: Condition = Condition::All(&[Condition::MeasureEquals(1), Condition::EndsCvc]);

const STEP_1C: &[SuffixRule] = &[SuffixRule::new("y", "i", Condition::ContainsVowel)];

pub fn step1a(word: &Word) -> Word {
    apply_first(word, STEP_1A).or_unchanged(word)
}

pub fn step1b(word: &Word) -> Word {
    match apply_first(word, STEP_1B_EED) {
        RuleMatch::NoMatch => match apply_first(word, STEP_1B) {
            RuleMatch::Fired(_, stem) => tidy_stem(stem),
            unchanged => unchanged.or_unchanged(word),
        },
        eed => eed.or_unchanged(word),
    }
}

/// Clean up after `-ed`/`-ing` removal: undouble a final consonant
/// (`hopp` -> `hop`) or restore a lost `e` on short stems (`hop` -> `hope`).
fn tidy_stem(stem: Word) -> Word {
    if UNDOUBLE.holds(&stem, 0) {
        replace_suffix(&stem, 1, "")
    } else if RESTORE_E.holds(&stem, 0) {
        replace_suffix(&stem, 0, "e")
    } else {
        stem
    }
}

pub fn step1c(word: &Word) -> Word {
    apply_first(word, STEP_1C).or_unchanged(word)
}

pub fn step1(word: &Word) -> Word {
    step1c(&step1b(&step1a(word)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::steps::test_support::w;

    #[test]
    fn test_step1a() {
        assert_eq!(step1a(&w("caresses")), "caress");
        assert_eq!(step1a(&w("ponies")), "poni");
        assert_eq!(step1a(&w("ties")), "ti");
        assert_eq!(step1a(&w("caress")), "caress");
        assert_eq!(step1a(&w("cats")), "cat");
        assert_eq!(step1a(&w("homologous")), "homologou");
        assert_eq!(step1a(&w("cat")), "cat");
    }

    #[test]
    fn test_step1b_eed() {
        assert_eq!(step1b(&w("feed")), "feed");
        assert_eq!(step1b(&w("agreed")), "agree");
    }

    #[test]
    fn test_step1b_ed_ing() {
        assert_eq!(step1b(&w("plastered")), "plaster");
        assert_eq!(step1b(&w("bled")), "bled");
        assert_eq!(step1b(&w("motoring")), "motor");
        assert_eq!(step1b(&w("sing")), "sing");
    }

    #[test]
    fn test_step1b_tidy() {
        assert_eq!(step1b(&w("hopping")), "hop");
        assert_eq!(step1b(&w("falling")), "fall");
        assert_eq!(step1b(&w("hissing")), "hiss");
        assert_eq!(step1b(&w("fizzed")), "fizz");
        assert_eq!(step1b(&w("failing")), "fail");
        assert_eq!(step1b(&w("filing")), "file");
        assert_eq!(step1b(&w("hoping")), "hope");
    }

    #[test]
    fn test_step1b_has_no_at_bl_iz_rules() {
        assert_eq!(step1b(&w("conflated")), "conflat");
        assert_eq!(step1b(&w("troubled")), "troubl");
        assert_eq!(step1b(&w("realized")), "realiz");
    }

    #[test]
    fn test_step1c() {
        assert_eq!(step1c(&w("happy")), "happi");
        assert_eq!(step1c(&w("sky")), "sky");
        assert_eq!(step1c(&w("y")), "y");
    }

    #[test]
    fn test_step1_chains_substeps() {
        assert_eq!(step1(&w("ponies")), "poni");
        assert_eq!(step1(&w("meetings")), "meet");
        assert_eq!(step1(&w("electricity")), "electriciti");
    }
}
