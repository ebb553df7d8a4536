//! Step 4: drop a final suffix from stems with `m > 1`.

use crate::rules::{apply_first, dispatch_key, Condition, SuffixRule};
use crate::word::Word;

const M_GT_1: Condition = Condition::MeasureAbove(1);

const A: &[SuffixRule] = &[SuffixRule::new("al", "", M_GT_1)];

const C: &[SuffixRule] = &[
    SuffixRule::new("ance", "", M_GT_1),
    SuffixRule::new("ence", "", M_GT_1),
];

const E: &[SuffixRule] = &[SuffixRule::new("er", "", M_GT_1)];

const I: &[SuffixRule] = &[SuffixRule::new("ic", "", M_GT_1)];

const L: &[SuffixRule] = &[
    SuffixRule::new("able", "", M_GT_1),
    SuffixRule::new("ible", "", M_GT_1),
];

const N: &[SuffixRule] = &[
    SuffixRule::new("ant", "", M_GT_1),
    SuffixRule::new("ement", "", M_GT_1),
    SuffixRule::new("ment", "", M_GT_1),
    SuffixRule::new("ent", "", M_GT_1),
];

const O: &[SuffixRule] = &[
    SuffixRule::new(
        "ion",
        "",
        Condition::All(&[M_GT_1, Condition::EndsWithAnyOf(&['s', 't'])]),
    ),
    SuffixRule::new("ou", "", M_GT_1),
];

const S: &[SuffixRule] = &[SuffixRule::new("ism", "", M_GT_1)];

const T: &[SuffixRule] = &[
    SuffixRule::new("ate", "", M_GT_1),
    SuffixRule::new("iti", "", M_GT_1),
];

const U: &[SuffixRule] = &[SuffixRule::new("ous", "", M_GT_1)];

const V: &[SuffixRule] = &[SuffixRule::new("ive", "", M_GT_1)];

const Z: &[SuffixRule] = &[SuffixRule::new("ize", "", M_GT_1)];

pub fn rules_for(key: char) -> &'static [SuffixRule] {
    match key {
        'a' => A,
        'c' => C,
        'e' => E,
        'i' => I,
        'l' => L,
        'n' => N,
        'o' => O,
        's' => S,
        't' => T,
        'u' => U,
        'v' => V,
        'z' => Z,
        _ => &[],
    }
}

pub fn step4(word: &Word) -> Word {
    match dispatch_key(word) {
        Some(key) => apply_first(word, rules_for(key)).or_unchanged(word),
        None => word.clone(),
    }
}
