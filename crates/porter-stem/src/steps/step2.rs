//! Step 2: fold double suffixes into single ones (`-ational` -> `-ate`).

use crate::rules::{apply_first, dispatch_key, Condition, SuffixRule};
use crate::word::Word;

const M_GT_0: Condition = Condition::MeasureAbove(0);

const A: &[SuffixRule] = &[
    SuffixRule::new("ational", "ate", M_GT_0),
    SuffixRule::new("tional", "tion", M_GT_0),
];

const C: &[SuffixRule] = &[
    SuffixRule::new("enci", "ence", M_GT_0),
    SuffixRule::new("anci", "ance", M_GT_0),
];

const E: &[SuffixRule] = &[SuffixRule::new("izer", "ize", M_GT_0)];

// "eli" rewrites to itself.
const L: &[SuffixRule] = &[
    SuffixRule::new("abli", "able", M_GT_0),
    SuffixRule::new("alli", "al", M_GT_0),
    SuffixRule::new("entli", "ent", M_GT_0),
    SuffixRule::new("eli", "eli", M_GT_0),
    SuffixRule::new("ousli", "ous", M_GT_0),
];

const O: &[SuffixRule] = &[
    SuffixRule::new("ization", "ize", M_GT_0),
    SuffixRule::new("ation", "ate", M_GT_0),
    SuffixRule::new("ator", "ate", M_GT_0),
];

const S: &[SuffixRule] = &[
    SuffixRule::new("alism", "al", M_GT_0),
    SuffixRule::new("iveness", "ive", M_GT_0),
    SuffixRule::new("fulness", "ful", M_GT_0),
    SuffixRule::new("ousness", "ous", M_GT_0),
];

const T: &[SuffixRule] = &[
    SuffixRule::new("aliti", "al", M_GT_0),
    SuffixRule::new("iviti", "ive", M_GT_0),
    SuffixRule::new("biliti", "ble", M_GT_0),
];

pub fn rules_for(key: char) -> &'static [SuffixRule] {
    match key {
        'a' => A,
        'c' => C,
        'e' => E,
        'l' => L,
        'o' => O,
        's' => S,
        't' => T,
        _ => &[],
    }
}

pub fn step2(word: &Word) -> Word {
    match dispatch_key(word) {
        Some(key) => apply_first(word, rules_for(key)).or_unchanged(word),
        None => word.clone(),
    }
}
