//! Step 3: `-icate`, `-ative`, `-alize`, `-iciti`, `-ical`, `-ful`, `-ness`.

use crate::rules::{apply_first, dispatch_key, Condition, SuffixRule};
use crate::word::Word;

const M_GT_0: Condition = Condition::MeasureAbove(0);

const A: &[SuffixRule] = &[SuffixRule::new("ical", "ic", M_GT_0)];
const S: &[SuffixRule] = &[SuffixRule::new("ness", "", M_GT_0)];
const T: &[SuffixRule] = &[
    SuffixRule::new("icate", "ic", M_GT_0),
    SuffixRule::new("iciti", "ic", M_GT_0),
];
const U: &[SuffixRule] = &[SuffixRule::new("ful", "", M_GT_0)];
const V: &[SuffixRule] = &[SuffixRule::new("ative", "", M_GT_0)];
const Z: &[SuffixRule] = &[SuffixRule::new("alize", "al", M_GT_0)];

pub fn rules_for(key: char) -> &'static [SuffixRule] {
    match key {
        'a' => A,
        's' => S,
        't' => T,
        'u' => U,
        'v' => V,
        'z' => Z,
        _ => &[],
    }
}

pub fn step3(word: &Word) -> Word {
    match dispatch_key(word) {
        Some(key) => apply_first(word, rules_for(key)).or_unchanged(word),
        None => word.clone(),
    }
}
