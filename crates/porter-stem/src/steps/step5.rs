//! Step 5: tidy a final `-e` (5a) and a final `-ll` (5b).

use crate::rules::{apply_first, Condition, SuffixRule};
use crate::word::Word;

const STEP_5A: &[SuffixRule] = &[SuffixRule::new(
    "e",
    "",
    Condition::Any(&[
        Condition::MeasureAbove(1),
        Condition::All(&[Condition::MeasureEquals(1), Condition::Not(&Condition::EndsCvc)]),
    ]),
)];

// Dropping one `l` of a trailing `ll` leaves the measure unchanged, so the
// stem's measure is the word's measure here.
const STEP_5B: &[SuffixRule] = &[SuffixRule::new(
    "l",
    "",
    Condition::All(&[Condition::EndsWithAnyOf(&['l']), Condition::MeasureAbove(1)]),
)];

pub fn step5a(word: &Word) -> Word {
    apply_first(word, STEP_5A).or_unchanged(word)
}

pub fn step5b(word: &Word) -> Word {
    apply_first(word, STEP_5B).or_unchanged(word)
}

pub fn step5(word: &Word) -> Word {
    step5b(&step5a(word))
}
