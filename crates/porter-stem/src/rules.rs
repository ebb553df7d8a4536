//! Suffix rules: a literal suffix, a gating condition and a replacement.
//!
//! Rules live in `const` tables inside each step module. A step looks up
//! the group for the word's dispatch key and hands it to [`apply_first`],
//! which picks the first rule whose literal suffix matches. That rule alone
//! decides the outcome: if its condition fails the word is left as is and
//! later rules in the group are not tried.

use crate::classify::{ends_with_cvc, ends_with_double_consonant, is_vowel};
use crate::measure::measure;
use crate::suffix::{ends_with, replace_suffix, stem_before};
use crate::word::Word;

/// Predicate over a word and the length of the suffix it would lose.
///
/// Every kind except [`Condition::WordNotEndsWith`] looks at the stem, the
/// part of the word in front of the suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Condition {
    Always,
    /// `(m > n)`
    MeasureAbove(usize),
    /// `(m = n)`
    MeasureEquals(usize),
    /// `*v*`
    ContainsVowel,
    /// `*o`
    EndsCvc,
    /// `*d`
    EndsDoubleConsonant,
    /// `*d` where the doubled letter is not one of the listed ones.
    EndsDoubleConsonantExcept(&'static [char]),
    /// The stem ends in one of the listed letters (`*S`, `*T`, ...).
    EndsWithAnyOf(&'static [char]),
    /// The whole word does not end with the literal.
    WordNotEndsWith(&'static str),
    All(&'static [Condition]),
    Any(&'static [Condition]),
    Not(&'static Condition),
}

impl Condition {
    pub fn holds(&self, word: &[char], suffix_len: usize) -> bool {
        let stem = stem_before(word, suffix_len);

        match *self {
            Condition::Always => true,
            Condition::MeasureAbove(n) => measure(stem) > n,
            Condition::MeasureEquals(n) => measure(stem) == n,
            Condition::ContainsVowel => stem.iter().copied().any(is_vowel),
            Condition::EndsCvc => ends_with_cvc(stem),
            Condition::EndsDoubleConsonant => ends_with_double_consonant(stem),
            Condition::EndsDoubleConsonantExcept(excluded) => {
                ends_with_double_consonant(stem)
                    && stem.last().is_some_and(|ch| !excluded.contains(ch))
            }
            Condition::EndsWithAnyOf(letters) => {
                stem.last().is_some_and(|ch| letters.contains(ch))
            }
            Condition::WordNotEndsWith(literal) => !ends_with(word, literal),
            Condition::All(conditions) => conditions.iter().all(|c| c.holds(word, suffix_len)),
            Condition::Any(conditions) => conditions.iter().any(|c| c.holds(word, suffix_len)),
            Condition::Not(condition) => !condition.holds(word, suffix_len),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuffixRule {
    pub suffix: &'static str,
    pub replacement: &'static str,
    pub condition: Condition,
}

impl SuffixRule {
    pub const fn new(suffix: &'static str, replacement: &'static str, condition: Condition) -> Self {
        Self {
            suffix,
            replacement,
            condition,
        }
    }

    /// Number of characters removed when the rule fires.
    pub fn removal_len(&self) -> usize {
        self.suffix.chars().count()
    }

    pub fn matches(&self, word: &[char]) -> bool {
        ends_with(word, self.suffix)
    }

    pub fn rewrite(&self, word: &[char]) -> Word {
        replace_suffix(word, self.removal_len(), self.replacement)
    }
}

/// Outcome of trying one group of rules against a word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleMatch<'r> {
    /// No rule's suffix matched.
    NoMatch,
    /// A suffix matched but its condition did not hold.
    Blocked(&'r SuffixRule),
    /// A rule fired, producing a new word.
    Fired(&'r SuffixRule, Word),
}

impl RuleMatch<'_> {
    /// The rewritten word, or a copy of `word` when nothing fired.
    pub fn or_unchanged(self, word: &Word) -> Word {
        match self {
            RuleMatch::Fired(_, rewritten) => rewritten,
            RuleMatch::NoMatch | RuleMatch::Blocked(_) => word.clone(),
        }
    }
}

/// Try `rules` in order; the first literal match decides.
pub fn apply_first<'r>(word: &[char], rules: &'r [SuffixRule]) -> RuleMatch<'r> {
    match rules.iter().find(|rule| rule.matches(word)) {
        None => RuleMatch::NoMatch,
        Some(rule) if rule.condition.holds(word, rule.removal_len()) => {
            RuleMatch::Fired(rule, rule.rewrite(word))
        }
        Some(rule) => RuleMatch::Blocked(rule),
    }
}

/// The second-to-last character, used to pick a rule group in steps 2-4.
/// Words shorter than two characters have no key and match no rule.
pub fn dispatch_key(word: &[char]) -> Option<char> {
    word.len().checked_sub(2).map(|i| word[i])
}
