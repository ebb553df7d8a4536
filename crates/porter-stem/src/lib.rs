//! Porter Stem — the classical Porter suffix-stripping stemmer for English.
//!
//! `stem` runs the five rewriting steps in order. The building blocks
//! (phonetic classifier, measure, suffix matcher, rule tables and the
//! individual steps) are public so callers can inspect or trace them.

pub mod classify;
pub mod measure;
pub mod rules;
pub mod stemmer;
pub mod steps;
pub mod suffix;
pub mod word;
pub mod wordlist;

pub use rules::{Condition, RuleMatch, SuffixRule};
pub use stemmer::{stem, stem_all, stem_word, trace, Stage, StemTrace};
pub use word::Word;
pub use wordlist::{normalize, read_words};
