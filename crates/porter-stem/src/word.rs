//! The word value threaded through the stemming steps.

use std::fmt;
use std::ops::Deref;

/// An immutable sequence of characters.
///
/// Each rewriting step builds a new `Word` rather than editing one in
/// place. Input is expected to be lowercase ASCII letters, but any text
/// is accepted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Word {
    chars: Vec<char>,
}

impl Word {
    pub fn new(text: &str) -> Self {
        Self {
            chars: text.chars().collect(),
        }
    }

    pub fn as_chars(&self) -> &[char] {
        &self.chars
    }
}

impl Deref for Word {
    type Target = [char];

    fn deref(&self) -> &[char] {
        &self.chars
    }
}

impl From<&str> for Word {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<Vec<char>> for Word {
    fn from(chars: Vec<char>) -> Self {
        Self { chars }
    }
}

impl From<Word> for String {
    fn from(word: Word) -> Self {
        word.chars.into_iter().collect()
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.chars.iter().try_for_each(|ch| write!(f, "{}", ch))
    }
}

impl PartialEq<str> for Word {
    fn eq(&self, other: &str) -> bool {
        self.chars.iter().copied().eq(other.chars())
    }
}

impl PartialEq<&str> for Word {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}
