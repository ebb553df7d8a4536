//! Literal suffix matching and trailing-suffix rewriting.

use crate::classify::is_vowel;
use crate::word::Word;

/// Exact, case-sensitive trailing match.
pub fn ends_with(seq: &[char], suffix: &str) -> bool {
    let len = suffix.chars().count();
    len <= seq.len() && seq[seq.len() - len..].iter().copied().eq(suffix.chars())
}

/// The part of `word` in front of its last `suffix_len` characters.
///
/// Callers only strip a suffix they have already matched, so the length
/// always fits. An oversized length yields an empty stem.
pub fn stem_before(word: &[char], suffix_len: usize) -> &[char] {
    debug_assert!(suffix_len <= word.len(), "suffix longer than word");
    &word[..word.len().saturating_sub(suffix_len)]
}

/// The `*v*` condition: a vowel somewhere before the trailing suffix.
pub fn contains_vowel_before_suffix(word: &[char], suffix_len: usize) -> bool {
    stem_before(word, suffix_len).iter().copied().any(is_vowel)
}

/// Replace the last `suffix_len` characters of `word` with `replacement`.
pub fn replace_suffix(word: &[char], suffix_len: usize, replacement: &str) -> Word {
    let stem = stem_before(word, suffix_len);
    let mut chars = Vec::with_capacity(stem.len() + replacement.len());
    chars.extend_from_slice(stem);
    chars.extend(replacement.chars());
    Word::from(chars)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ends_with() {
        let word = Word::new("caresses");
        assert!(ends_with(&word, "sses"));
        assert!(ends_with(&word, "s"));
        assert!(ends_with(&word, ""));
        assert!(!ends_with(&word, "ies"));
        assert!(!ends_with(&Word::new("es"), "sses"));
        assert!(!ends_with(&Word::new("CATS"), "s"));
    }

    #[test]
    fn test_vowel_before_suffix() {
        assert!(contains_vowel_before_suffix(&Word::new("plastered"), 2));
        assert!(!contains_vowel_before_suffix(&Word::new("bled"), 2));
        assert!(!contains_vowel_before_suffix(&Word::new("sing"), 3));
        assert!(!contains_vowel_before_suffix(&Word::new("sky"), 1));
    }

    #[test]
    fn test_replace_suffix() {
        assert_eq!(replace_suffix(&Word::new("ponies"), 3, "i"), "poni");
        assert_eq!(replace_suffix(&Word::new("relational"), 7, "ate"), "relate");
        assert_eq!(replace_suffix(&Word::new("cats"), 1, ""), "cat");
        assert_eq!(replace_suffix(&Word::new("hop"), 0, "e"), "hope");
    }

    #[test]
    fn test_replace_keeps_input() {
        let word = Word::new("motoring");
        let stem = replace_suffix(&word, 3, "");
        assert_eq!(stem, "motor");
        assert_eq!(word, "motoring");
    }
}
