//! The measure `m`: how many vowel-run/consonant-run pairs a sequence holds.
//!
//! Any sequence has the form `[C](VC){m}[V]`; `m` is counted by a small
//! automaton that skips leading consonants and then counts each vowel run
//! that is closed by a consonant run.

use crate::classify::is_vowel;
use crate::suffix::stem_before;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    /// Leading consonants, nothing counted yet.
    SeekingVowel,
    /// Inside a vowel run.
    Vowels,
    /// Inside a consonant run that follows a vowel run.
    Consonants,
}

pub fn measure(seq: &[char]) -> usize {
    let mut mode = Mode::SeekingVowel;
    let mut count = 0;

    for &ch in seq {
        mode = match (mode, is_vowel(ch)) {
            (Mode::SeekingVowel, true) => Mode::Vowels,
            (Mode::Vowels, false) => Mode::Consonants,
            (Mode::Consonants, true) => {
                count += 1;
                Mode::Vowels
            }
            (mode, _) => mode,
        };
    }

    // A trailing consonant run closes the last pair.
    if mode == Mode::Consonants {
        count += 1;
    }

    count
}

/// Measure of the part of `word` in front of its last `suffix_len` characters.
pub fn measure_before_suffix(word: &[char], suffix_len: usize) -> usize {
    measure(stem_before(word, suffix_len))
}
