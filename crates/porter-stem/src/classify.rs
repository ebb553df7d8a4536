//! Vowel/consonant classification and the ending patterns built on it.

/// `a`, `e`, `i`, `o` and `u` are vowels. Everything else, `y` included,
/// is a consonant.
pub fn is_vowel(ch: char) -> bool {
    matches!(ch, 'a' | 'e' | 'i' | 'o' | 'u')
}

pub fn is_consonant(ch: char) -> bool {
    !is_vowel(ch)
}

/// True when the sequence ends consonant-vowel-consonant and the final
/// consonant is not `w`, `x` or `y` (the `*o` condition).
pub fn ends_with_cvc(seq: &[char]) -> bool {
    match seq {
        [.., first, middle, last] => {
            is_consonant(*first)
                && is_vowel(*middle)
                && is_consonant(*last)
                && !matches!(last, 'w' | 'x' | 'y')
        }
        _ => false,
    }
}

/// True when the last two characters are the same consonant (`*d`).
pub fn ends_with_double_consonant(seq: &[char]) -> bool {
    match seq {
        [.., prev, last] => prev == last && is_consonant(*last),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn test_vowels() {
        assert!("aeiou".chars().all(is_vowel));
        assert!(!is_vowel('y'));
        assert!(!is_vowel('b'));
        assert!(is_consonant('y'));
    }

    #[test]
    fn test_cvc() {
        assert!(ends_with_cvc(&chars("hop")));
        assert!(ends_with_cvc(&chars("fil")));
        assert!(ends_with_cvc(&chars("rat")));
        assert!(!ends_with_cvc(&chars("snow")));
        assert!(!ends_with_cvc(&chars("box")));
        assert!(!ends_with_cvc(&chars("tray")));
        assert!(!ends_with_cvc(&chars("agre")));
        assert!(!ends_with_cvc(&chars("at")));
        assert!(!ends_with_cvc(&[]));
    }

    #[test]
    fn test_double_consonant() {
        assert!(ends_with_double_consonant(&chars("hopp")));
        assert!(ends_with_double_consonant(&chars("fall")));
        assert!(!ends_with_double_consonant(&chars("agree")));
        assert!(!ends_with_double_consonant(&chars("hop")));
        assert!(!ends_with_double_consonant(&chars("s")));
        assert!(!ends_with_double_consonant(&[]));
    }
}
