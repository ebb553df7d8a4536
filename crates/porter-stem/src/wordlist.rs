//! Newline-delimited word lists.

use std::path::Path;

use porter_core::{Error, Result};
use tracing::{debug, warn};

/// Read a word list: one word per line, surrounding whitespace trimmed.
///
/// Blank lines are kept as empty words so output lines up with input.
pub fn read_words(path: &Path) -> Result<Vec<String>> {
    let content = std::fs::read_to_string(path).map_err(|source| Error::WordList {
        path: path.to_path_buf(),
        source,
    })?;

    let words = parse_words(&content);
    debug!("Read {} words from {}", words.len(), path.display());

    Ok(words)
}

/// Split text into words, one per line.
pub fn parse_words(content: &str) -> Vec<String> {
    content
        .lines()
        .map(|line| line.trim().to_string())
        .collect()
}

/// Prepare a raw word for stemming. Only ASCII letters are lowercased;
/// anything else passes through for the stemmer to handle as is.
pub fn normalize(word: &str, lowercase: bool) -> String {
    if !word.is_ascii() {
        warn!("Non-ASCII word passed to stemmer: {:?}", word);
    }

    if lowercase {
        word.to_ascii_lowercase()
    } else {
        word.to_string()
    }
}
