//! Stem a word list or trace individual words, writing to any output.

use std::io::Write;

use porter_core::{OutputFormat, Result, RunConfig};
use porter_stem::{normalize, read_words, stem, trace, StemTrace};
use serde::Serialize;
use tracing::{debug, info};

#[derive(Debug, Serialize)]
struct StemmedWord<'a> {
    word: &'a str,
    stem: String,
}

/// Counts reported after a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub words: usize,
    /// Words whose stem differs from the (normalized) input.
    pub changed: usize,
}

/// Read `config.input`, stem every word and write the results to `out`.
pub fn run(config: &RunConfig, out: &mut impl Write) -> Result<RunSummary> {
    let words: Vec<String> = read_words(&config.input)?
        .iter()
        .map(|word| normalize(word, config.lowercase))
        .collect();

    debug!(format = ?config.format, lowercase = config.lowercase, "Stemming {} words", words.len());

    let stemmed: Vec<StemmedWord<'_>> = words
        .iter()
        .map(|word| StemmedWord {
            word,
            stem: stem(word),
        })
        .collect();

    match config.format {
        OutputFormat::Plain => {
            for entry in &stemmed {
                writeln!(out, "{}", entry.stem)?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &stemmed)?;
            writeln!(out)?;
        }
    }
    out.flush()?;

    let summary = RunSummary {
        words: stemmed.len(),
        changed: stemmed.iter().filter(|e| e.stem != e.word).count(),
    };

    info!(
        "Stemmed {} words from {} ({} changed)",
        summary.words,
        config.input.display(),
        summary.changed
    );

    Ok(summary)
}

/// Write a step-by-step trace for each word.
pub fn write_traces(words: &[String], json: bool, out: &mut impl Write) -> Result<()> {
    let traces: Vec<StemTrace> = words.iter().map(|word| trace(word)).collect();

    if json {
        serde_json::to_writer_pretty(&mut *out, &traces)?;
        writeln!(out)?;
    } else {
        for (i, t) in traces.iter().enumerate() {
            if i > 0 {
                writeln!(out)?;
            }
            writeln!(out, "{}", t.word)?;
            for (stage, form) in &t.stages {
                writeln!(out, "  {:<3} {}", stage.label(), form)?;
            }
            writeln!(out, "  =>  {}", t.stem)?;
        }
    }

    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use porter_core::Error;

    fn word_file(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_plain_output_is_newline_joined() {
        let file = word_file("caresses\nponies\nmotoring\n");
        let mut out = Vec::new();

        let summary = run(&RunConfig::new(file.path()), &mut out).unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "caress\nponi\nmotor\n");
        assert_eq!(summary, RunSummary { words: 3, changed: 3 });
    }

    #[test]
    fn test_lowercases_by_default() {
        let file = word_file("Relational\nCATS\n");
        let mut out = Vec::new();

        run(&RunConfig::new(file.path()), &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "relat\ncat\n");
    }

    #[test]
    fn test_keep_case() {
        let file = word_file("CATS\n");
        let mut config = RunConfig::new(file.path());
        config.lowercase = false;
        let mut out = Vec::new();

        let summary = run(&config, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "CATS\n");
        assert_eq!(summary.changed, 0);
    }

    #[test]
    fn test_blank_lines_stay_aligned() {
        let file = word_file("cats\n\nroll\n");
        let mut out = Vec::new();

        let summary = run(&RunConfig::new(file.path()), &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "cat\n\nroll\n");
        assert_eq!(summary, RunSummary { words: 3, changed: 1 });
    }

    #[test]
    fn test_empty_file_prints_nothing() {
        let file = word_file("");
        let mut out = Vec::new();

        let summary = run(&RunConfig::new(file.path()), &mut out).unwrap();
        assert!(out.is_empty());
        assert_eq!(summary, RunSummary::default());
    }

    #[test]
    fn test_json_output_shape() {
        let file = word_file("cats\nfeed\n");
        let mut config = RunConfig::new(file.path());
        config.format = OutputFormat::Json;
        let mut out = Vec::new();

        run(&config, &mut out).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        let entries = value.as_array().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0]["word"], "cats");
        assert_eq!(entries[0]["stem"], "cat");
        assert_eq!(entries[1]["word"], "feed");
        assert_eq!(entries[1]["stem"], "feed");
    }

    #[test]
    fn test_missing_input_fails() {
        let dir = tempfile::tempdir().unwrap();
        let config = RunConfig::new(dir.path().join("nope.txt"));
        let mut out = Vec::new();

        assert!(matches!(run(&config, &mut out), Err(Error::WordList { .. })));
        assert!(out.is_empty());
    }

    #[test]
    fn test_plain_trace() {
        let mut out = Vec::new();
        write_traces(&["relational".to_string()], false, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "relational");
        assert_eq!(lines[4], "  2   relate");
        assert_eq!(lines.last().copied(), Some("  =>  relat"));
        assert_eq!(lines.len(), 10);
    }

    #[test]
    fn test_json_trace() {
        let mut out = Vec::new();
        write_traces(&["ab".to_string(), "cats".to_string()], true, &mut out).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value[0]["stem"], "ab");
        assert_eq!(value[0]["stages"].as_array().map(Vec::len), Some(0));
        assert_eq!(value[1]["stem"], "cat");
    }
}
