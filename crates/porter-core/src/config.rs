//! Run configuration for the stemming front end.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::error::{Error, Result};

/// Environment variable selecting the output format (`plain` or `json`).
pub const OUTPUT_ENV: &str = "PORTER_OUTPUT";
/// Environment variable that disables ASCII lowercasing of input words.
pub const KEEP_CASE_ENV: &str = "PORTER_KEEP_CASE";

/// How stemmed words are written out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One stem per line, in input order.
    #[default]
    Plain,
    /// A JSON array of `{ "word": ..., "stem": ... }` objects.
    Json,
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "plain" | "text" => Ok(Self::Plain),
            "json" => Ok(Self::Json),
            other => Err(Error::Config(format!("unknown output format: {}", other))),
        }
    }
}

/// Settings for one stemming run over a word list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunConfig {
    /// Newline-delimited word list to stem.
    pub input: PathBuf,
    /// Output format.
    pub format: OutputFormat,
    /// ASCII-lowercase words before stemming.
    pub lowercase: bool,
}

impl RunConfig {
    /// Configuration with defaults: plain output, lowercasing on.
    pub fn new(input: impl AsRef<Path>) -> Self {
        Self {
            input: input.as_ref().to_path_buf(),
            format: OutputFormat::Plain,
            lowercase: true,
        }
    }

    /// Create configuration from environment and defaults.
    pub fn from_env(input: impl AsRef<Path>) -> Result<Self> {
        Self::from_lookup(input, |key| std::env::var(key).ok())
    }

    /// Same as [`RunConfig::from_env`] with a caller-supplied variable lookup.
    pub fn from_lookup<F>(input: impl AsRef<Path>, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::new(input);

        if let Some(format) = lookup(OUTPUT_ENV) {
            config.format = format.parse()?;
        }

        if let Some(keep_case) = lookup(KEEP_CASE_ENV) {
            config.lowercase = !is_truthy(&keep_case);
        }

        tracing::debug!(?config, "Resolved run configuration");

        Ok(config)
    }
}

fn is_truthy(value: &str) -> bool {
    matches!(
        value.trim().to_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
