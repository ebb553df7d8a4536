//! Command-line parsing.

use porter_core::{Error, OutputFormat, Result, RunConfig};

pub const USAGE: &str = "\
porter — Porter stemmer for English word lists

Usage: porter [options] <word-file>
       porter trace [--json] <word>...
       porter help

Options:
  --json        Print a JSON array of {\"word\", \"stem\"} objects
  --keep-case   Do not lowercase words before stemming

Environment:
  PORTER_OUTPUT     plain | json (default plain)
  PORTER_KEEP_CASE  1 to keep case
  RUST_LOG          log filter for stderr (default warn)";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Stem every word of a word list.
    Stem(RunConfig),
    /// Show each word after every step.
    Trace { words: Vec<String>, json: bool },
    Help,
}

/// Parse arguments (without the program name) using the process environment.
pub fn parse_args(args: &[String]) -> Result<Command> {
    parse_args_with(args, |key| std::env::var(key).ok())
}

pub fn parse_args_with<F>(args: &[String], lookup: F) -> Result<Command>
where
    F: Fn(&str) -> Option<String>,
{
    match args.first().map(String::as_str) {
        None => Err(Error::Config("missing word list path".into())),
        Some("--help" | "-h" | "help") => Ok(Command::Help),
        Some("trace") => parse_trace(&args[1..]),
        Some(_) => parse_stem(args, lookup),
    }
}

fn parse_trace(args: &[String]) -> Result<Command> {
    let mut words = Vec::new();
    let mut json = false;

    for arg in args {
        match arg.as_str() {
            "--json" => json = true,
            flag if flag.starts_with("--") => {
                return Err(Error::Config(format!("unknown option: {}", flag)));
            }
            word => words.push(word.to_string()),
        }
    }

    if words.is_empty() {
        return Err(Error::Config("trace needs at least one word".into()));
    }

    Ok(Command::Trace { words, json })
}

fn parse_stem<F>(args: &[String], lookup: F) -> Result<Command>
where
    F: Fn(&str) -> Option<String>,
{
    let mut path = None;
    let mut json = false;
    let mut keep_case = false;

    for arg in args {
        match arg.as_str() {
            "--json" => json = true,
            "--keep-case" => keep_case = true,
            flag if flag.starts_with("--") => {
                return Err(Error::Config(format!("unknown option: {}", flag)));
            }
            other => {
                if path.replace(other).is_some() {
                    return Err(Error::Config("expected a single word list path".into()));
                }
            }
        }
    }

    let path = path.ok_or_else(|| Error::Config("missing word list path".into()))?;
    let mut config = RunConfig::from_lookup(path, lookup)?;

    if json {
        config.format = OutputFormat::Json;
    }
    if keep_case {
        config.lowercase = false;
    }

    Ok(Command::Stem(config))
}
