//! porter — stem a newline-delimited English word list with the Porter algorithm.

use std::io::{BufWriter, Write};

use anyhow::Context;
use tracing_subscriber::EnvFilter;

mod cli;
mod run;

use cli::Command;

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so stdout carries only stems.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();

    let command = match cli::parse_args(&args) {
        Ok(command) => command,
        Err(e) => {
            eprintln!("{}", e);
            eprintln!();
            eprintln!("{}", cli::USAGE);
            std::process::exit(1);
        }
    };

    let stdout = std::io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    match command {
        Command::Help => {
            writeln!(out, "{}", cli::USAGE)?;
        }
        Command::Trace { words, json } => {
            run::write_traces(&words, json, &mut out).context("Failed to write trace")?;
        }
        Command::Stem(config) => {
            run::run(&config, &mut out)
                .with_context(|| format!("Failed to stem {}", config.input.display()))?;
        }
    }

    Ok(())
}
