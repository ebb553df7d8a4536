//! Porter Core — shared error type and run configuration.

pub mod config;
pub mod error;

pub use config::{OutputFormat, RunConfig};
pub use error::{Error, Result};
