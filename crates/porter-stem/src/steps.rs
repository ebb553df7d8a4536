//! The five ordered rewriting steps.
//!
//! Each step takes a word and returns a new one; [`crate::stem`] chains
//! them `step1 -> step2 -> step3 -> step4 -> step5`.

pub mod step1;
pub mod step2;
pub mod step3;
pub mod step4;
pub mod step5;

pub use step1::{step1, step1a, step1b, step1c};
pub use step2::step2;
pub use step3::step3;
pub use step4::step4;
pub use step5::{step5, step5a, step5b};
