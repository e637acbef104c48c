//! User-facing commands
//!
//! - `diff`: colorized unified diff between two files

pub mod diff;
