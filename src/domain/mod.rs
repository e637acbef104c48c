//! Core diff domain types
//!
//! - `line`: emitted diff lines, signs, indentation data and render flags
//! - `policy`: moved-line detection configuration and whitespace policies

pub mod line;
pub mod policy;
