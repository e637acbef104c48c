//! Line diffing between two file contents
//!
//! - `diff_algorithm`: Myers' diff producing an edit script
//! - `diff_source`: a file's path and lines, as one side of a comparison
//! - `hunk`: grouping of edit scripts into context-windowed hunks

pub mod diff_algorithm;
pub mod diff_source;
pub mod hunk;
