//! Machine-facing commands
//!
//! - `annotate`: per-line dump of the moved-line detection result

pub mod annotate;
