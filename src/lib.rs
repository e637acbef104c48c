pub mod areas;
pub mod artifacts;
pub mod commands;
pub mod domain;

use clap::ValueEnum;

/// When to colorize rendered diff output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

impl ColorWhen {
    /// Applies the choice process-wide; `Auto` keeps the default terminal
    /// detection.
    pub fn apply(self) {
        match self {
            ColorWhen::Auto => {}
            ColorWhen::Always => colored::control::set_override(true),
            ColorWhen::Never => colored::control::set_override(false),
        }
    }
}
