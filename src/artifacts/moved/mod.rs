//! Moved-line detection for rendered diffs
//!
//! Detects blocks of added/removed lines that were relocated rather than
//! changed, so the renderer can color them differently from ordinary
//! additions and removals:
//!
//! - `intern`: canonical content ids under a whitespace policy
//! - `match_index`: per-content candidate chains and contiguity links
//! - `tracker`: the block-tracking scan that writes the moved flags
//!
//! All lookup state is rebuilt from scratch for every diff and dropped when
//! the pass returns; only the flags written onto the lines persist.

pub mod intern;
pub mod match_index;
pub mod tracker;

use crate::artifacts::moved::intern::Interner;
use crate::artifacts::moved::match_index::MatchIndex;
use crate::artifacts::moved::tracker::BlockTracker;
use crate::domain::line::{DiffLine, LineFlags};
use crate::domain::policy::{MovedConfig, MovedMode};

/// Annotates an emitted line stream with `MOVED`/`MOVED_ALT` flags.
///
/// Signs and text are never touched, and the pass is idempotent: stale
/// moved flags are cleared before detection runs.
pub fn detect_moved_lines(lines: &mut [DiffLine<'_>], config: &MovedConfig) {
    for line in lines.iter_mut() {
        line.flags.remove(LineFlags::MOVED_MASK);
    }

    let mut interner = Interner::new(config.policy, config.allow_indentation_change);
    let index = MatchIndex::build(lines, &mut interner);

    if config.mode == MovedMode::Plain {
        for line in lines.iter_mut() {
            let matched = line
                .group
                .is_some_and(|group| index.candidates(group, line.sign.opposite()).is_some());
            if line.sign.is_change() && matched {
                line.flags |= LineFlags::MOVED;
            }
        }
        return;
    }

    BlockTracker::new(&index, config).run(lines);
}
