//! Moved-block tracking over an emitted diff line stream
//!
//! The tracker performs a single forward scan over the stream. Whenever an
//! added/removed line has opposite-sign candidates with the same content, it
//! opens a set of potential blocks, one per candidate, and keeps extending
//! them as long as each candidate's contiguous successor keeps matching the
//! scanned lines. When no potential block survives a line, the block that
//! ended on the previous line is confirmed: all of its lines are flagged as
//! moved and painted with a stripe class, and the offending line is
//! re-examined as the possible start of a fresh block.
//!
//! ## Rewind
//!
//! A confirmed block of length one is treated as a false start: the scan
//! cursor is reset to the line right after it and no tracking state is
//! carried across, so a longer alignment beginning there is always found in
//! preference to chaining off the one-line accident. Blocks of length two or
//! more are confirmed outright.
//!
//! ## Indentation tolerance
//!
//! When indentation changes are allowed, content matching ignores leading
//! indentation entirely and the tracker instead requires the indentation
//! shift between the two sides to stay uniform across a block. Blank lines
//! are exempt: they inherit the block's shift without constraining it, and a
//! block made of blank lines only adopts the shift of its first non-blank
//! pair.
//!
//! ## Stripes
//!
//! Confirmed blocks that touch (same sign, no line in between) alternate
//! between two stripe classes so adjacent blocks stay distinguishable, with
//! one exception: when the boundary lines of two touching blocks carry the
//! same content group, the second block is a continuation of the first and
//! inherits its class. Any gap, sign change or context line resets the
//! striping.

use crate::artifacts::moved::match_index::{EntryId, MatchIndex};
use crate::domain::line::{DiffLine, GroupId, IndentWidth, LineFlags, Sign};
use crate::domain::policy::{MovedConfig, MovedMode};

/// Macro for debug logging that is enabled with the `debug_moved` feature flag
macro_rules! debug_log {
    ($($arg:tt)*) => {
        #[cfg(any(feature = "debug_moved"))]
        {
            eprintln!($($arg)*);
        }
    };
}

/// Indentation shift from a candidate line to the scanned line, or `None`
/// when blank lines make the shift unobservable.
fn indent_delta(candidate: &DiffLine<'_>, current: &DiffLine<'_>) -> Option<isize> {
    match (candidate.indent.width, current.indent.width) {
        (IndentWidth::Columns(from), IndentWidth::Columns(to)) => {
            Some(to as isize - from as isize)
        }
        _ => None,
    }
}

/// A provisional alignment between the scan position and one opposite-sign
/// candidate, kept only while it continues to match contiguously.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PotentialBlock {
    /// Arena entry of the candidate currently aligned with the scan position.
    entry: EntryId,
    /// The block's indentation shift, fixed by its first non-blank pair.
    delta: Option<isize>,
}

impl PotentialBlock {
    fn open(
        entry: EntryId,
        candidate: &DiffLine<'_>,
        current: &DiffLine<'_>,
        tolerant: bool,
    ) -> Self {
        let delta = if tolerant {
            indent_delta(candidate, current)
        } else {
            None
        };
        Self { entry, delta }
    }

    /// Whether `candidate` (the chain successor) aligned with `current` keeps
    /// this block alive under the indentation-tolerant rules.
    fn extends_with(&mut self, candidate: &DiffLine<'_>, current: &DiffLine<'_>) -> bool {
        if candidate.group != current.group {
            return false;
        }

        match indent_delta(candidate, current) {
            None => true,
            Some(delta) => match self.delta {
                None => {
                    self.delta = Some(delta);
                    true
                }
                Some(fixed) => fixed == delta,
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    Idle,
    Collecting { sign: Sign, start: usize },
}

#[derive(Debug, Clone, Copy)]
struct ConfirmedBlock {
    /// Position one past the block's last line.
    end: usize,
    sign: Sign,
    /// Content group of the block's last line, checked when the next block
    /// starts exactly where this one ended.
    boundary_group: GroupId,
    alt: bool,
}

pub(crate) struct BlockTracker<'i> {
    index: &'i MatchIndex,
    tolerant: bool,
    paint_alt: bool,
    state: ScanState,
    potential: Vec<PotentialBlock>,
    cursor: usize,
    prev_block: Option<ConfirmedBlock>,
}

impl<'i> BlockTracker<'i> {
    pub(crate) fn new(index: &'i MatchIndex, config: &MovedConfig) -> Self {
        Self {
            index,
            tolerant: config.allow_indentation_change,
            paint_alt: config.mode != MovedMode::Blocks,
            state: ScanState::Idle,
            potential: Vec::new(),
            cursor: 0,
            prev_block: None,
        }
    }

    pub(crate) fn run(mut self, lines: &mut [DiffLine<'_>]) {
        while self.cursor < lines.len() {
            self.step(lines);
        }

        if let ScanState::Collecting { .. } = self.state {
            self.close_block(lines, lines.len());
        }
    }

    fn step(&mut self, lines: &mut [DiffLine<'_>]) {
        let n = self.cursor;
        let head = self.candidates_for(&lines[n]);

        if let ScanState::Collecting { sign, .. } = self.state {
            if head.is_none() || lines[n].sign != sign {
                self.close_block(lines, n);
            } else {
                self.advance_or_prune(lines, n);
                if self.potential.is_empty() {
                    // No alignment continues through this line: the block
                    // ended on the previous one. Close it, then fall through
                    // and re-examine this line as a fresh start.
                    self.close_block(lines, n);
                }
            }
        }

        if self.state == ScanState::Idle {
            if let Some(head) = head {
                self.open_blocks(lines, head, n);
            }
        }

        self.cursor += 1;
    }

    fn candidates_for(&self, line: &DiffLine<'_>) -> Option<EntryId> {
        if !line.sign.is_change() {
            return None;
        }
        let group = line.group?;
        self.index.candidates(group, line.sign.opposite())
    }

    /// One potential block per candidate, in candidate-chain order; the
    /// first-seen candidate stays at the front and wins eventual ties.
    fn open_blocks(&mut self, lines: &[DiffLine<'_>], head: EntryId, n: usize) {
        let current = &lines[n];
        let mut next = Some(head);

        while let Some(id) = next {
            let entry = self.index.entry(id);
            self.potential.push(PotentialBlock::open(
                id,
                &lines[entry.line],
                current,
                self.tolerant,
            ));
            next = entry.next_match;
        }

        self.state = ScanState::Collecting {
            sign: current.sign,
            start: n,
        };
    }

    fn advance_or_prune(&mut self, lines: &[DiffLine<'_>], n: usize) {
        let index = self.index;
        let tolerant = self.tolerant;
        let current = &lines[n];

        self.potential.retain_mut(|block| {
            let Some(next) = index.entry(block.entry).next_line else {
                return false;
            };
            let candidate = &lines[index.entry(next).line];
            let survives = if tolerant {
                block.extends_with(candidate, current)
            } else {
                candidate.group == current.group
            };
            if survives {
                block.entry = next;
            }
            survives
        });
    }

    /// Confirms the open block, which covers `[start, end)`: flags its lines,
    /// paints the stripe class, and rewinds after a one-line false start.
    fn close_block(&mut self, lines: &mut [DiffLine<'_>], end: usize) {
        let ScanState::Collecting { sign, start } = self.state else {
            unreachable!("no open block to close");
        };
        let length = end - start;

        let first_group = lines[start]
            .group
            .expect("line inside a block was never interned");
        let last_group = lines[end - 1]
            .group
            .expect("line inside a block was never interned");

        let alt = match &self.prev_block {
            Some(prev) if prev.end == start && prev.sign == sign => {
                if prev.boundary_group == first_group {
                    // same content across a zero-gap boundary: one
                    // continued block, keep its stripe
                    prev.alt
                } else {
                    !prev.alt
                }
            }
            _ => false,
        };

        debug_log!("confirmed moved block [{start}, {end}) sign={sign:?} alt={alt}");

        for line in &mut lines[start..end] {
            line.flags |= LineFlags::MOVED;
            if alt && self.paint_alt {
                line.flags |= LineFlags::MOVED_ALT;
            }
        }

        self.prev_block = Some(ConfirmedBlock {
            end,
            sign,
            boundary_group: last_group,
            alt,
        });
        self.potential.clear();
        self.state = ScanState::Idle;

        if length == 1 {
            self.reset_cursor(start + 1);
        }
    }

    /// Moves the scan back to `position`; the next step re-examines that
    /// line with no tracking state carried over.
    fn reset_cursor(&mut self, position: usize) {
        self.cursor = position;
    }
}
