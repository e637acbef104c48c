use crate::artifacts::diff::diff_algorithm::Edit;
use crate::domain::line::DiffLine;

/// Lines of unchanged context kept around each run of changes.
pub const HUNK_CONTEXT: usize = 3;

/// A contiguous slice of the edit script surrounded by up to `HUNK_CONTEXT`
/// lines of context, with the line numbers needed for its header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hunk<'e> {
    a_start: usize,
    a_size: usize,
    b_start: usize,
    b_size: usize,
    edits: &'e [Edit<String>],
}

impl<'e> Hunk<'e> {
    /// Groups an edit script into hunks. Runs of changes whose gap fits
    /// inside two context windows share a hunk; hunks at the file edges trim
    /// the missing context.
    pub fn build(edits: &'e [Edit<String>]) -> Vec<Self> {
        let changes: Vec<usize> = edits
            .iter()
            .enumerate()
            .filter(|(_, edit)| !matches!(edit, Edit::Equal { .. }))
            .map(|(index, _)| index)
            .collect();
        if changes.is_empty() {
            return Vec::new();
        }

        // cumulative line counts per side before each edit
        let mut a_counts = Vec::with_capacity(edits.len() + 1);
        let mut b_counts = Vec::with_capacity(edits.len() + 1);
        let (mut a, mut b) = (0usize, 0usize);
        for edit in edits {
            a_counts.push(a);
            b_counts.push(b);
            match edit {
                Edit::Delete { .. } => a += 1,
                Edit::Insert { .. } => b += 1,
                Edit::Equal { .. } => {
                    a += 1;
                    b += 1;
                }
            }
        }
        a_counts.push(a);
        b_counts.push(b);

        let mut spans: Vec<(usize, usize)> = Vec::new();
        for &change in &changes {
            match spans.last_mut() {
                Some((_, last)) if change - *last <= 2 * HUNK_CONTEXT + 1 => *last = change,
                _ => spans.push((change, change)),
            }
        }

        spans
            .into_iter()
            .map(|(first, last)| {
                let from = first.saturating_sub(HUNK_CONTEXT);
                let to = (last + 1 + HUNK_CONTEXT).min(edits.len());
                let a_size = a_counts[to] - a_counts[from];
                let b_size = b_counts[to] - b_counts[from];

                Hunk {
                    // an empty side reports the line before the hunk
                    a_start: if a_size == 0 { a_counts[from] } else { a_counts[from] + 1 },
                    a_size,
                    b_start: if b_size == 0 { b_counts[from] } else { b_counts[from] + 1 },
                    b_size,
                    edits: &edits[from..to],
                }
            })
            .collect()
    }

    pub fn header(&self) -> String {
        let a_offset = format!("{},{}", self.a_start, self.a_size);
        let b_offset = format!("{},{}", self.b_start, self.b_size);
        format!("@@ -{a_offset} +{b_offset} @@")
    }

    pub fn len(&self) -> usize {
        self.edits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edits.is_empty()
    }

    /// The hunk's edits as emitted diff lines, borrowing the edit content.
    pub fn lines(&self) -> impl Iterator<Item = DiffLine<'e>> + '_ {
        self.edits
            .iter()
            .map(|edit| DiffLine::new(edit.sign(), edit.value()))
    }
}
