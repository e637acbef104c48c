use crate::areas::renderer::Renderer;
use crate::artifacts::diff::diff_algorithm::{DiffAlgorithm, MyersDiff};
use crate::artifacts::diff::diff_source::DiffSource;
use crate::artifacts::diff::hunk::Hunk;
use crate::artifacts::moved::detect_moved_lines;
use crate::domain::line::{DiffLine, LineFlags};
use std::io::Write;
use std::path::Path;

impl Renderer {
    /// Prints one line per emitted diff line: the sign marker, a class
    /// marker (`.` ordinary, `m` moved, `M` moved with the alternate
    /// stripe), and the line's text.
    pub fn annotate(&self, old: &Path, new: &Path) -> anyhow::Result<()> {
        let a = DiffSource::from_file(old)?;
        let b = DiffSource::from_file(new)?;

        let edits = MyersDiff::new(&a.data, &b.data).diff();
        let hunks = Hunk::build(&edits);
        let mut stream: Vec<DiffLine<'_>> = hunks.iter().flat_map(|hunk| hunk.lines()).collect();

        if let Some(config) = self.moved() {
            detect_moved_lines(&mut stream, config);
        }

        for line in &stream {
            writeln!(
                self.writer(),
                "{}{} {}",
                line.sign().marker(),
                class_marker(line),
                line.text()
            )?;
        }

        Ok(())
    }
}

fn class_marker(line: &DiffLine<'_>) -> char {
    if line.flags().contains(LineFlags::MOVED_ALT) {
        'M'
    } else if line.flags().contains(LineFlags::MOVED) {
        'm'
    } else {
        '.'
    }
}
