use crate::areas::renderer::Renderer;
use crate::artifacts::diff::diff_algorithm::{DiffAlgorithm, MyersDiff};
use crate::artifacts::diff::diff_source::DiffSource;
use crate::artifacts::diff::hunk::Hunk;
use crate::artifacts::moved::detect_moved_lines;
use crate::domain::line::{DiffLine, LineFlags, Sign};
use crate::domain::policy::MovedMode;
use colored::{ColoredString, Colorize};
use std::io::Write;
use std::path::Path;

impl Renderer {
    pub fn diff(&self, old: &Path, new: &Path) -> anyhow::Result<()> {
        let a = DiffSource::from_file(old)?;
        let b = DiffSource::from_file(new)?;

        self.print_diff(&a, &b)
    }

    fn print_diff(&self, a: &DiffSource, b: &DiffSource) -> anyhow::Result<()> {
        if a.data == b.data {
            return Ok(());
        }

        writeln!(
            self.writer(),
            "{}",
            format!(
                "diff --dit {} {}",
                a.diff_path("a").display(),
                b.diff_path("b").display()
            )
            .bold()
        )?;
        writeln!(
            self.writer(),
            "{}",
            format!("--- {}", a.diff_path("a").display()).bold()
        )?;
        writeln!(
            self.writer(),
            "{}",
            format!("+++ {}", b.diff_path("b").display()).bold()
        )?;

        let edits = MyersDiff::new(&a.data, &b.data).diff();
        let hunks = Hunk::build(&edits);
        let mut stream: Vec<DiffLine<'_>> = hunks.iter().flat_map(|hunk| hunk.lines()).collect();

        if let Some(config) = self.moved() {
            detect_moved_lines(&mut stream, config);
        }

        let mut offset = 0;
        for hunk in &hunks {
            writeln!(self.writer(), "{}", hunk.header().cyan())?;
            for position in offset..offset + hunk.len() {
                self.print_line(&stream, position)?;
            }
            offset += hunk.len();
        }

        Ok(())
    }

    fn print_line(&self, stream: &[DiffLine<'_>], position: usize) -> anyhow::Result<()> {
        let line = &stream[position];
        let content = format!("{}{}", line.sign().marker(), line.text());

        let mut colored: ColoredString = match (line.sign(), stripe(line)) {
            (Sign::Context, _) => content.normal(),
            (Sign::Removed, None) => content.red(),
            (Sign::Added, None) => content.green(),
            (Sign::Removed, Some(false)) => content.magenta(),
            (Sign::Removed, Some(true)) => content.blue(),
            (Sign::Added, Some(false)) => content.cyan(),
            (Sign::Added, Some(true)) => content.yellow(),
        };
        if self.dims_interior() && is_block_interior(stream, position) {
            colored = colored.dimmed();
        }

        writeln!(self.writer(), "{colored}")?;

        Ok(())
    }

    fn dims_interior(&self) -> bool {
        self.moved()
            .is_some_and(|config| config.mode == MovedMode::DimmedZebra)
    }
}

/// `None` for ordinary lines, otherwise whether the line carries the
/// alternate stripe.
fn stripe(line: &DiffLine<'_>) -> Option<bool> {
    line.is_moved()
        .then(|| line.flags().contains(LineFlags::MOVED_ALT))
}

/// A moved line strictly inside a block: both neighbours are moved lines of
/// the same sign and stripe. Boundary lines stay bright when dimming is on.
fn is_block_interior(stream: &[DiffLine<'_>], position: usize) -> bool {
    let line = &stream[position];
    if !line.is_moved() {
        return false;
    }

    let same_block = |other: &DiffLine<'_>| {
        other.sign() == line.sign()
            && (other.flags() & LineFlags::MOVED_MASK) == (line.flags() & LineFlags::MOVED_MASK)
    };

    position > 0
        && same_block(&stream[position - 1])
        && stream.get(position + 1).is_some_and(same_block)
}
