use crate::domain::line::LineSet;
use derive_new::new;
use std::path::{Path, PathBuf};

/// One side of a file comparison: the path used for diff headers plus the
/// file's lines.
#[derive(Debug, Clone, new)]
pub struct DiffSource {
    pub(crate) file: PathBuf,
    pub(crate) data: LineSet,
}

impl DiffSource {
    pub fn from_file(file: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(file)
            .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", file.display(), e))?;

        Ok(Self {
            file: file.to_path_buf(),
            data: content.lines().map(|s| s.to_string()).collect(),
        })
    }

    /// The path as printed in diff headers, under the given label side.
    pub fn diff_path(&self, side: &str) -> PathBuf {
        Path::new(side).join(&self.file)
    }
}
