//! Repository scanning and corpus aggregation.
//!
//! Walks a directory tree, selects files by file-name suffix, and renders the
//! readable ones into one concatenated corpus with a per-file path header.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::warn;
use walkdir::WalkDir;

use crate::domain::Corpus;
use crate::error::{Error, Result};

/// Separator between corpus sections.
const SECTION_SEPARATOR: &str = "\n\n";

/// Recursive scanner for a single repository root.
pub struct RepositoryScanner {
    root: PathBuf,
    suffixes: Vec<String>,
}

impl RepositoryScanner {
    pub fn new(root: impl Into<PathBuf>, suffixes: Vec<String>) -> Self {
        Self { root: root.into(), suffixes }
    }

    /// Walk the tree and aggregate every readable matching file into a corpus.
    ///
    /// Suffix matching is an exact string comparison against the file name,
    /// not a glob. A file that cannot be read or decoded as UTF-8 is logged
    /// and skipped; the scan continues. Traversal visits entries in sorted
    /// order so repeated scans of the same tree produce the same corpus.
    ///
    /// Fails with [`Error::Discovery`] when no section was produced.
    pub fn scan(&self) -> Result<Corpus> {
        let mut sections = Vec::new();

        let walker = WalkDir::new(&self.root).sort_by_file_name();
        for entry in walker.into_iter().filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(err) => {
                warn!(error = %err, "skipping unreadable directory entry");
                None
            }
        }) {
            if !entry.file_type().is_file() {
                continue;
            }
            let file_name = entry.file_name().to_string_lossy();
            if !self.suffixes.iter().any(|suffix| file_name.ends_with(suffix.as_str())) {
                continue;
            }

            let relative = entry
                .path()
                .strip_prefix(&self.root)
                .unwrap_or_else(|_| entry.path());
            match fs::read_to_string(entry.path()) {
                Ok(content) => {
                    sections.push(render_section(relative, &content));
                }
                Err(err) => {
                    warn!(
                        path = %entry.path().display(),
                        error = %err,
                        "could not read file, skipping"
                    );
                }
            }
        }

        if sections.is_empty() {
            return Err(Error::Discovery { root: self.root.clone() });
        }

        Ok(Corpus {
            files_included: sections.len(),
            text: sections.join(SECTION_SEPARATOR),
        })
    }
}

/// Render one corpus section: a header line with the path relative to the
/// scan root, followed by the raw file content.
fn render_section(relative_path: &Path, content: &str) -> String {
    format!("# === File: {} ===\n{}", relative_path.display(), content)
}
