//! Artifact persistence.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// File name of the generated artifact, written at the scan root.
pub const ARTIFACT_FILE_NAME: &str = "README.llm";

/// Write the summary verbatim, UTF-8 encoded, to `README.llm` under `root`,
/// overwriting any existing file. No temp-file-then-rename: a crash mid-write
/// can leave a partial artifact, which is acceptable for single-shot batch use.
pub fn write_summary(root: &Path, content: &str) -> Result<PathBuf> {
    let path = root.join(ARTIFACT_FILE_NAME);
    fs::write(&path, content).map_err(|source| Error::Persistence {
        path: path.clone(),
        source,
    })?;
    Ok(path)
}
