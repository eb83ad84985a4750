//! Prompt assembly from the static template and the aggregated corpus.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// File name of the prompt template, expected next to the executable.
pub const TEMPLATE_FILE_NAME: &str = "system_prompt.md";

/// Heading and label inserted between the template and the corpus.
const CORPUS_HEADING: &str = "## Aggregated Source Code to Analyze";
const CORPUS_LABEL: &str = "Here is the aggregated source code to be analyzed:";

/// Resolve the fixed template location: `system_prompt.md` in the directory
/// containing the running executable.
pub fn default_template_path() -> Result<PathBuf> {
    let exe = env::current_exe()
        .map_err(|_| Error::TemplateMissing { path: PathBuf::from(TEMPLATE_FILE_NAME) })?;
    Ok(match exe.parent() {
        Some(dir) => dir.join(TEMPLATE_FILE_NAME),
        None => PathBuf::from(TEMPLATE_FILE_NAME),
    })
}

/// Assemble the full prompt: template text, a separator line, the corpus
/// heading and label, a blank line, then the raw corpus. No escaping, no
/// truncation, no token-budget enforcement.
///
/// Fails with [`Error::TemplateMissing`] when the template cannot be read;
/// the run cannot proceed without it.
pub fn build_prompt(template_path: &Path, corpus: &str) -> Result<String> {
    let template = fs::read_to_string(template_path)
        .map_err(|_| Error::TemplateMissing { path: template_path.to_path_buf() })?;

    Ok(format!(
        "{template}\n---\n\n{CORPUS_HEADING}\n\n{CORPUS_LABEL}\n\n{corpus}"
    ))
}
