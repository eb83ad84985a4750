//! End-to-end pipeline: discovery → aggregation → prompt assembly → remote
//! invocation → persistence.
//!
//! Control flow is strictly linear; every stage consumes its input by value
//! and hands a new value forward. Callable from integration tests with a
//! substitute [`CompletionClient`].

use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::error::Result;
use crate::llm::{self, CompletionClient};
use crate::output;
use crate::scan::RepositoryScanner;

/// Outcome of a successful run.
#[derive(Debug)]
pub struct RunReport {
    pub files_included: usize,
    pub artifact_path: PathBuf,
}

/// Run the full pipeline over `root` for the given suffix set.
///
/// `template_path` is resolved once by the caller; the display path from the
/// configuration is used for user-facing output only, never for file I/O.
pub async fn run(
    config: &Config,
    root: &Path,
    suffixes: &[String],
    template_path: &Path,
    client: &dyn CompletionClient,
) -> Result<RunReport> {
    let display_root = config
        .display_path
        .clone()
        .unwrap_or_else(|| root.display().to_string());

    println!("Scanning repository at '{display_root}' for files with extensions: {suffixes:?} ...");
    let corpus = RepositoryScanner::new(root, suffixes.to_vec()).scan()?;
    println!("Found and aggregated {} files.", corpus.files_included);

    let summary = llm::generate_summary(client, &config.model, template_path, &corpus.text).await?;

    println!(
        "Writing output to {} ...",
        Path::new(&display_root).join(output::ARTIFACT_FILE_NAME).display()
    );
    let artifact_path = output::write_summary(root, &summary)?;

    Ok(RunReport {
        files_included: corpus.files_included,
        artifact_path,
    })
}
