//! Command-line interface for readme-llm.

use std::path::PathBuf;
use std::time::Instant;

use clap::Parser;
use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::Config;
use crate::domain;
use crate::error::Result;
use crate::llm::GeminiClient;
use crate::pipeline;
use crate::prompt;

/// Generate a README.llm architectural summary for a code repository
#[derive(Parser)]
#[command(name = "readme-llm")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the repository to analyze
    #[arg(value_name = "REPO_PATH")]
    pub repo_path: PathBuf,

    /// File extensions to include in the analysis (e.g. --ext .py .go)
    #[arg(long = "ext", value_name = "EXT", num_args = 1..)]
    pub ext: Vec<String>,
}

pub async fn run() -> Result<()> {
    let start_time = Instant::now();

    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    // Configuration resolves before anything touches the filesystem or the
    // network; a missing credential fails the run here.
    let config = Config::from_env()?;
    init_tracing(config.debug);

    let suffixes = if cli.ext.is_empty() {
        domain::default_extensions()
    } else {
        cli.ext.clone()
    };

    let template_path = prompt::default_template_path()?;
    let client = GeminiClient::new(config.api_key.clone());

    let report =
        pipeline::run(&config, &cli.repo_path, &suffixes, &template_path, &client).await?;

    println!();
    println!(
        "Success! {} has been created ({} files analyzed).",
        crate::output::ARTIFACT_FILE_NAME,
        report.files_included
    );
    println!("Total time: {:.2} seconds.", start_time.elapsed().as_secs_f64());

    Ok(())
}

/// Wire the debug flag to the tracing log level.
/// RUST_LOG in the environment always takes precedence; debug mode falls back
/// to DEBUG, everything else to WARN.
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::from_default_env().add_directive(Level::DEBUG.into())
    } else {
        EnvFilter::from_default_env().add_directive(Level::WARN.into())
    };
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();
}
