//! readme-llm: Generate an LLM-written architectural summary for a code repository
//!
//! Scans a repository, aggregates the selected source files into one corpus,
//! asks a remote completion service for an architectural summary, and writes
//! the result to `README.llm` at the repository root.

use std::process::ExitCode;

use readme_llm::cli;
use readme_llm::error::Error;

#[tokio::main]
async fn main() -> ExitCode {
    match cli::run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            match &err {
                Error::Configuration(_) | Error::Discovery { .. } | Error::TemplateMissing { .. } => {
                    eprintln!("A configuration or file error occurred: {err}");
                }
                _ => {
                    eprintln!("An unexpected error occurred: {err}");
                }
            }
            ExitCode::from(err.exit_code())
        }
    }
}
