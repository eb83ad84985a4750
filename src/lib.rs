//! Readme-LLM: Generate an LLM-written architectural summary for a code repository
//!
//! This library scans a source tree, aggregates matching files into a single
//! corpus, sends it to a remote completion service wrapped in a prompt
//! template, and writes the generated summary to `README.llm` at the
//! repository root.

pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod llm;
pub mod output;
pub mod pipeline;
pub mod prompt;
pub mod scan;
