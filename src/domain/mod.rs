//! Core domain types shared across the pipeline stages.

/// One aggregated corpus produced by a repository scan.
///
/// `text` holds the rendered sections joined by a blank line; `files_included`
/// counts the sections. Invariant: a corpus is never empty; a scan that
/// matches zero readable files fails instead of producing one.
#[derive(Debug, Clone)]
pub struct Corpus {
    pub text: String,
    pub files_included: usize,
}

/// Token accounting reported by the completion service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenUsage {
    pub prompt_tokens: u64,
    pub output_tokens: u64,
}

/// Response from the completion service.
///
/// Usage statistics are optional by design: the service may omit them without
/// invalidating the generated text.
#[derive(Debug, Clone)]
pub struct Completion {
    pub text: String,
    pub usage: Option<TokenUsage>,
}

/// Default file-name suffixes included in the analysis when the user passes
/// no `--ext` flag.
pub fn default_extensions() -> Vec<String> {
    [".py", ".ts", ".js", ".java", ".hpp", ".h", ".go"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}
