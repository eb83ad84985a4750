//! Remote completion service boundary and summary generation.
//!
//! The [`CompletionClient`] trait is the seam between the pipeline and the
//! remote service; [`GeminiClient`] is the production implementation and test
//! code substitutes mocks. All remote failures surface as
//! [`Error::Transport`] with no retry.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use std::path::Path;

use crate::domain::{Completion, TokenUsage};
use crate::error::{Error, Result};
use crate::prompt;

/// Base URL of the hosted completion service.
const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Client for a remote text-completion service.
///
/// Implementors connect to a real API; tests use the generated mock.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Submit a prompt and return the generated text with optional usage
    /// statistics. Fails with [`Error::Transport`] on any remote failure.
    async fn complete(&self, model: &str, prompt: &str) -> Result<Completion>;
}

/// `CompletionClient` over the Gemini `generateContent` REST endpoint.
pub struct GeminiClient {
    api_key: String,
    base_url: String,
    http: reqwest::Client,
}

impl GeminiClient {
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(api_key, DEFAULT_BASE_URL.to_string())
    }

    /// Construct against a custom base URL. Used by tests pointing at a
    /// local server.
    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        Self {
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
            http: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl CompletionClient for GeminiClient {
    async fn complete(&self, model: &str, prompt: &str) -> Result<Completion> {
        let url = format!("{}/v1beta/models/{}:generateContent", self.base_url, model);
        let body = GenerateContentRequest {
            contents: vec![Content { parts: vec![Part { text: prompt.to_string() }] }],
        };

        let response = self
            .http
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(Error::Transport(format!(
                "completion service returned {status}: {detail}"
            )));
        }

        let payload: GenerateContentResponse = response.json().await?;
        payload.into_completion()
    }
}

#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
struct Part {
    text: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    // Kept as a raw value: usage extraction is best-effort and an unexpected
    // shape here must not invalidate the generated text.
    #[serde(default)]
    usage_metadata: Option<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

/// Best-effort usage extraction: `None` on any missing or mistyped field.
fn extract_usage(meta: &serde_json::Value) -> Option<TokenUsage> {
    Some(TokenUsage {
        prompt_tokens: meta.get("promptTokenCount")?.as_u64()?,
        output_tokens: meta.get("candidatesTokenCount")?.as_u64()?,
    })
}

impl GenerateContentResponse {
    /// Extract the generated text and, best-effort, the token usage.
    ///
    /// A response with no generated text is a transport failure; absent,
    /// partial, or malformed usage metadata is not.
    fn into_completion(self) -> Result<Completion> {
        let usage = self.usage_metadata.as_ref().and_then(extract_usage);

        let text = self
            .candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content)
            .and_then(|content| content.parts.into_iter().next())
            .and_then(|part| part.text)
            .ok_or_else(|| {
                Error::Transport("completion response contained no generated text".to_string())
            })?;

        Ok(Completion { text, usage })
    }
}

/// Build the prompt, submit it, and return the generated summary text.
///
/// Prompt-template failures propagate unchanged. When the debug flag was set
/// at startup, the full prompt and response are visible as DEBUG events. A
/// usage line is printed whether or not the service reported token counts.
pub async fn generate_summary(
    client: &dyn CompletionClient,
    model: &str,
    template_path: &Path,
    corpus: &str,
) -> Result<String> {
    let prompt = prompt::build_prompt(template_path, corpus)?;
    debug!(prompt = %prompt, "prompt sent to completion service");

    println!("Calling completion service with model: {model} ...");
    let completion = client.complete(model, &prompt).await?;
    debug!(response = %completion.text, "response from completion service");

    match completion.usage {
        Some(usage) => println!(
            "  Usage: {} prompt tokens -> {} output tokens.",
            format_kilo(usage.prompt_tokens),
            format_kilo(usage.output_tokens)
        ),
        None => println!("  Usage: token counts not available."),
    }

    Ok(completion.text)
}

/// Format a token count in thousands with one decimal, e.g. 12345 -> "12.3K".
fn format_kilo(tokens: u64) -> String {
    format!("{:.1}K", tokens as f64 / 1000.0)
}
