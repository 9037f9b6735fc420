//! LLM Client — the single point of entry for all Gemini calls in the advisor.
//!
//! ARCHITECTURAL RULE: No other module may call the generative-language API directly.
//! All LLM interactions MUST go through `LlmClient`, which wraps a `TextOracle`.
//!
//! One call per operation. There is no retry loop here: callers fall back
//! to fixed content instead of retrying.
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

use crate::config::Config;

pub mod prompts;
#[cfg(test)]
pub mod testing;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("LLM returned empty content")]
    EmptyContent,
}

/// Sampling knobs sent with every request. Varies per operation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationOptions {
    pub temperature: f32,
    pub top_p: Option<f32>,
    pub max_output_tokens: u32,
}

impl GenerationOptions {
    pub const fn new(temperature: f32, max_output_tokens: u32) -> Self {
        Self {
            temperature,
            top_p: None,
            max_output_tokens,
        }
    }

    pub const fn with_top_p(mut self, top_p: f32) -> Self {
        self.top_p = Some(top_p);
        self
    }
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self::new(0.7, 8192).with_top_p(0.9)
    }
}

/// The text-completion oracle. Implement this to swap the backend
/// (Gemini in production, a scripted oracle in tests).
#[async_trait]
pub trait TextOracle: Send + Sync {
    async fn generate(
        &self,
        model: &str,
        prompt: &str,
        options: &GenerationOptions,
    ) -> Result<String, LlmError>;
}

// ────────────────────────────────────────────────────────────────────────────
// Gemini backend
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    role: &'a str,
    parts: Vec<RequestPart<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    top_p: Option<f32>,
    max_output_tokens: u32,
}

impl<'a> GenerateContentRequest<'a> {
    fn new(prompt: &'a str, options: &GenerationOptions) -> Self {
        Self {
            contents: vec![Content {
                role: "user",
                parts: vec![RequestPart { text: prompt }],
            }],
            generation_config: GenerationConfig {
                temperature: options.temperature,
                top_p: options.top_p,
                max_output_tokens: options.max_output_tokens,
            },
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    pub usage_metadata: Option<UsageMetadata>,
}

#[derive(Debug, Deserialize)]
pub struct Candidate {
    pub content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
pub struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
pub struct ResponsePart {
    pub text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageMetadata {
    #[serde(default)]
    pub prompt_token_count: u32,
    #[serde(default)]
    pub candidates_token_count: u32,
}

impl GenerateContentResponse {
    /// Concatenates the text parts of the first candidate.
    pub fn text(&self) -> Option<String> {
        let parts = &self.candidates.first()?.content.as_ref()?.parts;
        let text: String = parts.iter().filter_map(|p| p.text.as_deref()).collect();
        if text.trim().is_empty() {
            None
        } else {
            Some(text)
        }
    }
}

#[derive(Debug, Deserialize)]
struct GeminiError {
    error: GeminiErrorBody,
}

#[derive(Debug, Deserialize)]
struct GeminiErrorBody {
    message: String,
}

/// Gemini `generateContent` over HTTPS.
#[derive(Clone)]
pub struct GeminiOracle {
    client: Client,
    api_key: String,
    base_url: String,
}

impl GeminiOracle {
    pub fn new(api_key: String, base_url: String) -> Result<Self, LlmError> {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            client,
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn endpoint(&self, model: &str) -> String {
        format!("{}/models/{}:generateContent", self.base_url, model)
    }
}

#[async_trait]
impl TextOracle for GeminiOracle {
    async fn generate(
        &self,
        model: &str,
        prompt: &str,
        options: &GenerationOptions,
    ) -> Result<String, LlmError> {
        let response = self
            .client
            .post(self.endpoint(model))
            .header("x-goog-api-key", &self.api_key)
            .json(&GenerateContentRequest::new(prompt, options))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<GeminiError>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(LlmError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body: GenerateContentResponse = response.json().await?;
        if let Some(usage) = &body.usage_metadata {
            debug!(
                "Gemini call succeeded: prompt_tokens={}, output_tokens={}",
                usage.prompt_token_count, usage.candidates_token_count
            );
        }

        body.text().ok_or(LlmError::EmptyContent)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Client handle
// ────────────────────────────────────────────────────────────────────────────

/// The LLM handle shared by both services. Cheap to clone; the oracle
/// behind it is constructed once and reused across calls.
#[derive(Clone)]
pub struct LlmClient {
    oracle: Arc<dyn TextOracle>,
    model: String,
}

impl LlmClient {
    pub fn new(oracle: Arc<dyn TextOracle>, model: impl Into<String>) -> Self {
        Self {
            oracle,
            model: model.into(),
        }
    }

    /// Builds a Gemini-backed client from environment configuration.
    pub fn from_config(config: &Config) -> Result<Self, LlmError> {
        let oracle = GeminiOracle::new(config.gemini_api_key.clone(), config.gemini_api_url.clone())?;
        Ok(Self::new(Arc::new(oracle), config.gemini_model.clone()))
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Makes exactly one oracle call and returns the trimmed response text.
    pub async fn call(&self, prompt: &str, options: &GenerationOptions) -> Result<String, LlmError> {
        info!(
            model = %self.model,
            prompt_chars = prompt.len(),
            max_output_tokens = options.max_output_tokens,
            "Calling LLM"
        );
        let text = self.oracle.generate(&self.model, prompt, options).await?;
        let text = text.trim();
        if text.is_empty() {
            return Err(LlmError::EmptyContent);
        }
        Ok(text.to_string())
    }

    /// Calls the LLM and deserializes the fence-stripped response as JSON.
    /// The prompt must instruct the model to return valid JSON.
    pub async fn call_json<T: DeserializeOwned>(
        &self,
        prompt: &str,
        options: &GenerationOptions,
    ) -> Result<T, LlmError> {
        let text = self.call(prompt, options).await?;
        parse_json_response(&text)
    }
}

/// Parses model output as JSON after stripping markdown code fences.
pub fn parse_json_response<T: DeserializeOwned>(text: &str) -> Result<T, LlmError> {
    serde_json::from_str(strip_json_fences(text)).map_err(LlmError::Parse)
}

/// Strips ```json ... ``` or ``` ... ``` code fences from LLM output.
/// A lone opening or closing fence is removed as well.
pub fn strip_json_fences(text: &str) -> &str {
    let text = text.trim();
    let text = text
        .strip_prefix("```json")
        .or_else(|| text.strip_prefix("```"))
        .unwrap_or(text);
    let text = text.strip_suffix("```").unwrap_or(text);
    text.trim()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::testing::ScriptedOracle;

    #[test]
    fn test_strip_json_fences_with_json_tag() {
        let input = "```json\n{\"key\": \"value\"}\n```";
        assert_eq!(strip_json_fences(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_strip_json_fences_without_tag() {
        let input = "```\n{\"key\": \"value\"}\n```";
        assert_eq!(strip_json_fences(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_strip_json_fences_no_fences() {
        let input = "  {\"key\": \"value\"}\n";
        assert_eq!(strip_json_fences(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_strip_json_fences_unterminated_opening_fence() {
        let input = "```json\n[1, 2]";
        assert_eq!(strip_json_fences(input), "[1, 2]");
    }

    #[test]
    fn test_fenced_and_bare_json_parse_identically() {
        let bare = r#"{"bullets": ["a", "b"]}"#;
        let fenced_json = format!("```json\n{bare}\n```");
        let fenced_plain = format!("```\n{bare}\n```");

        let a: serde_json::Value = parse_json_response(bare).unwrap();
        let b: serde_json::Value = parse_json_response(&fenced_json).unwrap();
        let c: serde_json::Value = parse_json_response(&fenced_plain).unwrap();
        assert_eq!(a, b);
        assert_eq!(a, c);
    }

    #[test]
    fn test_parse_json_response_rejects_prose() {
        let result: Result<serde_json::Value, _> = parse_json_response("Sure! Here is your plan.");
        assert!(matches!(result, Err(LlmError::Parse(_))));
    }

    #[test]
    fn test_default_options_match_service_defaults() {
        let options = GenerationOptions::default();
        assert!((options.temperature - 0.7).abs() < f32::EPSILON);
        assert_eq!(options.top_p, Some(0.9));
        assert_eq!(options.max_output_tokens, 8192);
    }

    #[test]
    fn test_gemini_request_shape() {
        let options = GenerationOptions::new(0.8, 200);
        let request = GenerateContentRequest::new("Say hello", &options);
        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(json["contents"][0]["role"], "user");
        assert_eq!(json["contents"][0]["parts"][0]["text"], "Say hello");
        assert_eq!(json["generationConfig"]["maxOutputTokens"], 200);
        assert!(json["generationConfig"].get("topP").is_none());
    }

    #[test]
    fn test_gemini_response_text_joins_parts() {
        let body = r#"{
            "candidates": [
                {"content": {"role": "model", "parts": [{"text": "Hello, "}, {"text": "world"}]}}
            ],
            "usageMetadata": {"promptTokenCount": 3, "candidatesTokenCount": 2}
        }"#;
        let response: GenerateContentResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.text().as_deref(), Some("Hello, world"));
        assert_eq!(response.usage_metadata.unwrap().candidates_token_count, 2);
    }

    #[test]
    fn test_gemini_response_without_candidates_has_no_text() {
        let response: GenerateContentResponse = serde_json::from_str("{}").unwrap();
        assert!(response.text().is_none());
    }

    #[test]
    fn test_gemini_endpoint_strips_trailing_slash() {
        let oracle = GeminiOracle::new("key".into(), "https://example.test/v1beta/".into()).unwrap();
        assert_eq!(
            oracle.endpoint("gemini-2.0-flash"),
            "https://example.test/v1beta/models/gemini-2.0-flash:generateContent"
        );
    }

    #[tokio::test]
    async fn test_call_passes_model_and_options_once() {
        let oracle = Arc::new(ScriptedOracle::replying("  done  "));
        let llm = LlmClient::new(oracle.clone(), "test-model");
        let options = GenerationOptions::new(0.8, 200);

        let text = llm.call("prompt", &options).await.unwrap();

        assert_eq!(text, "done");
        assert_eq!(llm.model(), "test-model");
        assert_eq!(oracle.single_prompt(), "prompt");
        let calls = oracle.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].model, "test-model");
        assert_eq!(calls[0].options, options);
    }

    #[tokio::test]
    async fn test_call_rejects_blank_response() {
        let llm = LlmClient::new(Arc::new(ScriptedOracle::replying("   ")), "m");
        let result = llm.call("prompt", &GenerationOptions::default()).await;
        assert!(matches!(result, Err(LlmError::EmptyContent)));
    }
}
