//! Blocking client for OpenAI-compatible chat completions.

use super::ArticleGenerator;
use super::prompt::build_prompt;
use crate::config::GeneratorSettings;
use crate::error::{HelpgenError, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct ChatRequestBody<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessageOut,
}

#[derive(Debug, Deserialize)]
struct ChatMessageOut {
    content: Option<String>,
}

/// Generates article bodies through `/chat/completions`.
#[derive(Debug)]
pub struct OpenAiGenerator {
    endpoint: String,
    settings: GeneratorSettings,
    api_key: Option<String>,
    client: reqwest::blocking::Client,
}

impl OpenAiGenerator {
    /// Build a generator from settings and an explicitly supplied API key.
    ///
    /// A missing key is accepted here and reported by `generate`, so a run
    /// with nothing to generate never needs a credential.
    pub fn new(settings: &GeneratorSettings, api_key: Option<String>) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(settings.timeout_secs.map(Duration::from_secs))
            .build()
            .map_err(|e| {
                HelpgenError::ConfigError(format!("failed to build HTTP client: {}", e))
            })?;

        Ok(Self {
            endpoint: format!("{}/chat/completions", settings.normalized_base_url()),
            settings: settings.clone(),
            api_key,
            client,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn request_body<'a>(&'a self, prompt: &'a str) -> ChatRequestBody<'a> {
        ChatRequestBody {
            model: &self.settings.model,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
            temperature: self.settings.temperature,
        }
    }
}

impl ArticleGenerator for OpenAiGenerator {
    fn generate(&self, keyword: &str) -> Result<String> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| self.settings.missing_api_key())?;

        let prompt = build_prompt(keyword);
        let body = self.request_body(&prompt);

        tracing::debug!(
            endpoint = %self.endpoint,
            model = %self.settings.model,
            "requesting article body"
        );

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .map_err(|e| HelpgenError::GenerationFailed(format!("request failed: {}", e)))?;

        let status = response.status();
        let text = response.text().map_err(|e| {
            HelpgenError::GenerationFailed(format!("failed to read response body: {}", e))
        })?;

        if !status.is_success() {
            return Err(HelpgenError::GenerationFailed(format!(
                "service returned HTTP {}: {}",
                status.as_u16(),
                text.trim()
            )));
        }

        extract_content(&text)
    }
}

/// Pull the first choice's message content out of a response body.
fn extract_content(text: &str) -> Result<String> {
    let parsed: ChatResponse = serde_json::from_str(text).map_err(|e| {
        HelpgenError::GenerationFailed(format!("unparseable response: {}: {}", e, text.trim()))
    })?;

    let content = parsed
        .choices
        .into_iter()
        .next()
        .ok_or_else(|| HelpgenError::GenerationEmpty("response has no choices".to_string()))?
        .message
        .content
        .unwrap_or_default();

    let content = content.trim();
    if content.is_empty() {
        return Err(HelpgenError::GenerationEmpty(
            "response message content is empty".to_string(),
        ));
    }

    Ok(content.to_string())
}
