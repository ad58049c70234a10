//! Generator settings and default value functions.

use serde::{Deserialize, Serialize};

/// Settings for the text-generation service.
///
/// The credential itself is never stored here; only the name of the
/// environment variable that holds it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorSettings {
    /// Model identifier sent with each request.
    pub model: String,

    /// Sampling temperature.
    pub temperature: f32,

    /// Base URL of an OpenAI-compatible API, without trailing slash.
    pub base_url: String,

    /// Environment variable holding the API key.
    pub api_key_env: String,

    /// Request timeout in seconds. `None` waits indefinitely.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self {
            model: default_model(),
            temperature: default_temperature(),
            base_url: default_base_url(),
            api_key_env: default_api_key_env(),
            timeout_secs: None,
        }
    }
}

pub fn default_keyword_file() -> String {
    "data/keywords.csv".to_string()
}

pub fn default_template_file() -> String {
    "template/article.html".to_string()
}

pub fn default_output_dir() -> String {
    "docs".to_string()
}

pub fn default_model() -> String {
    "gpt-4".to_string()
}

pub fn default_temperature() -> f32 {
    0.3
}

pub fn default_base_url() -> String {
    "https://api.openai.com/v1".to_string()
}

pub fn default_api_key_env() -> String {
    "OPENAI_API_KEY".to_string()
}
