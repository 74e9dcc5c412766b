use std::fmt;

use crate::{ConfigError, parse_opt, parse_or};

pub const API_KEY_ENV: &str = "API_KEY";

fn default_model() -> String {
    "gemini-2.5-flash".to_string()
}

fn default_api_url() -> String {
    "https://generativelanguage.googleapis.com".to_string()
}

fn default_temperature() -> f32 {
    0.5
}

fn default_max_attempts() -> u32 {
    3
}

/// Settings for the hosted text-generation model
#[derive(Clone)]
pub struct GeneratorConfig {
    pub api_key: String,
    pub model: String,
    pub api_url: String,
    pub temperature: f32,
    /// Upper bound on model calls per query
    pub max_attempts: u32,
    /// Per-request timeout; the transport default applies when unset
    pub timeout_seconds: Option<u64>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            model: default_model(),
            api_url: default_api_url(),
            temperature: default_temperature(),
            max_attempts: default_max_attempts(),
            timeout_seconds: None,
        }
    }
}

impl fmt::Debug for GeneratorConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeneratorConfig")
            .field("api_key", &"<redacted>")
            .field("model", &self.model)
            .field("api_url", &self.api_url)
            .field("temperature", &self.temperature)
            .field("max_attempts", &self.max_attempts)
            .field("timeout_seconds", &self.timeout_seconds)
            .finish()
    }
}

impl GeneratorConfig {
    pub(crate) fn from_lookup(lookup: &impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let api_key = lookup(API_KEY_ENV)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .ok_or(ConfigError::MissingApiKey(API_KEY_ENV))?;

        let model = lookup("GEMINI_MODEL").unwrap_or_else(default_model);

        let api_url = lookup("GEMINI_API_URL")
            .map(|v| v.trim_end_matches('/').to_string())
            .unwrap_or_else(default_api_url);

        let temperature = parse_or(lookup("GEMINI_TEMPERATURE"), default_temperature());

        let max_attempts = parse_or(lookup("GENERATION_MAX_ATTEMPTS"), default_max_attempts()).max(1);

        let timeout_seconds = parse_opt(lookup("GEMINI_TIMEOUT_SECONDS"));

        Ok(Self {
            api_key,
            model,
            api_url,
            temperature,
            max_attempts,
            timeout_seconds,
        })
    }
}
