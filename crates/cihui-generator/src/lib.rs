mod gemini;
mod retry;


pub use gemini::GeminiGenerator;
pub use retry::{GenerationFailure, RetryPolicy, generate_vocabulary};

use serde_json::Value;

/// Text-generation provider interface
#[async_trait::async_trait]
pub trait VocabularyGenerator: Send + Sync {
    /// Run one generation and return the raw model text
    async fn generate(&self, request: &GenerationRequest) -> Result<String, GenerateError>;

    /// Provider metadata
    fn metadata(&self) -> ProviderMetadata;
}

#[derive(Debug, Clone)]
pub struct GenerationRequest {
    pub prompt: String,
    /// Structured-output schema the response must follow
    pub schema: Value,
    pub temperature: f32,
    pub thinking_budget: u32,
}

impl GenerationRequest {
    /// Request JSON output in the vocabulary schema, with thinking disabled
    pub fn vocabulary(prompt: String, temperature: f32) -> Self {
        Self {
            prompt,
            schema: cihui_core::vocabulary_schema(),
            temperature,
            thinking_budget: 0,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ProviderMetadata {
    pub name: String,
    pub model: String,
}

#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    #[error("API error: {0}")]
    ApiError(String),

    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    #[error("Authentication error")]
    AuthenticationError,
}
