use std::sync::Arc;

use cihui_config::generator::GeneratorConfig;
use cihui_generator::{GenerateError, GeminiGenerator, RetryPolicy, VocabularyGenerator};

/// Read-only state shared by every request
pub struct AppState {
    pub generator: Arc<dyn VocabularyGenerator>,
    pub temperature: f32,
    pub retry: RetryPolicy,
}

impl AppState {
    pub fn new(generator: Arc<dyn VocabularyGenerator>, temperature: f32, retry: RetryPolicy) -> Self {
        Self {
            generator,
            temperature,
            retry,
        }
    }

    /// State backed by the Gemini client described by `config`
    pub fn from_config(config: &GeneratorConfig) -> Result<Self, GenerateError> {
        let generator = GeminiGenerator::from_config(config)?;

        Ok(Self::new(
            Arc::new(generator),
            config.temperature,
            RetryPolicy::new(config.max_attempts),
        ))
    }
}
