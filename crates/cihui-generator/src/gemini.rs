use std::time::Duration;

use async_trait::async_trait;
use cihui_config::generator::GeneratorConfig;
use reqwest::StatusCode;
use serde::Deserialize;
use serde_json::{Value, json};

use crate::{GenerateError, GenerationRequest, ProviderMetadata, VocabularyGenerator};

/// Google Gemini `generateContent` client
#[derive(Clone)]
pub struct GeminiGenerator {
    client: reqwest::Client,
    api_key: String,
    api_url: String,
    model: String,
}

impl GeminiGenerator {
    pub fn new(api_key: String, api_url: String, model: String, client: reqwest::Client) -> Self {
        Self {
            client,
            api_key,
            api_url,
            model,
        }
    }

    pub fn from_config(config: &GeneratorConfig) -> Result<Self, GenerateError> {
        let mut builder = reqwest::Client::builder();
        if let Some(secs) = config.timeout_seconds {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        Ok(Self::new(
            config.api_key.clone(),
            config.api_url.clone(),
            config.model.clone(),
            builder.build()?,
        ))
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.api_url.trim_end_matches('/'),
            self.model
        )
    }
}

/// JSON body for one `generateContent` call
fn request_body(request: &GenerationRequest) -> Value {
    json!({
        "contents": [{
            "role": "user",
            "parts": [{ "text": request.prompt }]
        }],
        "generationConfig": {
            "responseMimeType": "application/json",
            "responseSchema": request.schema,
            "temperature": request.temperature,
            "thinkingConfig": { "thinkingBudget": request.thinking_budget }
        }
    })
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

#[derive(Debug, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    text: Option<String>,
}

impl GenerateContentResponse {
    /// Text of the first candidate, empty when the model produced none
    fn text(&self) -> String {
        self.candidates
            .first()
            .and_then(|c| c.content.as_ref())
            .map(|content| {
                content
                    .parts
                    .iter()
                    .filter_map(|p| p.text.as_deref())
                    .collect::<String>()
            })
            .unwrap_or_default()
    }
}

#[async_trait]
impl VocabularyGenerator for GeminiGenerator {
    async fn generate(&self, request: &GenerationRequest) -> Result<String, GenerateError> {
        if self.api_key.is_empty() {
            return Err(GenerateError::AuthenticationError);
        }

        tracing::debug!(model = %self.model, "sending generateContent request");

        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .json(&request_body(request))
            .send()
            .await?;

        let status = response.status();

        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(GenerateError::RateLimitExceeded);
        }

        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(GenerateError::AuthenticationError);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GenerateError::ApiError(format!("HTTP {status}: {body}")));
        }

        let parsed: GenerateContentResponse = response.json().await.map_err(|e| {
            GenerateError::ApiError(format!("Failed to parse response: {}", e))
        })?;

        Ok(parsed.text())
    }

    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            name: "Google Gemini".to_string(),
            model: self.model.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_joins_base_and_model() {
        let generator = GeminiGenerator::new(
            "key".to_string(),
            "http://localhost:9000/".to_string(),
            "gemini-2.5-flash".to_string(),
            reqwest::Client::new(),
        );
        assert_eq!(
            generator.endpoint(),
            "http://localhost:9000/v1beta/models/gemini-2.5-flash:generateContent"
        );
    }

    #[test]
    fn body_requests_structured_json() {
        let request = GenerationRequest::vocabulary("找詞".to_string(), 0.5);
        let body = request_body(&request);

        assert_eq!(body["contents"][0]["role"], "user");
        assert_eq!(body["contents"][0]["parts"][0]["text"], "找詞");

        let config = &body["generationConfig"];
        assert_eq!(config["responseMimeType"], "application/json");
        assert_eq!(config["responseSchema"]["type"], "ARRAY");
        assert_eq!(config["temperature"], 0.5);
        assert_eq!(config["thinkingConfig"]["thinkingBudget"], 0);
    }

    #[test]
    fn text_concatenates_first_candidate_parts() {
        let response: GenerateContentResponse = serde_json::from_value(json!({
            "candidates": [
                { "content": { "role": "model", "parts": [{ "text": "[{\"wo" }, { "text": "rd\": 1}]" }] } },
                { "content": { "parts": [{ "text": "ignored" }] } }
            ]
        }))
        .unwrap();

        assert_eq!(response.text(), "[{\"word\": 1}]");
    }

    #[test]
    fn missing_candidates_give_empty_text() {
        let response: GenerateContentResponse =
            serde_json::from_value(json!({ "promptFeedback": { "blockReason": "SAFETY" } })).unwrap();
        assert_eq!(response.text(), "");

        let response: GenerateContentResponse =
            serde_json::from_value(json!({ "candidates": [{ "finishReason": "SAFETY" }] })).unwrap();
        assert_eq!(response.text(), "");
    }

    #[tokio::test]
    async fn empty_key_is_rejected_before_sending() {
        let generator = GeminiGenerator::new(
            String::new(),
            "http://127.0.0.1:1".to_string(),
            "gemini-2.5-flash".to_string(),
            reqwest::Client::new(),
        );
        let request = GenerationRequest::vocabulary("找詞".to_string(), 0.5);

        let err = generator.generate(&request).await.unwrap_err();
        assert!(matches!(err, GenerateError::AuthenticationError));
    }
}
