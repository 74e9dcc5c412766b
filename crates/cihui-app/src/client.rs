use anyhow::{Context, Result};
use cihui_types::VocabularyEntry;
use serde_json::json;

const VOCABULARY_PATH: &str = "/api/vocabulary";

/// HTTP client for the vocabulary backend
#[derive(Clone)]
pub struct BackendClient {
    base_url: String,
    client: reqwest::Client,
}

impl BackendClient {
    pub fn new(base_url: String) -> Self {
        Self::with_http_client(base_url, reqwest::Client::new())
    }

    pub fn with_http_client(base_url: String, client: reqwest::Client) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        }
    }

    pub fn endpoint(&self) -> String {
        format!("{}{}", self.base_url, VOCABULARY_PATH)
    }

    /// Send the raw slots and decode the result set
    pub async fn fetch_vocabulary(&self, inputs: &[String]) -> Result<Vec<VocabularyEntry>> {
        let response = self
            .client
            .post(self.endpoint())
            .json(&json!({ "inputs": inputs }))
            .send()
            .await
            .context("Failed to send request to backend")?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("Server error: {} - {}", status, body);
        }

        response
            .json::<Vec<VocabularyEntry>>()
            .await
            .context("Failed to parse vocabulary data")
    }
}
