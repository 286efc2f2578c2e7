// src/core/service_client.rs
//! HTTP client for the external AI suggestion service

use anyhow::{Context, Result};

use crate::app_log;
use crate::suggestions::parse_numbered_phrases;
use crate::types::response::{SuggestionBatch, SuggestionServiceResponse};

const SUGGESTIONS_ENDPOINT: &str = "/suggestions";

pub struct SuggestionClient {
    client: reqwest::Client,
    base_url: String,
}

impl SuggestionClient {
    pub fn new(base_url: String, timeout_seconds: u64) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(timeout_seconds))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Sends prompt + context, receives numbered phrases split into candidates
    pub async fn generate(&self, prompt: &str, context: &str) -> Result<SuggestionBatch> {
        let url = format!("{}{}", self.base_url, SUGGESTIONS_ENDPOINT);

        let payload = serde_json::json!({
            "prompt": prompt,
            "context": context
        });

        app_log!(trace, "Calling suggestion service: {}", url);

        let response = self
            .client
            .post(&url)
            .json(&payload)
            .send()
            .await
            .context("Failed to call suggestion service")?;

        let status = response.status();
        if status.is_success() {
            let body: SuggestionServiceResponse = response
                .json()
                .await
                .context("Failed to parse suggestion response")?;
            batch_from_response(body)
        } else {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            app_log!(error, "Suggestion service error response: {}", error_text);
            anyhow::bail!(
                "Suggestion service returned error status {}: {}",
                status,
                error_text
            )
        }
    }
}

pub fn batch_from_response(response: SuggestionServiceResponse) -> Result<SuggestionBatch> {
    if response.status != "success" {
        anyhow::bail!(
            "Suggestion generation failed: {}",
            response.message.unwrap_or(response.status)
        );
    }

    Ok(SuggestionBatch {
        candidates: parse_numbered_phrases(&response.generated_text),
        raw_text: response.generated_text,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_batch_from_success() {
        let response = SuggestionServiceResponse {
            generated_text: "1. Shipped the API. 2. Reduced latency.".to_string(),
            status: "success".to_string(),
            message: None,
        };
        let batch = batch_from_response(response).unwrap();
        assert_eq!(batch.candidates, vec!["Shipped the API.", "Reduced latency."]);
        assert_eq!(batch.raw_text, "1. Shipped the API. 2. Reduced latency.");
    }

    #[test]
    fn test_batch_from_failure_status() {
        let response = SuggestionServiceResponse {
            generated_text: String::new(),
            status: "error".to_string(),
            message: Some("quota exceeded".to_string()),
        };
        let err = batch_from_response(response).unwrap_err();
        assert!(err.to_string().contains("quota exceeded"));
    }

    #[test]
    fn test_base_url_trailing_slash() {
        let client = SuggestionClient::new("http://ai:9000/".to_string(), 5).unwrap();
        assert_eq!(client.base_url(), "http://ai:9000");
    }

    #[tokio::test]
    async fn test_unreachable_service_is_error() {
        let client = SuggestionClient::new("http://127.0.0.1:1".to_string(), 2).unwrap();
        assert!(client.generate("p", "c").await.is_err());
    }
}
