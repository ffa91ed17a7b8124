mod client;
pub(crate) mod types;

use anyhow::{anyhow, Result};
use async_trait::async_trait;

use crate::traits::TextModel;
use client::GeminiClient;
use types::GenerateRequest;

pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";

// =============================================================================
// Gemini
// =============================================================================

#[derive(Clone)]
pub struct Gemini {
    api_key: String,
    model: String,
    base_url: Option<String>,
}

impl Gemini {
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: model.into(),
            base_url: None,
        }
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    pub(crate) fn client(&self) -> GeminiClient {
        let client = GeminiClient::new(&self.api_key);
        if let Some(ref url) = self.base_url {
            client.with_base_url(url)
        } else {
            client
        }
    }

    /// Send one prompt and return the first candidate's text.
    pub async fn complete(&self, prompt: &str, temperature: f32) -> Result<String> {
        let request = GenerateRequest::prompt(prompt, temperature);
        let response = self.client().generate(&self.model, &request).await?;

        response
            .text()
            .map(str::to_string)
            .ok_or_else(|| anyhow!("No candidate text in Gemini response"))
    }
}

impl std::fmt::Debug for Gemini {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Gemini")
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl TextModel for Gemini {
    async fn generate(&self, prompt: &str, temperature: f32) -> Result<String> {
        self.complete(prompt, temperature).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gemini_new() {
        let ai = Gemini::new("test-key", DEFAULT_MODEL);
        assert_eq!(ai.model, "gemini-2.0-flash");
        assert_eq!(ai.api_key, "test-key");
    }

    #[test]
    fn test_gemini_with_base_url() {
        let ai = Gemini::new("test-key", DEFAULT_MODEL).with_base_url("http://localhost:9000/");
        assert_eq!(ai.base_url, Some("http://localhost:9000/".to_string()));
    }

    #[test]
    fn test_debug_hides_api_key() {
        let ai = Gemini::new("super-secret", DEFAULT_MODEL);
        let rendered = format!("{ai:?}");
        assert!(!rendered.contains("super-secret"));
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_an_error() {
        let ai = Gemini::new("k", DEFAULT_MODEL).with_base_url("http://127.0.0.1:1");
        assert!(ai.generate("hello", 0.2).await.is_err());
    }
}
