//! Text-generation provider client.
//!
//! The provider is reached through the `ChatModel` trait so the composer
//! can be driven by anything that turns a prompt into text; the live
//! implementation speaks the OpenAI-compatible chat-completions API that
//! Groq exposes.

use anyhow::{Context, Result};
use async_trait::async_trait;
use tunesconf::ModelConfig;

/// Errors constructing a model client from configuration.
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("missing API key: set TUNESMITH_API_KEY or [model] api_key in the config file")]
    MissingApiKey,
}

/// A text-generation model: prompt in, text out.
#[async_trait]
pub trait ChatModel: Send + Sync {
    async fn complete(&self, prompt: &str) -> Result<String>;
}

/// Chat-completions client for an OpenAI-compatible endpoint.
pub struct GroqChat {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    model: String,
    temperature: f32,
}

impl GroqChat {
    /// Build a client from configuration, validating the API key up front.
    pub fn new(config: &ModelConfig) -> Result<Self, ModelError> {
        let api_key = config.api_key.trim();
        if api_key.is_empty() {
            return Err(ModelError::MissingApiKey);
        }

        Ok(GroqChat {
            client: reqwest::Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            model: config.model.clone(),
            temperature: config.temperature,
        })
    }
}

#[async_trait]
impl ChatModel for GroqChat {
    async fn complete(&self, prompt: &str) -> Result<String> {
        let request_body = serde_json::json!({
            "model": self.model,
            "temperature": self.temperature,
            "messages": [{ "role": "user", "content": prompt }],
        });

        let resp = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&request_body)
            .send()
            .await
            .context("Failed to call chat completions API")?;

        let status = resp.status();

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            let retry_after = resp
                .headers()
                .get("retry-after")
                .and_then(|v| v.to_str().ok())
                .and_then(|s| s.parse::<u64>().ok())
                .unwrap_or(5);

            tracing::warn!(retry_after, "provider rate limited the request");
            anyhow::bail!("provider busy, retry after {}s", retry_after);
        }

        if !status.is_success() {
            let error_body = resp
                .text()
                .await
                .unwrap_or_else(|_| "<failed to read error body>".to_string());
            anyhow::bail!("chat API error {}: {}", status, error_body);
        }

        let resp_json: serde_json::Value = resp
            .json()
            .await
            .context("Failed to parse chat response as JSON")?;

        let content = resp_json
            .get("choices")
            .and_then(|v| v.as_array())
            .and_then(|choices| choices.first())
            .and_then(|choice| choice.get("message"))
            .and_then(|message| message.get("content"))
            .and_then(|v| v.as_str())
            .ok_or_else(|| anyhow::anyhow!("No message content in chat response"))?;

        Ok(content.trim().to_string())
    }
}
