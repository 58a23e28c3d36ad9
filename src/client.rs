use log::debug;
use reqwest::header::{ACCEPT, AUTHORIZATION};
use serde::Deserialize;
use serde_json::json;

use crate::errors::{DeckError, Result};

const CHAT_COMPLETIONS_URL: &str = "https://api.openai.com/v1/chat/completions";
const IMAGE_GENERATIONS_URL: &str = "https://api.openai.com/v1/images/generations";
const DEFAULT_IMAGE_MODEL: &str = "dall-e-3";
const DEFAULT_IMAGE_SIZE: &str = "1024x1024";

/// An opaque text-generation capability: given a model identifier and a
/// prompt, returns raw text or fails with a provider error. The pipeline
/// never inspects the text beyond structure extraction.
pub trait TextProvider {
    fn generate_text(
        &self,
        model: &str,
        prompt: &str,
    ) -> impl std::future::Future<Output = Result<String>>;
}

/// An opaque image-generation capability: given a text prompt, returns a
/// resolvable image URL or fails. Failures are per-call and non-fatal to
/// the surrounding batch.
pub trait ImageProvider {
    fn generate_image(&self, prompt: &str) -> impl std::future::Future<Output = Result<String>>;
}

/// Helper struct to attempt parsing standard OpenAI API error responses.
#[derive(Deserialize, Debug)]
struct OpenAiErrorResponse {
    error: OpenAiErrorDetail,
}

/// Details within a standard OpenAI API error response.
#[derive(Deserialize, Debug)]
struct OpenAiErrorDetail {
    message: String,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Deserialize)]
struct ChatMessage {
    content: Option<String>,
}

#[derive(Deserialize)]
struct ImageResponse {
    data: Vec<ImageDatum>,
}

#[derive(Deserialize)]
struct ImageDatum {
    url: Option<String>,
}

/// OpenAI-backed implementation of both provider capabilities.
pub struct OpenAiClient {
    api_key: String,
    http_client: reqwest::Client,
}

impl OpenAiClient {
    pub fn new(api_key: String) -> Self {
        Self {
            api_key,
            http_client: reqwest::Client::new(),
        }
    }

    /// Reuses an existing `reqwest::Client` (connection pooling is shared
    /// across all per-slide image requests either way).
    pub fn with_http_client(api_key: String, http_client: reqwest::Client) -> Self {
        Self { api_key, http_client }
    }

    async fn post_json(&self, url: &str, body: serde_json::Value) -> Result<Vec<u8>> {
        let response = self
            .http_client
            .post(url)
            .header(AUTHORIZATION, format!("Bearer {}", self.api_key))
            .header(ACCEPT, "application/json")
            .json(&body)
            .send()
            .await
            .map_err(DeckError::Network)?;

        let status = response.status();
        if status.is_success() {
            let bytes = response.bytes().await.map_err(DeckError::Network)?;
            Ok(bytes.to_vec())
        } else {
            // Non-2xx: try to surface the API's own error message.
            let error_text = response.text().await.map_err(DeckError::Network)?;
            let message = match serde_json::from_str::<OpenAiErrorResponse>(&error_text) {
                Ok(api_error) => api_error.error.message,
                Err(_) => format!("API request failed with status {status}: {error_text}"),
            };
            Err(DeckError::Provider { status, message })
        }
    }
}

impl TextProvider for OpenAiClient {
    async fn generate_text(&self, model: &str, prompt: &str) -> Result<String> {
        if prompt.trim().is_empty() {
            return Err(DeckError::InvalidInput("Prompt cannot be empty".to_string()));
        }

        let body = json!({
            "model": model,
            "messages": [{"role": "user", "content": prompt}],
        });
        debug!("requesting chat completion from model {model}");

        let bytes = self.post_json(CHAT_COMPLETIONS_URL, body).await?;
        let parsed: ChatResponse = serde_json::from_slice(&bytes)?;
        let content = parsed
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .unwrap_or_default();

        if content.trim().is_empty() {
            return Err(DeckError::EmptyResponse);
        }
        Ok(content)
    }
}

impl ImageProvider for OpenAiClient {
    async fn generate_image(&self, prompt: &str) -> Result<String> {
        if prompt.trim().is_empty() {
            return Err(DeckError::InvalidInput(
                "Image prompt cannot be empty".to_string(),
            ));
        }

        let body = json!({
            "model": DEFAULT_IMAGE_MODEL,
            "prompt": prompt,
            "n": 1,
            "size": DEFAULT_IMAGE_SIZE,
        });
        debug!("requesting image generation ({} chars of prompt)", prompt.len());

        let bytes = self.post_json(IMAGE_GENERATIONS_URL, body).await?;
        let parsed: ImageResponse = serde_json::from_slice(&bytes)?;
        parsed
            .data
            .into_iter()
            .next()
            .and_then(|datum| datum.url)
            .ok_or(DeckError::EmptyResponse)
    }
}
