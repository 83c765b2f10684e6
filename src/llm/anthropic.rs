//! Anthropic Messages API client.
//!
//! Thin HTTP wrapper for `/v1/messages`, used when `LLM_PROVIDER=anthropic`.
//! Pure parsing in `parse_response` for testability.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::config::LlmTimeouts;
use super::types::{GenerateRequest, LlmError};

const API_VERSION: &str = "2023-06-01";
const MAX_TOKENS: u32 = 2048;

// =============================================================================
// CLIENT
// =============================================================================

pub struct AnthropicClient {
    http: reqwest::Client,
    base_url: String,
}

impl AnthropicClient {
    /// # Errors
    ///
    /// Returns [`LlmError::HttpClientBuild`] if the HTTP client fails to build.
    pub fn new(base_url: String, timeouts: LlmTimeouts) -> Result<Self, LlmError> {
        let mut builder = reqwest::Client::builder().connect_timeout(Duration::from_secs(timeouts.connect_secs));
        if let Some(secs) = timeouts.request_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let http = builder
            .build()
            .map_err(|e| LlmError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, base_url })
    }

    /// # Errors
    ///
    /// Returns an [`LlmError`] on transport failure, non-200 status, or an
    /// unparsable body.
    pub async fn generate(&self, model: &str, api_key: &str, request: &GenerateRequest) -> Result<String, LlmError> {
        let body = ApiRequest::new(model, request);

        let response = self
            .http
            .post(format!("{}/messages", self.base_url))
            .header("x-api-key", api_key)
            .header("anthropic-version", API_VERSION)
            .json(&body)
            .send()
            .await
            .map_err(|e| LlmError::ApiRequest(e.to_string()))?;

        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| LlmError::ApiRequest(e.to_string()))?;

        if status != 200 {
            return Err(LlmError::ApiResponse { status, body: text });
        }

        parse_response(&text)
    }
}

// =============================================================================
// WIRE TYPES
// =============================================================================

#[derive(Serialize)]
struct ApiRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    system: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    messages: [ApiMessage<'a>; 1],
}

#[derive(Serialize)]
struct ApiMessage<'a> {
    role: &'static str,
    content: Vec<ApiBlock<'a>>,
}

#[derive(Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum ApiBlock<'a> {
    Image { source: ApiImageSource<'a> },
    Text { text: &'a str },
}

#[derive(Serialize)]
struct ApiImageSource<'a> {
    #[serde(rename = "type")]
    kind: &'static str,
    media_type: &'a str,
    data: &'a str,
}

impl<'a> ApiRequest<'a> {
    fn new(model: &'a str, request: &'a GenerateRequest) -> Self {
        let mut content = Vec::with_capacity(2);
        if let Some(image) = &request.image {
            content.push(ApiBlock::Image {
                source: ApiImageSource { kind: "base64", media_type: &image.mime_type, data: &image.data },
            });
        }
        content.push(ApiBlock::Text { text: &request.prompt });

        Self {
            model,
            max_tokens: MAX_TOKENS,
            system: request.system.as_deref(),
            temperature: request.temperature,
            messages: [ApiMessage { role: "user", content }],
        }
    }
}

#[derive(Deserialize)]
struct ApiResponse {
    content: Vec<ResponseBlock>,
}

#[derive(Deserialize)]
#[serde(tag = "type")]
enum ResponseBlock {
    #[serde(rename = "text")]
    Text { text: String },
    #[serde(other)]
    Unknown,
}

// =============================================================================
// PARSING
// =============================================================================

/// Concatenate all text blocks; thinking and tool blocks are ignored.
fn parse_response(json: &str) -> Result<String, LlmError> {
    let api: ApiResponse = serde_json::from_str(json).map_err(|e| LlmError::ApiParse(e.to_string()))?;

    Ok(api
        .content
        .into_iter()
        .filter_map(|block| match block {
            ResponseBlock::Text { text } => Some(text),
            ResponseBlock::Unknown => None,
        })
        .collect())
}

#[cfg(test)]
#[path = "anthropic_test.rs"]
mod tests;
