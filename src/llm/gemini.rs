//! Gemini `generateContent` API client.
//!
//! Thin HTTP wrapper for `POST {base}/models/{model}:generateContent`. Pure
//! parsing in `parse_response` for testability.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::config::LlmTimeouts;
use super::types::{GenerateRequest, LlmError};

// =============================================================================
// CLIENT
// =============================================================================

pub struct GeminiClient {
    http: reqwest::Client,
    base_url: String,
}

impl GeminiClient {
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
        let url = format!("{}/models/{}:generateContent", self.base_url, model);
        let body = ApiRequest::from(request);

        let response = self
            .http
            .post(url)
            .header("x-goog-api-key", api_key)
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
#[serde(rename_all = "camelCase")]
struct ApiRequest<'a> {
    contents: [ApiContent<'a>; 1],
    #[serde(skip_serializing_if = "Option::is_none")]
    system_instruction: Option<ApiSystem<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<ApiGenerationConfig>,
}

#[derive(Serialize)]
struct ApiContent<'a> {
    role: &'static str,
    parts: Vec<ApiPart<'a>>,
}

#[derive(Serialize)]
struct ApiSystem<'a> {
    parts: [ApiPart<'a>; 1],
}

#[derive(Serialize)]
#[serde(untagged)]
enum ApiPart<'a> {
    Text {
        text: &'a str,
    },
    #[serde(rename_all = "camelCase")]
    Image {
        inline_data: ApiInlineData<'a>,
    },
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ApiInlineData<'a> {
    mime_type: &'a str,
    data: &'a str,
}

#[derive(Serialize)]
struct ApiGenerationConfig {
    temperature: f32,
}

impl<'a> From<&'a GenerateRequest> for ApiRequest<'a> {
    fn from(request: &'a GenerateRequest) -> Self {
        let mut parts = Vec::with_capacity(2);
        if let Some(image) = &request.image {
            parts.push(ApiPart::Image {
                inline_data: ApiInlineData { mime_type: &image.mime_type, data: &image.data },
            });
        }
        parts.push(ApiPart::Text { text: &request.prompt });

        Self {
            contents: [ApiContent { role: "user", parts }],
            system_instruction: request
                .system
                .as_deref()
                .map(|text| ApiSystem { parts: [ApiPart::Text { text }] }),
            generation_config: request
                .temperature
                .map(|temperature| ApiGenerationConfig { temperature }),
        }
    }
}

#[derive(Deserialize)]
struct ApiResponse {
    #[serde(default)]
    candidates: Vec<ApiCandidate>,
}

#[derive(Deserialize)]
struct ApiCandidate {
    content: Option<ApiCandidateContent>,
}

#[derive(Deserialize)]
struct ApiCandidateContent {
    #[serde(default)]
    parts: Vec<ApiResponsePart>,
}

#[derive(Deserialize)]
struct ApiResponsePart {
    text: Option<String>,
}

// =============================================================================
// PARSING
// =============================================================================

/// Concatenate the text parts of the first candidate. A response with no
/// candidates (e.g. blocked by safety filters) yields an empty string.
fn parse_response(json: &str) -> Result<String, LlmError> {
    let api: ApiResponse = serde_json::from_str(json).map_err(|e| LlmError::ApiParse(e.to_string()))?;

    let text = api
        .candidates
        .into_iter()
        .next()
        .and_then(|c| c.content)
        .map(|content| {
            content
                .parts
                .into_iter()
                .filter_map(|part| part.text)
                .collect::<String>()
        })
        .unwrap_or_default();

    Ok(text)
}

#[cfg(test)]
#[path = "gemini_test.rs"]
mod tests;
