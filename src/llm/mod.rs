//! LLM — provider adapter for the assistant's text generation.
//!
//! DESIGN
//! ======
//! `LlmClient` dispatches to Gemini (default) or Anthropic based on
//! `LLM_PROVIDER`. The client holds no key: callers pass one per request so
//! a missing credential can short-circuit before any network I/O.

pub mod anthropic;
pub mod config;
pub mod credentials;
pub mod gemini;
pub mod types;

use config::{LlmConfig, LlmProviderKind};
pub use credentials::{Credentials, EnvCredentials, StaticCredentials};
pub use types::TextGenerator;
use types::{GenerateRequest, LlmError};

// =============================================================================
// CLIENT DISPATCH
// =============================================================================

/// Concrete text-generation client for the configured provider.
pub struct LlmClient {
    inner: LlmProvider,
    model: String,
}

enum LlmProvider {
    Gemini(gemini::GeminiClient),
    Anthropic(anthropic::AnthropicClient),
}

impl LlmClient {
    /// Build a client from a parsed typed config.
    ///
    /// # Errors
    ///
    /// Returns an error if the provider HTTP client fails to build.
    pub fn from_config(config: LlmConfig) -> Result<Self, LlmError> {
        let inner = match config.provider {
            LlmProviderKind::Gemini => LlmProvider::Gemini(gemini::GeminiClient::new(config.base_url, config.timeouts)?),
            LlmProviderKind::Anthropic => {
                LlmProvider::Anthropic(anthropic::AnthropicClient::new(config.base_url, config.timeouts)?)
            }
        };
        Ok(Self { inner, model: config.model })
    }

    /// Return the configured model name (e.g. `"gemini-2.5-flash"`).
    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }

    #[must_use]
    pub fn provider(&self) -> LlmProviderKind {
        match self.inner {
            LlmProvider::Gemini(_) => LlmProviderKind::Gemini,
            LlmProvider::Anthropic(_) => LlmProviderKind::Anthropic,
        }
    }
}

#[async_trait::async_trait]
impl TextGenerator for LlmClient {
    async fn generate(&self, api_key: &str, request: &GenerateRequest) -> Result<String, LlmError> {
        match &self.inner {
            LlmProvider::Gemini(c) => c.generate(&self.model, api_key, request).await,
            LlmProvider::Anthropic(c) => c.generate(&self.model, api_key, request).await,
        }
    }
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
