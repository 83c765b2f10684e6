//! Assistant — state, context assembly, and user-facing failure text.
//!
//! DESIGN
//! ======
//! The assistant is a three-state machine (`Idle` → `Pending` → `Resolved`).
//! Success and failure both resolve to text; the typed [`AssistError`] only
//! exists so the service layer can log what actually went wrong before
//! collapsing it to one of the literal messages below.
//!
//! Everything here is synchronous and pure. The outbound call lives in
//! `services::assistant`.

use serde::{Deserialize, Serialize};

use crate::catalog::Product;
use crate::llm::types::LlmError;
use crate::screen::Screen;

#[cfg(test)]
#[path = "assistant_test.rs"]
mod tests;

pub const API_KEY_MISSING_MESSAGE: &str = "Error: API Key not found.";
pub const GENERATION_FAILED_MESSAGE: &str = "Error generating AI response.";
pub const SCREENSHOT_FAILED_MESSAGE: &str = "Failed to analyze image.";
pub const SCREENSHOT_EMPTY_MESSAGE: &str = "No analysis available.";

pub const UX_RESEARCHER_INSTRUCTION: &str = "You are an expert UX Researcher assisting in usability testing.";
pub const SCRIPT_TEMPERATURE: f32 = 0.7;

const ANALYZE_INSTRUCTION: &str = " Instead of a script, please analyze this screen for usability issues \
                                   (Heuristic Evaluation) and suggest 3 improvements.";

// =============================================================================
// TYPES
// =============================================================================

/// What the user asked the assistant for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssistKind {
    /// A user-testing script for the current screen.
    Script,
    /// A heuristic evaluation with three improvements.
    Analyze,
}

/// Assistant output as the panel sees it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum AssistantState {
    #[default]
    Idle,
    Pending,
    Resolved { text: String },
}

impl AssistantState {
    /// Output text, empty unless resolved.
    #[must_use]
    pub fn output(&self) -> &str {
        match self {
            Self::Resolved { text } => text,
            Self::Idle | Self::Pending => "",
        }
    }
}

/// Why an assistant request fell back to a canned message.
#[derive(Debug, thiserror::Error)]
pub enum AssistError {
    #[error("credential not set")]
    MissingCredential,
    #[error("provider error: {0}")]
    Provider(#[from] LlmError),
    #[error("provider returned no text")]
    EmptyResponse,
}

impl AssistError {
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::MissingCredential => "E_MISSING_CREDENTIAL",
            Self::Provider(e) => e.error_code(),
            Self::EmptyResponse => "E_EMPTY_RESPONSE",
        }
    }

    /// Text shown in the panel for a failed script/analyze request.
    #[must_use]
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::MissingCredential => API_KEY_MISSING_MESSAGE,
            Self::Provider(_) | Self::EmptyResponse => GENERATION_FAILED_MESSAGE,
        }
    }

    /// Text returned for a failed screenshot analysis.
    #[must_use]
    pub fn screenshot_message(&self) -> &'static str {
        match self {
            Self::MissingCredential => API_KEY_MISSING_MESSAGE,
            Self::Provider(_) => SCREENSHOT_FAILED_MESSAGE,
            Self::EmptyResponse => SCREENSHOT_EMPTY_MESSAGE,
        }
    }
}

// =============================================================================
// CONTEXT ASSEMBLY
// =============================================================================

/// Describe the current screen (and selected product, if the screen shows
/// one) in natural language for the text generator.
#[must_use]
pub fn build_context(screen: Screen, selected: Option<&Product>, kind: AssistKind) -> String {
    let mut context = format!("Current Screen: {}. ", screen.slug());
    match (screen, selected) {
        (Screen::ProductDetail, Some(product)) => context.push_str(&format!(
            "Product detail for {}. Shows image, price {}, original {}, expiry {}. Action: Reserve.",
            product.name, product.price, product.original_price, product.expiry_label
        )),
        _ => context.push_str(screen.description()),
    }
    if kind == AssistKind::Analyze {
        context.push_str(ANALYZE_INSTRUCTION);
    }
    context
}

/// Wrap a screen context in the user-testing-script task.
#[must_use]
pub fn build_script_prompt(context: &str) -> String {
    format!(
        "Context: The user is building a prototype for a web application.\n\
         Screen Description/Flow: {context}\n\n\
         Task: Generate a concise User Testing Script (3-5 questions) that a researcher should ask a \
         participant while testing this specific flow. Focus on usability, clarity, and user sentiment.\n\
         Format: Markdown."
    )
}

#[must_use]
pub fn build_screenshot_prompt(description: &str) -> String {
    format!("Analyze this UI screen. Description provided: {description}. Give 3 specific heuristic improvements.")
}

/// Strip a `data:<mime>;base64,` header, leaving the raw base64 payload.
#[must_use]
pub fn strip_data_url(image_data: &str) -> &str {
    match image_data.split_once(',') {
        Some((header, payload)) if header.starts_with("data:") => payload,
        _ => image_data,
    }
}
