//! Assistant service — screen context → text generator → panel text.
//!
//! DESIGN
//! ======
//! A request is split into three steps so the session lock is never held
//! across the outbound call:
//!
//! 1. lock: enter `Pending` and build the context (`Session::begin_assist`)
//! 2. unlocked: read the credential, call the generator once
//! 3. lock: commit the text if this request is still the latest
//!
//! Every failure is logged with its typed cause and then collapsed to the
//! canned panel text. Nothing is retried and no timeout is added here.

use tracing::{info, warn};

use crate::assistant::{
    AssistError, AssistKind, AssistantState, SCRIPT_TEMPERATURE, UX_RESEARCHER_INSTRUCTION, build_screenshot_prompt,
    build_script_prompt, strip_data_url,
};
use crate::llm::types::GenerateRequest;
use crate::session::PendingAssist;
use crate::state::AppState;

const SCREENSHOT_MIME_TYPE: &str = "image/png";

/// Run one script/analyze request against the current screen and return the
/// assistant state afterwards.
pub async fn request_assistance(state: &AppState, kind: AssistKind) -> AssistantState {
    let pending = state.session.lock().await.begin_assist(kind);
    info!(generation = pending.generation, ?kind, context_len = pending.context.len(), "assistant: request");

    let text = match generate_for(state, &pending).await {
        Ok(text) => text,
        Err(e) => {
            warn!(generation = pending.generation, code = e.error_code(), error = %e, "assistant: request failed");
            e.user_message().to_string()
        }
    };

    let mut session = state.session.lock().await;
    if session.resolve_assist(pending.generation, text) {
        info!(generation = pending.generation, "assistant: resolved");
    }
    session.assistant().clone()
}

/// Clear output and return to `Idle`.
pub async fn reset_assistant(state: &AppState) -> AssistantState {
    let mut session = state.session.lock().await;
    session.reset_assistant();
    session.assistant().clone()
}

/// Ask for heuristic improvements of a screen capture. Does not touch the
/// session; the text is returned directly.
pub async fn analyze_screenshot(state: &AppState, image_data: &str, description: &str) -> String {
    let request = GenerateRequest::text(build_screenshot_prompt(description))
        .with_image(SCREENSHOT_MIME_TYPE, strip_data_url(image_data));

    match generate(state, &request).await {
        Ok(text) => text,
        Err(e) => {
            warn!(code = e.error_code(), error = %e, "assistant: screenshot analysis failed");
            e.screenshot_message().to_string()
        }
    }
}

async fn generate_for(state: &AppState, pending: &PendingAssist) -> Result<String, AssistError> {
    let request = GenerateRequest::text(build_script_prompt(&pending.context))
        .with_system(UX_RESEARCHER_INSTRUCTION)
        .with_temperature(SCRIPT_TEMPERATURE);
    generate(state, &request).await
}

async fn generate(state: &AppState, request: &GenerateRequest) -> Result<String, AssistError> {
    let api_key = state
        .credentials
        .api_key()
        .ok_or(AssistError::MissingCredential)?;

    let text = state.generator.generate(&api_key, request).await?;
    if text.trim().is_empty() {
        return Err(AssistError::EmptyResponse);
    }
    Ok(text)
}

#[cfg(test)]
#[path = "assistant_test.rs"]
mod tests;
