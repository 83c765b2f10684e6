//! Assistant panel routes.

use axum::extract::State;
use axum::response::Json;
use serde::{Deserialize, Serialize};

use crate::assistant::{AssistKind, AssistantState};
use crate::services;
use crate::session::SessionSnapshot;
use crate::state::AppState;

#[cfg(test)]
#[path = "assistant_test.rs"]
mod tests;

#[derive(Debug, Deserialize)]
pub struct AssistBody {
    pub kind: AssistKind,
}

#[derive(Debug, Deserialize)]
pub struct ScreenshotBody {
    pub image_data: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Serialize)]
pub struct ScreenshotResponse {
    pub text: String,
}

/// `GET /api/assistant`
pub async fn get_assistant(State(state): State<AppState>) -> Json<AssistantState> {
    Json(state.session.lock().await.assistant().clone())
}

/// `POST /api/assistant` — run one script/analyze request and wait for it.
pub async fn request_assistance(State(state): State<AppState>, Json(body): Json<AssistBody>) -> Json<AssistantState> {
    Json(services::assistant::request_assistance(&state, body.kind).await)
}

/// `DELETE /api/assistant` — clear output, back to idle.
pub async fn reset_assistant(State(state): State<AppState>) -> Json<AssistantState> {
    Json(services::assistant::reset_assistant(&state).await)
}

/// `POST /api/assistant/open`
pub async fn open_panel(State(state): State<AppState>) -> Json<SessionSnapshot> {
    let mut session = state.session.lock().await;
    session.open_assistant();
    Json(session.snapshot())
}

/// `POST /api/assistant/close` — hide the panel; in-flight requests still land.
pub async fn close_panel(State(state): State<AppState>) -> Json<SessionSnapshot> {
    let mut session = state.session.lock().await;
    session.close_assistant();
    Json(session.snapshot())
}

/// `POST /api/assistant/screenshot` — heuristic review of an uploaded capture.
pub async fn analyze_screenshot(
    State(state): State<AppState>,
    Json(body): Json<ScreenshotBody>,
) -> Json<ScreenshotResponse> {
    let text = services::assistant::analyze_screenshot(&state, &body.image_data, &body.description).await;
    Json(ScreenshotResponse { text })
}
