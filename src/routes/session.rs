//! Screen, catalog, and draft routes.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{Html, Json};
use serde::Deserialize;
use tracing::info;

use crate::catalog::{self, Product};
use crate::screen::{Screen, ScreenParseError};
use crate::session::{DraftPatch, DraftProduct, SessionError, SessionSnapshot};
use crate::state::AppState;
use crate::views;

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;

#[derive(Debug, Deserialize)]
pub struct NavigateBody {
    pub screen: String,
}

#[derive(Debug, Deserialize)]
pub struct ScrollBody {
    pub offset: u32,
}

/// `GET /` — render the active screen.
pub async fn page(State(state): State<AppState>) -> Html<String> {
    let session = state.session.lock().await;
    Html(views::render(&session))
}

/// `GET /api/state` — full session snapshot.
pub async fn get_state(State(state): State<AppState>) -> Json<SessionSnapshot> {
    Json(state.session.lock().await.snapshot())
}

/// `GET /api/products` — the read-only catalog.
pub async fn list_products() -> Json<&'static [Product]> {
    Json(catalog::products())
}

/// `GET /api/products/:id`
pub async fn get_product(Path(id): Path<String>) -> Result<Json<&'static Product>, StatusCode> {
    catalog::find_product(&id)
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

/// `POST /api/products/:id/select` — select a product and open its detail.
pub async fn select_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<SessionSnapshot>, StatusCode> {
    let mut session = state.session.lock().await;
    session
        .select_product_by_id(&id)
        .map_err(session_error_to_status)?;
    Ok(Json(session.snapshot()))
}

/// `POST /api/navigate` — switch screens.
pub async fn navigate(
    State(state): State<AppState>,
    Json(body): Json<NavigateBody>,
) -> Result<Json<SessionSnapshot>, StatusCode> {
    let target: Screen = body
        .screen
        .parse()
        .map_err(|e: ScreenParseError| {
            info!(error = %e, "navigate: rejected");
            StatusCode::BAD_REQUEST
        })?;
    let mut session = state.session.lock().await;
    session.navigate(target);
    Ok(Json(session.snapshot()))
}

/// `POST /api/back` — follow the current screen's back control.
pub async fn back(State(state): State<AppState>) -> Json<SessionSnapshot> {
    let mut session = state.session.lock().await;
    session.back();
    Json(session.snapshot())
}

/// `POST /api/forward` — follow the current screen's primary action.
pub async fn forward(State(state): State<AppState>) -> Json<SessionSnapshot> {
    let mut session = state.session.lock().await;
    session.forward();
    Json(session.snapshot())
}

/// `POST /api/scroll` — record the viewport offset.
pub async fn scroll(State(state): State<AppState>, Json(body): Json<ScrollBody>) -> Json<SessionSnapshot> {
    let mut session = state.session.lock().await;
    session.scroll_to(body.offset);
    Json(session.snapshot())
}

/// `GET /api/draft`
pub async fn get_draft(State(state): State<AppState>) -> Json<DraftProduct> {
    Json(state.session.lock().await.draft().clone())
}

/// `PATCH /api/draft` — update any subset of draft fields.
pub async fn patch_draft(State(state): State<AppState>, Json(patch): Json<DraftPatch>) -> Json<DraftProduct> {
    let mut session = state.session.lock().await;
    session.apply_draft_patch(patch);
    Json(session.draft().clone())
}

/// `POST /api/draft/stock/increment`
pub async fn increment_stock(State(state): State<AppState>) -> Json<DraftProduct> {
    let mut session = state.session.lock().await;
    session.increment_stock();
    Json(session.draft().clone())
}

/// `POST /api/draft/stock/decrement` — never goes below zero.
pub async fn decrement_stock(State(state): State<AppState>) -> Json<DraftProduct> {
    let mut session = state.session.lock().await;
    session.decrement_stock();
    Json(session.draft().clone())
}

/// `POST /api/draft/publish` — discard the draft and return to the dashboard.
pub async fn publish_draft(State(state): State<AppState>) -> Json<SessionSnapshot> {
    let mut session = state.session.lock().await;
    session.publish_draft();
    Json(session.snapshot())
}

pub(crate) fn session_error_to_status(err: SessionError) -> StatusCode {
    match err {
        SessionError::ProductNotFound(_) => StatusCode::NOT_FOUND,
    }
}
