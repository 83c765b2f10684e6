//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every HTTP request is one user event against the single prototype
//! session. `GET /` renders the active screen as HTML; everything under
//! `/api` is a JSON transition endpoint returning the updated state.

pub mod assistant;
pub mod session;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Full application router.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(session::page))
        .route("/api/state", get(session::get_state))
        .route("/api/products", get(session::list_products))
        .route("/api/products/{id}", get(session::get_product))
        .route("/api/products/{id}/select", post(session::select_product))
        .route("/api/navigate", post(session::navigate))
        .route("/api/back", post(session::back))
        .route("/api/forward", post(session::forward))
        .route("/api/scroll", post(session::scroll))
        .route("/api/draft", get(session::get_draft).patch(session::patch_draft))
        .route("/api/draft/stock/increment", post(session::increment_stock))
        .route("/api/draft/stock/decrement", post(session::decrement_stock))
        .route("/api/draft/publish", post(session::publish_draft))
        .route(
            "/api/assistant",
            get(assistant::get_assistant)
                .post(assistant::request_assistance)
                .delete(assistant::reset_assistant),
        )
        .route("/api/assistant/open", post(assistant::open_panel))
        .route("/api/assistant/close", post(assistant::close_panel))
        .route("/api/assistant/screenshot", post(assistant::analyze_screenshot))
        .route("/healthz", get(healthz))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
