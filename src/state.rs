//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! owns the one prototype `Session` plus the text generator and credential
//! source the assistant uses. Handlers lock the session only around
//! synchronous transitions and never across the outbound generation call.

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::llm::{Credentials, TextGenerator};
use crate::session::Session;

/// Cloned per request by Axum. All inner fields are Arc-wrapped.
#[derive(Clone)]
pub struct AppState {
    pub session: Arc<Mutex<Session>>,
    pub generator: Arc<dyn TextGenerator>,
    pub credentials: Arc<dyn Credentials>,
}

impl AppState {
    #[must_use]
    pub fn new(generator: Arc<dyn TextGenerator>, credentials: Arc<dyn Credentials>) -> Self {
        Self { session: Arc::new(Mutex::new(Session::new())), generator, credentials }
    }
}
