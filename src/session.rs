//! Session — the single owned UI state and its transitions.
//!
//! DESIGN
//! ======
//! One `Session` holds everything a screen renders from: the active screen,
//! the selected product, the add-product draft, the viewport offset, and the
//! assistant panel. Fields are private; every mutation is a named method so
//! the invariants below are enforced in one place:
//!
//! - a product is selected whenever the screen requires one
//! - draft stock never goes below zero
//! - only the most recently issued assistant request may commit its text

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::assistant::{AssistKind, AssistantState, build_context};
use crate::catalog::{self, Product};
use crate::screen::Screen;

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;

const DEFAULT_DRAFT_STOCK: u32 = 1;

// =============================================================================
// ERRORS
// =============================================================================

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("product not found: {0}")]
    ProductNotFound(String),
}

// =============================================================================
// DRAFT PRODUCT
// =============================================================================

/// In-progress listing built across the two add-product screens.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DraftProduct {
    pub name: String,
    pub category: String,
    pub stock: u32,
    pub price: f64,
    pub original_price: f64,
}

impl Default for DraftProduct {
    fn default() -> Self {
        Self {
            name: String::new(),
            category: String::new(),
            stock: DEFAULT_DRAFT_STOCK,
            price: 0.0,
            original_price: 0.0,
        }
    }
}

/// Partial draft update. Absent fields are left untouched.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DraftPatch {
    pub name: Option<String>,
    pub category: Option<String>,
    /// Signed so that negative input can be clamped rather than rejected.
    pub stock: Option<i64>,
    pub price: Option<f64>,
    pub original_price: Option<f64>,
}

// =============================================================================
// PENDING ASSIST
// =============================================================================

/// Ticket for an assistant request that has entered `Pending`.
#[derive(Debug, Clone)]
pub struct PendingAssist {
    pub generation: u64,
    pub kind: AssistKind,
    pub context: String,
}

// =============================================================================
// SESSION
// =============================================================================

#[derive(Debug, Clone, Default)]
pub struct Session {
    screen: Screen,
    selected_product: Option<Product>,
    draft: DraftProduct,
    scroll_top: u32,
    assistant_open: bool,
    assistant: AssistantState,
    generation: u64,
}

/// Serializable copy of the whole session.
#[derive(Debug, Clone, Serialize)]
pub struct SessionSnapshot {
    pub screen: Screen,
    pub selected_product: Option<Product>,
    pub draft: DraftProduct,
    pub scroll_top: u32,
    pub assistant_open: bool,
    pub assistant: AssistantState,
}

impl Session {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn screen(&self) -> Screen {
        self.screen
    }

    #[must_use]
    pub fn selected_product(&self) -> Option<&Product> {
        self.selected_product.as_ref()
    }

    #[must_use]
    pub fn draft(&self) -> &DraftProduct {
        &self.draft
    }

    #[must_use]
    pub fn scroll_top(&self) -> u32 {
        self.scroll_top
    }

    #[must_use]
    pub fn assistant_open(&self) -> bool {
        self.assistant_open
    }

    #[must_use]
    pub fn assistant(&self) -> &AssistantState {
        &self.assistant
    }

    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            screen: self.screen,
            selected_product: self.selected_product.clone(),
            draft: self.draft.clone(),
            scroll_top: self.scroll_top,
            assistant_open: self.assistant_open,
            assistant: self.assistant.clone(),
        }
    }

    // -------------------------------------------------------------------------
    // Navigation
    // -------------------------------------------------------------------------

    /// Make `target` the active screen and scroll back to the top.
    ///
    /// Never fails. A product-dependent target with nothing selected lands on
    /// the consumer feed instead, and leaving the order flow drops the
    /// selection.
    pub fn navigate(&mut self, target: Screen) {
        let target = if target.requires_product() && self.selected_product.is_none() {
            warn!(%target, "navigate: no product selected, showing consumer feed");
            Screen::ConsumerHome
        } else {
            target
        };

        if !target.keeps_selection() {
            self.selected_product = None;
        }

        debug!(from = %self.screen, to = %target, "navigate");
        self.screen = target;
        self.scroll_top = 0;
    }

    /// Select a catalog entry and open its detail screen.
    pub fn select_product(&mut self, product: Product) {
        info!(product_id = %product.id, "select product");
        self.selected_product = Some(product);
        self.navigate(Screen::ProductDetail);
    }

    /// # Errors
    ///
    /// Returns [`SessionError::ProductNotFound`] if `id` is not in the catalog.
    pub fn select_product_by_id(&mut self, id: &str) -> Result<(), SessionError> {
        let product = catalog::find_product(id).ok_or_else(|| SessionError::ProductNotFound(id.to_string()))?;
        self.select_product(product.clone());
        Ok(())
    }

    /// Follow the current screen's back control.
    pub fn back(&mut self) {
        self.navigate(self.screen.back_target());
    }

    /// Follow the current screen's primary action. Publishing from the second
    /// add-product step also discards the draft.
    pub fn forward(&mut self) {
        match (self.screen, self.screen.forward_target()) {
            (Screen::AddProduct2, _) => self.publish_draft(),
            (_, Some(target)) => self.navigate(target),
            (_, None) => {}
        }
    }

    pub fn scroll_to(&mut self, offset: u32) {
        self.scroll_top = offset;
    }

    // -------------------------------------------------------------------------
    // Draft
    // -------------------------------------------------------------------------

    pub fn set_draft_name(&mut self, name: impl Into<String>) {
        self.draft.name = name.into();
    }

    pub fn set_draft_category(&mut self, category: impl Into<String>) {
        self.draft.category = category.into();
    }

    pub fn set_draft_price(&mut self, price: f64) {
        self.draft.price = price;
    }

    pub fn set_draft_original_price(&mut self, original_price: f64) {
        self.draft.original_price = original_price;
    }

    /// Set stock from untrusted input, clamped into `0..=u32::MAX`.
    pub fn set_draft_stock(&mut self, stock: i64) {
        self.draft.stock = u32::try_from(stock.max(0)).unwrap_or(u32::MAX);
    }

    pub fn increment_stock(&mut self) {
        self.draft.stock = self.draft.stock.saturating_add(1);
    }

    pub fn decrement_stock(&mut self) {
        self.draft.stock = self.draft.stock.saturating_sub(1);
    }

    pub fn apply_draft_patch(&mut self, patch: DraftPatch) {
        if let Some(name) = patch.name {
            self.set_draft_name(name);
        }
        if let Some(category) = patch.category {
            self.set_draft_category(category);
        }
        if let Some(stock) = patch.stock {
            self.set_draft_stock(stock);
        }
        if let Some(price) = patch.price {
            self.set_draft_price(price);
        }
        if let Some(original_price) = patch.original_price {
            self.set_draft_original_price(original_price);
        }
    }

    /// Discard the draft and return to the vendor dashboard. Nothing is stored.
    pub fn publish_draft(&mut self) {
        info!(name = %self.draft.name, stock = self.draft.stock, "publish draft (discarded)");
        self.draft = DraftProduct::default();
        self.navigate(Screen::VendorHome);
    }

    // -------------------------------------------------------------------------
    // Assistant
    // -------------------------------------------------------------------------

    pub fn open_assistant(&mut self) {
        self.assistant_open = true;
    }

    /// Hide the panel. An in-flight request still commits its result.
    pub fn close_assistant(&mut self) {
        self.assistant_open = false;
    }

    /// Enter `Pending`, clear prior output, and build the request context
    /// from the current screen.
    pub fn begin_assist(&mut self, kind: AssistKind) -> PendingAssist {
        self.generation += 1;
        self.assistant = AssistantState::Pending;
        PendingAssist {
            generation: self.generation,
            kind,
            context: build_context(self.screen, self.selected_product.as_ref(), kind),
        }
    }

    /// Commit a resolved request. Returns `false` (and changes nothing) when
    /// a newer request or a reset has superseded `generation`.
    pub fn resolve_assist(&mut self, generation: u64, text: String) -> bool {
        if generation != self.generation {
            debug!(generation, current = self.generation, "assistant: discarding stale response");
            return false;
        }
        self.assistant = AssistantState::Resolved { text };
        true
    }

    /// Clear output and return to `Idle`. Any request still in flight is
    /// superseded.
    pub fn reset_assistant(&mut self) {
        self.generation += 1;
        self.assistant = AssistantState::Idle;
    }
}
