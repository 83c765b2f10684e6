//! Services used by HTTP routes.
//!
//! ARCHITECTURE
//! ============
//! Service modules own the async work (outbound generation calls) so route
//! handlers stay focused on protocol translation.

pub mod assistant;
