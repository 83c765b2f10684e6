//! Rescata — food-waste marketplace prototype server.
//!
//! ARCHITECTURE
//! ============
//! - `screen`, `catalog`: closed screen set and read-only mock data
//! - `session`: the single owned UI state and its transitions
//! - `views`: HTML rendered fully from the session
//! - `assistant`, `services`: AI assistant context and the outbound call
//! - `llm`: text-generation provider clients
//! - `routes`, `state`, `config`: axum wiring

pub mod assistant;
pub mod catalog;
pub mod config;
pub mod llm;
pub mod routes;
pub mod screen;
pub mod services;
pub mod session;
pub mod state;
pub mod views;
