//! Shared Dioxus components and browser glue for Smart Farm Hub apps.
//!
//! This crate provides:
//! - `actions`: farm page commands (fetch, then apply to the presenter)
//! - `config`: API base URL and URL helpers
//! - `state`: reactive `AppState` wrapping the presenter and the HTTP client
//! - `session`: process-wide login state and the notification poller
//! - `poller`: a periodic task cancelled on drop
//! - `bridge`: `confirm`/`alert`, navigation and scroll helpers
//! - `components`: reusable RSX components

pub mod actions;
pub mod bridge;
pub mod components;
pub mod config;
pub mod poller;
pub mod session;
pub mod state;
