//! Application state managed via Dioxus context.
//!
//! `AppState` bundles the reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with
//! `use_context::<AppState>()`.
//!
//! Network calls follow one rule: clone the client out of `api`, await the
//! `ops::fetch_*` function without holding any signal borrow, then write the
//! outcome through the presenter's matching `apply_*` method.

use crate::bridge;
use crate::config;
use dioxus::prelude::*;
use sfh_core::client::HttpClient;
use sfh_presenter::board::{BoardState, PostView};
use sfh_presenter::GreenhousePresenter;

/// Shared application state for Smart Farm Hub apps.
#[derive(Clone, Copy)]
pub struct AppState {
    /// HTTP client (None if it could not be built)
    pub api: Signal<Option<HttpClient>>,
    /// Base URL the client talks to, also used for image links
    pub base_url: Signal<String>,
    /// Whether the initial load is still running
    pub loading: Signal<bool>,
    /// Error message if something went wrong outside the presenter
    pub error_msg: Signal<Option<String>>,
    /// Farm detail page state
    pub farm: Signal<GreenhousePresenter>,
    /// Community post list
    pub board: Signal<BoardState>,
    /// Community post detail
    pub post: Signal<PostView>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new() -> Self {
        let base_url = config::api_base_url();
        let (api, error_msg) = match HttpClient::new(base_url.clone()) {
            Ok(client) => (Some(client), None),
            Err(e) => {
                log::error!("Failed to build HTTP client: {}", e);
                (None, Some(e.user_message()))
            }
        };
        Self {
            api: Signal::new(api),
            base_url: Signal::new(base_url),
            loading: Signal::new(true),
            error_msg: Signal::new(error_msg),
            farm: Signal::new(GreenhousePresenter::default()),
            board: Signal::new(BoardState::default()),
            post: Signal::new(PostView::default()),
        }
    }

    /// A clone of the HTTP client, safe to move into an async block.
    pub fn client(&self) -> Option<HttpClient> {
        self.api.read().clone()
    }

    /// Show the farm presenter's pending notice, if any, as an alert.
    pub fn flush_notice(&mut self) {
        let notice = self.farm.write().take_notice();
        if let Some(notice) = notice {
            bridge::alert(&notice);
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
