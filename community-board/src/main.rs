//! Community board
//!
//! Logged-in users browse posts (sorted by date or popularity, optionally
//! filtered by a submitted search), open a post with `?post=N`, like it,
//! comment on it and report or delete posts and comments. The bell in the
//! navigation bar polls notifications once a minute while logged in.

use dioxus::prelude::*;
use sfh_ui::components::{LoadingSpinner, LoginForm, NavBar, RegisterForm};
use sfh_ui::config;
use sfh_ui::session::SessionState;
use sfh_ui::state::AppState;

mod components;

use components::{PostDetailView, PostList};

/// Link back to the post list: the same page without a query.
pub(crate) const LIST_URL: &str = "?";

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("community-board-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let state = use_context_provider(AppState::new);
    let session = use_context_provider(SessionState::new);
    let mut registering = use_signal(|| false);
    let post_id = use_hook(|| config::query_id(&config::page_query(), "post"));

    use_effect(move || {
        if let Some(client) = state.client() {
            session.init(client);
        }
    });

    let checked = (session.checked)();
    let logged_in = session.is_logged_in();

    rsx! {
        div {
            style: "min-height: 100vh; background: #EEF2EA; font-family: sans-serif;",
            NavBar { title: "스마트팜 커뮤니티" }
            if !checked {
                LoadingSpinner {}
            } else if !logged_in {
                if registering() {
                    RegisterForm { on_done: move |_| registering.set(false) }
                } else {
                    LoginForm { on_register: move |_| registering.set(true) }
                }
            } else {
                match post_id {
                    Some(post_id) => rsx! { PostDetailView { post_id } },
                    None => rsx! { PostList {} },
                }
            }
        }
    }
}
