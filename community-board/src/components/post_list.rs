//! Post list with sort and search.

use crate::LIST_URL;
use dioxus::prelude::*;
use sfh_core::backend::CommunityBackend;
use sfh_core::community::PostSort;
use sfh_ui::components::{ErrorDisplay, LoadingSpinner};
use sfh_ui::state::AppState;

fn load_posts(mut state: AppState) {
    let Some(client) = state.client() else {
        return;
    };
    let (sort, search) = state.board.peek().query();
    state.board.write().begin_load();
    spawn(async move {
        log::info!("Loading posts (sort={}, search={:?})", sort.as_str(), search);
        let posts = client.posts(sort, &search).await;
        state.board.write().apply_posts(posts);
    });
}

fn submit_search(mut state: AppState) {
    if state.board.write().submit_search() {
        load_posts(state);
    }
}

#[component]
pub fn PostList() -> Element {
    let mut state = use_context::<AppState>();
    use_hook(move || load_posts(state));

    let board = state.board.read().clone();
    let sort = board.sort();

    let on_sort = move |evt: Event<FormData>| {
        let Ok(sort) = evt.value().parse::<PostSort>() else {
            return;
        };
        if state.board.write().set_sort(sort) {
            load_posts(state);
        }
    };

    rsx! {
        div {
            style: "max-width: 800px; margin: 24px auto; padding: 0 16px;",
            div {
                style: "display: flex; gap: 8px; align-items: center; margin-bottom: 16px;",
                select {
                    onchange: on_sort,
                    option { value: "new", selected: sort == PostSort::New, "최신순" }
                    option { value: "popular", selected: sort == PostSort::Popular, "인기순" }
                }
                input {
                    style: "flex: 1; padding: 8px; border: 1px solid #CCC; border-radius: 6px;",
                    placeholder: "검색어를 입력하세요",
                    value: board.search_input().to_string(),
                    oninput: move |evt| state.board.write().set_search_input(evt.value()),
                    onkeydown: move |evt| {
                        if evt.key() == Key::Enter {
                            submit_search(state);
                        }
                    },
                }
                button {
                    style: "padding: 8px 14px; border: none; border-radius: 6px; background: #61BFAD; color: white; cursor: pointer;",
                    onclick: move |_| submit_search(state),
                    "검색"
                }
            }
            if let Some(message) = board.error() {
                ErrorDisplay { message: message.to_string() }
            }
            if board.is_loading() {
                LoadingSpinner {}
            } else if board.posts().is_empty() {
                p { style: "padding: 24px; text-align: center; color: #888;", "게시글이 없습니다." }
            } else {
                ul {
                    style: "list-style: none; padding: 0; margin: 0; background: white; border-radius: 8px;",
                    for post in board.posts().iter().cloned() {
                        li {
                            key: "{post.id}",
                            style: "padding: 12px 16px; border-bottom: 1px solid #EEE;",
                            a {
                                href: format!("{}post={}", LIST_URL, post.id),
                                style: "font-size: 16px; color: #2E4B26; text-decoration: none; font-weight: bold;",
                                "{post.title}"
                            }
                            div {
                                style: "margin-top: 4px; font-size: 13px; color: #888;",
                                "{post.nickname} · {post.wdate} · 조회 {post.view} · 좋아요 {post.like_count}"
                            }
                        }
                    }
                }
            }
        }
    }
}
