//! One post with its comments.
//!
//! Reports and deletions ask for confirmation first. A missing post shows
//! the error and returns to the list after a short delay.

use crate::LIST_URL;
use dioxus::prelude::*;
use sfh_core::backend::CommunityBackend;
use sfh_presenter::board::{failure_message, report_message};
use sfh_ui::bridge;
use sfh_ui::components::{ErrorDisplay, LoadingSpinner};
use sfh_ui::state::AppState;

const SERVER_ERROR: &str = "서버와의 통신 중 오류가 발생했습니다.";
const LINK_BUTTON_STYLE: &str = "border: none; background: none; color: #888; font-size: 12px; cursor: pointer;";

fn load_post(mut state: AppState, post_id: i64) {
    let Some(client) = state.client() else {
        return;
    };
    spawn(async move {
        let detail = client.post(post_id).await;
        state.post.write().apply_detail(detail);
        let redirect = state.post.read().redirect_after();
        if let Some(delay) = redirect {
            bridge::redirect_after(LIST_URL.to_string(), delay).await;
        }
    });
}

fn toggle_like(mut state: AppState, post_id: i64) {
    let Some(client) = state.client() else {
        return;
    };
    spawn(async move {
        let like = client.toggle_like(post_id).await;
        let failure = state.post.write().apply_like(like);
        if let Some(message) = failure {
            bridge::alert(&message);
        }
    });
}

fn report_post(state: AppState, post_id: i64) {
    let Some(client) = state.client() else {
        return;
    };
    if !bridge::confirm("이 게시글을 신고하시겠습니까?") {
        return;
    }
    spawn(async move {
        let ack = client.report_post(post_id).await;
        bridge::alert(&report_message(ack));
    });
}

fn delete_post(state: AppState, post_id: i64) {
    let Some(client) = state.client() else {
        return;
    };
    if !bridge::confirm("게시글을 삭제하시겠습니까?") {
        return;
    }
    spawn(async move {
        match client.delete_post(post_id).await {
            Ok(()) => {
                log::info!("Deleted post {}", post_id);
                bridge::alert("게시글이 삭제되었습니다.");
                bridge::navigate(LIST_URL);
            }
            Err(e) => bridge::alert(&failure_message(&e, SERVER_ERROR)),
        }
    });
}

fn add_comment(mut state: AppState, post_id: i64) {
    let Some(client) = state.client() else {
        return;
    };
    let Some(content) = state.post.read().comment_to_send() else {
        return;
    };
    spawn(async move {
        let result = client.add_comment(post_id, &content).await;
        let failure = state.post.write().apply_comment_added(result);
        match failure {
            Some(message) => bridge::alert(&message),
            None => load_post(state, post_id),
        }
    });
}

fn report_comment(state: AppState, comment_id: i64) {
    let Some(client) = state.client() else {
        return;
    };
    if !bridge::confirm("이 댓글을 신고하시겠습니까?") {
        return;
    }
    spawn(async move {
        let ack = client.report_comment(comment_id).await;
        bridge::alert(&report_message(ack));
    });
}

fn delete_comment(mut state: AppState, comment_id: i64) {
    let Some(client) = state.client() else {
        return;
    };
    if !bridge::confirm("댓글을 삭제하시겠습니까?") {
        return;
    }
    spawn(async move {
        let result = client.delete_comment(comment_id).await;
        let failure = state.post.write().apply_comment_deleted(comment_id, result);
        if let Some(message) = failure {
            bridge::alert(&message);
        }
    });
}

#[component]
pub fn PostDetailView(post_id: i64) -> Element {
    let mut state = use_context::<AppState>();
    use_hook(move || load_post(state, post_id));

    let view = state.post.read().clone();
    if let Some(message) = view.error() {
        return rsx! {
            div {
                style: "max-width: 800px; margin: 24px auto; padding: 0 16px;",
                ErrorDisplay { message: message.to_string() }
                if view.redirect_after().is_some() {
                    p { style: "color: #888;", "잠시 후 목록으로 이동합니다." }
                }
            }
        };
    }
    let Some(post) = view.post().cloned() else {
        return rsx! { LoadingSpinner {} };
    };
    let comments = view.comments().to_vec();
    let comment_heading = format!("댓글 {}", comments.len());
    let like_label = format!(
        "{} {}",
        if post.is_liked { "♥" } else { "♡" },
        post.like_count
    );

    rsx! {
        div {
            style: "max-width: 800px; margin: 24px auto; padding: 0 16px;",
            a { href: LIST_URL, style: "color: #2E4B26;", "← 목록으로" }
            article {
                style: "margin-top: 12px; padding: 20px; background: white; border-radius: 8px;",
                h2 { style: "margin: 0 0 8px 0;", "{post.title}" }
                div {
                    style: "font-size: 13px; color: #888; margin-bottom: 16px;",
                    "{post.nickname} · {post.wdate} · 조회 {post.view}"
                }
                p { style: "white-space: pre-wrap; line-height: 1.6;", "{post.content}" }
                div {
                    style: "display: flex; gap: 8px; margin-top: 16px;",
                    button {
                        style: "padding: 6px 12px; border: 1px solid #E57373; border-radius: 16px; background: white; color: #E57373; cursor: pointer;",
                        onclick: move |_| toggle_like(state, post_id),
                        "{like_label}"
                    }
                    if post.is_author {
                        button {
                            style: LINK_BUTTON_STYLE,
                            onclick: move |_| delete_post(state, post_id),
                            "삭제"
                        }
                    } else {
                        button {
                            style: LINK_BUTTON_STYLE,
                            onclick: move |_| report_post(state, post_id),
                            "신고"
                        }
                    }
                }
            }
            section {
                style: "margin-top: 16px; padding: 20px; background: white; border-radius: 8px;",
                h3 { style: "margin: 0 0 12px 0;", "{comment_heading}" }
                for comment in comments {
                    div {
                        key: "{comment.id}",
                        style: "padding: 10px 0; border-bottom: 1px solid #EEE;",
                        div {
                            style: "display: flex; gap: 8px; align-items: center; font-size: 13px; color: #888;",
                            strong { style: "color: #333;", "{comment.commenter}" }
                            span { {comment.display_date().to_string()} }
                            if comment.is_author {
                                button {
                                    style: LINK_BUTTON_STYLE,
                                    onclick: move |_| delete_comment(state, comment.id),
                                    "삭제"
                                }
                            } else {
                                button {
                                    style: LINK_BUTTON_STYLE,
                                    onclick: move |_| report_comment(state, comment.id),
                                    "신고"
                                }
                            }
                        }
                        p { style: "margin: 4px 0 0 0; white-space: pre-wrap;", "{comment.content}" }
                    }
                }
                div {
                    style: "display: flex; gap: 8px; margin-top: 12px;",
                    input {
                        style: "flex: 1; padding: 8px; border: 1px solid #CCC; border-radius: 6px;",
                        placeholder: "댓글을 입력하세요",
                        value: view.comment_input().to_string(),
                        oninput: move |evt| state.post.write().set_comment_input(evt.value()),
                    }
                    button {
                        style: "padding: 8px 14px; border: none; border-radius: 6px; background: #61BFAD; color: white; cursor: pointer;",
                        onclick: move |_| add_comment(state, post_id),
                        "등록"
                    }
                }
            }
        }
    }
}
