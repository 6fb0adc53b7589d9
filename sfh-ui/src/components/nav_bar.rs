//! Top navigation with the notification bell and logout.

use crate::bridge;
use crate::session::use_session;
use crate::state::AppState;
use dioxus::prelude::*;

#[component]
pub fn NavBar(title: String) -> Element {
    let state = use_context::<AppState>();
    let session = use_session();
    let nickname = session
        .user
        .read()
        .as_ref()
        .map(|u| if u.nickname.is_empty() { u.user_id.clone() } else { u.nickname.clone() });

    let logout = move |_| async move {
        if let Some(client) = state.client() {
            session.logout(&client).await;
        }
    };

    rsx! {
        nav {
            style: "display: flex; align-items: center; gap: 16px; padding: 12px 24px; background: #2E4B26; color: white;",
            strong { style: "flex: 1; font-size: 18px;", "{title}" }
            if let Some(name) = nickname {
                NotificationBell {}
                span { "{name}님" }
                button {
                    style: "padding: 6px 12px; border: 1px solid white; border-radius: 6px; background: transparent; color: white; cursor: pointer;",
                    onclick: logout,
                    "로그아웃"
                }
            }
        }
    }
}

/// Bell with an unread badge. Clicking a notification deletes it on the
/// server and follows its link.
#[component]
pub fn NotificationBell() -> Element {
    let state = use_context::<AppState>();
    let session = use_session();
    let mut open = use_signal(|| false);
    use_hook(move || {
        let mut session = session;
        if let Some(client) = state.client() {
            session.start_notifications(client);
        }
    });
    let (items, unread) = {
        let inbox = session.inbox.read();
        (inbox.items().to_vec(), inbox.unread())
    };

    let open_item = move |notification_id: i64| async move {
        let Some(client) = state.client() else {
            return;
        };
        open.set(false);
        if let Some(url) = session.open_notification(&client, notification_id).await {
            if !url.is_empty() {
                bridge::navigate(&url);
            }
        }
    };

    rsx! {
        div {
            style: "position: relative;",
            button {
                style: "position: relative; border: none; background: none; font-size: 20px; color: white; cursor: pointer;",
                onclick: move |_| open.toggle(),
                "🔔"
                if unread > 0 {
                    span {
                        style: "position: absolute; top: -4px; right: -8px; min-width: 18px; padding: 0 4px; border-radius: 9px; background: #E53935; color: white; font-size: 11px; line-height: 18px;",
                        "{unread}"
                    }
                }
            }
            if open() {
                div {
                    style: "position: absolute; right: 0; top: 32px; width: 280px; max-height: 320px; overflow-y: auto; background: white; color: #333; border-radius: 8px; box-shadow: 0 4px 12px rgba(0,0,0,0.2); z-index: 50;",
                    if items.is_empty() {
                        p { style: "padding: 12px; margin: 0; color: #888;", "새 알림이 없습니다." }
                    }
                    for item in items {
                        div {
                            key: "{item.id}",
                            style: "padding: 10px 12px; border-bottom: 1px solid #EEE; cursor: pointer;",
                            onclick: move |_| open_item(item.id),
                            "{item.message}"
                        }
                    }
                }
            }
        }
    }
}
