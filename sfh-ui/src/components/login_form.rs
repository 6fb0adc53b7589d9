//! Login form.

use crate::session::use_session;
use crate::state::AppState;
use dioxus::prelude::*;
use sfh_core::auth::kakao_login_url;
use sfh_presenter::board::failure_message;

const INPUT_STYLE: &str = "width: 100%; padding: 10px; margin-bottom: 10px; border: 1px solid #CCC; border-radius: 6px; box-sizing: border-box;";

#[component]
pub fn LoginForm(on_register: EventHandler<()>) -> Element {
    let state = use_context::<AppState>();
    let session = use_session();
    let mut user_id = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);
    let mut pending = use_signal(|| false);
    let kakao_url = kakao_login_url(&state.base_url.read());

    let submit = move |_| async move {
        let Some(client) = state.client() else {
            return;
        };
        if user_id.read().trim().is_empty() || password.read().is_empty() {
            error.set(Some("아이디와 비밀번호를 입력해주세요.".to_string()));
            return;
        }
        pending.set(true);
        let id = user_id();
        let pw = password();
        match session.login(&client, &id, &pw).await {
            Ok(()) => {
                error.set(None);
                password.set(String::new());
            }
            Err(e) => error.set(Some(failure_message(&e, "로그인에 실패했습니다."))),
        }
        pending.set(false);
    };

    rsx! {
        div {
            style: "max-width: 360px; margin: 60px auto; padding: 24px; background: white; border-radius: 10px; box-shadow: 0 2px 8px rgba(0,0,0,0.1);",
            h2 { style: "margin: 0 0 16px 0; text-align: center; color: #2E4B26;", "로그인" }
            if let Some(message) = error() {
                p { style: "color: #C62828; font-size: 14px;", "{message}" }
            }
            input {
                style: INPUT_STYLE,
                placeholder: "아이디",
                value: "{user_id}",
                oninput: move |evt| user_id.set(evt.value()),
            }
            input {
                style: INPUT_STYLE,
                r#type: "password",
                placeholder: "비밀번호",
                value: "{password}",
                oninput: move |evt| password.set(evt.value()),
            }
            button {
                style: "width: 100%; padding: 10px; border: none; border-radius: 6px; background: #61BFAD; color: white; font-size: 15px; cursor: pointer;",
                disabled: pending(),
                onclick: submit,
                "로그인"
            }
            a {
                href: "{kakao_url}",
                style: "display: block; margin-top: 10px; padding: 10px; text-align: center; border-radius: 6px; background: #FEE500; color: #3C1E1E; text-decoration: none;",
                "카카오로 로그인"
            }
            p {
                style: "margin-top: 16px; text-align: center; font-size: 14px;",
                "계정이 없으신가요? "
                a {
                    href: "#",
                    onclick: move |evt| {
                        evt.prevent_default();
                        on_register.call(());
                    },
                    "회원가입"
                }
            }
        }
    }
}
