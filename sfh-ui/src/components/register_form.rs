//! Registration form with email verification.
//!
//! The code is mailed with `send_code` and checked with `check_code`. The
//! form can only be submitted once the server has confirmed the code.

use crate::bridge;
use crate::state::AppState;
use dioxus::prelude::*;
use log::info;
use sfh_core::auth::RegisterForm as Form;
use sfh_core::backend::AuthBackend;
use sfh_presenter::board::failure_message;

const INPUT_STYLE: &str = "width: 100%; padding: 10px; margin-bottom: 10px; border: 1px solid #CCC; border-radius: 6px; box-sizing: border-box;";
const SMALL_BUTTON_STYLE: &str = "padding: 10px 12px; margin-bottom: 10px; border: none; border-radius: 6px; background: #8FBC8F; color: white; white-space: nowrap; cursor: pointer;";
const SERVER_ERROR: &str = "서버와의 통신 중 오류가 발생했습니다.";

#[component]
pub fn RegisterForm(on_done: EventHandler<()>) -> Element {
    let state = use_context::<AppState>();
    let mut form = use_signal(Form::default);
    let mut code = use_signal(String::new);
    let mut code_sent = use_signal(|| false);
    let mut verified = use_signal(|| false);
    let mut message = use_signal(|| None::<String>);

    let send_code = move |_| async move {
        let Some(client) = state.client() else {
            return;
        };
        let email = form.read().email();
        if email.is_empty() {
            message.set(Some("이메일을 입력해주세요.".to_string()));
            return;
        }
        match client.send_code(&email).await {
            Ok(()) => {
                code_sent.set(true);
                verified.set(false);
                message.set(Some("인증 코드가 전송되었습니다.".to_string()));
            }
            Err(e) => message.set(Some(failure_message(&e, SERVER_ERROR))),
        }
    };

    let check_code = move |_| async move {
        let Some(client) = state.client() else {
            return;
        };
        let entered = code.read().trim().to_string();
        if entered.is_empty() {
            message.set(Some("인증 코드를 입력해주세요.".to_string()));
            return;
        }
        match client.check_code(&entered).await {
            Ok(check) => {
                verified.set(check.verified);
                let fallback = if check.verified {
                    "이메일 인증이 완료되었습니다."
                } else {
                    "인증 코드가 올바르지 않습니다."
                };
                message.set(Some(check.message.unwrap_or_else(|| fallback.to_string())));
            }
            Err(e) => message.set(Some(failure_message(&e, SERVER_ERROR))),
        }
    };

    let submit = move |_| async move {
        let Some(client) = state.client() else {
            return;
        };
        let request = match form.read().validate(verified()) {
            Ok(request) => request,
            Err(e) => {
                message.set(Some(e.user_message()));
                return;
            }
        };
        match client.register(&request).await {
            Ok(()) => {
                info!("Registered {}", request.id);
                bridge::alert("회원가입이 완료되었습니다.");
                on_done.call(());
            }
            Err(e) => message.set(Some(failure_message(&e, SERVER_ERROR))),
        }
    };

    let current = form.read().clone();

    rsx! {
        div {
            style: "max-width: 420px; margin: 40px auto; padding: 24px; background: white; border-radius: 10px; box-shadow: 0 2px 8px rgba(0,0,0,0.1);",
            h2 { style: "margin: 0 0 16px 0; text-align: center; color: #2E4B26;", "회원가입" }
            if let Some(text) = message() {
                p { style: "color: #2E4B26; font-size: 14px;", "{text}" }
            }
            input {
                style: INPUT_STYLE,
                placeholder: "아이디",
                value: current.id.clone(),
                oninput: move |evt| form.write().id = evt.value(),
            }
            input {
                style: INPUT_STYLE,
                r#type: "password",
                placeholder: "비밀번호",
                value: current.password.clone(),
                oninput: move |evt| form.write().password = evt.value(),
            }
            input {
                style: INPUT_STYLE,
                r#type: "password",
                placeholder: "비밀번호 확인",
                value: current.password_confirm.clone(),
                oninput: move |evt| form.write().password_confirm = evt.value(),
            }
            input {
                style: INPUT_STYLE,
                placeholder: "닉네임",
                value: current.nickname.clone(),
                oninput: move |evt| form.write().nickname = evt.value(),
            }
            input {
                style: INPUT_STYLE,
                placeholder: "이름",
                value: current.name.clone(),
                oninput: move |evt| form.write().name = evt.value(),
            }
            div {
                style: "display: flex; gap: 6px; align-items: center;",
                input {
                    style: INPUT_STYLE,
                    placeholder: "이메일",
                    value: current.email_local.clone(),
                    oninput: move |evt| {
                        form.write().email_local = evt.value();
                        verified.set(false);
                    },
                }
                span { style: "margin-bottom: 10px;", "@" }
                input {
                    style: INPUT_STYLE,
                    placeholder: "example.com",
                    list: "email-domains",
                    value: current.email_domain.clone(),
                    oninput: move |evt| {
                        form.write().email_domain = evt.value();
                        verified.set(false);
                    },
                }
                datalist {
                    id: "email-domains",
                    option { value: "naver.com" }
                    option { value: "gmail.com" }
                    option { value: "daum.net" }
                }
                button { style: SMALL_BUTTON_STYLE, onclick: send_code, "코드 전송" }
            }
            if code_sent() {
                div {
                    style: "display: flex; gap: 6px;",
                    input {
                        style: INPUT_STYLE,
                        placeholder: "인증 코드",
                        value: "{code}",
                        disabled: verified(),
                        oninput: move |evt| code.set(evt.value()),
                    }
                    button {
                        style: SMALL_BUTTON_STYLE,
                        disabled: verified(),
                        onclick: check_code,
                        if verified() { "인증 완료" } else { "확인" }
                    }
                }
            }
            button {
                style: "width: 100%; padding: 10px; border: none; border-radius: 6px; background: #61BFAD; color: white; font-size: 15px; cursor: pointer;",
                onclick: submit,
                "가입하기"
            }
            p {
                style: "margin-top: 16px; text-align: center; font-size: 14px;",
                a {
                    href: "#",
                    onclick: move |evt| {
                        evt.prevent_default();
                        on_done.call(());
                    },
                    "로그인으로 돌아가기"
                }
            }
        }
    }
}
