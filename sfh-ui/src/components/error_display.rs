//! Error banner, optionally dismissable.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ErrorDisplayProps {
    pub message: String,
    /// Shows a close button when set
    #[props(default)]
    pub on_close: Option<EventHandler<()>>,
}

#[component]
pub fn ErrorDisplay(props: ErrorDisplayProps) -> Element {
    let on_close = props.on_close;
    rsx! {
        div {
            style: "display: flex; align-items: center; gap: 8px; padding: 12px 16px; margin: 8px 0; background: #FFEBEE; color: #C62828; border-radius: 4px; border: 1px solid #EF9A9A;",
            div {
                style: "flex: 1;",
                strong { "오류: " }
                "{props.message}"
            }
            if let Some(handler) = on_close {
                button {
                    style: "border: none; background: none; color: #C62828; font-size: 16px; cursor: pointer;",
                    onclick: move |_| handler.call(()),
                    "✕"
                }
            }
        }
    }
}
