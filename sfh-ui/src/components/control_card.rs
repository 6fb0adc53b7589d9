//! Action buttons for the selected greenhouse.

use crate::actions;
use crate::state::AppState;
use dioxus::prelude::*;

const BUTTON_STYLE: &str = "padding: 8px 14px; border: none; border-radius: 6px; background: #61BFAD; color: white; cursor: pointer; font-size: 14px;";
const DANGER_STYLE: &str = "padding: 8px 14px; border: none; border-radius: 6px; background: #E57373; color: white; cursor: pointer; font-size: 14px;";
const PLAIN_STYLE: &str = "padding: 8px 14px; border: 1px solid #CCC; border-radius: 6px; background: white; color: #333; cursor: pointer; font-size: 14px;";

#[component]
pub fn ControlCard() -> Element {
    let mut state = use_context::<AppState>();
    let (name, has_greenhouse, editing, busy) = {
        let farm = state.farm.read();
        (
            farm.selected_greenhouse()
                .map(|g| g.name.clone())
                .unwrap_or_default(),
            farm.selected_id().is_some(),
            farm.is_editing(),
            farm.capture().is_choosing_area() || farm.upload().is_open(),
        )
    };

    rsx! {
        div {
            style: "display: flex; align-items: center; gap: 8px; padding: 12px 16px; margin-bottom: 12px; background: white; border-radius: 8px; box-shadow: 0 1px 4px rgba(0,0,0,0.1);",
            h2 { style: "flex: 1; margin: 0; font-size: 18px; color: #2E4B26;", "{name}" }
            if editing {
                button { style: BUTTON_STYLE, onclick: move |_| actions::save_grid(state), "저장" }
                button { style: PLAIN_STYLE, onclick: move |_| state.farm.write().cancel_edit(), "취소" }
            } else {
                button {
                    style: BUTTON_STYLE,
                    disabled: !has_greenhouse || busy,
                    onclick: move |_| actions::open_capture(state),
                    "IoT 촬영"
                }
                button {
                    style: BUTTON_STYLE,
                    disabled: !has_greenhouse || busy,
                    onclick: move |_| state.farm.write().open_upload(),
                    "이미지 업로드"
                }
                button {
                    style: PLAIN_STYLE,
                    disabled: !has_greenhouse || busy,
                    onclick: move |_| {
                        state.farm.write().begin_edit();
                    },
                    "그리드 편집"
                }
                button {
                    style: DANGER_STYLE,
                    disabled: !has_greenhouse || busy,
                    onclick: move |_| actions::delete_greenhouse(state),
                    "하우스 삭제"
                }
            }
        }
    }
}
