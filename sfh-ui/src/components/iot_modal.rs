//! IoT capture flow: device picker, then the area confirmation bar.

use crate::actions;
use crate::state::AppState;
use dioxus::prelude::*;

const OVERLAY_STYLE: &str = "position: fixed; inset: 0; background: rgba(0,0,0,0.4); display: flex; align-items: center; justify-content: center; z-index: 100;";
const MODAL_STYLE: &str = "width: 360px; padding: 20px; background: white; border-radius: 10px; box-shadow: 0 4px 16px rgba(0,0,0,0.2);";

/// Device picker modal. Visible while the capture flow is choosing a device.
#[component]
pub fn IotModal() -> Element {
    let mut state = use_context::<AppState>();
    let (open, devices, selected, can_confirm) = {
        let farm = state.farm.read();
        let capture = farm.capture();
        (
            capture.is_choosing_device(),
            capture.devices().to_vec(),
            capture.selected_device(),
            capture.can_confirm_device(),
        )
    };
    if !open {
        return rsx! {};
    }

    rsx! {
        div {
            style: OVERLAY_STYLE,
            div {
                style: MODAL_STYLE,
                h3 { style: "margin: 0 0 12px 0; color: #2E4B26;", "촬영할 IoT 선택" }
                for device in devices {
                    label {
                        key: "{device.id}",
                        style: "display: flex; align-items: center; gap: 8px; padding: 8px; border-radius: 6px; cursor: pointer;",
                        input {
                            r#type: "radio",
                            name: "iot-device",
                            checked: selected == Some(device.id),
                            onchange: move |_| state.farm.write().choose_device(device.id),
                        }
                        "{device.name}"
                    }
                }
                div {
                    style: "display: flex; justify-content: flex-end; gap: 8px; margin-top: 16px;",
                    button {
                        onclick: move |_| state.farm.write().cancel_capture(),
                        "취소"
                    }
                    button {
                        disabled: !can_confirm,
                        onclick: move |_| {
                            state.farm.write().confirm_device();
                        },
                        "다음"
                    }
                }
            }
        }
    }
}

/// Banner shown while the user picks the bar to photograph.
#[component]
pub fn CaptureArea() -> Element {
    let mut state = use_context::<AppState>();
    let (open, can_confirm) = {
        let farm = state.farm.read();
        (farm.capture().is_choosing_area(), farm.capture().can_confirm())
    };
    if !open {
        return rsx! {};
    }

    rsx! {
        div {
            style: "display: flex; align-items: center; gap: 8px; padding: 10px 16px; margin-bottom: 12px; background: #E8F5E9; border: 1px solid #A5D6A7; border-radius: 8px;",
            span { style: "flex: 1;", "촬영할 영역을 선택한 뒤 확인을 눌러주세요." }
            button {
                onclick: move |_| state.farm.write().cancel_capture(),
                "취소"
            }
            button {
                disabled: !can_confirm,
                onclick: move |_| actions::confirm_capture(state),
                "촬영"
            }
        }
    }
}
