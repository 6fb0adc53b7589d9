//! Image upload card.
//!
//! Rendered beside the bars rather than over them, since the user picks
//! the target area on the bars while the card is open.

use crate::actions;
use crate::components::LoadingSpinner;
use crate::state::AppState;
use dioxus::prelude::*;
use sfh_core::analysis::ImageFile;
use sfh_presenter::detail::BarDetail;
use sfh_presenter::upload::UploadStage;

const SUBMIT_STYLE: &str = "margin-top: 12px; padding: 8px 14px; border: none; border-radius: 6px; background: #61BFAD; color: white; cursor: pointer;";
const SUBMIT_DISABLED_STYLE: &str = "margin-top: 12px; padding: 8px 14px; border: none; border-radius: 6px; background: #B8DCD5; color: white; cursor: not-allowed;";

#[component]
pub fn UploadModal() -> Element {
    let mut state = use_context::<AppState>();
    let (stage, target, can_submit, file_names, result, error) = {
        let farm = state.farm.read();
        let upload = farm.upload();
        let target = upload
            .target()
            .and_then(|id| farm.layout().find(id))
            .map(BarDetail::for_group)
            .map(|d| format!("{} · {}", d.crop.label(), d.position_name()));
        (
            upload.stage(),
            target,
            upload.can_submit(),
            upload
                .files()
                .iter()
                .map(|f| f.file_name.clone())
                .collect::<Vec<_>>(),
            upload.result().cloned(),
            upload.error().map(str::to_string),
        )
    };
    if stage == UploadStage::Closed {
        return rsx! {};
    }
    let analyzing = stage == UploadStage::Analyzing;
    let target_text = match target {
        Some(text) => text,
        None => "영역을 선택해주세요.".to_string(),
    };
    let file_count = format!("{}개 파일 선택됨", file_names.len());

    let on_files = move |evt: Event<FormData>| async move {
        let mut images = Vec::new();
        for file in evt.files() {
            let name = file.name();
            match file.read_bytes().await {
                Ok(bytes) => images.push(ImageFile::new(name, bytes.to_vec())),
                Err(e) => log::warn!("Could not read {}: {}", name, e),
            }
        }
        state.farm.write().select_upload_files(images);
    };

    rsx! {
        div {
            style: "padding: 16px; margin-bottom: 12px; background: white; border-radius: 8px; box-shadow: 0 1px 4px rgba(0,0,0,0.1);",
            div {
                style: "display: flex; justify-content: space-between; align-items: center;",
                h3 { style: "margin: 0; color: #2E4B26;", "이미지 업로드 분석" }
                button {
                    disabled: analyzing,
                    onclick: move |_| state.farm.write().close_upload(),
                    "닫기"
                }
            }
            p { style: "margin: 8px 0; color: #555;", "{target_text}" }
            input {
                r#type: "file",
                accept: "image/*",
                multiple: true,
                disabled: analyzing,
                onchange: on_files,
            }
            if !file_names.is_empty() {
                p { style: "margin: 8px 0 4px 0; font-size: 13px; color: #555;", "{file_count}" }
                ul {
                    style: "margin: 0; padding-left: 18px; font-size: 13px; color: #555;",
                    for name in file_names {
                        li { key: "{name}", "{name}" }
                    }
                }
            }
            if let Some(message) = error {
                p { style: "color: #C62828;", "{message}" }
            }
            match stage {
                UploadStage::Analyzing => rsx! {
                    LoadingSpinner { label: "분석 중입니다..." }
                },
                UploadStage::Result => {
                    let summary = result.map(|r| {
                        (
                            format!("분석한 파일: {}개", r.total_files),
                            format!("전체 {}개 · 익은 과실 {}개 · 미숙과 {}개", r.total_count, r.total_ripe, r.total_unripe),
                            if r.has_rotten { "부패 과실이 발견되었습니다." } else { "부패 과실이 없습니다." },
                        )
                    });
                    rsx! {
                        if let Some((files, counts, rotten)) = summary {
                            div {
                                style: "margin-top: 12px; padding: 12px; background: #F5F8F2; border-radius: 6px;",
                                div { "{files}" }
                                div { "{counts}" }
                                div { "{rotten}" }
                            }
                        }
                    }
                }
                _ => rsx! {
                    button {
                        style: if can_submit { SUBMIT_STYLE } else { SUBMIT_DISABLED_STYLE },
                        disabled: !can_submit,
                        onclick: move |_| actions::submit_upload(state),
                        "분석하기"
                    }
                },
            }
        }
    }
}
