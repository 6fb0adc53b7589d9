//! Detail panel for the selected crop bar.

use crate::config;
use crate::state::AppState;
use dioxus::prelude::*;
use sfh_presenter::detail::BarDetail;

const ROW_STYLE: &str = "display: flex; justify-content: space-between; padding: 6px 0; border-bottom: 1px solid #EEE;";

fn amount_text(amount: Option<i64>) -> String {
    amount.map(|a| a.to_string()).unwrap_or_else(|| "-".to_string())
}

/// Shows amounts, analysis figures and the image gallery of the selected
/// bar. Renders nothing when no bar is selected.
#[component]
pub fn BarDetailPanel() -> Element {
    let mut state = use_context::<AppState>();
    let base_url = state.base_url.read().clone();
    let (detail, image, index, transition) = {
        let farm = state.farm.read();
        let Some(selection) = farm.selection() else {
            return rsx! {};
        };
        (
            selection.detail(),
            selection.current_image(),
            selection.image_index(),
            farm.transition(),
        )
    };
    let BarDetail {
        crop,
        position,
        length,
        harvest_amount,
        total_amount,
        harvest_ratio,
        analysis,
        gallery,
        ..
    } = detail.clone();
    let title = detail.title();
    let position_label = detail.position_label();
    let position = position
        .map(|p| p.to_string())
        .unwrap_or_else(|| "-".to_string());
    let ratio = harvest_ratio
        .map(|r| format!("{}%", r))
        .unwrap_or_else(|| "-".to_string());
    let crop_label = crop.label();
    let harvest = amount_text(harvest_amount);
    let total = amount_text(total_amount);
    let panel_class = format!("bar-detail {}", transition.css_class());
    let counter = format!("{} / {}", index + 1, gallery.len());
    let can_navigate = gallery.can_navigate();
    let unripe = analysis.map(|a| format!("{}개", a.unripe));

    rsx! {
        div {
            class: panel_class,
            style: "padding: 16px; background: white; border-radius: 8px; box-shadow: 0 1px 4px rgba(0,0,0,0.1);",
            div {
                style: "display: flex; justify-content: space-between; align-items: center; margin-bottom: 12px;",
                h3 { style: "margin: 0; color: #2E4B26;", "{title}" }
                button {
                    style: "border: none; background: none; font-size: 18px; cursor: pointer;",
                    onclick: move |_| state.farm.write().close_bar(),
                    "✕"
                }
            }
            div { style: ROW_STYLE, span { "작물" } strong { "{crop_label}" } }
            div { style: ROW_STYLE, span { "{position_label}" } strong { "{position}" } }
            div { style: ROW_STYLE, span { "길이" } strong { "{length}" } }
            div { style: ROW_STYLE, span { "수확량" } strong { "{harvest}" } }
            div { style: ROW_STYLE, span { "전체량" } strong { "{total}" } }
            div { style: ROW_STYLE, span { "수확률" } strong { "{ratio}" } }
            if let Some(summary) = analysis {
                div { style: ROW_STYLE, span { "미숙과" } strong { {unripe} } }
                div {
                    style: ROW_STYLE,
                    span { "부패 여부" }
                    strong {
                        style: if summary.rotten_found { "color: #C62828;" } else { "color: #2E7D32;" },
                        if summary.rotten_found { "발견" } else { "없음" }
                    }
                }
            }
            div {
                style: "margin-top: 16px; text-align: center;",
                match image {
                    Some(filename) => rsx! {
                        img {
                            src: config::image_url(&base_url, &filename),
                            alt: "작물 이미지",
                            style: "max-width: 100%; max-height: 240px; border-radius: 6px;",
                        }
                    },
                    None => rsx! {
                        p { style: "color: #888;", "등록된 이미지가 없습니다." }
                    },
                }
                if can_navigate {
                    div {
                        style: "display: flex; justify-content: center; align-items: center; gap: 12px; margin-top: 8px;",
                        button {
                            onclick: move |_| state.farm.write().prev_image(),
                            "◀"
                        }
                        span { "{counter}" }
                        button {
                            onclick: move |_| state.farm.write().next_image(),
                            "▶"
                        }
                    }
                }
            }
        }
    }
}
