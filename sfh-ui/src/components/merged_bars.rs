//! The greenhouse drawn as merged crop bars.
//!
//! Each group is an absolutely positioned bar starting at its first cell.
//! A click selects the bar for the detail panel, or picks the target area
//! while the capture or upload flow is asking for one. Paths cannot be
//! picked as a target.

use crate::state::AppState;
use dioxus::prelude::*;
use sfh_core::grid::CropType;
use sfh_presenter::groups::{bar_size_px, BAR_CELL_PX};

/// Element id of the scroll container, centered after each load.
pub const MERGED_BARS_ID: &str = "merged-bars";

#[derive(Clone, PartialEq)]
struct Bar {
    id: i64,
    crop: CropType,
    label: String,
    left: usize,
    top: usize,
    width: usize,
    height: usize,
    highlighted: bool,
    disabled: bool,
}

fn click_bar(mut state: AppState, group_id: i64) {
    let mut farm = state.farm.write();
    if farm.capture().is_choosing_area() {
        farm.toggle_capture_target(group_id);
    } else if farm.upload().is_open() {
        farm.toggle_upload_target(group_id);
    } else {
        farm.select_bar(group_id);
    }
}

#[component]
pub fn MergedBars() -> Element {
    let state = use_context::<AppState>();
    let (bars, width, height, picking) = {
        let farm = state.farm.read();
        let picking = farm.capture().is_choosing_area() || farm.upload().is_open();
        let target = if farm.capture().is_choosing_area() {
            farm.capture().target()
        } else {
            farm.upload().target()
        };
        let selected = farm.selection().map(|s| s.group_id());
        let bars: Vec<Bar> = farm
            .layout()
            .visible()
            .filter_map(|group| {
                let (row, col) = group.first_cell()?;
                let (width, height) = bar_size_px(group);
                Some(Bar {
                    id: group.id,
                    crop: group.crop_type,
                    label: group.crop_type.label(),
                    left: col * BAR_CELL_PX,
                    top: row * BAR_CELL_PX,
                    width,
                    height,
                    highlighted: if picking {
                        target == Some(group.id)
                    } else {
                        selected == Some(group.id)
                    },
                    disabled: picking && !group.is_selectable_target(),
                })
            })
            .collect();
        let (rows, cols) = farm
            .grid()
            .map(|g| (g.num_rows, g.num_cols))
            .unwrap_or((0, 0));
        (bars, cols * BAR_CELL_PX, rows * BAR_CELL_PX, picking)
    };

    rsx! {
        div {
            id: MERGED_BARS_ID,
            style: "overflow: auto; max-height: 520px; padding: 16px; background: #FAFAF5; border-radius: 8px;",
            if picking {
                p {
                    style: "margin: 0 0 8px 0; color: #2E4B26; font-weight: bold;",
                    "영역을 선택해주세요."
                }
            }
            if bars.is_empty() {
                p {
                    style: "color: #888;",
                    "표시할 작물 그룹이 없습니다."
                }
            }
            div {
                style: "position: relative; width: {width}px; height: {height}px; margin: 0 auto;",
                for bar in bars {
                    div {
                        key: "{bar.id}",
                        class: format!("merged-bar {}", bar.crop.css_class()),
                        style: format!(
                            "position: absolute; left: {}px; top: {}px; width: {}px; height: {}px; box-sizing: border-box; background: {}; border: {}; border-radius: 4px; display: flex; align-items: center; justify-content: center; font-size: 12px; cursor: {}; opacity: {};",
                            bar.left,
                            bar.top,
                            bar.width,
                            bar.height,
                            bar.crop.color(),
                            if bar.highlighted { "3px solid #2E4B26" } else { "1px solid #FFFFFF" },
                            if bar.disabled { "not-allowed" } else { "pointer" },
                            if bar.disabled { "0.4" } else { "1" },
                        ),
                        onclick: move |_| {
                            if !bar.disabled {
                                click_bar(state, bar.id);
                            }
                        },
                        if !bar.crop.is_path() {
                            "{bar.label}"
                        }
                    }
                }
            }
        }
    }
}
