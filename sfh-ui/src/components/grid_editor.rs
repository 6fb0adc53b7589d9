//! Cell-by-cell editor shown while the grid is in edit mode.

use crate::state::AppState;
use dioxus::prelude::*;
use sfh_core::grid::{CropType, MAX_CELL_VALUE};
use sfh_presenter::groups::BAR_CELL_PX;

fn edit_cell(mut state: AppState, row: usize, col: usize, raw: &str) {
    let Ok(value) = raw.parse::<u8>() else {
        return;
    };
    if let Err(e) = state.farm.write().edit_cell(row, col, value) {
        log::warn!("Cell edit rejected: {}", e);
    }
}

#[component]
pub fn GridEditor() -> Element {
    let state = use_context::<AppState>();
    let Some(cells) = state.farm.read().draft().map(|d| d.grid().cells.clone()) else {
        return rsx! {};
    };
    let choices: Vec<CropType> = (0..=MAX_CELL_VALUE).map(CropType::from).collect();

    rsx! {
        div {
            style: "overflow: auto; max-height: 520px; padding: 16px; background: #FAFAF5; border-radius: 8px;",
            table {
                style: "border-collapse: collapse; margin: 0 auto;",
                for (row, line) in cells.into_iter().enumerate() {
                    tr {
                        key: "{row}",
                        for (col, value) in line.into_iter().enumerate() {
                            td {
                                key: "{col}",
                                style: format!(
                                    "width: {px}px; height: {px}px; padding: 0; border: 1px solid #FFF; background: {};",
                                    CropType::from(value).color(),
                                    px = BAR_CELL_PX,
                                ),
                                select {
                                    style: "width: 100%; height: 100%; border: none; background: transparent; font-size: 11px;",
                                    onchange: move |evt: Event<FormData>| edit_cell(state, row, col, &evt.value()),
                                    for crop in choices.iter().copied() {
                                        option {
                                            value: u8::from(crop).to_string(),
                                            selected: u8::from(crop) == value,
                                            {crop.label()}
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
