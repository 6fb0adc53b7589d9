//! Greenhouse list on the left of the farm page.

use crate::actions;
use crate::state::AppState;
use dioxus::prelude::*;

const ITEM_STYLE: &str = "padding: 10px 12px; margin-bottom: 6px; border-radius: 6px; cursor: pointer; background: white; color: #333;";
const SELECTED_STYLE: &str = "padding: 10px 12px; margin-bottom: 6px; border-radius: 6px; cursor: pointer; background: #61BFAD; color: white; font-weight: bold;";
const LOCKED_STYLE: &str = "padding: 10px 12px; margin-bottom: 6px; border-radius: 6px; cursor: not-allowed; background: white; color: #AAA;";

/// Lists the farm's greenhouses and loads the one that is clicked. The
/// list is locked while an upload is being analyzed.
#[component]
pub fn GreenhouseSidebar() -> Element {
    let state = use_context::<AppState>();
    let (farm_name, greenhouses, selected, locked) = {
        let farm = state.farm.read();
        (
            farm.farm().map(|f| f.name.clone()).unwrap_or_default(),
            farm.greenhouses().to_vec(),
            farm.selected_id(),
            farm.is_analyzing(),
        )
    };

    rsx! {
        aside {
            style: "width: 200px; padding: 16px; background: #F5F8F2; border-right: 1px solid #DDE5D6;",
            h2 {
                style: "font-size: 18px; margin: 0 0 12px 0; color: #2E4B26;",
                "{farm_name}"
            }
            if greenhouses.is_empty() {
                p {
                    style: "color: #888; font-size: 14px;",
                    "등록된 하우스가 없습니다."
                }
            }
            ul {
                style: "list-style: none; padding: 0; margin: 0;",
                for greenhouse in greenhouses {
                    li {
                        key: "{greenhouse.id}",
                        style: if selected == Some(greenhouse.id) {
                            SELECTED_STYLE
                        } else if locked {
                            LOCKED_STYLE
                        } else {
                            ITEM_STYLE
                        },
                        onclick: move |_| {
                            if !locked {
                                actions::select_greenhouse(state, greenhouse.id);
                            }
                        },
                        "{greenhouse.name}"
                    }
                }
            }
        }
    }
}
