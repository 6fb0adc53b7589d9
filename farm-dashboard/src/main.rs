//! Farm detail page
//!
//! Shows one farm (`?farm_id=N`): the greenhouse list, the selected
//! greenhouse drawn as merged crop bars, and a side panel with either the
//! weather and sensor summary or the detail of the clicked bar. From here
//! the user edits the grid, deletes the greenhouse, sends an IoT capture
//! command or uploads images for analysis.
//!
//! Data flow:
//! 1. The session check runs first; logged-out users get the login form.
//! 2. Once logged in, the farm, its greenhouses and the first greenhouse's
//!    grid, groups and sensor reading are fetched, then the weather.
//! 3. Every later command goes through `sfh_ui::actions`, which awaits the
//!    request and folds the answer into the presenter held in `AppState`.

use dioxus::prelude::*;
use sfh_presenter::selection::SidePanel;
use sfh_ui::actions;
use sfh_ui::components::{
    BarDetailPanel, CaptureArea, ControlCard, ErrorDisplay, GreenhouseSidebar, GridEditor,
    IotModal, LoadingSpinner, LoginForm, MergedBars, NavBar, RegisterForm, SummaryPanel,
    UploadModal,
};
use sfh_ui::config;
use sfh_ui::session::SessionState;
use sfh_ui::state::AppState;

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("farm-dashboard-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let state = use_context_provider(AppState::new);
    let session = use_context_provider(SessionState::new);
    let mut registering = use_signal(|| false);

    use_effect(move || {
        if let Some(client) = state.client() {
            session.init(client);
        }
    });

    let checked = (session.checked)();
    let logged_in = session.is_logged_in();

    rsx! {
        div {
            style: "min-height: 100vh; background: #EEF2EA; font-family: sans-serif;",
            NavBar { title: "스마트팜 허브" }
            if !checked {
                LoadingSpinner {}
            } else if !logged_in {
                if registering() {
                    RegisterForm { on_done: move |_| registering.set(false) }
                } else {
                    LoginForm { on_register: move |_| registering.set(true) }
                }
            } else {
                FarmPage {}
            }
        }
    }
}

#[component]
fn FarmPage() -> Element {
    let mut state = use_context::<AppState>();

    // Load the farm named in the query string once on mount
    use_hook(move || match config::query_id(&config::page_query(), "farm_id") {
        Some(farm_id) => actions::load_farm(state, farm_id),
        None => {
            log::error!("No farm_id in the page URL");
            state
                .error_msg
                .set(Some("농장 정보를 찾을 수 없습니다.".to_string()));
            state.loading.set(false);
        }
    });

    if (state.loading)() {
        return rsx! { LoadingSpinner {} };
    }

    let page_error = (state.error_msg)();
    let (farm_error, editing, detail_open) = {
        let farm = state.farm.read();
        (
            farm.error().map(str::to_string),
            farm.is_editing(),
            matches!(farm.side_panel(), SidePanel::Detail(_)),
        )
    };

    rsx! {
        div {
            style: "display: flex; align-items: stretch; min-height: calc(100vh - 56px);",
            GreenhouseSidebar {}
            main {
                style: "flex: 1; padding: 16px; min-width: 0;",
                if let Some(message) = page_error {
                    ErrorDisplay { message }
                }
                if let Some(message) = farm_error {
                    ErrorDisplay {
                        message,
                        on_close: move |_| state.farm.write().clear_error(),
                    }
                }
                ControlCard {}
                CaptureArea {}
                UploadModal {}
                if editing {
                    GridEditor {}
                } else {
                    MergedBars {}
                }
            }
            aside {
                style: "width: 320px; padding: 16px;",
                if detail_open {
                    BarDetailPanel {}
                } else {
                    SummaryPanel {}
                }
            }
            IotModal {}
        }
    }
}
