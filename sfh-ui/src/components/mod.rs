//! Reusable Dioxus RSX components for Smart Farm Hub apps.

mod bar_detail_panel;
mod control_card;
mod error_display;
mod greenhouse_sidebar;
mod grid_editor;
mod iot_modal;
mod loading_spinner;
mod login_form;
mod merged_bars;
mod nav_bar;
mod register_form;
mod summary_panel;
mod upload_modal;

pub use bar_detail_panel::BarDetailPanel;
pub use control_card::ControlCard;
pub use error_display::ErrorDisplay;
pub use greenhouse_sidebar::GreenhouseSidebar;
pub use grid_editor::GridEditor;
pub use iot_modal::{CaptureArea, IotModal};
pub use loading_spinner::LoadingSpinner;
pub use login_form::LoginForm;
pub use merged_bars::{MergedBars, MERGED_BARS_ID};
pub use nav_bar::{NavBar, NotificationBell};
pub use register_form::RegisterForm;
pub use summary_panel::SummaryPanel;
pub use upload_modal::UploadModal;
