use dioxus::prelude::*;

/// Centered status text shown while something is being fetched or
/// analyzed.
#[component]
pub fn LoadingSpinner(#[props(default = "불러오는 중...".to_string())] label: String) -> Element {
    rsx! {
        div {
            style: "display: flex; justify-content: center; align-items: center; padding: 40px; color: #666;",
            "{label}"
        }
    }
}
