//! Thin wrappers over browser APIs: dialogs, navigation, scrolling.

use gloo_timers::future::sleep;
use std::time::Duration;

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('SFH JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Blocking confirmation dialog. Anything but an explicit "OK" is a no.
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}

pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

/// Full-page navigation to `url`.
pub fn navigate(url: &str) {
    match web_sys::window() {
        Some(window) => {
            if let Err(e) = window.location().set_href(url) {
                log::warn!("Navigation to {} failed: {:?}", url, e);
            }
        }
        None => log::warn!("No window to navigate to {}", url),
    }
}

/// Wait, then navigate. Used after a "not found" error.
pub async fn redirect_after(url: String, delay: Duration) {
    sleep(delay).await;
    navigate(&url);
}

/// Center the scroll position of a container on the next frame.
pub fn center_scroll(element_id: &str) {
    call_js(&format!(
        r#"
        requestAnimationFrame(function() {{
            var el = document.getElementById('{element_id}');
            if (!el) return;
            el.scrollTop = (el.scrollHeight - el.clientHeight) / 2;
            el.scrollLeft = (el.scrollWidth - el.clientWidth) / 2;
        }});
        "#,
    ));
}
