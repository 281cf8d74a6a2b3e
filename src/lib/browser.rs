//! Thin wrappers over `window` for the few browser facts the app needs: the
//! current origin, the URL fragment, history cleanup, and the hand-off that
//! leaves the app for an external page.

use wasm_bindgen::JsValue;
use web_sys::window;

/// Origin of the page, e.g. `https://hub.example`.
pub fn current_origin() -> Option<String> {
    window()?.location().origin().ok()
}

/// Raw fragment including the leading `#`, or an empty string.
pub fn current_fragment() -> String {
    window()
        .and_then(|window| window.location().hash().ok())
        .unwrap_or_default()
}

/// Replaces the current history entry with `path`, dropping the fragment.
pub fn replace_url(path: &str) {
    let Some(window) = window() else {
        return;
    };
    let Ok(history) = window.history() else {
        return;
    };
    if let Err(err) = history.replace_state_with_url(&JsValue::NULL, "", Some(path)) {
        tracing::debug!(?err, "failed to replace history entry");
    }
}

/// Leaves the application for an external page (identity provider, payment
/// checkout). Control does not come back except through a fresh page load, so
/// nothing after this call should assume the app is still running.
pub fn hand_off(url: &str) {
    let Some(window) = window() else {
        tracing::warn!("no window available for hand-off");
        return;
    };
    if let Err(err) = window.location().set_href(url) {
        tracing::warn!(?err, "hand-off navigation failed");
    }
}
