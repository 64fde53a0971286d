//! Browser location helpers
//!
//! The portal is served from a single page, so the page origin doubles as the
//! redirect target for the identity provider.

/// Origin of the current page, like "https://portal.example.com"
///
/// # Returns
/// - Empty string if window is not available
pub fn page_origin() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    window.location().origin().unwrap_or_default()
}

/// URL fragment of the current page without the leading `#`
pub fn page_fragment() -> Option<String> {
    let hash = web_sys::window()?.location().hash().ok()?;
    let fragment = hash.trim_start_matches('#');
    if fragment.is_empty() {
        None
    } else {
        Some(fragment.to_string())
    }
}

/// Remove the fragment from the address bar without reloading the page
pub fn clear_page_fragment() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let location = window.location();
    let path = location.pathname().unwrap_or_else(|_| "/".to_string());
    let search = location.search().unwrap_or_default();
    if let Ok(history) = window.history() {
        let _ = history.replace_state_with_url(
            &wasm_bindgen::JsValue::NULL,
            "",
            Some(&format!("{}{}", path, search)),
        );
    }
}

/// Navigate the whole page to `url`
pub fn navigate_to(url: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or_else(|| "no window".to_string())?;
    window
        .location()
        .assign(url)
        .map_err(|e| format!("{e:?}"))
}
