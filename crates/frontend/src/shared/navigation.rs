//! Browser location helpers

use web_sys::window;

/// `location.pathname`, empty outside a browser
pub fn current_path() -> String {
    window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_default()
}

/// `location.search`, including the leading `?`
pub fn current_search() -> String {
    window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default()
}

pub fn origin() -> String {
    window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_default()
}

/// Leave the page for `url`
pub fn navigate(url: &str) {
    if let Some(w) = window() {
        if let Err(e) = w.location().set_href(url) {
            log::error!("Navigation to {} failed: {:?}", url, e);
        }
    }
}

pub fn open_in_new_tab(url: &str) {
    if let Some(w) = window() {
        if let Err(e) = w.open_with_url_and_target(url, "_blank") {
            log::error!("Opening {} failed: {:?}", url, e);
        }
    }
}

pub fn go_back() {
    if let Some(history) = window().and_then(|w| w.history().ok()) {
        let _ = history.back();
    }
}
