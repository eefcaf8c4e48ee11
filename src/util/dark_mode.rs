//! Dark mode class on `<body>`.
//!
//! The persisted flag lives in `todos::dark_mode`; this only mirrors it onto
//! the document. Requires a browser environment and no-ops elsewhere.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

pub const DARK_MODE_CLASS: &str = "dark-mode";

/// Add or remove [`DARK_MODE_CLASS`] on the document body.
pub fn apply(enabled: bool) {
    #[cfg(feature = "csr")]
    {
        if let Some(body) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body()) {
            let _ = body.class_list().toggle_with_force(DARK_MODE_CLASS, enabled);
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = enabled;
    }
}

/// Label for the toggle control.
#[must_use]
pub fn toggle_label(enabled: bool) -> &'static str {
    if enabled { "Dark mode on" } else { "Dark mode off" }
}
