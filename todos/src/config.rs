//! Storage keys and page size.
//!
//! Defaults match the keys the app has always written, so existing browser
//! data keeps loading.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_PAGE_SIZE: usize = 8;
pub const DEFAULT_LIST_KEY: &str = "todoList";
pub const DEFAULT_DARK_MODE_KEY: &str = "darkModeEnabled";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TodoConfig {
    /// Items shown per page. Zero is treated as one.
    pub page_size: usize,
    /// Storage key holding the JSON array of item texts.
    pub list_key: String,
    /// Storage key holding `"true"` / `"false"`.
    pub dark_mode_key: String,
}

impl Default for TodoConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            list_key: DEFAULT_LIST_KEY.to_owned(),
            dark_mode_key: DEFAULT_DARK_MODE_KEY.to_owned(),
        }
    }
}

impl TodoConfig {
    /// Page size clamped to at least one item.
    #[must_use]
    pub fn normalized(mut self) -> Self {
        self.page_size = self.page_size.max(1);
        self
    }
}
