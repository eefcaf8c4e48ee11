//! Browser glue kept apart from components so it can no-op off-browser.

pub mod dark_mode;
pub mod storage;
