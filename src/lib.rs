//! # todo-app
//!
//! Leptos + WASM frontend for the paginated todo list.
//!
//! The list model, paging and form state machine live in the `todos` crate;
//! this crate renders them and binds them to `window.localStorage` and the
//! document body.

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: install logging and mount [`app::App`].
#[cfg(feature = "csr")]
pub fn mount() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}
