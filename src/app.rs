//! Root application component and state context.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use todos::{TodoApp, TodoConfig};

use crate::pages::todo_page::TodoPage;
use crate::util::dark_mode;
use crate::util::storage::BrowserStorage;

/// Root application component.
///
/// Loads the list and preferences once, provides them as a single signal,
/// and keeps the body's dark-mode class in step with the flag.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let state = RwSignal::new(TodoApp::load(BrowserStorage, TodoConfig::default()));
    provide_context(state);

    Effect::new(move || dark_mode::apply(state.with(|s| s.dark_mode())));

    view! {
        <Title text="Todo List"/>
        <TodoPage/>
    }
}
