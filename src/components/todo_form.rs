//! Text input with the dual-purpose Add / Update button.

use leptos::html::Input;
use leptos::prelude::*;

use crate::state::{TodoState, log_failure};

#[component]
pub fn TodoForm() -> impl IntoView {
    let state = expect_context::<TodoState>();
    let input_ref = NodeRef::<Input>::new();

    let focus_input = move || {
        #[cfg(feature = "csr")]
        {
            if let Some(input) = input_ref.get() {
                let _ = input.focus();
            }
        }
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let accepted = state.try_update(|s| {
            let result = s.submit();
            let accepted = !matches!(result, Err(todos::TodoError::EmptyText));
            log_failure("submit", result);
            accepted
        });
        if accepted == Some(true) {
            focus_input();
        }
    };

    let on_reset = move |ev: leptos::ev::Event| {
        ev.prevent_default();
        state.update(|s| s.reset_form());
        focus_input();
    };

    let editing = move || state.with(|s| s.form().editing().is_some());

    view! {
        <form class="todo-form input-group mb-3" on:submit=on_submit on:reset=on_reset>
            <input
                id="todo-input"
                class="form-control"
                type="text"
                placeholder="Enter your todo"
                node_ref=input_ref
                prop:value=move || state.with(|s| s.form().input.clone())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    state.update(|s| s.set_input(value));
                }
            />
            <button id="add-todo-btn" type="submit" class=move || state.with(|s| s.form().button_class())>
                {move || state.with(|s| s.form().button_label())}
            </button>
            <Show when=editing>
                <button type="reset" class="btn btn-secondary">
                    "Cancel"
                </button>
            </Show>
        </form>
    }
}
