//! Delete confirmation modal.

use leptos::prelude::*;
use todos::notice::DELETE_PROMPT;

use crate::state::{TodoState, log_failure};

/// Shown while a delete is pending. Clicking the backdrop cancels.
#[component]
pub fn ConfirmDeleteDialog() -> impl IntoView {
    let state = expect_context::<TodoState>();

    let cancel = move || state.update(|s| s.cancel_delete());
    let confirm = move || state.update(|s| log_failure("delete", s.confirm_delete()));

    view! {
        <div class="dialog-backdrop" on:click=move |_| cancel()>
            <div class="dialog dialog--warning" role="alertdialog" on:click=move |ev| ev.stop_propagation()>
                <h2>{DELETE_PROMPT.title}</h2>
                <p class="dialog__text">{DELETE_PROMPT.text}</p>
                <div class="dialog__actions">
                    <button class="btn btn-danger" on:click=move |_| cancel()>
                        {DELETE_PROMPT.cancel_label}
                    </button>
                    <button class="btn btn-primary" on:click=move |_| confirm()>
                        {DELETE_PROMPT.confirm_label}
                    </button>
                </div>
            </div>
        </div>
    }
}
