//! Result popup for add, update, delete and rejected input.

use leptos::prelude::*;
use todos::notice::{Notice, Severity};

use crate::state::TodoState;

#[cfg(test)]
#[path = "notice_popup_test.rs"]
mod notice_popup_test;

#[component]
pub fn NoticePopup() -> impl IntoView {
    let state = expect_context::<TodoState>();
    let notice = move || state.with(|s| s.notice());
    let dismiss = move || state.update(|s| s.dismiss_notice());

    view! {
        <div class="dialog-backdrop" on:click=move |_| dismiss()>
            <div
                class=move || notice().map_or("dialog", notice_class)
                role="alert"
                on:click=move |ev| ev.stop_propagation()
            >
                <h2>{move || notice().map(Notice::title)}</h2>
                {move || notice().and_then(Notice::text).map(|text| view! { <p class="dialog__text">{text}</p> })}
                <div class="dialog__actions">
                    <button class="btn btn-primary" on:click=move |_| dismiss()>
                        "OK"
                    </button>
                </div>
            </div>
        </div>
    }
}

pub fn notice_class(notice: Notice) -> &'static str {
    match notice.severity() {
        Severity::Success => "dialog dialog--success",
        Severity::Error => "dialog dialog--error",
    }
}
