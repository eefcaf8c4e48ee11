//! Dark mode checkbox.

use leptos::prelude::*;

use crate::state::TodoState;
use crate::util::dark_mode::toggle_label;

#[component]
pub fn DarkModeToggle() -> impl IntoView {
    let state = expect_context::<TodoState>();
    let enabled = move || state.with(|s| s.dark_mode());

    view! {
        <div class="form-check form-switch dark-mode-toggle" title=move || toggle_label(enabled())>
            <input
                id="dark-mode-toggle"
                class="form-check-input"
                type="checkbox"
                prop:checked=enabled
                on:change=move |ev| {
                    let checked = event_target_checked(&ev);
                    state.update(|s| {
                        if let Err(e) = s.set_dark_mode(checked) {
                            log::error!("dark mode preference write failed: {e}");
                        }
                    });
                }
            />
            <label class="form-check-label" for="dark-mode-toggle">
                "Dark mode"
            </label>
        </div>
    }
}
