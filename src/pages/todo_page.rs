//! The todo list page: form, list, pager, and the dialogs layered on top.

use leptos::prelude::*;

use crate::components::confirm_dialog::ConfirmDeleteDialog;
use crate::components::dark_mode_toggle::DarkModeToggle;
use crate::components::notice_popup::NoticePopup;
use crate::components::pagination::Pagination;
use crate::components::todo_form::TodoForm;
use crate::components::todo_list::TodoList;
use crate::state::TodoState;

#[cfg(test)]
#[path = "todo_page_test.rs"]
mod todo_page_test;

#[component]
pub fn TodoPage() -> impl IntoView {
    let state = expect_context::<TodoState>();

    let summary = move || state.with(|s| summary_text(s.store().len(), s.page().current(), s.total_pages()));

    view! {
        <main class="container todo-page">
            <header class="todo-page__header">
                <h1>"Todo List"</h1>
                <span class="todo-page__spacer"></span>
                <DarkModeToggle/>
            </header>
            <TodoForm/>
            <TodoList/>
            <nav class="todo-page__pager" aria-label="Todo pages">
                <Pagination/>
            </nav>
            <p class="todo-page__summary">{summary}</p>
            <Show when=move || state.with(|s| s.pending_delete().is_some())>
                <ConfirmDeleteDialog/>
            </Show>
            <Show when=move || state.with(|s| s.notice().is_some())>
                <NoticePopup/>
            </Show>
        </main>
    }
}

/// Footer text such as `"9 tasks · page 2 of 2"`.
pub fn summary_text(count: usize, page: usize, total_pages: usize) -> String {
    let noun = if count == 1 { "task" } else { "tasks" };
    if total_pages <= 1 {
        return format!("{count} {noun}");
    }
    format!("{count} {noun} · page {page} of {total_pages}")
}
