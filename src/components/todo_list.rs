//! Items on the current page, each with edit and delete controls.

use leptos::prelude::*;
use todos::TodoItem;

use crate::state::{TodoState, log_failure};

#[cfg(test)]
#[path = "todo_list_test.rs"]
mod todo_list_test;

#[component]
pub fn TodoList() -> impl IntoView {
    let state = expect_context::<TodoState>();

    view! {
        <ul id="todo-list" class="list-group mb-3">
            {move || {
                state
                    .with(|s| s.visible_items().to_vec())
                    .into_iter()
                    .map(|item| view! { <TodoRow item=item/> })
                    .collect::<Vec<_>>()
            }}
        </ul>
    }
}

#[component]
fn TodoRow(item: TodoItem) -> impl IntoView {
    let state = expect_context::<TodoState>();
    let id = item.id;

    let class = move || row_class(state.with(|s| s.form().editing() == Some(id)));

    view! {
        <li class=class>
            <span class="todo-list-item__text">{item.text}</span>
            <div class="todo-list-item__actions">
                <button
                    class="btn btn-sm btn-primary edit-btn me-2"
                    title="Edit"
                    on:click=move |_| state.update(|s| log_failure("edit", s.begin_edit(id)))
                >
                    <i class="bi bi-pencil-square"></i>
                </button>
                <button
                    class="btn btn-sm btn-danger delete-btn"
                    title="Delete"
                    on:click=move |_| state.update(|s| log_failure("delete", s.request_delete(id)))
                >
                    <i class="bi bi-trash"></i>
                </button>
            </div>
        </li>
    }
}

/// Bootstrap classes for a row; the row under edit is highlighted.
pub fn row_class(editing: bool) -> &'static str {
    if editing {
        "todo-list-item list-group-item list-group-item-warning d-flex justify-content-between align-items-center"
    } else {
        "todo-list-item list-group-item d-flex justify-content-between align-items-center"
    }
}
