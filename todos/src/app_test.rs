use super::*;
use crate::form::SubmitMode;
use crate::storage::MemoryStorage;

fn fresh() -> (TodoApp<MemoryStorage>, MemoryStorage) {
    let storage = MemoryStorage::new();
    (TodoApp::load(storage.clone(), TodoConfig::default()), storage)
}

fn add(app: &mut TodoApp<MemoryStorage>, text: &str) {
    app.set_input(text);
    assert_eq!(app.submit().unwrap(), Notice::Added);
}

fn stored_list(storage: &MemoryStorage) -> serde_json::Value {
    serde_json::from_str(&storage.raw("todoList").unwrap()).unwrap()
}

fn visible_texts(app: &TodoApp<MemoryStorage>) -> Vec<String> {
    app.visible_items().iter().map(|i| i.text.clone()).collect()
}

// =============================================================
// Startup
// =============================================================

#[test]
fn load_on_empty_storage_starts_clean() {
    let (app, storage) = fresh();
    assert!(app.store().is_empty());
    assert_eq!(app.page().current(), 1);
    assert_eq!(app.total_pages(), 0);
    assert!(!app.dark_mode());
    assert_eq!(app.form().mode, SubmitMode::Adding);
    assert_eq!(storage.raw("darkModeEnabled").as_deref(), Some("false"));
}

#[test]
fn load_survives_malformed_list() {
    let storage = MemoryStorage::new();
    storage.set_item("todoList", "not json").unwrap();
    let app = TodoApp::load(storage, TodoConfig::default());
    assert!(app.store().is_empty());
}

// =============================================================
// Submit
// =============================================================

#[test]
fn add_buy_milk_is_stored_and_shown_on_first_page() {
    let (mut app, storage) = fresh();
    add(&mut app, "Buy milk");
    assert_eq!(stored_list(&storage), serde_json::json!(["Buy milk"]));
    assert_eq!(app.page().current(), 1);
    assert_eq!(visible_texts(&app), vec!["Buy milk"]);
    assert_eq!(app.notice(), Some(Notice::Added));
    assert!(app.form().input.is_empty());
}

#[test]
fn adding_n_items_stores_n_in_order() {
    let (mut app, storage) = fresh();
    for i in 1..=5 {
        add(&mut app, &format!("task {i}"));
    }
    assert_eq!(
        stored_list(&storage),
        serde_json::json!(["task 1", "task 2", "task 3", "task 4", "task 5"])
    );
}

#[test]
fn submit_trims_input() {
    let (mut app, storage) = fresh();
    add(&mut app, "   padded  ");
    assert_eq!(stored_list(&storage), serde_json::json!(["padded"]));
}

#[test]
fn empty_submit_raises_invalid_input_without_changes() {
    let (mut app, storage) = fresh();
    add(&mut app, "keep");
    app.dismiss_notice();
    app.set_input("   ");
    assert!(matches!(app.submit(), Err(TodoError::EmptyText)));
    assert_eq!(app.notice(), Some(Notice::InvalidInput));
    assert_eq!(app.form().input, "   ");
    assert_eq!(stored_list(&storage), serde_json::json!(["keep"]));
}

#[test]
fn empty_submit_while_editing_stays_in_edit_mode() {
    let (mut app, _) = fresh();
    add(&mut app, "a");
    let id = app.store().items()[0].id;
    app.begin_edit(id).unwrap();
    app.set_input("");
    assert!(app.submit().is_err());
    assert_eq!(app.form().editing(), Some(id));
}

#[test]
fn edit_then_submit_updates_only_target() {
    let (mut app, storage) = fresh();
    for t in ["a", "b", "c"] {
        add(&mut app, t);
    }
    let id = app.store().items()[1].id;
    app.begin_edit(id).unwrap();
    assert_eq!(app.form().input, "b");
    assert_eq!(app.form().button_label(), "Update");

    app.set_input("B");
    assert_eq!(app.submit().unwrap(), Notice::Updated);
    assert_eq!(stored_list(&storage), serde_json::json!(["a", "B", "c"]));
    assert_eq!(app.store().get(1).map(|i| i.text.as_str()), Some("B"));
    assert_eq!(app.form().mode, SubmitMode::Adding);
}

#[test]
fn reset_form_leaves_edit_mode() {
    let (mut app, _) = fresh();
    add(&mut app, "a");
    app.begin_edit(app.store().items()[0].id).unwrap();
    app.reset_form();
    assert_eq!(app.form().mode, SubmitMode::Adding);
    assert!(app.form().input.is_empty());
}

#[test]
fn begin_edit_unknown_id_is_rejected() {
    let (mut app, _) = fresh();
    let id = TodoId::new();
    assert!(matches!(app.begin_edit(id), Err(TodoError::UnknownItem(e)) if e == id));
    assert_eq!(app.form().mode, SubmitMode::Adding);
}

#[test]
fn submit_with_store_failure_keeps_item_in_memory() {
    let (mut app, storage) = fresh();
    storage.set_read_only(true);
    app.set_input("offline");
    assert!(matches!(app.submit(), Err(TodoError::Store(_))));
    assert_eq!(app.store().texts(), vec!["offline"]);
    assert_eq!(storage.raw("todoList"), None);
}

// =============================================================
// Delete
// =============================================================

#[test]
fn delete_requires_confirmation() {
    let (mut app, storage) = fresh();
    add(&mut app, "a");
    let id = app.store().items()[0].id;
    app.request_delete(id).unwrap();
    assert_eq!(app.pending_delete(), Some(id));
    app.cancel_delete();
    assert_eq!(app.pending_delete(), None);
    assert_eq!(app.confirm_delete().unwrap(), None);
    assert_eq!(stored_list(&storage), serde_json::json!(["a"]));
}

#[test]
fn confirm_delete_removes_and_shifts() {
    let (mut app, storage) = fresh();
    for t in ["a", "b", "c"] {
        add(&mut app, t);
    }
    let id = app.store().items()[0].id;
    app.request_delete(id).unwrap();
    let removed = app.confirm_delete().unwrap().unwrap();
    assert_eq!(removed.text, "a");
    assert_eq!(stored_list(&storage), serde_json::json!(["b", "c"]));
    assert_eq!(app.notice(), Some(Notice::Deleted));
    assert_eq!(app.pending_delete(), None);
}

#[test]
fn deleting_only_item_on_last_page_moves_back_a_page() {
    let (mut app, _) = fresh();
    for i in 1..=9 {
        add(&mut app, &format!("item {i}"));
    }
    assert!(app.go_to_page(2));
    let last = app.visible_items()[0].id;
    app.request_delete(last).unwrap();
    app.confirm_delete().unwrap();
    assert_eq!(app.total_pages(), 1);
    assert_eq!(app.page().current(), 1);
}

#[test]
fn deleting_last_item_leaves_page_one() {
    let (mut app, storage) = fresh();
    add(&mut app, "only");
    app.request_delete(app.store().items()[0].id).unwrap();
    app.confirm_delete().unwrap();
    assert_eq!(app.page().current(), 1);
    assert_eq!(stored_list(&storage), serde_json::json!([]));
}

#[test]
fn deleting_item_under_edit_resets_form() {
    let (mut app, _) = fresh();
    add(&mut app, "a");
    add(&mut app, "b");
    let id = app.store().items()[1].id;
    app.begin_edit(id).unwrap();
    app.request_delete(id).unwrap();
    app.confirm_delete().unwrap();
    assert_eq!(app.form().mode, SubmitMode::Adding);
}

#[test]
fn edit_target_survives_earlier_delete() {
    let (mut app, storage) = fresh();
    for t in ["a", "b", "c"] {
        add(&mut app, t);
    }
    let c = app.store().items()[2].id;
    app.begin_edit(c).unwrap();
    app.request_delete(app.store().items()[0].id).unwrap();
    app.confirm_delete().unwrap();

    app.set_input("C");
    app.submit().unwrap();
    assert_eq!(stored_list(&storage), serde_json::json!(["b", "C"]));
}

#[test]
fn request_delete_unknown_id_is_rejected() {
    let (mut app, _) = fresh();
    assert!(matches!(app.request_delete(TodoId::new()), Err(TodoError::UnknownItem(_))));
    assert_eq!(app.pending_delete(), None);
}

// =============================================================
// Pagination
// =============================================================

#[test]
fn nine_items_make_two_pages_with_ninth_alone_on_second() {
    let (mut app, _) = fresh();
    for i in 1..=9 {
        add(&mut app, &format!("item {i}"));
    }
    assert_eq!(app.total_pages(), 2);
    assert_eq!(app.visible_items().len(), 8);
    assert!(app.go_to_page(2));
    assert_eq!(visible_texts(&app), vec!["item 9"]);
    let links = app.page_links();
    assert_eq!(links.len(), 2);
    assert!(links[1].active);
}

#[test]
fn go_to_page_out_of_range_is_ignored() {
    let (mut app, _) = fresh();
    add(&mut app, "a");
    assert!(!app.go_to_page(2));
    assert_eq!(app.page().current(), 1);
}

#[test]
fn custom_page_size_is_respected() {
    let storage = MemoryStorage::new();
    let config = TodoConfig { page_size: 2, ..TodoConfig::default() };
    let mut app = TodoApp::load(storage, config);
    for t in ["a", "b", "c"] {
        add(&mut app, t);
    }
    assert_eq!(app.total_pages(), 2);
    assert_eq!(visible_texts(&app), vec!["a", "b"]);
}

// =============================================================
// Dark mode
// =============================================================

#[test]
fn toggle_dark_mode_persists_and_survives_reload() {
    let (mut app, storage) = fresh();
    assert!(app.toggle_dark_mode().unwrap());
    assert_eq!(storage.raw("darkModeEnabled").as_deref(), Some("true"));

    let reloaded = TodoApp::load(storage.clone(), TodoConfig::default());
    assert!(reloaded.dark_mode());
}

#[test]
fn set_dark_mode_off_writes_false() {
    let (mut app, storage) = fresh();
    app.set_dark_mode(true).unwrap();
    app.set_dark_mode(false).unwrap();
    assert!(!app.dark_mode());
    assert_eq!(storage.raw("darkModeEnabled").as_deref(), Some("false"));
}

#[test]
fn reload_restores_list() {
    let (mut app, storage) = fresh();
    add(&mut app, "persisted");
    let reloaded = TodoApp::load(storage, TodoConfig::default());
    assert_eq!(reloaded.store().texts(), vec!["persisted"]);
}
