//! Application state for the todo page.
//!
//! DESIGN
//! ======
//! One value owns everything the page renders: the persisted list, the page
//! cursor, the form, a pending delete confirmation, the last notice, and the
//! dark-mode flag. UI event handlers call a method here and re-render from
//! the result; nothing else holds mutable state.
//!
//! Edit and delete are addressed by [`TodoId`] and resolved to a position at
//! the moment they run, so an index captured before another delete can never
//! hit the wrong item.

use crate::config::TodoConfig;
use crate::dark_mode;
use crate::error::{StoreError, TodoError};
use crate::form::FormState;
use crate::item::{TodoId, TodoItem};
use crate::notice::Notice;
use crate::page::{PageLink, PageState};
use crate::storage::KeyValueStorage;
use crate::store::TodoStore;

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

#[derive(Clone, Debug)]
pub struct TodoApp<S> {
    config: TodoConfig,
    store: TodoStore<S>,
    page: PageState,
    form: FormState,
    pending_delete: Option<TodoId>,
    notice: Option<Notice>,
    dark_mode: bool,
}

impl<S: KeyValueStorage> TodoApp<S> {
    /// Load the list and dark-mode preference from `storage`.
    ///
    /// The preference is written straight back so storage always holds an
    /// explicit flag after startup.
    pub fn load(storage: S, config: TodoConfig) -> Self {
        let config = config.normalized();
        let dark_mode = dark_mode::read_preference(&storage, &config.dark_mode_key);
        if let Err(e) = dark_mode::write_preference(&storage, &config.dark_mode_key, dark_mode) {
            log::warn!("dark mode preference write failed: {e}");
        }
        let store = TodoStore::load(storage, config.list_key.clone());
        log::debug!("loaded {} todo items", store.len());
        Self {
            page: PageState::new(config.page_size),
            config,
            store,
            form: FormState::default(),
            pending_delete: None,
            notice: None,
            dark_mode,
        }
    }

    // =============================================================
    // Accessors
    // =============================================================

    #[must_use]
    pub fn config(&self) -> &TodoConfig {
        &self.config
    }

    #[must_use]
    pub fn store(&self) -> &TodoStore<S> {
        &self.store
    }

    #[must_use]
    pub fn page(&self) -> &PageState {
        &self.page
    }

    #[must_use]
    pub fn form(&self) -> &FormState {
        &self.form
    }

    #[must_use]
    pub fn pending_delete(&self) -> Option<TodoId> {
        self.pending_delete
    }

    #[must_use]
    pub fn notice(&self) -> Option<Notice> {
        self.notice
    }

    #[must_use]
    pub fn dark_mode(&self) -> bool {
        self.dark_mode
    }

    /// Items on the current page.
    #[must_use]
    pub fn visible_items(&self) -> &[TodoItem] {
        &self.store.items()[self.page.visible_range(self.store.len())]
    }

    #[must_use]
    pub fn total_pages(&self) -> usize {
        self.page.total_pages(self.store.len())
    }

    #[must_use]
    pub fn page_links(&self) -> Vec<PageLink> {
        self.page.links(self.store.len())
    }

    // =============================================================
    // Form
    // =============================================================

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.form.input = text.into();
    }

    /// Add or update from the current input, then reset the form.
    ///
    /// # Errors
    ///
    /// [`TodoError::EmptyText`] raises [`Notice::InvalidInput`] and changes
    /// nothing else. [`TodoError::UnknownItem`] means the edit target was
    /// deleted meanwhile; the form is reset. [`TodoError::Store`] means the
    /// change is applied in memory but was not persisted.
    pub fn submit(&mut self) -> Result<Notice, TodoError> {
        let text = match self.form.validated_text() {
            Ok(text) => text,
            Err(e) => {
                self.notice = Some(Notice::InvalidInput);
                return Err(e);
            }
        };

        let (notice, result) = match self.form.editing() {
            Some(id) => {
                let Some(index) = self.store.position(id) else {
                    self.form.reset();
                    return Err(TodoError::UnknownItem(id));
                };
                (Notice::Updated, self.store.update(index, text))
            }
            None => (Notice::Added, self.store.add(text).map(|_| ()).map_err(TodoError::from)),
        };

        self.form.reset();
        self.notice = Some(notice);
        result.map(|()| notice)
    }

    /// Put `id` into the input for editing.
    ///
    /// # Errors
    ///
    /// [`TodoError::UnknownItem`] if `id` is not in the list.
    pub fn begin_edit(&mut self, id: TodoId) -> Result<(), TodoError> {
        let item = self.store.get_by_id(id).ok_or(TodoError::UnknownItem(id))?;
        self.form.begin_edit(id, &item.text);
        Ok(())
    }

    pub fn reset_form(&mut self) {
        self.form.reset();
    }

    // =============================================================
    // Delete
    // =============================================================

    /// Ask for confirmation before deleting `id`.
    ///
    /// # Errors
    ///
    /// [`TodoError::UnknownItem`] if `id` is not in the list.
    pub fn request_delete(&mut self, id: TodoId) -> Result<(), TodoError> {
        if self.store.position(id).is_none() {
            return Err(TodoError::UnknownItem(id));
        }
        self.pending_delete = Some(id);
        Ok(())
    }

    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    /// Delete the item awaiting confirmation and keep the page in range.
    /// Returns `Ok(None)` when nothing was pending.
    ///
    /// # Errors
    ///
    /// [`TodoError::UnknownItem`] if the pending item no longer exists.
    /// [`TodoError::Store`] means the item is gone from memory but storage
    /// still holds it.
    pub fn confirm_delete(&mut self) -> Result<Option<TodoItem>, TodoError> {
        let Some(id) = self.pending_delete.take() else {
            return Ok(None);
        };
        let index = self.store.position(id).ok_or(TodoError::UnknownItem(id))?;
        let removed = self.store.delete(index);

        self.page.clamp(self.store.len());
        if self.form.editing() == Some(id) {
            self.form.reset();
        }
        self.notice = Some(Notice::Deleted);
        removed.map(Some)
    }

    // =============================================================
    // Pages / notices / dark mode
    // =============================================================

    /// Switch pages; out-of-range pages are ignored.
    pub fn go_to_page(&mut self, page: usize) -> bool {
        self.page.go_to(page, self.store.len())
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    /// Set and persist the dark-mode flag.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if the flag could not be written; the
    /// in-memory flag is updated regardless.
    pub fn set_dark_mode(&mut self, enabled: bool) -> Result<(), StoreError> {
        self.dark_mode = enabled;
        dark_mode::write_preference(self.store.storage(), &self.config.dark_mode_key, enabled)
    }

    /// Flip the dark-mode flag and return the new value.
    ///
    /// # Errors
    ///
    /// Same contract as [`TodoApp::set_dark_mode`].
    pub fn toggle_dark_mode(&mut self) -> Result<bool, StoreError> {
        let next = !self.dark_mode;
        self.set_dark_mode(next)?;
        Ok(next)
    }
}
