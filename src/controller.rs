//! Todo List Controller
//!
//! Owns the `TodoStore` behind a signal and exposes the four remote
//! operations plus the local edit transition. Every operation is an
//! independent request/response round trip; local state is committed
//! only after the remote call succeeds, so a failed call leaves the
//! store exactly as it was.

use leptos::prelude::*;

use crate::api::TodoApi;
use crate::models::{now_epoch, NewTask, Task};
use crate::store::TodoStore;

/// Controller over a generic api, shared with components via context
#[derive(Clone, Copy)]
pub struct TodoController<A> {
    api: A,
    store: RwSignal<TodoStore>,
}

impl<A: TodoApi + Clone + 'static> TodoController<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            store: RwSignal::new(TodoStore::default()),
        }
    }

    // ========================
    // Read access for the view
    // ========================

    pub fn tasks(&self) -> Vec<Task> {
        self.store.with(|s| s.tasks().to_vec())
    }

    pub fn is_editing(&self) -> bool {
        self.store.with(|s| s.is_editing())
    }

    pub fn draft_title(&self) -> String {
        self.store.with(|s| s.draft_title().to_string())
    }

    pub fn draft_description(&self) -> String {
        self.store.with(|s| s.draft_description().to_string())
    }

    pub fn set_draft_title(&self, title: String) {
        self.store.update(|s| s.set_draft_title(title));
    }

    pub fn set_draft_description(&self, description: String) {
        self.store.update(|s| s.set_draft_description(description));
    }

    // ========================
    // Operations
    // ========================

    /// Fetch the full collection once, on mount
    pub async fn load(&self) -> Result<(), String> {
        let tasks = self.api.list().await?;
        self.store.update(|s| s.replace_all(tasks));
        Ok(())
    }

    /// Create or update, depending on edit mode. Blank drafts are a
    /// silent no-op.
    pub async fn submit(&self) -> Result<(), String> {
        let Some(draft) = self.store.with(|s| s.draft()) else {
            return Ok(());
        };

        if self.store.with(|s| s.is_editing()) {
            // Edited task can vanish if a delete won the race
            let Some(existing) = self.store.with(|s| s.editing_task().cloned()) else {
                return Ok(());
            };
            let updated = existing.with_text(draft.title, draft.description, now_epoch());
            self.api.update(&updated).await?;
            self.store.update(|s| s.apply_updated(updated));
        } else {
            let new_task = NewTask::new(draft.title, draft.description, now_epoch());
            let created = self.api.create(&new_task).await?;
            self.store.update(|s| s.apply_created(new_task.into_task(created.id)));
        }
        Ok(())
    }

    /// Pre-fill the drafts from the task at `index`; no remote call
    pub fn begin_edit(&self, index: usize) {
        self.store.update(|s| s.begin_edit(index));
    }

    /// Delete the task at `index` from the remote collection, then
    /// drop it locally
    pub async fn delete(&self, index: usize) -> Result<(), String> {
        let Some(id) = self.store.with(|s| s.task_at(index).map(|t| t.id)) else {
            return Ok(());
        };
        self.api.delete(id).await?;
        self.store.update(|s| s.apply_deleted(id));
        Ok(())
    }

    /// Flip completion on a detached copy, commit it only once the
    /// remote update succeeds
    pub async fn toggle_complete(&self, index: usize) -> Result<(), String> {
        let Some(task) = self.store.with(|s| s.task_at(index).cloned()) else {
            return Ok(());
        };
        let toggled = task.with_completion_toggled(now_epoch());
        self.api.update(&toggled).await?;
        self.store.update(|s| s.apply_toggled(toggled));
        Ok(())
    }
}

/// Concrete controller the components work with
pub type AppController = TodoController<crate::api::HttpApi>;

/// Get the controller from context
pub fn use_controller() -> AppController {
    expect_context::<AppController>()
}
