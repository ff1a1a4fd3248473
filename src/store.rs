//! Client-side Task List State
//!
//! `TodoStore` is the in-memory cache of the remote collection plus the
//! transient edit state. It is owned by the controller and mutated only
//! through the transitions below, each of which the controller applies
//! strictly after the matching remote call succeeds.
//!
//! Tasks are addressed by stable id internally; indices exist only at
//! the presentation boundary.

use crate::models::{Task, TaskId};

/// Trimmed, non-empty draft text ready to submit
#[derive(Debug, Clone, PartialEq)]
pub struct Draft {
    pub title: String,
    pub description: String,
}

/// The client-visible list plus form state
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TodoStore {
    tasks: Vec<Task>,
    editing_id: Option<TaskId>,
    draft_title: String,
    draft_description: String,
}

impl TodoStore {
    // ========================
    // Read access
    // ========================

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn task_at(&self, index: usize) -> Option<&Task> {
        self.tasks.get(index)
    }

    /// Edit mode is active iff an editing id is set
    pub fn is_editing(&self) -> bool {
        self.editing_id.is_some()
    }

    /// The task currently being edited, if it still exists
    pub fn editing_task(&self) -> Option<&Task> {
        let id = self.editing_id?;
        self.tasks.iter().find(|task| task.id == id)
    }

    pub fn draft_title(&self) -> &str {
        &self.draft_title
    }

    pub fn draft_description(&self) -> &str {
        &self.draft_description
    }

    /// Submission gate: both fields must be non-empty after trimming
    pub fn draft(&self) -> Option<Draft> {
        let title = self.draft_title.trim();
        let description = self.draft_description.trim();
        if title.is_empty() || description.is_empty() {
            return None;
        }
        Some(Draft {
            title: title.to_string(),
            description: description.to_string(),
        })
    }

    // ========================
    // Transitions
    // ========================

    pub fn set_draft_title(&mut self, title: String) {
        self.draft_title = title;
    }

    pub fn set_draft_description(&mut self, description: String) {
        self.draft_description = description;
    }

    /// Replace the whole cache with the fetched collection, verbatim
    pub fn replace_all(&mut self, tasks: Vec<Task>) {
        self.tasks = tasks;
    }

    /// Enter edit mode for the task at `index`; no-op if out of range
    pub fn begin_edit(&mut self, index: usize) {
        let Some(task) = self.tasks.get(index) else {
            return;
        };
        self.draft_title = task.title.clone();
        self.draft_description = task.description.clone();
        self.editing_id = Some(task.id);
    }

    /// Append a created task and clear the drafts
    pub fn apply_created(&mut self, task: Task) {
        self.tasks.push(task);
        self.clear_drafts();
    }

    /// Commit an edited task and leave edit mode
    pub fn apply_updated(&mut self, task: Task) {
        self.commit(task);
        self.editing_id = None;
        self.clear_drafts();
    }

    /// Commit a completion toggle; edit state and drafts are untouched
    pub fn apply_toggled(&mut self, task: Task) {
        self.commit(task);
    }

    /// Remove a task by id. If it was being edited, edit mode is
    /// cleared; the drafts stay behind as a pending create draft.
    pub fn apply_deleted(&mut self, id: TaskId) {
        self.tasks.retain(|task| task.id != id);
        if self.editing_id == Some(id) {
            self.editing_id = None;
        }
    }

    fn commit(&mut self, updated: Task) {
        if let Some(task) = self.tasks.iter_mut().find(|task| task.id == updated.id) {
            *task = updated;
        }
    }

    fn clear_drafts(&mut self) {
        self.draft_title.clear();
        self.draft_description.clear();
    }
}
