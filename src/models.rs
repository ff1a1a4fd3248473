//! Frontend Models
//!
//! Data structures matching the remote task collection's wire format.

use serde::{Deserialize, Serialize};

/// Server-assigned task identifier
pub type TaskId = u64;

/// Task data structure (matches the remote representation)
///
/// Booleans and timestamps default when absent: the backend's list
/// endpoint may trim fields it considers presentation-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub is_completed: bool,
    #[serde(default)]
    pub is_deleted: bool,
    #[serde(default)]
    pub created_at: i64,
    #[serde(default)]
    pub updated_at: i64,
}

/// Create payload: a Task before the server has assigned an id
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewTask {
    pub title: String,
    pub description: String,
    pub is_completed: bool,
    pub is_deleted: bool,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Consumed portion of the create response (extra fields ignored)
#[derive(Debug, Clone, Deserialize)]
pub struct Created {
    pub id: TaskId,
}

impl NewTask {
    pub fn new(title: String, description: String, now: i64) -> Self {
        Self {
            title,
            description,
            is_completed: false,
            is_deleted: false,
            created_at: now,
            updated_at: now,
        }
    }

    /// Pair the sent payload with the server-assigned id
    pub fn into_task(self, id: TaskId) -> Task {
        Task {
            id,
            title: self.title,
            description: self.description,
            is_completed: self.is_completed,
            is_deleted: self.is_deleted,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

impl Task {
    /// Overlay edited text, preserving id, flags and created_at
    pub fn with_text(&self, title: String, description: String, now: i64) -> Task {
        Task {
            title,
            description,
            updated_at: now,
            ..self.clone()
        }
    }

    /// Flip completion on a detached copy
    pub fn with_completion_toggled(&self, now: i64) -> Task {
        Task {
            is_completed: !self.is_completed,
            updated_at: now,
            ..self.clone()
        }
    }
}

/// Current time as integer epoch seconds
pub fn now_epoch() -> i64 {
    #[cfg(target_arch = "wasm32")]
    {
        (js_sys::Date::now() / 1000.0) as i64
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_secs() as i64)
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_wire_format() {
        let json = r#"{"id":1,"title":"A","description":"d","is_completed":false,"is_deleted":false,"created_at":100,"updated_at":100}"#;
        let task: Task = serde_json::from_str(json).expect("Failed to parse task");
        assert_eq!(task.id, 1);
        assert_eq!(task.title, "A");
        assert_eq!(task.description, "d");
        assert!(!task.is_completed);
    }

    #[test]
    fn test_task_trimmed_list_payload() {
        // The backend's list endpoint omits flags and timestamps
        let json = r#"{"id":3,"title":"B","description":"x","is_completed":true}"#;
        let task: Task = serde_json::from_str(json).expect("Failed to parse task");
        assert!(task.is_completed);
        assert!(!task.is_deleted);
        assert_eq!(task.created_at, 0);
    }

    #[test]
    fn test_new_task_has_no_id_on_the_wire() {
        let new_task = NewTask::new("t".into(), "d".into(), 50);
        let json = serde_json::to_value(&new_task).expect("Failed to serialize");
        assert!(json.get("id").is_none());
        assert_eq!(json["created_at"], 50);
        assert_eq!(json["updated_at"], 50);
        assert_eq!(json["is_completed"], false);
    }

    #[test]
    fn test_into_task_keeps_payload_fields() {
        let task = NewTask::new("t".into(), "d".into(), 50).into_task(42);
        assert_eq!(task.id, 42);
        assert_eq!(task.title, "t");
        assert_eq!(task.created_at, 50);
    }

    #[test]
    fn test_with_text_preserves_identity() {
        let task = NewTask::new("old".into(), "old d".into(), 10).into_task(7);
        let edited = task.with_text("new".into(), "new d".into(), 20);
        assert_eq!(edited.id, 7);
        assert_eq!(edited.created_at, 10);
        assert_eq!(edited.updated_at, 20);
        assert_eq!(edited.title, "new");
        assert!(!edited.is_completed);
    }

    #[test]
    fn test_toggle_flips_only_completion() {
        let task = NewTask::new("t".into(), "d".into(), 10).into_task(7);
        let toggled = task.with_completion_toggled(20);
        assert!(toggled.is_completed);
        assert_eq!(toggled.updated_at, 20);
        assert_eq!(toggled.title, task.title);
        assert_eq!(toggled.created_at, 10);
        assert!(!toggled.with_completion_toggled(30).is_completed);
    }
}
