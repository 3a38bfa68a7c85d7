use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::column::TaskStatus;

/// Opaque task identifier. Doubles as the sort key within a column.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(String);

impl TaskId {
    pub(crate) fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TaskId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for TaskId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// A unit of work on the board. The title is fixed at creation; only the
/// status changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    title: String,
    status: TaskStatus,
}

impl Task {
    pub(crate) fn new(id: TaskId, title: String) -> Self {
        Self {
            id,
            title,
            status: TaskStatus::Todo,
        }
    }

    pub fn id(&self) -> &TaskId {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn status(&self) -> TaskStatus {
        self.status
    }

    pub(crate) fn update_status(&mut self, status: TaskStatus) {
        self.status = status;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_task_starts_in_todo() {
        let task = Task::new(TaskId::from("t-1"), "Buy milk".to_string());
        assert_eq!(task.status(), TaskStatus::Todo);
        assert_eq!(task.title(), "Buy milk");
        assert_eq!(task.id().as_str(), "t-1");
    }

    #[test]
    fn test_generated_ids_are_opaque_strings() {
        let a = TaskId::generate();
        let b = TaskId::generate();
        assert_ne!(a, b);
        assert!(!a.as_str().is_empty());
    }

    #[test]
    fn test_task_json_shape() {
        let mut task = Task::new(TaskId::from("abc"), "Write report".to_string());
        task.update_status(TaskStatus::Doing);
        let value = serde_json::to_value(&task).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"id": "abc", "title": "Write report", "status": "doing"})
        );
    }
}
