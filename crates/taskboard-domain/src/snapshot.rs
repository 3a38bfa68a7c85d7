//! Serialized form of the task store.
//!
//! The slot holds a bare JSON array of task records in store order. Decoding
//! is lenient about content (duplicate ids and blank titles are dropped) but
//! strict about shape: anything that is not an array of task records fails,
//! and the caller starts from an empty store.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use taskboard_core::{TaskboardError, TaskboardResult};

use crate::task::Task;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Snapshot {
    tasks: Vec<Task>,
}

impl Snapshot {
    pub fn from_tasks(tasks: &[Task]) -> Self {
        Self {
            tasks: tasks.to_vec(),
        }
    }

    pub fn to_bytes(&self) -> TaskboardResult<Vec<u8>> {
        serde_json::to_vec_pretty(&self.tasks)
            .map_err(|e| TaskboardError::Serialization(e.to_string()))
    }

    pub fn from_bytes(bytes: &[u8]) -> TaskboardResult<Self> {
        let tasks: Vec<Task> = serde_json::from_slice(bytes)
            .map_err(|e| TaskboardError::Serialization(e.to_string()))?;
        Ok(Self {
            tasks: sanitize(tasks),
        })
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn into_tasks(self) -> Vec<Task> {
        self.tasks
    }
}

fn sanitize(tasks: Vec<Task>) -> Vec<Task> {
    let mut seen = HashSet::new();
    tasks
        .into_iter()
        .filter(|task| {
            if task.title().trim().is_empty() {
                tracing::warn!("Dropping task {} with blank title from snapshot", task.id());
                return false;
            }
            if !seen.insert(task.id().clone()) {
                tracing::warn!("Dropping duplicate task {} from snapshot", task.id());
                return false;
            }
            true
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::column::TaskStatus;
    use crate::task::TaskId;

    fn task(id: &str, title: &str, status: TaskStatus) -> Task {
        let mut task = Task::new(TaskId::from(id), title.to_string());
        task.update_status(status);
        task
    }

    #[test]
    fn test_encodes_bare_array_in_store_order() {
        let tasks = vec![
            task("b", "Write report", TaskStatus::Todo),
            task("a", "Buy milk", TaskStatus::Done),
        ];
        let bytes = Snapshot::from_tasks(&tasks).to_bytes().unwrap();
        let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

        assert_eq!(
            value,
            serde_json::json!([
                {"id": "b", "title": "Write report", "status": "todo"},
                {"id": "a", "title": "Buy milk", "status": "done"},
            ])
        );
    }

    #[test]
    fn test_decode_drops_duplicates_and_blank_titles() {
        let bytes = br#"[
            {"id": "a", "title": "First", "status": "todo"},
            {"id": "b", "title": "   ", "status": "doing"},
            {"id": "a", "title": "Again", "status": "done"},
            {"id": "c", "title": "Third", "status": "done"}
        ]"#;
        let snapshot = Snapshot::from_bytes(bytes).unwrap();
        let ids: Vec<_> = snapshot.tasks().iter().map(|t| t.id().as_str()).collect();
        assert_eq!(ids, vec!["a", "c"]);
        assert_eq!(snapshot.tasks()[0].title(), "First");
    }

    #[test]
    fn test_decode_rejects_wrong_shape() {
        assert!(Snapshot::from_bytes(b"{\"tasks\": []}").is_err());
        assert!(Snapshot::from_bytes(b"not json").is_err());
        let bytes = br#"[{"id": "a", "title": "x", "status": "later"}]"#;
        assert!(Snapshot::from_bytes(bytes).is_err());
    }

    #[test]
    fn test_empty_array() {
        let snapshot = Snapshot::from_bytes(b"[]").unwrap();
        assert!(snapshot.tasks().is_empty());
    }
}
