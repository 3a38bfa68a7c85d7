use taskboard_core::SnapshotSlot;

use crate::commands::{
    ClearCompleted, Command, CommandContext, CreateTask, MoveToColumn, Mutation,
    ReorderWithinColumn,
};
use crate::{IdRegistry, Snapshot, Task, TaskId, TaskStatus};

/// Ordered collection of every task on the board.
///
/// The in-memory sequence is the source of truth. The slot is read once in
/// [`TaskStore::mount`] and overwritten after every applied mutation; a
/// failed write is logged and only marks the snapshot as stale.
pub struct TaskStore<S: SnapshotSlot> {
    tasks: Vec<Task>,
    ids: IdRegistry,
    slot: S,
    snapshot_stale: bool,
}

impl<S: SnapshotSlot> TaskStore<S> {
    /// Seed the store from the slot. Missing, unreadable or malformed
    /// snapshots start an empty store.
    pub fn mount(slot: S) -> Self {
        let tasks = match slot.load() {
            Ok(Some(bytes)) => match Snapshot::from_bytes(&bytes) {
                Ok(snapshot) => snapshot.into_tasks(),
                Err(e) => {
                    tracing::warn!("Ignoring unreadable task snapshot: {}", e);
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(e) => {
                tracing::warn!("Task snapshot unavailable, starting empty: {}", e);
                Vec::new()
            }
        };

        tracing::info!("Mounted task store with {} tasks", tasks.len());
        let ids = IdRegistry::seeded(tasks.iter().map(Task::id));
        Self {
            tasks,
            ids,
            slot,
            snapshot_stale: false,
        }
    }

    /// Run a command and mirror the result to the slot if it applied.
    pub fn execute(&mut self, command: &dyn Command) -> Mutation {
        let mut ctx = CommandContext {
            tasks: &mut self.tasks,
            ids: &mut self.ids,
        };
        let outcome = command.execute(&mut ctx);
        match outcome {
            Mutation::Applied => {
                tracing::debug!("Applied: {}", command.description());
                self.persist();
            }
            Mutation::Rejected(reason) => {
                tracing::debug!("Discarded: {} ({})", command.description(), reason);
            }
        }
        outcome
    }

    /// Returns the new task, or `None` when the title is blank.
    pub fn create(&mut self, title: &str) -> Option<Task> {
        let command = CreateTask {
            title: title.to_string(),
        };
        match self.execute(&command) {
            Mutation::Applied => self.tasks.first().cloned(),
            Mutation::Rejected(_) => None,
        }
    }

    pub fn clear_completed(&mut self) -> Mutation {
        self.execute(&ClearCompleted)
    }

    pub fn reorder_within_column(
        &mut self,
        status: TaskStatus,
        ordered_ids: &[TaskId],
    ) -> Mutation {
        self.execute(&ReorderWithinColumn {
            status,
            ordered_ids: ordered_ids.to_vec(),
        })
    }

    pub fn move_to_column(&mut self, id: &TaskId, status: TaskStatus) -> Mutation {
        self.execute(&MoveToColumn {
            task_id: id.clone(),
            status,
        })
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn get(&self, id: &TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id() == id)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// True when the last write to the slot failed.
    pub fn is_snapshot_stale(&self) -> bool {
        self.snapshot_stale
    }

    pub fn slot(&self) -> &S {
        &self.slot
    }

    fn persist(&mut self) {
        let written = Snapshot::from_tasks(&self.tasks)
            .to_bytes()
            .and_then(|bytes| self.slot.save(&bytes));
        match written {
            Ok(()) => self.snapshot_stale = false,
            Err(e) => {
                tracing::warn!("Failed to persist task snapshot: {}", e);
                self.snapshot_stale = true;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::mock;
    use std::collections::HashSet;
    use std::sync::{Arc, Mutex};
    use taskboard_core::{TaskboardError, TaskboardResult};

    mock! {
        pub Slot {}

        impl SnapshotSlot for Slot {
            fn load(&self) -> TaskboardResult<Option<Vec<u8>>>;
            fn save(&mut self, bytes: &[u8]) -> TaskboardResult<()>;
        }
    }

    fn empty_slot() -> MockSlot {
        let mut slot = MockSlot::new();
        slot.expect_load().returning(|| Ok(None));
        slot
    }

    #[test]
    fn test_mount_from_snapshot() {
        let mut slot = MockSlot::new();
        slot.expect_load().times(1).returning(|| {
            Ok(Some(
                br#"[{"id": "b", "title": "Write report", "status": "doing"},
                     {"id": "a", "title": "Buy milk", "status": "todo"}]"#
                    .to_vec(),
            ))
        });
        slot.expect_save().never();

        let store = TaskStore::mount(slot);
        assert_eq!(store.len(), 2);
        assert_eq!(store.tasks()[0].id().as_str(), "b");
        assert_eq!(
            store.get(&TaskId::from("a")).map(Task::status),
            Some(TaskStatus::Todo)
        );
    }

    #[test]
    fn test_mount_degrades_to_empty() {
        let mut malformed = MockSlot::new();
        malformed
            .expect_load()
            .returning(|| Ok(Some(b"{broken".to_vec())));
        assert!(TaskStore::mount(malformed).is_empty());

        let mut unavailable = MockSlot::new();
        unavailable
            .expect_load()
            .returning(|| Err(TaskboardError::StorageUnavailable("locked".into())));
        assert!(TaskStore::mount(unavailable).is_empty());
    }

    #[test]
    fn test_every_applied_mutation_is_written() {
        let mut slot = empty_slot();
        slot.expect_save().times(4).returning(|_| Ok(()));

        let mut store = TaskStore::mount(slot);
        let a = store.create("A").unwrap();
        let b = store.create("B").unwrap();
        assert!(store
            .reorder_within_column(TaskStatus::Todo, &[a.id().clone(), b.id().clone()])
            .is_applied());
        assert!(store.move_to_column(a.id(), TaskStatus::Done).is_applied());
    }

    #[test]
    fn test_rejected_mutations_are_not_written() {
        let mut slot = empty_slot();
        slot.expect_save().times(1).returning(|_| Ok(()));

        let mut store = TaskStore::mount(slot);
        let a = store.create("A").unwrap();
        assert!(store.create("   ").is_none());
        assert!(!store.clear_completed().is_applied());
        assert!(!store
            .reorder_within_column(TaskStatus::Todo, &[TaskId::from("nope")])
            .is_applied());
        assert!(!store
            .move_to_column(&TaskId::from("nope"), TaskStatus::Doing)
            .is_applied());
        assert!(!store.move_to_column(a.id(), TaskStatus::Todo).is_applied());
    }

    #[test]
    fn test_written_bytes_match_store_order() {
        let written: Arc<Mutex<Vec<Vec<u8>>>> = Arc::default();
        let sink = Arc::clone(&written);
        let mut slot = empty_slot();
        slot.expect_save().times(2).returning(move |bytes| {
            sink.lock().unwrap().push(bytes.to_vec());
            Ok(())
        });

        let mut store = TaskStore::mount(slot);
        store.create("First");
        store.create("Second");

        let written = written.lock().unwrap();
        let last = Snapshot::from_bytes(written.last().unwrap()).unwrap();
        let titles: Vec<_> = last.tasks().iter().map(Task::title).collect();
        assert_eq!(titles, vec!["Second", "First"]);
        assert_eq!(last.tasks(), store.tasks());
    }

    #[test]
    fn test_failed_write_marks_snapshot_stale() {
        let mut slot = empty_slot();
        let mut seq = mockall::Sequence::new();
        slot.expect_save()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Err(TaskboardError::StorageUnavailable("disk full".into())));
        slot.expect_save()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(()));

        let mut store = TaskStore::mount(slot);
        let task = store.create("Survives a failed write");
        assert!(task.is_some());
        assert_eq!(store.len(), 1);
        assert!(store.is_snapshot_stale());

        store.create("Next write succeeds");
        assert!(!store.is_snapshot_stale());
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_ids_pairwise_distinct_and_not_reused_after_clear() {
        let mut slot = empty_slot();
        slot.expect_save().returning(|_| Ok(()));
        let mut store = TaskStore::mount(slot);

        let mut seen = HashSet::new();
        for round in 0..20 {
            let task = store.create(&format!("Task {}", round)).unwrap();
            assert!(seen.insert(task.id().clone()));
            store.move_to_column(task.id(), TaskStatus::Done);
        }
        store.clear_completed();
        assert!(store.is_empty());

        for round in 0..20 {
            let task = store.create(&format!("Again {}", round)).unwrap();
            assert!(seen.insert(task.id().clone()));
        }
    }

    #[test]
    fn test_ids_from_snapshot_are_never_reissued() {
        let mut slot = MockSlot::new();
        slot.expect_load().returning(|| {
            Ok(Some(
                br#"[{"id": "kept", "title": "Loaded", "status": "todo"}]"#.to_vec(),
            ))
        });
        slot.expect_save().returning(|_| Ok(()));

        let mut store = TaskStore::mount(slot);
        let created = store.create("Fresh").unwrap();
        assert_ne!(created.id().as_str(), "kept");
    }
}
