use serde::Serialize;

use crate::{Task, TaskId, TaskStatus};

/// Where a task currently sits on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Location {
    pub status: TaskStatus,
    pub index: usize,
}

/// Per-column ordered task ids, derived from the store's sequence.
///
/// Holds no state of its own: it is rebuilt from the sequence after every
/// committed mutation, so the displayed order is always the stored order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ColumnProjection {
    todo: Vec<TaskId>,
    doing: Vec<TaskId>,
    done: Vec<TaskId>,
}

impl ColumnProjection {
    pub fn derive(tasks: &[Task]) -> Self {
        let mut projection = Self::default();
        for task in tasks {
            projection
                .column_mut(task.status())
                .push(task.id().clone());
        }
        projection
    }

    pub fn column(&self, status: TaskStatus) -> &[TaskId] {
        match status {
            TaskStatus::Todo => &self.todo,
            TaskStatus::Doing => &self.doing,
            TaskStatus::Done => &self.done,
        }
    }

    fn column_mut(&mut self, status: TaskStatus) -> &mut Vec<TaskId> {
        match status {
            TaskStatus::Todo => &mut self.todo,
            TaskStatus::Doing => &mut self.doing,
            TaskStatus::Done => &mut self.done,
        }
    }

    /// Columns in display order.
    pub fn columns(&self) -> impl Iterator<Item = (TaskStatus, &[TaskId])> + '_ {
        TaskStatus::ALL
            .into_iter()
            .map(move |status| (status, self.column(status)))
    }

    pub fn locate(&self, id: &TaskId) -> Option<Location> {
        self.columns().find_map(|(status, ids)| {
            ids.iter()
                .position(|candidate| candidate == id)
                .map(|index| Location { status, index })
        })
    }

    pub fn len(&self) -> usize {
        self.todo.len() + self.doing.len() + self.done.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
