use super::{Command, CommandContext, Mutation, Rejection};
use crate::{Task, TaskId, TaskStatus};
use std::collections::{HashMap, HashSet};

/// Create a task at the front of the sequence, in the To Do column
pub struct CreateTask {
    pub title: String,
}

impl Command for CreateTask {
    fn execute(&self, context: &mut CommandContext) -> Mutation {
        let title = self.title.trim();
        if title.is_empty() {
            return Mutation::Rejected(Rejection::EmptyTitle);
        }
        let id = context.ids.issue();
        context.tasks.insert(0, Task::new(id, title.to_string()));
        Mutation::Applied
    }

    fn description(&self) -> String {
        format!("Create task: '{}'", self.title.trim())
    }
}

/// Remove every task in the Done column
pub struct ClearCompleted;

impl Command for ClearCompleted {
    fn execute(&self, context: &mut CommandContext) -> Mutation {
        if !context
            .tasks
            .iter()
            .any(|t| t.status() == TaskStatus::Done)
        {
            return Mutation::Rejected(Rejection::Unchanged);
        }
        context.tasks.retain(|t| t.status() != TaskStatus::Done);
        Mutation::Applied
    }

    fn description(&self) -> String {
        "Clear completed tasks".to_string()
    }
}

/// Rewrite one column's order. Tasks in other columns keep their slots.
pub struct ReorderWithinColumn {
    pub status: TaskStatus,
    pub ordered_ids: Vec<TaskId>,
}

impl ReorderWithinColumn {
    fn is_permutation_of(&self, column: &[&TaskId]) -> bool {
        if column.len() != self.ordered_ids.len() {
            return false;
        }
        let current: HashSet<&TaskId> = column.iter().copied().collect();
        let mut seen = HashSet::with_capacity(self.ordered_ids.len());
        self.ordered_ids
            .iter()
            .all(|id| current.contains(id) && seen.insert(id))
    }
}

impl Command for ReorderWithinColumn {
    fn execute(&self, context: &mut CommandContext) -> Mutation {
        let column: Vec<&TaskId> = context
            .tasks
            .iter()
            .filter(|t| t.status() == self.status)
            .map(Task::id)
            .collect();

        if !self.is_permutation_of(&column) {
            return Mutation::Rejected(Rejection::NotAPermutation);
        }
        if column.iter().copied().eq(self.ordered_ids.iter()) {
            return Mutation::Rejected(Rejection::Unchanged);
        }

        let by_id: HashMap<&TaskId, &Task> = context
            .tasks
            .iter()
            .filter(|t| t.status() == self.status)
            .map(|t| (t.id(), t))
            .collect();
        let slots = context
            .tasks
            .iter()
            .enumerate()
            .filter(|(_, t)| t.status() == self.status)
            .map(|(index, _)| index);

        let mut reordered = context.tasks.clone();
        for (slot, id) in slots.zip(&self.ordered_ids) {
            if let Some(task) = by_id.get(id) {
                reordered[slot] = (*task).clone();
            }
        }

        *context.tasks = reordered;
        Mutation::Applied
    }

    fn description(&self) -> String {
        format!(
            "Reorder {} column ({} tasks)",
            self.status,
            self.ordered_ids.len()
        )
    }
}

/// Move a task to another column, after that column's existing tasks
pub struct MoveToColumn {
    pub task_id: TaskId,
    pub status: TaskStatus,
}

impl Command for MoveToColumn {
    fn execute(&self, context: &mut CommandContext) -> Mutation {
        let Some(index) = context.tasks.iter().position(|t| t.id() == &self.task_id) else {
            return Mutation::Rejected(Rejection::UnknownTask);
        };
        if context.tasks[index].status() == self.status {
            return Mutation::Rejected(Rejection::Unchanged);
        }

        let mut task = context.tasks.remove(index);
        task.update_status(self.status);
        context.tasks.push(task);
        Mutation::Applied
    }

    fn description(&self) -> String {
        format!("Move task {} to {}", self.task_id, self.status)
    }
}
