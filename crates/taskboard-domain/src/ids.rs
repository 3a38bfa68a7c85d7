use std::collections::HashSet;

use crate::task::TaskId;

/// Every identifier the board has seen or issued during this process.
///
/// Identifiers are never handed out twice, even after the task that carried
/// one has been cleared from the store.
#[derive(Debug, Default)]
pub struct IdRegistry {
    issued: HashSet<TaskId>,
}

impl IdRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from the identifiers already present in a loaded snapshot.
    pub fn seeded<'a>(ids: impl IntoIterator<Item = &'a TaskId>) -> Self {
        Self {
            issued: ids.into_iter().cloned().collect(),
        }
    }

    pub fn issue(&mut self) -> TaskId {
        loop {
            let id = TaskId::generate();
            if self.issued.insert(id.clone()) {
                return id;
            }
        }
    }

    #[cfg(test)]
    pub(crate) fn is_empty(&self) -> bool {
        self.issued.is_empty()
    }
}
