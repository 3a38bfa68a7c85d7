use std::cell::RefCell;
use std::rc::Rc;
use taskboard_core::{SnapshotSlot, TaskboardError, TaskboardResult};

#[derive(Debug, Default)]
struct MemoryState {
    bytes: Option<Vec<u8>>,
    writes: usize,
    fail_writes: bool,
}

/// In-process slot. Clones share the same contents, so a test can keep a
/// handle while the board owns another.
#[derive(Debug, Clone, Default)]
pub struct MemorySlot {
    state: Rc<RefCell<MemoryState>>,
}

impl MemorySlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        let slot = Self::default();
        slot.state.borrow_mut().bytes = Some(bytes.into());
        slot
    }

    pub fn contents(&self) -> Option<Vec<u8>> {
        self.state.borrow().bytes.clone()
    }

    /// Number of successful writes.
    pub fn write_count(&self) -> usize {
        self.state.borrow().writes
    }

    /// Make subsequent writes fail, as if storage were unavailable.
    pub fn set_fail_writes(&self, fail: bool) {
        self.state.borrow_mut().fail_writes = fail;
    }
}

impl SnapshotSlot for MemorySlot {
    fn load(&self) -> TaskboardResult<Option<Vec<u8>>> {
        Ok(self.contents())
    }

    fn save(&mut self, bytes: &[u8]) -> TaskboardResult<()> {
        let mut state = self.state.borrow_mut();
        if state.fail_writes {
            return Err(TaskboardError::StorageUnavailable(
                "memory slot is read-only".to_string(),
            ));
        }
        state.bytes = Some(bytes.to_vec());
        state.writes += 1;
        Ok(())
    }
}
