use crate::store::json_file_slot::JsonFileSlot;
use std::path::{Path, PathBuf};
use taskboard_core::{TaskboardError, TaskboardResult};

/// A directory of named slots, one `<name>.json` file per slot.
#[derive(Debug, Clone)]
pub struct SlotDirectory {
    root: PathBuf,
}

impl SlotDirectory {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Open the slot called `name`. Names must be a single path component.
    pub fn slot(&self, name: &str) -> TaskboardResult<JsonFileSlot> {
        Self::validate_name(name)?;
        Ok(JsonFileSlot::new(self.root.join(format!("{}.json", name))))
    }

    fn validate_name(name: &str) -> TaskboardResult<()> {
        let invalid = name.trim().is_empty()
            || name == "."
            || name == ".."
            || name.contains(['/', '\\'])
            || name.contains('\0');
        if invalid {
            return Err(TaskboardError::Validation(format!(
                "Invalid slot name '{}'",
                name
            )));
        }
        Ok(())
    }
}
