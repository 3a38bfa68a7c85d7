use crate::store::atomic_writer::AtomicWriter;
use std::path::{Path, PathBuf};
use taskboard_core::{SnapshotSlot, TaskboardResult};

/// Snapshot slot backed by a single JSON file
#[derive(Debug, Clone)]
pub struct JsonFileSlot {
    path: PathBuf,
}

impl JsonFileSlot {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }
}

impl SnapshotSlot for JsonFileSlot {
    fn load(&self) -> TaskboardResult<Option<Vec<u8>>> {
        if !self.exists() {
            tracing::debug!("No snapshot at {}", self.path.display());
            return Ok(None);
        }
        let bytes = AtomicWriter::read_all(&self.path)?;
        tracing::info!("Loaded {} bytes from {}", bytes.len(), self.path.display());
        Ok(Some(bytes))
    }

    fn save(&mut self, bytes: &[u8]) -> TaskboardResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent)?;
            }
        }
        AtomicWriter::write_atomic(&self.path, bytes)?;
        tracing::info!("Saved {} bytes to {}", bytes.len(), self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("tasks.json");
        let mut slot = JsonFileSlot::new(&file_path);

        slot.save(br#"[{"id":"a","title":"A","status":"todo"}]"#)
            .unwrap();
        assert!(file_path.exists());

        let loaded = slot.load().unwrap().unwrap();
        let value: serde_json::Value = serde_json::from_slice(&loaded).unwrap();
        assert_eq!(value[0]["id"], "a");
    }

    #[test]
    fn test_missing_file_loads_as_none() {
        let dir = tempdir().unwrap();
        let slot = JsonFileSlot::new(dir.path().join("nonexistent.json"));

        assert!(!slot.exists());
        assert!(slot.load().unwrap().is_none());
    }

    #[test]
    fn test_save_creates_parent_directory() {
        let dir = tempdir().unwrap();
        let mut slot = JsonFileSlot::new(dir.path().join("nested").join("tasks.json"));

        slot.save(b"[]").unwrap();
        assert_eq!(slot.load().unwrap(), Some(b"[]".to_vec()));
    }
}
