use crate::TaskboardResult;

/// A single named slot in an external key-value persistence layer.
///
/// The board reads the slot once when it is mounted and overwrites it after
/// every committed mutation. Implementations decide where the bytes live
/// (a file, process memory, an embedded database); the board never looks
/// past this trait.
pub trait SnapshotSlot {
    /// Read the slot. `Ok(None)` means the slot has never been written.
    fn load(&self) -> TaskboardResult<Option<Vec<u8>>>;

    /// Replace the slot's contents with `bytes`.
    fn save(&mut self, bytes: &[u8]) -> TaskboardResult<()>;
}
