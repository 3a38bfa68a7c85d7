pub mod atomic_writer;
pub mod json_file_slot;
pub mod memory_slot;
pub mod slot_directory;

pub use atomic_writer::AtomicWriter;
pub use json_file_slot::JsonFileSlot;
pub use memory_slot::MemorySlot;
pub use slot_directory::SlotDirectory;
