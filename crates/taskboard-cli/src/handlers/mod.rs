pub mod drag;
pub mod task;
