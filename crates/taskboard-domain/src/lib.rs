pub mod api;
pub mod board;
pub mod column;
pub mod commands;
pub mod drag;
pub mod ids;
pub mod projection;
pub mod snapshot;
pub mod store;
pub mod task;

pub use board::{BoardSettings, TaskBoard};
pub use column::TaskStatus;
pub use commands::{Mutation, Rejection};
pub use drag::{
    DragCoordinator, DragOutcome, DragState, DropTarget, GestureHandler, MutationIntent,
    NoMutationReason, Point,
};
pub use ids::IdRegistry;
pub use projection::{ColumnProjection, Location};
pub use snapshot::Snapshot;
pub use store::TaskStore;
pub use task::{Task, TaskId};
