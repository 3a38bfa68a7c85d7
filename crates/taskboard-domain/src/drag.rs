//! Drag-and-drop gesture recognition.
//!
//! A press on a task only becomes a drag once the pointer has travelled the
//! activation distance; shorter gestures are clicks and never mutate the
//! board. A completed drag resolves against the last derived projection into
//! at most one [`MutationIntent`]:
//!
//! - dropped on a task or column in the same column → reorder that column
//!   with list-move semantics;
//! - dropped on a task or column elsewhere → move to that column (appended).
//!
//! Intermediate positions are local to the gesture; nothing reaches the store
//! until the pointer is released over a valid target.

use crate::commands::{Command, MoveToColumn, Rejection, ReorderWithinColumn};
use crate::{ColumnProjection, Location, TaskId, TaskStatus};
use taskboard_core::config::DEFAULT_ACTIVATION_DISTANCE;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// What the pointer was released over.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropTarget {
    Task(TaskId),
    Column(TaskStatus),
}

/// The single store mutation a drag resolves to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MutationIntent {
    Reorder {
        status: TaskStatus,
        ordered_ids: Vec<TaskId>,
    },
    MoveToColumn {
        task_id: TaskId,
        status: TaskStatus,
    },
}

impl MutationIntent {
    pub fn into_command(self) -> Box<dyn Command> {
        match self {
            MutationIntent::Reorder {
                status,
                ordered_ids,
            } => Box::new(ReorderWithinColumn {
                status,
                ordered_ids,
            }),
            MutationIntent::MoveToColumn { task_id, status } => {
                Box::new(MoveToColumn { task_id, status })
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoMutationReason {
    Cancelled,
    BelowActivationDistance,
    NotDragging,
    UnknownSource,
    UnresolvedTarget,
    OrderUnchanged,
    Rejected(Rejection),
}

/// Terminal state of a gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragOutcome {
    NoMutation(NoMutationReason),
    ReorderApplied,
    ColumnMoveApplied,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum DragState {
    #[default]
    Idle,
    /// Pressed on a task, not yet past the activation distance.
    Pressed { source: TaskId, origin: Point },
    Dragging { source: TaskId, origin: Point },
}

/// Capability offered to a pointer-tracking layer: report the end of a
/// gesture and let the board decide what it means.
pub trait GestureHandler {
    fn on_gesture_end(&mut self, source: &TaskId, target: Option<&DropTarget>) -> DragOutcome;
}

#[derive(Debug, Clone)]
pub struct DragCoordinator {
    activation_distance: f64,
    state: DragState,
}

impl DragCoordinator {
    /// A negative or non-finite distance falls back to the default.
    pub fn new(activation_distance: f64) -> Self {
        let activation_distance = Some(activation_distance)
            .filter(|d| d.is_finite() && *d >= 0.0)
            .unwrap_or(DEFAULT_ACTIVATION_DISTANCE);
        Self {
            activation_distance,
            state: DragState::Idle,
        }
    }

    pub fn activation_distance(&self) -> f64 {
        self.activation_distance
    }

    pub fn state(&self) -> &DragState {
        &self.state
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging { .. })
    }

    pub fn pointer_down(&mut self, source: TaskId, at: Point) {
        self.state = DragState::Pressed { source, origin: at };
    }

    pub fn pointer_move(&mut self, at: Point) {
        let activated = match &self.state {
            DragState::Pressed { source, origin }
                if origin.distance_to(at) >= self.activation_distance =>
            {
                Some((source.clone(), *origin))
            }
            _ => None,
        };
        if let Some((source, origin)) = activated {
            tracing::debug!("Drag activated for task {}", source);
            self.state = DragState::Dragging { source, origin };
        }
    }

    pub fn cancel(&mut self) {
        self.state = DragState::Idle;
    }

    /// Release the pointer. Always returns the coordinator to idle.
    pub fn pointer_up(
        &mut self,
        projection: &ColumnProjection,
        target: Option<&DropTarget>,
    ) -> Result<MutationIntent, NoMutationReason> {
        match std::mem::take(&mut self.state) {
            DragState::Idle => Err(NoMutationReason::NotDragging),
            DragState::Pressed { .. } => Err(NoMutationReason::BelowActivationDistance),
            DragState::Dragging { source, .. } => Self::resolve(projection, &source, target),
        }
    }

    /// Resolve a whole gesture at once, given how far the pointer travelled.
    pub fn complete(
        &mut self,
        projection: &ColumnProjection,
        source: &TaskId,
        target: Option<&DropTarget>,
        travel: f64,
    ) -> Result<MutationIntent, NoMutationReason> {
        self.state = DragState::Idle;
        // NaN travel never activates.
        if !(travel >= self.activation_distance) {
            return Err(NoMutationReason::BelowActivationDistance);
        }
        Self::resolve(projection, source, target)
    }

    pub fn resolve(
        projection: &ColumnProjection,
        source: &TaskId,
        target: Option<&DropTarget>,
    ) -> Result<MutationIntent, NoMutationReason> {
        let from = projection
            .locate(source)
            .ok_or(NoMutationReason::UnknownSource)?;
        let to = match target {
            Some(DropTarget::Task(id)) => projection
                .locate(id)
                .ok_or(NoMutationReason::UnresolvedTarget)?,
            Some(DropTarget::Column(status)) => Location {
                status: *status,
                index: projection.column(*status).len(),
            },
            None => return Err(NoMutationReason::UnresolvedTarget),
        };

        if from.status != to.status {
            return Ok(MutationIntent::MoveToColumn {
                task_id: source.clone(),
                status: to.status,
            });
        }

        let column = projection.column(from.status);
        let ordered_ids = move_item(column, from.index, to.index);
        if ordered_ids == column {
            return Err(NoMutationReason::OrderUnchanged);
        }
        Ok(MutationIntent::Reorder {
            status: from.status,
            ordered_ids,
        })
    }
}

impl Default for DragCoordinator {
    fn default() -> Self {
        Self::new(DEFAULT_ACTIVATION_DISTANCE)
    }
}

/// Remove the item at `from` and reinsert it at `to`, clamped to the end.
/// The relative order of every other item is preserved.
fn move_item(ids: &[TaskId], from: usize, to: usize) -> Vec<TaskId> {
    let mut moved = ids.to_vec();
    if from >= moved.len() {
        return moved;
    }
    let item = moved.remove(from);
    let to = to.min(moved.len());
    moved.insert(to, item);
    moved
}
