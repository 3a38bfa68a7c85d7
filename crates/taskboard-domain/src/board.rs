use taskboard_core::{AppConfig, SnapshotSlot};

use crate::drag::{
    DragCoordinator, DragOutcome, DragState, DropTarget, GestureHandler, MutationIntent,
    NoMutationReason, Point,
};
use crate::{ColumnProjection, Mutation, Task, TaskId, TaskStatus, TaskStore};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoardSettings {
    pub activation_distance: f64,
}

impl BoardSettings {
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            activation_distance: config.effective_activation_distance(),
        }
    }
}

impl Default for BoardSettings {
    fn default() -> Self {
        Self::from_config(&AppConfig::default())
    }
}

/// The task board: store, projection and drag coordinator wired together.
///
/// Every applied mutation is followed by a fresh projection, so readers of
/// [`TaskBoard::projection`] always see the committed order.
pub struct TaskBoard<S: SnapshotSlot> {
    store: TaskStore<S>,
    projection: ColumnProjection,
    drag: DragCoordinator,
}

impl<S: SnapshotSlot> TaskBoard<S> {
    pub fn mount(slot: S, settings: BoardSettings) -> Self {
        let store = TaskStore::mount(slot);
        let projection = ColumnProjection::derive(store.tasks());
        Self {
            store,
            projection,
            drag: DragCoordinator::new(settings.activation_distance),
        }
    }

    pub fn create(&mut self, title: &str) -> Option<Task> {
        let task = self.store.create(title);
        if task.is_some() {
            self.rederive();
        }
        task
    }

    pub fn clear_completed(&mut self) -> Mutation {
        let outcome = self.store.clear_completed();
        self.commit(outcome)
    }

    pub fn reorder_within_column(
        &mut self,
        status: TaskStatus,
        ordered_ids: &[TaskId],
    ) -> Mutation {
        let outcome = self.store.reorder_within_column(status, ordered_ids);
        self.commit(outcome)
    }

    pub fn move_to_column(&mut self, id: &TaskId, status: TaskStatus) -> Mutation {
        let outcome = self.store.move_to_column(id, status);
        self.commit(outcome)
    }

    pub fn apply(&mut self, intent: MutationIntent) -> Mutation {
        let outcome = self.store.execute(intent.into_command().as_ref());
        self.commit(outcome)
    }

    pub fn pointer_down(&mut self, source: TaskId, at: Point) {
        self.drag.pointer_down(source, at);
    }

    pub fn pointer_move(&mut self, at: Point) {
        self.drag.pointer_move(at);
    }

    pub fn pointer_up(&mut self, target: Option<&DropTarget>) -> DragOutcome {
        let resolved = self.drag.pointer_up(&self.projection, target);
        self.finish_gesture(resolved)
    }

    pub fn cancel_drag(&mut self) -> DragOutcome {
        self.drag.cancel();
        DragOutcome::NoMutation(NoMutationReason::Cancelled)
    }

    /// Handle a gesture reported in one piece by an external pointer tracker.
    pub fn complete_gesture(
        &mut self,
        source: &TaskId,
        target: Option<&DropTarget>,
        travel: f64,
    ) -> DragOutcome {
        let resolved = self.drag.complete(&self.projection, source, target, travel);
        self.finish_gesture(resolved)
    }

    pub fn projection(&self) -> &ColumnProjection {
        &self.projection
    }

    pub fn store(&self) -> &TaskStore<S> {
        &self.store
    }

    pub fn drag_state(&self) -> &DragState {
        self.drag.state()
    }

    fn finish_gesture(
        &mut self,
        resolved: Result<MutationIntent, NoMutationReason>,
    ) -> DragOutcome {
        let intent = match resolved {
            Ok(intent) => intent,
            Err(reason) => {
                tracing::debug!("Gesture ended without mutation: {:?}", reason);
                return DragOutcome::NoMutation(reason);
            }
        };

        let applied = match &intent {
            MutationIntent::Reorder { .. } => DragOutcome::ReorderApplied,
            MutationIntent::MoveToColumn { .. } => DragOutcome::ColumnMoveApplied,
        };
        match self.apply(intent) {
            Mutation::Applied => applied,
            Mutation::Rejected(reason) => {
                DragOutcome::NoMutation(NoMutationReason::Rejected(reason))
            }
        }
    }

    fn commit(&mut self, outcome: Mutation) -> Mutation {
        if outcome.is_applied() {
            self.rederive();
        }
        outcome
    }

    fn rederive(&mut self) {
        self.projection = ColumnProjection::derive(self.store.tasks());
    }
}

impl<S: SnapshotSlot> GestureHandler for TaskBoard<S> {
    /// Treats the report as a gesture that already passed activation.
    fn on_gesture_end(&mut self, source: &TaskId, target: Option<&DropTarget>) -> DragOutcome {
        let travel = self.drag.activation_distance();
        self.complete_gesture(source, target, travel)
    }
}
