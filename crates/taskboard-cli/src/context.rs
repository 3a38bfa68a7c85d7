use crate::cli::StorageArgs;
use serde::Serialize;
use taskboard_core::AppConfig;
use taskboard_domain::{
    BoardSettings, ColumnProjection, DragOutcome, Mutation, NoMutationReason, Task, TaskBoard,
    TaskStatus,
};
use taskboard_persistence::{JsonFileSlot, SlotDirectory};

/// Board state returned after every mutation.
#[derive(Debug, Serialize)]
pub struct BoardView<'a> {
    pub applied: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    /// False when the slot could not be written; the change is held in memory only.
    pub saved: bool,
    pub columns: &'a ColumnProjection,
}

pub struct CliContext {
    board: TaskBoard<JsonFileSlot>,
}

impl CliContext {
    pub fn load(storage: &StorageArgs) -> anyhow::Result<Self> {
        let mut config = match &storage.config {
            Some(path) => AppConfig::load_from(path),
            None => AppConfig::load(),
        };
        if let Some(dir) = &storage.data_dir {
            config.data_dir = Some(dir.clone());
        }
        if let Some(slot) = &storage.slot {
            config.slot_name = Some(slot.clone());
        }

        let slots = SlotDirectory::new(config.effective_data_dir());
        let slot = slots.slot(config.effective_slot_name())?;
        tracing::debug!("Opening slot {}", slot.path().display());

        Ok(Self {
            board: TaskBoard::mount(slot, BoardSettings::from_config(&config)),
        })
    }

    pub fn board_mut(&mut self) -> &mut TaskBoard<JsonFileSlot> {
        &mut self.board
    }

    /// Tasks in display order: column by column, top to bottom.
    pub fn list_tasks(&self, status: Option<TaskStatus>) -> Vec<Task> {
        let store = self.board.store();
        self.board
            .projection()
            .columns()
            .filter(|(column, _)| status.map_or(true, |wanted| wanted == *column))
            .flat_map(|(_, ids)| ids.iter())
            .filter_map(|id| store.get(id).cloned())
            .collect()
    }

    pub fn view(&self, mutation: Mutation) -> BoardView<'_> {
        match mutation {
            Mutation::Applied => self.build_view(None),
            Mutation::Rejected(rejection) => self.build_view(Some(rejection.to_string())),
        }
    }

    pub fn drag_view(&self, outcome: DragOutcome) -> BoardView<'_> {
        let reason = match outcome {
            DragOutcome::ReorderApplied | DragOutcome::ColumnMoveApplied => None,
            DragOutcome::NoMutation(reason) => Some(describe(reason)),
        };
        self.build_view(reason)
    }

    fn build_view(&self, reason: Option<String>) -> BoardView<'_> {
        BoardView {
            applied: reason.is_none(),
            reason,
            saved: !self.board.store().is_snapshot_stale(),
            columns: self.board.projection(),
        }
    }
}

fn describe(reason: NoMutationReason) -> String {
    match reason {
        NoMutationReason::Cancelled => "drag cancelled".to_string(),
        NoMutationReason::BelowActivationDistance => "below activation distance".to_string(),
        NoMutationReason::NotDragging => "no drag in progress".to_string(),
        NoMutationReason::UnknownSource => "dragged task not found".to_string(),
        NoMutationReason::UnresolvedTarget => "dropped outside any column".to_string(),
        NoMutationReason::OrderUnchanged => "order unchanged".to_string(),
        NoMutationReason::Rejected(rejection) => rejection.to_string(),
    }
}
