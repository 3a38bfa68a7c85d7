use taskboard_core::SnapshotSlot;
use taskboard_domain::*;
use taskboard_persistence::*;
use tempfile::tempdir;

fn column<S: SnapshotSlot>(board: &TaskBoard<S>, status: TaskStatus) -> Vec<TaskId> {
    board.projection().column(status).to_vec()
}

fn populate<S: SnapshotSlot>(board: &mut TaskBoard<S>) {
    board.create("Buy milk");
    let report = board.create("Write report").unwrap().id().clone();
    let gym = board.create("Gym").unwrap().id().clone();
    let taxes = board.create("Taxes").unwrap().id().clone();

    board.move_to_column(&report, TaskStatus::Doing);
    board.move_to_column(&taxes, TaskStatus::Doing);
    board.move_to_column(&gym, TaskStatus::Done);
    board.reorder_within_column(TaskStatus::Doing, &[taxes, report]);
}

#[test]
fn test_file_slot_round_trip() {
    let dir = tempdir().unwrap();
    let slots = SlotDirectory::new(dir.path());

    let mut board = TaskBoard::mount(slots.slot("kanban-tasks").unwrap(), BoardSettings::default());
    populate(&mut board);

    let reloaded = TaskBoard::mount(slots.slot("kanban-tasks").unwrap(), BoardSettings::default());
    for status in TaskStatus::ALL {
        assert_eq!(column(&reloaded, status), column(&board, status));
    }
    assert_eq!(reloaded.store().tasks(), board.store().tasks());
}

#[test]
fn test_memory_slot_round_trip() {
    let slot = MemorySlot::new();
    let mut board = TaskBoard::mount(slot.clone(), BoardSettings::default());
    populate(&mut board);

    let reloaded = TaskBoard::mount(slot, BoardSettings::default());
    assert_eq!(reloaded.projection(), board.projection());
}

#[test]
fn test_slot_written_on_every_mutation() {
    let slot = MemorySlot::new();
    let mut board = TaskBoard::mount(slot.clone(), BoardSettings::default());

    let a = board.create("A").unwrap().id().clone();
    assert_eq!(slot.write_count(), 1);
    board.create(" ");
    assert_eq!(slot.write_count(), 1);
    board.move_to_column(&a, TaskStatus::Done);
    assert_eq!(slot.write_count(), 2);
    board.clear_completed();
    assert_eq!(slot.write_count(), 3);
    assert_eq!(slot.contents(), Some(b"[]".to_vec()));
}

#[test]
fn test_malformed_file_mounts_empty_and_is_overwritten() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("tasks.json");
    std::fs::write(&path, "{ not an array").unwrap();

    let mut board = TaskBoard::mount(JsonFileSlot::new(&path), BoardSettings::default());
    assert!(board.projection().is_empty());

    board.create("Fresh start");
    let bytes = std::fs::read(&path).unwrap();
    let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(value[0]["title"], "Fresh start");
    assert_eq!(value[0]["status"], "todo");
}

#[test]
fn test_failed_writes_keep_in_memory_state() {
    let slot = MemorySlot::new();
    let mut board = TaskBoard::mount(slot.clone(), BoardSettings::default());
    board.create("Saved");
    let saved = slot.contents();

    slot.set_fail_writes(true);
    let unsaved = board.create("Not saved").unwrap();
    assert!(board.store().is_snapshot_stale());
    assert_eq!(column(&board, TaskStatus::Todo).first(), Some(unsaved.id()));
    assert_eq!(slot.contents(), saved);

    slot.set_fail_writes(false);
    board.move_to_column(unsaved.id(), TaskStatus::Doing);
    assert!(!board.store().is_snapshot_stale());

    let reloaded = TaskBoard::mount(slot, BoardSettings::default());
    assert_eq!(reloaded.projection(), board.projection());
}

#[test]
fn test_drag_is_persisted_only_on_completion() {
    let slot = MemorySlot::new();
    let mut board = TaskBoard::mount(slot.clone(), BoardSettings::default());
    let a = board.create("A").unwrap().id().clone();
    let b = board.create("B").unwrap().id().clone();
    let writes = slot.write_count();

    board.pointer_down(b.clone(), Point::new(0.0, 0.0));
    board.pointer_move(Point::new(0.0, 30.0));
    board.pointer_move(Point::new(0.0, 60.0));
    assert_eq!(slot.write_count(), writes);

    let outcome = board.pointer_up(Some(&DropTarget::Task(a.clone())));
    assert_eq!(outcome, DragOutcome::ReorderApplied);
    assert_eq!(slot.write_count(), writes + 1);

    let reloaded = TaskBoard::mount(slot, BoardSettings::default());
    assert_eq!(column(&reloaded, TaskStatus::Todo), vec![a, b]);
}
