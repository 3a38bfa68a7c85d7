use crate::cli::DragArgs;
use crate::context::CliContext;
use crate::output;
use taskboard_domain::{DropTarget, GestureHandler};

pub fn handle(ctx: &mut CliContext, args: DragArgs) -> anyhow::Result<()> {
    let target = match (args.onto_task, args.onto_column) {
        (Some(task), _) => Some(DropTarget::Task(task)),
        (None, Some(status)) => Some(DropTarget::Column(status)),
        (None, None) => None,
    };

    let board = ctx.board_mut();
    let outcome = match args.travel {
        Some(travel) => board.complete_gesture(&args.source, target.as_ref(), travel),
        None => board.on_gesture_end(&args.source, target.as_ref()),
    };
    tracing::debug!("Drag of {} finished: {:?}", args.source, outcome);

    output::output_success(ctx.drag_view(outcome))
}
