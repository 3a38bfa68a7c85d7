use crate::context::CliContext;
use crate::output;
use taskboard_domain::{Mutation, Rejection, TaskStatus};

pub fn add(ctx: &mut CliContext, title: &str) -> anyhow::Result<()> {
    match ctx.board_mut().create(title) {
        Some(task) => output::output_success(&task),
        None => output::output_error("Task title cannot be empty"),
    }
}

pub fn list(ctx: &CliContext, status: Option<TaskStatus>) -> anyhow::Result<()> {
    output::output_list(ctx.list_tasks(status))
}

/// Report a store mutation. Unknown ids and bad permutations are errors;
/// a mutation that changes nothing is not.
pub fn report(ctx: &CliContext, mutation: Mutation) -> anyhow::Result<()> {
    match mutation {
        Mutation::Rejected(Rejection::NotAPermutation) => {
            output::output_error("Ids must list every task in the column exactly once")
        }
        Mutation::Rejected(Rejection::UnknownTask) => output::output_error("Task not found"),
        _ => output::output_success(ctx.view(mutation)),
    }
}
