use thiserror::Error;

pub mod task_commands;

pub use task_commands::*;

/// Trait for domain commands that mutate the task sequence.
///
/// A command either applies completely or leaves the context untouched;
/// validation happens before the first write.
pub trait Command {
    fn execute(&self, context: &mut CommandContext) -> Mutation;

    /// Human-readable description of what this command does
    fn description(&self) -> String;
}

/// State a command is allowed to touch.
pub struct CommandContext<'a> {
    pub tasks: &'a mut Vec<crate::Task>,
    pub ids: &'a mut crate::IdRegistry,
}

/// Result of running a command against the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mutation {
    Applied,
    Rejected(Rejection),
}

impl Mutation {
    pub fn is_applied(self) -> bool {
        matches!(self, Mutation::Applied)
    }
}

/// Why a command was discarded. None of these are errors for the caller.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    #[error("task title is empty")]
    EmptyTitle,

    #[error("ids are not a permutation of the column")]
    NotAPermutation,

    #[error("no such task")]
    UnknownTask,

    #[error("nothing to change")]
    Unchanged,
}
