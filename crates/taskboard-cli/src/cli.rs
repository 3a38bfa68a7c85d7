use clap::{ArgGroup, Args, Parser, Subcommand};
use std::path::PathBuf;
use taskboard_domain::{TaskId, TaskStatus};

#[derive(Parser)]
#[command(name = "taskboard")]
#[command(about = "A persistent three-column task board", long_about = None)]
#[command(
    version,
    long_version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("GIT_COMMIT_HASH"), ")")
)]
pub struct Cli {
    #[command(flatten)]
    pub storage: StorageArgs,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Args)]
pub struct StorageArgs {
    /// Directory holding the board slots (or set TASKBOARD_DATA_DIR env var)
    #[arg(long, value_name = "DIR", env = "TASKBOARD_DATA_DIR", global = true)]
    pub data_dir: Option<PathBuf>,

    /// Slot to open inside the data directory
    #[arg(long, value_name = "NAME", global = true)]
    pub slot: Option<String>,

    /// Config file to read instead of the default location
    #[arg(long, value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create a task at the top of To Do
    Add {
        title: String,
    },
    /// List tasks in column order
    List {
        #[arg(long)]
        status: Option<TaskStatus>,
    },
    /// Replace the order of one column
    Reorder {
        #[arg(long)]
        status: TaskStatus,
        #[arg(long, value_delimiter = ',', required = true)]
        ids: Vec<TaskId>,
    },
    /// Move a task to the end of another column
    Move {
        #[arg(long)]
        id: TaskId,
        #[arg(long)]
        to: TaskStatus,
    },
    /// Replay a finished drag gesture
    Drag(DragArgs),
    /// Remove every task in Done
    ClearCompleted,
    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Args)]
#[command(group(ArgGroup::new("target").args(["onto_task", "onto_column"])))]
pub struct DragArgs {
    #[arg(long)]
    pub source: TaskId,
    /// Drop onto another task
    #[arg(long)]
    pub onto_task: Option<TaskId>,
    /// Drop onto a column body
    #[arg(long)]
    pub onto_column: Option<TaskStatus>,
    /// Pointer travel in pixels; defaults to an activated drag
    #[arg(long, value_name = "PX")]
    pub travel: Option<f64>,
}
