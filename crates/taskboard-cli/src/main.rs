mod cli;
mod context;
mod handlers;
mod output;

use clap::{CommandFactory, Parser};
use cli::{Cli, Commands};
use context::CliContext;

fn main() -> anyhow::Result<()> {
    if let Ok(log_path) = std::env::var("TASKBOARD_DEBUG_LOG") {
        let log_file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)?;

        tracing_subscriber::fmt()
            .with_writer(log_file)
            .with_max_level(tracing::Level::DEBUG)
            .with_target(true)
            .with_file(true)
            .with_line_number(true)
            .with_ansi(false)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_max_level(tracing::Level::WARN)
            .init();
    }

    let cli = Cli::parse();

    if let Commands::Completions { shell } = cli.command {
        let mut cmd = Cli::command();
        clap_complete::generate(shell, &mut cmd, "taskboard", &mut std::io::stdout());
        return Ok(());
    }

    let mut ctx = CliContext::load(&cli.storage)?;

    match cli.command {
        Commands::Add { title } => handlers::task::add(&mut ctx, &title)?,
        Commands::List { status } => handlers::task::list(&ctx, status)?,
        Commands::Reorder { status, ids } => {
            let mutation = ctx.board_mut().reorder_within_column(status, &ids);
            handlers::task::report(&ctx, mutation)?;
        }
        Commands::Move { id, to } => {
            let mutation = ctx.board_mut().move_to_column(&id, to);
            handlers::task::report(&ctx, mutation)?;
        }
        Commands::ClearCompleted => {
            let mutation = ctx.board_mut().clear_completed();
            handlers::task::report(&ctx, mutation)?;
        }
        Commands::Drag(args) => handlers::drag::handle(&mut ctx, args)?,
        Commands::Completions { .. } => {}
    }

    Ok(())
}
