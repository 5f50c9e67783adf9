//! Tarefa CLI Application
//!
//! Command-line front end for the tarefa to-do list.

mod args;
mod cli;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::{Cli, ListTasksArgs};
use log::info;
use renderer::TerminalRenderer;
use tarefa_core::TaskStoreBuilder;
use Commands::*;

fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        no_color,
        require_date,
        command,
    } = Args::parse();

    let store = TaskStoreBuilder::new()
        .with_database_path(database_file)
        .require_date(require_date)
        .build()
        .context("Failed to open the task store")?;

    let cli = Cli::new(store, TerminalRenderer::new(!no_color));

    info!("Tarefa started");

    match command {
        Some(Add(args)) => cli.add(args),
        Some(List(args)) => cli.list(args),
        Some(Show(args)) => cli.show(args),
        Some(Toggle(args)) => cli.toggle(args),
        Some(Delete(args)) => cli.delete(args),
        Some(Priority(args)) => cli.priority(args),
        Some(Edit(args)) => cli.edit(args),
        Some(Clear) => cli.clear(),
        Some(Stats) => cli.stats(),
        Some(Weekday(args)) => cli.weekday(args),
        None => cli.list(ListTasksArgs::default()),
    }
}
