use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{
    AddTaskArgs, EditTaskArgs, ListTasksArgs, PriorityArgs, TaskIdArgs, WeekdayArgs,
};

/// A small prioritized to-do list for the terminal
///
/// Tasks carry a priority (simple, medium, urgent) and an optional due date
/// shown with its weekday in Portuguese. Lists are ordered by priority, then
/// newest first. Running without a command lists every task.
#[derive(Parser)]
#[command(version, about, name = "tarefa")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/tarefa/tarefa.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Require a due date on every new task
    #[arg(long, global = true, env = "TAREFA_REQUIRE_DATE")]
    pub require_date: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the Tarefa CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Add a new task
    #[command(alias = "a")]
    Add(AddTaskArgs),
    /// List tasks ordered by priority
    #[command(alias = "ls")]
    List(ListTasksArgs),
    /// Show a single task
    Show(TaskIdArgs),
    /// Mark a task completed, or reopen it
    #[command(alias = "t")]
    Toggle(TaskIdArgs),
    /// Delete a task
    #[command(alias = "rm")]
    Delete(TaskIdArgs),
    /// Cycle a task's priority, or set it with --set
    #[command(alias = "p")]
    Priority(PriorityArgs),
    /// Edit a task's text, description or date
    #[command(alias = "e")]
    Edit(EditTaskArgs),
    /// Remove every completed task
    Clear,
    /// Show task counts
    Stats,
    /// Show the weekday of a date without saving anything
    Weekday(WeekdayArgs),
}
