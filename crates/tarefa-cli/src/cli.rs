//! Command arguments and their handlers.
//!
//! Each command has a clap argument struct that converts into the matching
//! core parameter type with `From`, so the core crate never sees clap:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → TaskStore → Display types
//! ```
//!
//! [`Cli`] owns the store and the renderer and turns every operation's
//! outcome into markdown.

use anyhow::{bail, Result};
use clap::{Args, ValueEnum};
use log::debug;
use tarefa_core::{
    display::{CreateResult, DeleteResult, OperationStatus, ToggleResult, UpdateResult},
    params::{AddTask, EditTask, Id, ListTasks, SetPriority},
    views, FilterMode, Priority, TaskStore,
};

use crate::renderer::TerminalRenderer;

// ============================================================================
// CLI Argument Wrappers
// ============================================================================

/// Add a new task
#[derive(Args)]
pub struct AddTaskArgs {
    /// What needs doing
    pub text: String,
    #[arg(short, long, help = "Longer notes about the task")]
    pub description: Option<String>,
    #[arg(short, long, help = "Priority of the task (defaults to simple)")]
    pub priority: Option<PriorityArg>,
    #[arg(long, help = "Due date as YYYY-MM-DD")]
    pub date: Option<String>,
}

impl From<AddTaskArgs> for AddTask {
    fn from(val: AddTaskArgs) -> Self {
        AddTask {
            text: val.text,
            description: val.description,
            priority: val.priority.map(Into::into),
            date: val.date,
        }
    }
}

/// List tasks
#[derive(Args, Default)]
pub struct ListTasksArgs {
    #[arg(
        short,
        long,
        value_enum,
        default_value_t = FilterArg::All,
        help = "Which tasks to show"
    )]
    pub filter: FilterArg,
}

impl From<ListTasksArgs> for ListTasks {
    fn from(val: ListTasksArgs) -> Self {
        ListTasks {
            filter: val.filter.into(),
        }
    }
}

/// Arguments for commands that act on one task
#[derive(Args)]
pub struct TaskIdArgs {
    #[arg(help = "ID of the task")]
    pub id: u64,
}

impl From<TaskIdArgs> for Id {
    fn from(val: TaskIdArgs) -> Self {
        Id { id: val.id }
    }
}

/// Cycle or set a task's priority
#[derive(Args)]
pub struct PriorityArgs {
    #[arg(help = "ID of the task")]
    pub id: u64,
    #[arg(long, help = "Set this priority instead of cycling to the next one")]
    pub set: Option<PriorityArg>,
}

/// Edit a task
///
/// Only the given fields change. Pass an empty string to `--description` or
/// `--date` to clear it.
#[derive(Args)]
pub struct EditTaskArgs {
    #[arg(help = "ID of the task to edit")]
    pub id: u64,
    #[arg(short, long, help = "New text")]
    pub text: Option<String>,
    #[arg(short, long, help = "New description, empty to clear")]
    pub description: Option<String>,
    #[arg(long, help = "New due date as YYYY-MM-DD, empty to clear")]
    pub date: Option<String>,
}

impl From<EditTaskArgs> for EditTask {
    fn from(val: EditTaskArgs) -> Self {
        EditTask {
            id: val.id,
            text: val.text,
            description: val.description,
            date: val.date,
        }
    }
}

/// Preview the weekday of a date
#[derive(Args)]
pub struct WeekdayArgs {
    #[arg(help = "Date as YYYY-MM-DD")]
    pub date: String,
}

/// Command-line representation of task priorities
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum PriorityArg {
    Simple,
    Medium,
    Urgent,
}

impl From<PriorityArg> for Priority {
    fn from(val: PriorityArg) -> Self {
        match val {
            PriorityArg::Simple => Priority::Simple,
            PriorityArg::Medium => Priority::Medium,
            PriorityArg::Urgent => Priority::Urgent,
        }
    }
}

/// Command-line representation of list filters
#[derive(Copy, Clone, Default, PartialEq, Eq, ValueEnum)]
pub enum FilterArg {
    #[default]
    All,
    Active,
    #[value(alias = "done")]
    Completed,
}

impl From<FilterArg> for FilterMode {
    fn from(val: FilterArg) -> Self {
        match val {
            FilterArg::All => FilterMode::All,
            FilterArg::Active => FilterMode::Active,
            FilterArg::Completed => FilterMode::Completed,
        }
    }
}

// ============================================================================
// Command Handlers
// ============================================================================

/// Runs commands against a task store and renders the results.
pub struct Cli {
    store: TaskStore,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(store: TaskStore, renderer: TerminalRenderer) -> Self {
        Self { store, renderer }
    }

    pub fn add(mut self, args: AddTaskArgs) -> Result<()> {
        let task = self.store.add(&args.into())?;
        self.renderer.render(&CreateResult::new(task).to_string())
    }

    pub fn list(self, args: ListTasksArgs) -> Result<()> {
        let params = ListTasks::from(args);
        let tasks = self.store.list(&params);
        let stats = self.store.stats();

        let mut output = format!("## {}\n\n{tasks}", params.filter.title());
        if stats.total > 0 {
            output.push_str(&format!("\n{stats}\n"));
        }
        self.renderer.render(&output)
    }

    pub fn show(self, args: TaskIdArgs) -> Result<()> {
        let Id { id } = args.into();
        let task = self.store.require(id)?;
        self.renderer.render(&task.to_string())
    }

    pub fn toggle(mut self, args: TaskIdArgs) -> Result<()> {
        let Id { id } = args.into();
        let outcome = self.store.toggle(id)?;
        self.renderer.render(&ToggleResult(outcome).to_string())
    }

    pub fn delete(mut self, args: TaskIdArgs) -> Result<()> {
        let Id { id } = args.into();
        let output = match self.store.delete(id)? {
            Some(task) => DeleteResult::new(task).to_string(),
            None => OperationStatus::success(format!("No task with ID {id}, nothing deleted"))
                .to_string(),
        };
        self.renderer.render(&output)
    }

    pub fn priority(mut self, args: PriorityArgs) -> Result<()> {
        let task = match args.set {
            Some(priority) => self.store.set_priority(&SetPriority {
                id: args.id,
                priority: priority.into(),
            })?,
            None => self.store.cycle_priority(args.id)?,
        };

        let change = format!("Priority is now {}", task.priority);
        self.renderer
            .render(&UpdateResult::with_changes(task, vec![change]).to_string())
    }

    pub fn edit(mut self, args: EditTaskArgs) -> Result<()> {
        let params = EditTask::from(args);
        if params.text.is_none() && params.description.is_none() && params.date.is_none() {
            bail!("Nothing to edit: pass --text, --description or --date");
        }

        let outcome = self.store.edit(&params)?;
        if outcome.is_unchanged() {
            debug!("Edit of task {} was a no-op", params.id);
            let status = OperationStatus::success(format!("Task {} is unchanged", params.id));
            return self.renderer.render(&status.to_string());
        }
        self.renderer.render(&UpdateResult::from(outcome).to_string())
    }

    pub fn clear(mut self) -> Result<()> {
        let status = match self.store.clear_completed()? {
            0 => OperationStatus::success("No completed tasks to clear"),
            1 => OperationStatus::success("Cleared 1 completed task"),
            n => OperationStatus::success(format!("Cleared {n} completed tasks")),
        };
        self.renderer.render(&status.to_string())
    }

    pub fn stats(self) -> Result<()> {
        let stats = self.store.stats();
        let output = format!(
            "## Statistics\n\n- Total: {}\n- Active: {}\n- Completed: {}\n",
            stats.total, stats.active, stats.completed
        );
        self.renderer.render(&output)
    }

    pub fn weekday(self, args: WeekdayArgs) -> Result<()> {
        match views::weekday_of(&args.date) {
            Some(day) => self
                .renderer
                .render(&format!("{} is a {day}\n", args.date.trim())),
            None => bail!("'{}' is not a valid YYYY-MM-DD date", args.date),
        }
    }
}
