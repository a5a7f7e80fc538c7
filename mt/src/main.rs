use clap::Parser;
use colored::*;
use eyre::{Context, Result};
use log::info;

use mytasks::cli::{Cli, Command, OutputFormat};
use mytasks::config::Config;
use mytasks::{Task, TaskStore, derive_view};

fn setup_logging() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Warn)
        .init();
    Ok(())
}

fn main() -> Result<()> {
    setup_logging().context("Failed to setup logging")?;

    let cli = Cli::parse();
    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;

    info!("mytasks starting");

    let store = TaskStore::open(&config.db_path)?;
    store.init()?;

    match cli.command {
        Command::Add { name, priority, due } => {
            let name = trimmed_name(&name)?;
            store.create(name, priority, due)?;
            println!("{} Added task: {}", "✓".green(), name.cyan());
        }
        Command::List { filter, sort, format } => {
            let tasks = store.list_all()?;
            let view = derive_view(&tasks, filter, sort);
            match format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&view)?),
                OutputFormat::Text => {
                    if view.is_empty() {
                        println!("No tasks found");
                    } else {
                        for task in &view {
                            print_task(task);
                        }
                    }
                }
            }
        }
        Command::Edit { id, name, priority, due } => {
            let name = trimmed_name(&name)?;
            if store.get(id)?.is_none() {
                eyre::bail!("Task not found: {}", id);
            }
            store.update(id, name, priority, due)?;
            println!("{} Updated task: {}", "✓".green(), name.cyan());
        }
        Command::Done { id } => {
            store.set_completed(id, true)?;
            println!("{} Marked task {} done", "✓".green(), id.to_string().cyan());
        }
        Command::Undone { id } => {
            store.set_completed(id, false)?;
            println!("{} Marked task {} not done", "✓".green(), id.to_string().cyan());
        }
        Command::Rm { id } => {
            store.remove(id)?;
            println!("{} Removed task: {}", "✓".green(), id);
        }
    }

    Ok(())
}

/// Validate a task name at the presentation boundary; the store itself
/// accepts whatever it is given.
fn trimmed_name(name: &str) -> Result<&str> {
    let name = name.trim();
    if name.is_empty() {
        eyre::bail!("Task name must not be empty");
    }
    Ok(name)
}

fn print_task(task: &Task) {
    let mark = if task.completed { "[x]" } else { "[ ]" };
    let tag = task.priority.to_string().to_uppercase();
    match task.due_date {
        Some(due) => println!(
            "{} {:>4}  {}  {}  {}",
            mark,
            task.id.to_string().yellow(),
            task.name,
            tag.dimmed(),
            format!("due {}", due).dimmed()
        ),
        None => println!(
            "{} {:>4}  {}  {}",
            mark,
            task.id.to_string().yellow(),
            task.name,
            tag.dimmed()
        ),
    }
}
