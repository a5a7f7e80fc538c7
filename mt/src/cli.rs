//! CLI argument parsing for mytasks

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::domain::Priority;
use crate::view::{SortKey, StatusFilter};

#[derive(Parser, Debug)]
#[command(name = "mt")]
#[command(author, version, about = "Local to-do list with SQLite persistence", long_about = None)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Add a new task
    Add {
        /// Task name
        #[arg(required = true)]
        name: String,

        /// Priority (high, medium, low)
        #[arg(short, long, default_value = "medium")]
        priority: Priority,

        /// Due date (YYYY-MM-DD)
        #[arg(short, long)]
        due: Option<NaiveDate>,
    },

    /// List tasks, filtered and sorted
    List {
        /// Which tasks to show (all, todo, done)
        #[arg(short, long, default_value = "all")]
        filter: StatusFilter,

        /// Display order (priority, due)
        #[arg(short, long, default_value = "priority")]
        sort: SortKey,

        /// Output format (text, json)
        #[arg(long, default_value = "text")]
        format: OutputFormat,
    },

    /// Edit an existing task's name, priority, and due date
    Edit {
        /// Task id
        #[arg(required = true)]
        id: i64,

        /// New task name
        #[arg(required = true)]
        name: String,

        /// Priority (high, medium, low)
        #[arg(short, long, default_value = "medium")]
        priority: Priority,

        /// Due date (YYYY-MM-DD); omit to clear
        #[arg(short, long)]
        due: Option<NaiveDate>,
    },

    /// Mark a task complete
    Done {
        /// Task id
        #[arg(required = true)]
        id: i64,
    },

    /// Mark a task not complete
    Undone {
        /// Task id
        #[arg(required = true)]
        id: i64,
    },

    /// Remove a task
    Rm {
        /// Task id
        #[arg(required = true)]
        id: i64,
    },
}

/// Output format for the list command
#[derive(Clone, Debug, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "plain" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(format!("Unknown format: {}. Use: text or json", s)),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Json => write!(f, "json"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_add_defaults() {
        let cli = Cli::parse_from(["mt", "add", "Buy milk"]);
        if let Command::Add { name, priority, due } = cli.command {
            assert_eq!(name, "Buy milk");
            assert_eq!(priority, Priority::Medium);
            assert!(due.is_none());
        } else {
            panic!("Expected Add command");
        }
    }

    #[test]
    fn test_cli_parse_add_full() {
        let cli = Cli::parse_from(["mt", "add", "Buy milk", "-p", "high", "-d", "2025-03-01"]);
        if let Command::Add { name, priority, due } = cli.command {
            assert_eq!(name, "Buy milk");
            assert_eq!(priority, Priority::High);
            assert_eq!(due, NaiveDate::from_ymd_opt(2025, 3, 1));
        } else {
            panic!("Expected Add command");
        }
    }

    #[test]
    fn test_cli_parse_add_rejects_bad_date() {
        assert!(Cli::try_parse_from(["mt", "add", "x", "-d", "not-a-date"]).is_err());
        assert!(Cli::try_parse_from(["mt", "add", "x", "-d", "2025-13-40"]).is_err());
    }

    #[test]
    fn test_cli_parse_add_rejects_bad_priority() {
        assert!(Cli::try_parse_from(["mt", "add", "x", "-p", "urgent"]).is_err());
    }

    #[test]
    fn test_cli_parse_list_defaults() {
        let cli = Cli::parse_from(["mt", "list"]);
        if let Command::List { filter, sort, format } = cli.command {
            assert_eq!(filter, StatusFilter::All);
            assert_eq!(sort, SortKey::Priority);
            assert!(matches!(format, OutputFormat::Text));
        } else {
            panic!("Expected List command");
        }
    }

    #[test]
    fn test_cli_parse_list_selectors() {
        let cli = Cli::parse_from(["mt", "list", "-f", "todo", "-s", "due"]);
        if let Command::List { filter, sort, .. } = cli.command {
            assert_eq!(filter, StatusFilter::Todo);
            assert_eq!(sort, SortKey::Due);
        } else {
            panic!("Expected List command");
        }
    }

    #[test]
    fn test_cli_parse_edit() {
        let cli = Cli::parse_from(["mt", "edit", "3", "New name", "-p", "low"]);
        if let Command::Edit { id, name, priority, due } = cli.command {
            assert_eq!(id, 3);
            assert_eq!(name, "New name");
            assert_eq!(priority, Priority::Low);
            assert!(due.is_none());
        } else {
            panic!("Expected Edit command");
        }
    }

    #[test]
    fn test_cli_parse_toggle_and_rm() {
        assert!(matches!(
            Cli::parse_from(["mt", "done", "7"]).command,
            Command::Done { id: 7 }
        ));
        assert!(matches!(
            Cli::parse_from(["mt", "undone", "7"]).command,
            Command::Undone { id: 7 }
        ));
        assert!(matches!(
            Cli::parse_from(["mt", "rm", "7"]).command,
            Command::Rm { id: 7 }
        ));
    }

    #[test]
    fn test_cli_with_config() {
        let cli = Cli::parse_from(["mt", "list", "-c", "/path/to/config.yml"]);
        assert_eq!(cli.config, Some(PathBuf::from("/path/to/config.yml")));
    }

    #[test]
    fn test_output_format_from_str() {
        assert!(matches!("text".parse::<OutputFormat>(), Ok(OutputFormat::Text)));
        assert!(matches!("json".parse::<OutputFormat>(), Ok(OutputFormat::Json)));
        assert!("yaml".parse::<OutputFormat>().is_err());
    }
}
