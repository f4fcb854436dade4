use clap::{Parser, Subcommand};
use std::path::PathBuf;
use taskz::model::Priority;

#[derive(Parser, Debug)]
#[command(name = "tz")]
#[command(about = "Persistent task list for the command line", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Use an explicit data file instead of the default location
    #[arg(short, long, global = true, value_name = "PATH")]
    pub file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a new task
    #[command(alias = "a")]
    Add {
        /// Title of the task
        title: String,

        /// Free-form notes
        #[arg(required = false)]
        notes: Option<String>,

        /// Task priority
        #[arg(short, long, value_enum, default_value_t = Priority::Medium)]
        priority: Priority,

        /// Due date or label (free text)
        #[arg(short, long, default_value = "")]
        due: String,
    },

    /// List tasks
    #[command(alias = "ls")]
    List {
        /// Only completed tasks
        #[arg(long, conflicts_with = "open")]
        done: bool,

        /// Only open tasks
        #[arg(long)]
        open: bool,

        /// Filter by a title/notes substring
        #[arg(short, long)]
        search: Option<String>,
    },

    /// Toggle completion for one or more tasks
    #[command(alias = "d")]
    Done {
        /// Ids of the tasks (e.g. 1 3 5)
        #[arg(required = true, num_args = 1..)]
        ids: Vec<u64>,
    },

    /// Edit a task's fields
    #[command(alias = "e")]
    Edit {
        /// Id of the task
        id: u64,

        /// New title (omitted or empty keeps the current one)
        #[arg(short, long)]
        title: Option<String>,

        /// New notes
        #[arg(short, long)]
        notes: Option<String>,

        /// New priority
        #[arg(short, long, value_enum)]
        priority: Option<Priority>,

        /// New due date or label
        #[arg(short, long)]
        due: Option<String>,
    },

    /// Delete one or more tasks
    #[command(alias = "rm")]
    Delete {
        /// Ids of the tasks (e.g. 1 3 5)
        #[arg(required = true, num_args = 1..)]
        ids: Vec<u64>,
    },

    /// Remove all completed tasks
    Clear,

    /// Print the data file path
    Path,

    /// Get or set configuration
    Config {
        /// Configuration key (e.g., data-file)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}
