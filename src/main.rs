use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use dotenvy::dotenv;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::error;

mod application;
mod domain;
mod infrastructure;
mod utils;

use crate::application::commands;
use crate::application::services::{ScheduleService, TaskService};
use crate::infrastructure::database::DatabaseManager;
use crate::infrastructure::repositories::{SqliteAssignmentRepository, SqliteTaskRepository};

#[derive(Parser)]
#[command(name = "choreboard")]
#[command(about = "Assigns recurring chores to calendar dates", long_about = None)]
struct Cli {
    /// SQLite database file
    #[arg(long, env = "CHOREBOARD_DB", default_value = "tasks.db")]
    database: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a recurring task
    AddTask {
        name: String,

        /// daily, weekly, bi-weekly or monthly
        #[arg(long, default_value = "daily")]
        frequency: String,

        /// high, mid or low
        #[arg(long, default_value = "mid")]
        priority: String,
    },

    /// List all tasks
    ListTasks {
        #[arg(long)]
        json: bool,
    },

    /// Delete a task and its assignments
    RemoveTask { id: i64 },

    /// Generate the schedule for a window (default: current week) and store
    /// any assignments not already present
    Generate {
        #[arg(long)]
        start: Option<NaiveDate>,

        #[arg(long)]
        end: Option<NaiveDate>,
    },

    /// Show stored assignments for a window (default: current week)
    Show {
        #[arg(long)]
        start: Option<NaiveDate>,

        #[arg(long)]
        end: Option<NaiveDate>,

        #[arg(long)]
        json: bool,
    },

    /// Mark one assignment done
    Complete {
        id: i64,
        date: NaiveDate,
    },

    /// Delete every stored assignment
    ClearSchedule,
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let db = DatabaseManager::new(&cli.database)?;
    db.initialize().await?;

    let task_repo = Arc::new(SqliteTaskRepository::new(db.clone()));
    let assignment_repo = Arc::new(SqliteAssignmentRepository::new(db));

    let task_service = TaskService::new(task_repo.clone());
    let schedule_service = ScheduleService::new(task_repo, assignment_repo);

    match cli.command {
        Commands::AddTask {
            name,
            frequency,
            priority,
        } => commands::run_add_task(&task_service, &name, &frequency, &priority).await,
        Commands::ListTasks { json } => commands::run_list_tasks(&task_service, json).await,
        Commands::RemoveTask { id } => commands::run_remove_task(&task_service, id).await,
        Commands::Generate { start, end } => {
            commands::run_generate(&schedule_service, start, end).await
        }
        Commands::Show { start, end, json } => {
            commands::run_show_schedule(&schedule_service, start, end, json).await
        }
        Commands::Complete { id, date } => {
            commands::run_complete(&schedule_service, id, date).await
        }
        Commands::ClearSchedule => commands::run_clear_schedule(&schedule_service).await,
    }
}

#[tokio::main]
async fn main() {
    utils::setup_logging();
    dotenv().ok();

    let cli = Cli::parse();
    if let Err(e) = run(cli).await {
        error!("Error: {}", e);
        std::process::exit(1);
    }
}
