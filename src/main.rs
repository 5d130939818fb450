use std::io::{self, Write};

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tracklet::engine::TaskEngine;
use tracklet::error::TaskError;
use tracklet::models::{CreateTaskInput, Task, TaskStatus, UpdateTaskInput};
use tracklet::store::TaskStore;

#[derive(Parser)]
#[command(name = "tracklet")]
#[command(about = "Track short tasks from the command line")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a new task
    Add {
        name: String,
        description: String,
    },
    /// Update a task's name and/or description
    Update {
        id: u64,
        #[arg(short, long)]
        name: Option<String>,
        #[arg(short, long)]
        description: Option<String>,
    },
    /// Delete a task by id
    Delete { id: u64 },
    /// Set a task's status (todo, in-progress, done)
    Mark { id: u64, status: TaskStatus },
    /// Mark a task as in progress
    InProgress { id: u64 },
    /// Mark a task as done
    Done { id: u64 },
    /// List tasks, optionally filtered by status
    List { status: Option<TaskStatus> },
    /// Show a single task
    Find { id: u64 },
    /// Delete every task
    Clear {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

/// Initialize tracing to stderr so stdout stays clean for listings.
fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| "tracklet=warn".into()),
    );

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let store = TaskStore::open_default()?;
    let mut engine = TaskEngine::new(store);

    if let Err(err) = run(&mut engine, cli.command) {
        eprintln!("{err}");
        std::process::exit(1);
    }
    Ok(())
}

fn run(engine: &mut TaskEngine, command: Commands) -> Result<(), TaskError> {
    match command {
        Commands::Add { name, description } => {
            let task = engine.add_task(CreateTaskInput { name, description })?;
            println!("Task added successfully (ID: {})", task.id);
        }
        Commands::Update {
            id,
            name,
            description,
        } => {
            let task = engine.update_task(id, UpdateTaskInput { name, description })?;
            println!("Task updated successfully (ID: {})", task.id);
        }
        Commands::Delete { id } => {
            engine.delete_task(id)?;
            println!("Task deleted successfully (ID: {id})");
        }
        Commands::Mark { id, status } => {
            engine.mark_status(id, status)?;
            println!("Task status updated successfully (ID: {id}, status: {status})");
        }
        Commands::InProgress { id } => {
            engine.mark_status(id, TaskStatus::InProgress)?;
            println!("Task marked as in progress (ID: {id})");
        }
        Commands::Done { id } => {
            engine.mark_status(id, TaskStatus::Done)?;
            println!("Task marked as done (ID: {id})");
        }
        Commands::List { status } => {
            let tasks = engine.list_tasks(status);
            if tasks.is_empty() {
                println!("No tasks found.");
            } else {
                for task in tasks {
                    print_task(task);
                }
            }
        }
        Commands::Find { id } => {
            print_task(engine.find_task(id)?);
        }
        Commands::Clear { yes } => {
            if yes || confirm("Delete every task? This cannot be undone.") {
                engine.delete_all_tasks()?;
                println!("All tasks deleted.");
            } else {
                println!("Aborted.");
            }
        }
    }
    Ok(())
}

fn print_task(task: &Task) {
    println!(
        "ID: {}, Name: {}, Description: {}, Status: {}",
        task.id, task.name, task.description, task.status
    );
}

fn confirm(prompt: &str) -> bool {
    print!("{prompt} [y/N] ");
    let _ = io::stdout().flush();

    let mut answer = String::new();
    if io::stdin().read_line(&mut answer).is_err() {
        return false;
    }
    matches!(answer.trim(), "y" | "Y" | "yes")
}
