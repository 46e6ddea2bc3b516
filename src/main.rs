mod commands;
mod config;
mod domain;
mod error;
mod input;
mod persistence;
mod ui;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::Session;
use config::{default_config_file, load_settings};
use error::TaskError;
use input::Prompt;
use persistence::LogOutcome;
use std::io;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use ui::{LayoutConfig, PlainStyler, Renderer, TitleStyle};

#[derive(Parser)]
#[command(name = "task-manager")]
#[command(about = "Handles the operations for the stored tasks", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Task file path. Defaults to ~/.local/var/tasks
    #[arg(long, global = true)]
    task_file: Option<PathBuf>,

    /// Completion log path. Defaults to ~/.local/var/log/tasks.log
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    /// Config file path. Defaults to <config dir>/task-manager/config.json
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Terminal width in columns. Detected when omitted
    #[arg(long, global = true)]
    width: Option<usize>,

    /// Disable colors and bold text
    #[arg(long, global = true)]
    no_color: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the list of stored tasks (default)
    Read,
    /// Write tasks to the list of stored tasks
    Write,
    /// Log one or more tasks as completed and remove them
    Log,
    /// Log one or more tasks as incomplete and remove them
    Delete,
    /// Edit one task from the list of stored tasks
    Edit,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    match run(cli) {
        Err(e) if matches!(e.downcast_ref::<TaskError>(), Some(TaskError::Aborted)) => {
            println!("\n Abort.");
            Ok(())
        }
        other => other,
    }
}

fn run(cli: Cli) -> Result<()> {
    let settings = match cli.config.or_else(default_config_file) {
        Some(path) => load_settings(path)?,
        None => Default::default(),
    };
    let settings = settings.resolve(cli.task_file, cli.log_file)?;

    // Width is read once per invocation
    let layout = match cli.width {
        Some(width) => LayoutConfig::new(width, settings.info_width),
        None => LayoutConfig::detect(settings.info_width),
    };
    let renderer = if cli.no_color {
        Renderer::new(layout, Box::new(PlainStyler), TitleStyle::figlet())
    } else {
        Renderer::terminal(layout)
    };

    let session = Session::new(settings, renderer, chrono::Local::now().naive_local());
    let mut stdout = io::stdout();
    let mut prompt = Prompt::new(io::stdin().lock(), io::stdout());

    match cli.command.unwrap_or(Commands::Read) {
        Commands::Read => commands::run_read(&session, &mut stdout),
        Commands::Write => {
            commands::run_write(&session, &mut prompt)?;
            commands::run_read(&session, &mut stdout)
        }
        Commands::Log => commands::run_process(&session, &mut prompt, LogOutcome::Completed),
        Commands::Delete => commands::run_process(&session, &mut prompt, LogOutcome::Incomplete),
        Commands::Edit => commands::run_edit(&session, &mut prompt),
    }
}
