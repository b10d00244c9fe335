//! WorkPulse - employee productivity metrics over project-tracking providers
//!
//! Command-line entry point. Every subcommand prints its result as JSON on
//! stdout; logs go to stderr.
//!
//! ```bash
//! workpulse --user u-1 project create --provider yougile --token "$YOUGILE_KEY"
//! workpulse --user u-1 employees sync 1
//! workpulse --user u-1 metrics complete-tasks 42
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::info;
use workpulse_domain::{Config, ProviderType};
use workpulse_infra::config;
use workpulse_lib::utils::logging::{init_tracing, LogFormat};
use workpulse_lib::{commands, AppContext};

#[derive(Parser)]
#[command(name = "workpulse", version, about = "Employee productivity metrics over project trackers")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Configuration file (JSON or TOML); environment and probed files otherwise
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Identity the commands run as
    #[arg(long, env = "WORKPULSE_USER", global = true, default_value = "")]
    user: String,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    json_logs: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Provider accounts
    Project {
        #[command(subcommand)]
        action: ProjectCommand,
    },
    /// Local employee records
    Employees {
        #[command(subcommand)]
        action: EmployeesCommand,
    },
    /// Productivity metrics
    Metrics {
        #[command(subcommand)]
        action: MetricsCommand,
    },
    /// Database and cache health
    Health,
}

#[derive(Subcommand)]
enum ProjectCommand {
    Create {
        #[arg(long, default_value = "yougile")]
        provider: ProviderType,
        #[arg(long, env = "WORKPULSE_PROVIDER_TOKEN", hide_env_values = true)]
        token: String,
    },
    List,
    Delete {
        project_id: i64,
    },
}

#[derive(Subcommand)]
enum EmployeesCommand {
    /// Reconcile local employees with the provider
    Sync { project_id: i64 },
    List { project_id: i64 },
}

#[derive(Subcommand)]
enum MetricsCommand {
    /// Completed tasks assigned to an employee
    CompleteTasks { employee_id: i64 },
}

#[derive(Serialize)]
struct CountOutput {
    employee_id: i64,
    complete_tasks: usize,
}

#[tokio::main]
async fn main() -> Result<()> {
    let dotenv = dotenvy::dotenv();

    let cli = Cli::parse();
    init_tracing(if cli.json_logs { LogFormat::Json } else { LogFormat::Compact });

    match dotenv {
        Ok(path) => info!(path = %path.display(), "loaded .env"),
        Err(e) => tracing::debug!(error = %e, "no .env file loaded"),
    }

    let config = load_config(cli.config.clone())?;
    let ctx = AppContext::new(config).await.context("failed to initialise application context")?;

    run(&ctx, &cli).await
}

fn load_config(path: Option<PathBuf>) -> Result<Config> {
    if let Some(path) = path {
        return config::load_from_file(Some(path)).context("failed to load configuration file");
    }

    config::load_or_default().context("failed to load configuration")
}

async fn run(ctx: &AppContext, cli: &Cli) -> Result<()> {
    let user = cli.user.as_str();

    match &cli.command {
        Command::Project { action } => match action {
            ProjectCommand::Create { provider, token } => {
                print_json(&commands::create_project(ctx, user, *provider, token).await?)
            }
            ProjectCommand::List => print_json(&commands::list_projects(ctx, user).await?),
            ProjectCommand::Delete { project_id } => {
                commands::delete_project(ctx, user, *project_id).await?;
                print_json(&serde_json::json!({ "deleted": project_id }))
            }
        },
        Command::Employees { action } => match action {
            EmployeesCommand::Sync { project_id } => {
                print_json(&commands::update_employees(ctx, user, *project_id).await?)
            }
            EmployeesCommand::List { project_id } => {
                print_json(&commands::list_employees(ctx, user, *project_id).await?)
            }
        },
        Command::Metrics { action } => match action {
            MetricsCommand::CompleteTasks { employee_id } => {
                let complete_tasks =
                    commands::count_of_complete_tasks(ctx, user, *employee_id).await?;
                print_json(&CountOutput { employee_id: *employee_id, complete_tasks })
            }
        },
        Command::Health => print_json(&commands::get_app_health(ctx).await),
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let rendered = serde_json::to_string_pretty(value).context("failed to render output")?;
    println!("{rendered}");
    Ok(())
}
