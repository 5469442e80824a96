pub mod commands;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(
    name = "distribusi",
    about = "Distribusi goals operator CLI",
    long_about = "Resolve monthly profit and cash-in goals for distribusi agents, inspect \
                  chart series and agent coverage, and review effective configuration.",
    after_help = "Examples:\n  distribusi goal --agent \"oki irawan\" --month 08 --year 2025\n  distribusi chart --agent fendi --kind cash-in\n  distribusi config"
)]
pub struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    #[command(about = "Resolve one monthly goal through the settings-then-static fallback chain")]
    Goal {
        #[arg(long, help = "Agent name (case-insensitive), or `national`")]
        agent: String,
        #[arg(long, help = "Month number 1-12, zero-padded accepted; defaults to current month")]
        month: Option<String>,
        #[arg(long, help = "Four-digit year; defaults to current year")]
        year: Option<String>,
        #[arg(long, default_value = "profit", help = "Goal family: profit or cash-in")]
        kind: String,
        #[arg(long, value_name = "PATH", help = "Override document path (beats config/env)")]
        settings: Option<PathBuf>,
        #[arg(long, help = "Include the per-stage resolution trace in the output")]
        trace: bool,
    },
    #[command(about = "Dump the per-month goal series for one agent from the override document")]
    Chart {
        #[arg(long, help = "Agent name (case-insensitive)")]
        agent: String,
        #[arg(long, default_value = "profit", help = "Goal family: profit or cash-in")]
        kind: String,
        #[arg(long, value_name = "PATH", help = "Override document path (beats config/env)")]
        settings: Option<PathBuf>,
    },
    #[command(about = "List agents known to the static tables and the override document")]
    Agents {
        #[arg(long, value_name = "PATH", help = "Override document path (beats config/env)")]
        settings: Option<PathBuf>,
    },
    #[command(
        about = "Inspect effective configuration values with source attribution"
    )]
    Config,
}

pub fn run() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Command::Goal { agent, month, year, kind, settings, trace } => {
            commands::goal::run(commands::goal::GoalArgs {
                agent,
                month,
                year,
                kind,
                settings_path: settings,
                trace,
            })
        }
        Command::Chart { agent, kind, settings } => {
            commands::chart::run(commands::chart::ChartArgs { agent, kind, settings_path: settings })
        }
        Command::Agents { settings } => {
            commands::agents::run(commands::agents::AgentsArgs { settings_path: settings })
        }
        Command::Config => {
            commands::CommandResult { exit_code: 0, output: commands::config::run() }
        }
    };

    println!("{}", result.output);
    ExitCode::from(result.exit_code)
}
