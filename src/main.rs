#![deny(warnings)]
#![deny(clippy::unwrap_used)]

use std::process::ExitCode;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use dotenv::dotenv;

use strategy_auth::commands::{run_authenticate, run_register};
use strategy_auth::config::{resolve_repository, resolve_strategy};
use strategy_auth::logging;
use strategy_auth::users::{EmailNotifier, RepositoryKind};
use strategy_auth::{StrategyFactory, StrategyKind};

/// Strategy-based authentication demo
#[derive(Parser, Debug)]
#[command(name = "strategy-auth")]
#[command(version, about = "Authenticate credentials with a selectable strategy")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Authenticate one or more credentials with a single strategy
    Authenticate {
        /// Strategy to use: jwt, basic or oauth2 (default: jwt, env: AUTH_STRATEGY)
        #[arg(short, long)]
        strategy: Option<String>,

        /// Print one JSON object per credential instead of plain text
        #[arg(long)]
        json: bool,

        /// Credentials to check, in order
        #[arg(required = true)]
        credentials: Vec<String>,
    },

    /// Register a user through the user service and read it back
    Register {
        /// Repository backend: postgres, mysql or memory (default: memory, env: USER_REPOSITORY)
        #[arg(short, long)]
        repository: Option<String>,

        /// User ID
        #[arg(long)]
        id: u64,

        /// User name
        #[arg(long)]
        name: String,
    },
}

fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    dotenv().ok();
    logging::init();

    match Args::parse().command {
        Command::Authenticate {
            strategy,
            json,
            credentials,
        } => {
            let kind: StrategyKind = resolve_strategy(strategy.as_deref()).parse()?;
            let report = run_authenticate(&StrategyFactory::from_env(), kind, &credentials);
            for line in report.render(json)? {
                println!("{}", line);
            }
            Ok(ExitCode::from(report.exit_code()))
        }
        Command::Register {
            repository,
            id,
            name,
        } => {
            let kind: RepositoryKind = resolve_repository(repository.as_deref()).parse()?;
            let registration = run_register(kind, Arc::new(EmailNotifier), id, name)?;
            for line in registration.render()? {
                println!("{}", line);
            }
            Ok(ExitCode::SUCCESS)
        }
    }
}
