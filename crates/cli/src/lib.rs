pub mod commands;
pub mod logging;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use courier_advisor_core::config::{AppConfig, LoadOptions};
use uuid::Uuid;

use crate::commands::{CommandContext, CommandResult};

#[derive(Debug, Parser)]
#[command(
    name = "courier-advisor",
    about = "Courier matching and airline baggage planning CLI",
    long_about = "Rank couriers for on-board-courier shipments and plan how a shipment's weight is split across couriers under airline baggage rules.",
    after_help = "Examples:\n  courier-advisor suggest --roster couriers.json --requirement shipment.json\n  courier-advisor plan --weight 70 --airline LH\n  courier-advisor compare --weight 150 --airline LH --courier-cost 200 --human"
)]
pub struct Cli {
    #[arg(long, global = true, help = "Print human-readable text instead of JSON")]
    human: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    #[command(about = "Rank a courier roster (JSON array) against a shipment requirement")]
    Suggest {
        #[arg(long)]
        roster: PathBuf,
        #[arg(long)]
        requirement: PathBuf,
    },
    #[command(about = "Score a single courier against a shipment requirement")]
    Score {
        #[arg(long)]
        courier: PathBuf,
        #[arg(long)]
        requirement: PathBuf,
    },
    #[command(about = "Show one airline's baggage rules, search them, or list the full table")]
    Airlines {
        #[arg(long, conflicts_with = "search")]
        code: Option<String>,
        #[arg(long)]
        search: Option<String>,
    },
    #[command(about = "Split a shipment weight across couriers for an airline")]
    Plan {
        #[arg(long)]
        weight: String,
        #[arg(long)]
        airline: String,
    },
    #[command(about = "Compare one courier paying excess baggage against several couriers")]
    Compare {
        #[arg(long)]
        weight: String,
        #[arg(long)]
        airline: String,
        #[arg(long, help = "Cost per courier; defaults to advisor.default_courier_cost")]
        courier_cost: Option<String>,
    },
    #[command(about = "Inspect effective configuration values with source attribution")]
    Config,
}

impl Command {
    fn name(&self) -> &'static str {
        match self {
            Self::Suggest { .. } => "suggest",
            Self::Score { .. } => "score",
            Self::Airlines { .. } => "airlines",
            Self::Plan { .. } => "plan",
            Self::Compare { .. } => "compare",
            Self::Config => "config",
        }
    }
}

pub fn run() -> ExitCode {
    let cli = Cli::parse();

    let config = match AppConfig::load(LoadOptions::default()) {
        Ok(config) => config,
        Err(error) => {
            let result = CommandResult::failure(
                cli.command.name(),
                &Uuid::new_v4().to_string(),
                "config_validation",
                format!("configuration issue: {error}"),
                2,
            );
            println!("{}", result.render(cli.human));
            return ExitCode::from(result.exit_code);
        }
    };

    logging::init_logging(&config);
    let context = CommandContext::new(config);
    let span = tracing::info_span!("command", correlation_id = %context.correlation_id);
    let _entered = span.enter();

    let result = dispatch(&context, &cli.command);
    tracing::info!(
        event_name = "cli.command.completed",
        command = cli.command.name(),
        exit_code = result.exit_code,
        "command finished"
    );

    println!("{}", result.render(cli.human));
    ExitCode::from(result.exit_code)
}

fn dispatch(context: &CommandContext, command: &Command) -> CommandResult {
    match command {
        Command::Suggest { roster, requirement } => {
            commands::suggest::run(context, roster, requirement)
        }
        Command::Score { courier, requirement } => {
            commands::score::run(context, courier, requirement)
        }
        Command::Airlines { code, search } => {
            commands::airlines::run(context, code.as_deref(), search.as_deref())
        }
        Command::Plan { weight, airline } => commands::plan::run(context, weight, airline),
        Command::Compare { weight, airline, courier_cost } => {
            commands::compare::run(context, weight, airline, courier_cost.as_deref())
        }
        Command::Config => commands::config::run(context),
    }
}
