use std::io::{self, Write};

use anyhow::Result;
use clap::{Parser, Subcommand};

use tripledger::cli::{
    handle_budget_command, handle_config_command, handle_crowd_command, handle_expenses_command,
    handle_settle_command, handle_votes_command, handle_welcome_command, ExpenseFilter, GroupArgs,
};
use tripledger::config::{Settings, TripLedgerPaths};
use tripledger::export::ExportFormat;
use tripledger::models::{ExpenseCategory, Money};
use tripledger::logging::init_tracing;
use tripledger::setup::should_show_welcome;

#[derive(Parser)]
#[command(
    name = "tripledger",
    version,
    about = "Shared-expense settlement and group voting for trips",
    long_about = "TripLedger reads a group snapshot (members, expenses, decisions \
                  under vote, budget and crowd forecasts) and tells everyone who \
                  owes what, how the votes stand, and where the budget is going."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show who owes what and the transfers that settle the group
    Settle {
        #[command(flatten)]
        group: GroupArgs,
        /// Output format (defaults to the configured format)
        #[arg(short, long, value_enum)]
        format: Option<ExportFormat>,
    },

    /// List the group's expenses
    #[command(alias = "exp")]
    Expenses {
        #[command(flatten)]
        group: GroupArgs,
        /// Only show this category
        #[arg(short, long, value_enum)]
        category: Option<ExpenseCategory>,
        /// Only show expenses shared by this member (id or name)
        #[arg(short, long)]
        member: Option<String>,
        /// Only show expenses of at least this amount (e.g. "1,200" or "₹99.50")
        #[arg(long, value_parser = Money::parse)]
        min_amount: Option<Money>,
    },

    /// Show the voting board
    Votes {
        #[command(flatten)]
        group: GroupArgs,
        /// Only show this voting item
        #[arg(short, long)]
        item: Option<String>,
    },

    /// Show the budget tracker
    Budget {
        #[command(flatten)]
        group: GroupArgs,
    },

    /// Show crowd forecasts
    Crowd {
        #[command(flatten)]
        group: GroupArgs,
        /// Only show this attraction
        #[arg(short, long)]
        attraction: Option<String>,
    },

    /// Complete the welcome flow
    Welcome {
        #[arg(short, long)]
        name: Option<String>,
        #[arg(short, long)]
        email: Option<String>,
    },

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing();

    // Initialize paths and settings
    let paths = TripLedgerPaths::new()?;
    let mut settings = Settings::load_or_create(&paths)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Some(Commands::Settle { group, format }) => {
            handle_settle_command(&group.load()?, &settings, format, &mut out)?;
        }
        Some(Commands::Expenses {
            group,
            category,
            member,
            min_amount,
        }) => {
            let filter = ExpenseFilter {
                category,
                member,
                min_amount,
            };
            handle_expenses_command(&group.load()?, &settings, &filter, &mut out)?;
        }
        Some(Commands::Votes { group, item }) => {
            handle_votes_command(&group.load()?, item.as_deref(), &mut out)?;
        }
        Some(Commands::Budget { group }) => {
            handle_budget_command(&group.load()?, &settings, &mut out)?;
        }
        Some(Commands::Crowd { group, attraction }) => {
            handle_crowd_command(&group.load()?, attraction.as_deref(), &mut out)?;
        }
        Some(Commands::Welcome { name, email }) => {
            handle_welcome_command(&paths, &mut settings, name, email, &mut out)?;
        }
        Some(Commands::Config) => {
            handle_config_command(&paths, &settings, &mut out)?;
        }
        None => {
            writeln!(out, "TripLedger - shared expenses and group decisions")?;
            writeln!(out)?;
            if should_show_welcome(&settings) {
                writeln!(out, "Run 'tripledger welcome --name <NAME>' to get started.")?;
            }
            writeln!(out, "Run 'tripledger --help' for usage information.")?;
        }
    }

    out.flush()?;
    Ok(())
}
