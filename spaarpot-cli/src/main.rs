use anyhow::{Context, Result, bail};
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use spaarpot_core::{Expense, ExpenseStore, expenses_in_month, summarize};
use spaarpot_ingest::RawTable;
use spaarpot_ledger::FlatFileExpenseLog;
use std::path::{Path, PathBuf};
use tracing::debug;

mod config;
mod logging;
mod report;
mod state;

#[derive(Parser, Debug)]
#[command(
    name = "spaarpot",
    version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("SPAARPOT_BUILD_SHA"), ")"),
    about = "Log expenses, import bank exports, and track the monthly budget"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Expense log commands
    Expense {
        #[command(subcommand)]
        command: ExpenseCommand,
    },

    /// Summarize logged expenses against the monthly budget
    Summary {
        /// Budget ceiling (defaults to budget.monthly from config)
        #[arg(long)]
        budget: Option<String>,

        /// Only count expenses dated in the current month
        #[arg(long)]
        this_month: bool,

        /// Summarize as seen on this date (YYYY-MM-DD) instead of today
        #[arg(long)]
        as_of: Option<String>,
    },

    /// Bank export commands
    Bank {
        #[command(subcommand)]
        command: BankCommand,
    },

    /// Configuration commands
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand, Debug)]
enum ExpenseCommand {
    /// Append an expense to the log
    Add {
        name: String,
        /// Amount with a dot as decimal separator, e.g. 12.50 or -5 for a refund
        #[arg(allow_negative_numbers = true)]
        amount: String,
        category: String,
        /// Expense date (YYYY-MM-DD), defaults to today
        #[arg(long)]
        date: Option<String>,
    },

    /// Print every logged expense
    List,
}

#[derive(Subcommand, Debug)]
enum BankCommand {
    /// Normalize a semicolon-delimited ING export and keep it as the current upload
    Import {
        /// Path to the .csv export
        file: PathBuf,
    },

    /// Print the transactions of the last successful import
    Show,
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Write a default config.toml if none exists
    Init,

    /// Print the effective configuration and paths
    Show,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let cfg = config::load_config()?;
    logging::init(&cfg.logging.filter);

    let home = state::ensure_spaarpot_home()?;
    let log_path = cfg.expense_log_path(&home);
    debug!(home = %home.display(), log = %log_path.display(), "resolved paths");

    match cli.command {
        Command::Expense { command } => match command {
            ExpenseCommand::Add {
                name,
                amount,
                category,
                date,
            } => {
                let amount = Expense::parse_amount(&amount)?;
                let date = match date {
                    Some(d) => Expense::parse_date(&d)?,
                    None => today(),
                };
                let expense = Expense::new(name, category, amount, date)?;

                let mut log = FlatFileExpenseLog::new(&log_path);
                log.append(&expense)
                    .with_context(|| format!("appending to {}", log_path.display()))?;

                println!(
                    "Added {} {:.2} ({}) on {}",
                    expense.name,
                    expense.amount,
                    expense.category,
                    expense.date.format("%Y-%m-%d")
                );
            }

            ExpenseCommand::List => {
                let expenses = read_expenses(&log_path)?;
                print!("{}", report::expense_table(&expenses));
            }
        },

        Command::Summary {
            budget,
            this_month,
            as_of,
        } => {
            let budget = match budget {
                Some(b) => Expense::parse_amount(&b).context("invalid --budget")?,
                None => cfg.budget.monthly,
            };
            let today = match as_of {
                Some(d) => Expense::parse_date(&d).context("invalid --as-of")?,
                None => today(),
            };
            run_summary(&log_path, budget, today, this_month)?;
        }

        Command::Bank { command } => match command {
            BankCommand::Import { file } => import_bank_export(&file)?,

            BankCommand::Show => {
                let session = state::read_session()?;
                if let Some(source) = &session.source {
                    println!("Last upload: {}\n", source);
                }
                print!("{}", report::transaction_table(&session.transactions));
            }
        },

        Command::Config { command } => match command {
            ConfigCommand::Init => config::init_config()?,

            ConfigCommand::Show => {
                println!("Home:        {}", home.display());
                println!("Config:      {}", config::config_path()?.display());
                println!("Expense log: {}", log_path.display());
                println!("Session:     {}\n", state::session_path()?.display());
                let s = toml::to_string_pretty(&cfg).context("serialize config")?;
                print!("{}", s);
            }
        },
    }

    Ok(())
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

fn read_expenses(log_path: &Path) -> Result<Vec<Expense>> {
    FlatFileExpenseLog::new(log_path)
        .list_all()
        .with_context(|| format!("reading {}", log_path.display()))
}

fn run_summary(log_path: &Path, budget: Decimal, today: NaiveDate, this_month: bool) -> Result<()> {
    let mut expenses = read_expenses(log_path)?;
    if this_month {
        expenses = expenses_in_month(&expenses, today);
    }

    let summary = summarize(&expenses, budget, today)
        .with_context(|| format!("summarizing {}", log_path.display()))?;
    print!("{}", report::summary(&summary));
    Ok(())
}

fn has_csv_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("csv"))
}

fn import_bank_export(file: &Path) -> Result<()> {
    if !has_csv_extension(file) {
        bail!("only .csv files are accepted: {}", file.display());
    }
    if !file.exists() {
        bail!("file not found: {}", file.display());
    }

    let table = RawTable::from_path(file).with_context(|| format!("reading {}", file.display()))?;
    let source = file
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| file.display().to_string());

    let mut session = state::read_session()?;
    let count = session
        .ingest(source, &table)
        .with_context(|| format!("normalizing {}", file.display()))?;
    state::write_session(&session)?;

    println!("Imported {} transactions from {}\n", count, file.display());
    print!("{}", report::transaction_table(&session.transactions));
    Ok(())
}
