use std::{
    io::{self, Read},
    path::PathBuf,
};

use anyhow::{bail, Context, Result};
use budget_scribe_lib::{
    category::{default_categories, Account, AccountKind, CategoryStore, YamlCategoryStore},
    extractor::{Extractor, ExtractorConfig},
    transaction::{CsvTransactionSink, TransactionRecord, TransactionSink},
};
use chrono::Utc;
use clap::{Parser, Subcommand};
use slog::{info, o};
use sloggers::{
    terminal::{Destination, TerminalLoggerBuilder},
    types::{Severity, SourceLocation},
    Build,
};

/// Turn spoken or scanned text into budget transactions
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the yaml file of category lists keyed by account id
    #[arg(long)]
    categories_path: Option<PathBuf>,
    /// Account whose categories are used
    #[arg(long, default_value = "default")]
    account: String,
    /// Kind of the account, selects the default categories
    #[arg(long, default_value_t = AccountKind::Expense)]
    account_kind: AccountKind,
    /// Path to the extractor config file
    #[arg(long)]
    config_path: Option<PathBuf>,
    /// Log level
    #[arg(long)]
    log_level: Option<Severity>,
    // Subcommands
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
#[command()]
enum Command {
    /// Output the parsed transaction yaml, `null` if nothing was recognized
    #[command()]
    Parse {
        /// Text to parse, read from stdin if omitted
        text: Option<String>,
    },
    /// Output the keyword index yaml
    #[command()]
    Index,
    /// Parse text and append it to a csv ledger
    #[command()]
    Record {
        /// Text to parse, read from stdin if omitted
        text: Option<String>,
        /// Path to the csv ledger
        #[arg(long)]
        ledger_path: PathBuf,
        /// Date of the transaction, now if omitted
        #[arg(long)]
        date: Option<String>,
    },
    /// Output the recorded transactions of a csv ledger as yaml
    #[command()]
    Ledger {
        /// Path to the csv ledger
        #[arg(long)]
        ledger_path: PathBuf,
    },
    /// Output the default categories yaml for the account kind
    #[command()]
    Defaults,
}

/// Text from the argument, or stdin without its trailing line ending
fn read_text(text: Option<String>) -> Result<String> {
    match text {
        Some(text) => Ok(text),
        None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("failed to read text from stdin")?;
            Ok(buffer.trim_end_matches(['\r', '\n']).to_owned())
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    let logger = TerminalLoggerBuilder::new()
        .level(args.log_level.unwrap_or_default())
        .destination(Destination::Stderr)
        .source_location(SourceLocation::None)
        .build()?;

    let account = Account::new(&args.account, &args.account, args.account_kind);
    let categories = match &args.categories_path {
        Some(path) => YamlCategoryStore::new(path)
            .list(&account)
            .context("failed to load categories")?,
        None => default_categories(account.kind),
    };
    let config = match &args.config_path {
        Some(path) => {
            ExtractorConfig::from_yaml_file(path).context("failed to parse extractor config")?
        }
        None => ExtractorConfig::default(),
    };
    let extractor = Extractor::from_categories(&categories)
        .with_config(config)
        .with_logger(logger.new(o!("account" => account.id.clone())));

    match args.command {
        Command::Parse { text } => {
            let text = read_text(text)?;
            let parsed = extractor.extract(&text);
            println!("{}", serde_yaml::to_string(&parsed)?);
        }
        Command::Index => {
            println!("{}", serde_yaml::to_string(extractor.index())?);
        }
        Command::Record {
            text,
            ledger_path,
            date,
        } => {
            let text = read_text(text)?;
            let Some(parsed) = extractor.extract(&text) else {
                bail!("no transaction recognized in {text:?}");
            };
            let date = match date {
                Some(date) => dateparser::parse(&date).context("failed to parse date")?,
                None => Utc::now(),
            };
            let record = TransactionRecord::new(parsed, &account.id, date);
            info!(logger, "recording transaction";
                "amount" => %record.amount,
                "category" => record.category.as_str(),
                "subcategory" => record.subcategory.as_str());
            CsvTransactionSink::new(ledger_path)
                .create(record)
                .context("failed to record transaction")?;
        }
        Command::Ledger { ledger_path } => {
            let records =
                TransactionRecord::read_ledger(&ledger_path).context("failed to read ledger")?;
            println!("{}", serde_yaml::to_string(&records)?);
        }
        Command::Defaults => {
            println!(
                "{}",
                serde_yaml::to_string(&default_categories(account.kind))?
            );
        }
    }
    Ok(())
}
