use std::{
    fs::File,
    io::Read,
    path::Path,
};

use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use displaydoc::Display;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use sink::*;

mod sink;

#[derive(Error, Debug, Display)]
pub enum Error {
    /// io: {0}
    Io(#[from] std::io::Error),
    /// csv: {0}
    Csv(#[from] csv::Error),
}

/// Best effort transaction read from free form text
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ParsedTransaction {
    /// Amount of the transaction, zero when only a category was recognized
    pub amount: BigDecimal,
    /// Matched category name, empty if none matched
    pub category: String,
    /// Matched subcategory name, empty if none matched
    pub subcategory: String,
    /// The text the transaction was read from
    pub description: String,
}

/// Transaction as stored in a ledger
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct TransactionRecord {
    /// Time of the transaction
    pub date: DateTime<Utc>,
    /// Account the transaction applied to
    pub account: String,
    /// Amount of the transaction
    pub amount: BigDecimal,
    /// Category name
    pub category: String,
    /// Subcategory name
    pub subcategory: String,
    /// Description of the transaction
    pub description: String,
}

impl TransactionRecord {
    /// Attach the caller supplied account and date to a parsed transaction
    pub fn new(parsed: ParsedTransaction, account: impl Into<String>, date: DateTime<Utc>) -> Self {
        Self {
            date,
            account: account.into(),
            amount: parsed.amount,
            category: parsed.category,
            subcategory: parsed.subcategory,
            description: parsed.description,
        }
    }

    /// Read every record of a csv ledger written by [`CsvTransactionSink`]
    pub fn read_ledger<P: AsRef<Path>>(path: P) -> Result<Vec<Self>, Error> {
        Self::read_csv(File::open(path)?)
    }

    /// Read records from csv with a header row
    pub fn read_csv<R: Read>(reader: R) -> Result<Vec<Self>, Error> {
        csv::Reader::from_reader(reader)
            .deserialize()
            .collect::<Result<_, _>>()
            .map_err(Error::from)
    }
}
