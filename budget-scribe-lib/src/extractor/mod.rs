use std::{
    fs::File,
    io::{Cursor, Read},
    path::Path,
};

use bigdecimal::Zero;
use displaydoc::Display;
use serde::{Deserialize, Serialize};
use slog::{debug, info, o, Discard, Logger};
use thiserror::Error;

use crate::{category::Category, transaction::ParsedTransaction};

pub use amount::*;
pub use keyword_index::*;
pub use matcher::*;

mod amount;
mod keyword_index;
mod matcher;

#[derive(Error, Debug, Display)]
pub enum Error {
    /// io: {0}
    Io(#[from] std::io::Error),
    /// serde_yaml: {0}
    SerdeYaml(#[from] serde_yaml::Error),
    /// max_window must be at least 1
    ZeroMaxWindow,
}

/// Tunables of the text extractor
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields, default)]
pub struct ExtractorConfig {
    /// Phrases which turn several amounts into "paid minus returned"
    pub refund_keywords: Vec<String>,
    /// Largest number of consecutive tokens compared against a keyword
    pub max_window: usize,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            refund_keywords: ["change", "returned", "refund", "cashback", "got back"]
                .into_iter()
                .map(Into::into)
                .collect(),
            max_window: 4,
        }
    }
}

impl ExtractorConfig {
    /// Create a new config from a yaml file
    pub fn from_yaml_file<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        Self::from_reader(File::open(path)?)
    }

    /// Create a new config from a yaml buffer
    pub fn from_yaml_buffer<B: AsRef<[u8]>>(buffer: B) -> Result<Self, Error> {
        Self::from_reader(Cursor::new(buffer))
    }

    /// Create a new config from a reader, an empty document gives the defaults
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self, Error> {
        let mut buffer = String::new();
        reader.read_to_string(&mut buffer)?;
        if buffer.trim().is_empty() {
            return Ok(Self::default());
        }
        let config = serde_yaml::from_str::<Self>(&buffer)?;
        if config.max_window == 0 {
            return Err(Error::ZeroMaxWindow);
        }
        Ok(config)
    }

    /// Check if lowercased text mentions getting money back
    pub fn mentions_refund(&self, text: &str) -> bool {
        self.refund_keywords
            .iter()
            .any(|k| text.contains(k.to_lowercase().as_str()))
    }
}

/// Turns speech or OCR text into a transaction guess
///
/// Holds an immutable snapshot of the keyword index. Rebuild the extractor when the category list
/// changes.
#[derive(Debug, Clone)]
pub struct Extractor {
    index: KeywordIndex,
    config: ExtractorConfig,
    logger: Logger,
}

impl Extractor {
    pub fn new(index: KeywordIndex) -> Self {
        Self {
            index,
            config: ExtractorConfig::default(),
            logger: Logger::root(Discard, o!()),
        }
    }

    /// Create an extractor indexing the given categories
    pub fn from_categories(categories: &[Category]) -> Self {
        Self::new(KeywordIndex::build(categories))
    }

    pub fn with_config(mut self, config: ExtractorConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_logger(mut self, logger: Logger) -> Self {
        self.logger = logger;
        self
    }

    pub fn index(&self) -> &KeywordIndex {
        &self.index
    }

    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Extract a transaction from text
    ///
    /// Returns `None` when the text holds neither a nonzero amount nor anything resembling a
    /// category. The description is always the text verbatim.
    pub fn extract(&self, text: &str) -> Option<ParsedTransaction> {
        let lower = text.to_lowercase();

        let numbers = find_numbers(&lower);
        let refund = self.config.mentions_refund(&lower);
        let amount = resolve_amount(&numbers, refund);
        let found = numbers
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" ");
        debug!(self.logger, "resolved amount";
            "numbers" => found,
            "refund" => refund,
            "amount" => %amount);

        let (category, subcategory) = match best_match(&lower, &self.index, self.config.max_window)
        {
            Some(m) => {
                debug!(self.logger, "matched category";
                    "category" => m.category,
                    "subcategory" => m.subcategory.unwrap_or_default(),
                    "keyword" => m.keyword,
                    "window" => m.window.as_str(),
                    "score" => m.score);
                (
                    m.category.to_owned(),
                    m.subcategory.unwrap_or_default().to_owned(),
                )
            }
            None => (String::new(), String::new()),
        };

        if amount.is_zero() && category.is_empty() {
            info!(self.logger, "no transaction found in text"; "text" => text);
            return None;
        }
        Some(ParsedTransaction {
            amount,
            category,
            subcategory,
            description: text.to_owned(),
        })
    }
}

/// Extract a transaction from text against a category list snapshot
pub fn parse_text(text: &str, categories: &[Category]) -> Option<ParsedTransaction> {
    Extractor::from_categories(categories).extract(text)
}
