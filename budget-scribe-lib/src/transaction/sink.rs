use std::{
    fs::{self, OpenOptions},
    path::{Path, PathBuf},
};

use super::{Error, TransactionRecord};

/// Destination for accepted transactions
pub trait TransactionSink {
    fn create(&mut self, record: TransactionRecord) -> Result<(), Error>;
}

/// Appends transactions to a csv ledger file, writing the header when the file is new
#[derive(Debug, Clone)]
pub struct CsvTransactionSink {
    path: PathBuf,
}

impl CsvTransactionSink {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TransactionSink for CsvTransactionSink {
    fn create(&mut self, record: TransactionRecord) -> Result<(), Error> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        let new_file = file.metadata()?.len() == 0;
        let mut writer = csv::WriterBuilder::new()
            .has_headers(new_file)
            .from_writer(file);
        writer.serialize(record)?;
        writer.flush()?;
        Ok(())
    }
}

/// Keeps transactions in memory
#[derive(Debug, Clone, Default)]
pub struct MemoryTransactionSink {
    records: Vec<TransactionRecord>,
}

impl MemoryTransactionSink {
    pub fn records(&self) -> &[TransactionRecord] {
        &self.records
    }
}

impl TransactionSink for MemoryTransactionSink {
    fn create(&mut self, record: TransactionRecord) -> Result<(), Error> {
        self.records.push(record);
        Ok(())
    }
}
