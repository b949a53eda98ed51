//! Turn spoken or scanned text into budget transactions
//!
//! The [`extractor`] reads an amount and a best guess category out of free form text using the
//! user's own [`category`] taxonomy. Accepted guesses become [`transaction`] records handed to a
//! sink.

pub mod category;
pub mod extractor;
pub mod transaction;
mod util;

#[cfg(test)]
mod tests;
