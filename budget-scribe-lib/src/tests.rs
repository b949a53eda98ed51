use std::str::FromStr;

use anyhow::Result;
use bigdecimal::BigDecimal;
use chrono::{TimeZone, Utc};
use test_case::test_case;

use crate::{
    category::{Account, AccountKind, CategoryStore, YamlCategoryStore},
    extractor::Extractor,
    transaction::{MemoryTransactionSink, TransactionRecord, TransactionSink},
};

#[test_case("wallet", AccountKind::Expense, "coffee 4.50", "4.50", "Shopping", "Coffee Shops"; "stored categories")]
#[test_case("wallet", AccountKind::Expense, "fuel paid 100 got back 67", "33", "Car", "Fuel"; "refund")]
#[test_case("wallet", AccountKind::Expense, "movies twenty two", "22", "Entertainment", "Movies"; "number words")]
#[test_case("empty", AccountKind::Expense, "electricity 80", "80", "Home", "Electricity"; "expense defaults")]
#[test_case("missing", AccountKind::Income, "salary 1500", "1500", "Salary", ""; "income defaults")]
fn test_extract_from_store(
    account: &str,
    kind: AccountKind,
    text: &str,
    amount: &str,
    category: &str,
    subcategory: &str,
) -> Result<()> {
    let store = YamlCategoryStore::new("tests/categories.yaml");
    let account = Account::new(account, account, kind);
    let extractor = Extractor::from_categories(&store.list(&account)?);

    let parsed = extractor.extract(text).expect("text should parse");
    assert_eq!(parsed.amount, BigDecimal::from_str(amount)?);
    assert_eq!(parsed.category, category);
    assert_eq!(parsed.subcategory, subcategory);
    Ok(())
}

#[test]
fn test_extract_and_record() -> Result<()> {
    let store = YamlCategoryStore::new("tests/categories.yaml");
    let account = Account::new("wallet", "Wallet", AccountKind::Expense);
    let extractor = Extractor::from_categories(&store.list(&account)?);
    let mut sink = MemoryTransactionSink::default();
    let date = Utc.with_ymd_and_hms(2024, 2, 24, 12, 0, 0).unwrap();

    for text in ["coffee 4.50", "nothing here", "fuel 20"] {
        if let Some(parsed) = extractor.extract(text) {
            sink.create(TransactionRecord::new(parsed, &account.id, date))?;
        }
    }

    let recorded = sink
        .records()
        .iter()
        .map(|r| (r.category.as_str(), r.subcategory.as_str()))
        .collect::<Vec<_>>();
    assert_eq!(recorded, vec![("Shopping", "Coffee Shops"), ("Car", "Fuel")]);
    Ok(())
}
