use std::str::FromStr;

use anyhow::Result;
use test_case::test_case;

use super::{
    default_categories, resolve_categories, Account, AccountKind, CategoriesByAccount, Category,
    CategoryStore, YamlCategoryStore,
};

#[test]
fn test_missing_fields_default_to_empty() -> Result<()> {
    let categories: Vec<Category> = serde_yaml::from_str(
        "- name: Shopping
  subs: [Supermarket, null]
- icon: Cart
- name: null
  subs: null
",
    )?;
    assert_eq!(categories.len(), 3);
    assert_eq!(categories[0].name, "Shopping");
    assert_eq!(categories[0].subs, vec!["Supermarket".to_owned(), String::new()]);
    assert_eq!(categories[1].name, "");
    assert_eq!(categories[1].icon, "Cart");
    assert!(categories[1].subs.is_empty());
    assert_eq!(categories[2], Category::default());
    Ok(())
}

#[test_case(AccountKind::Expense, 8, "Shopping"; "expense")]
#[test_case(AccountKind::Income, 3, "Salary"; "income")]
fn test_default_categories(kind: AccountKind, count: usize, first: &str) {
    let categories = default_categories(kind);
    assert_eq!(categories.len(), count);
    assert_eq!(categories[0].name, first);
    assert!(categories.iter().all(|c| !c.icon.is_empty() && !c.color.is_empty()));
}

#[test]
fn test_resolve_prefers_stored() {
    let stored = vec![Category::new("Food", ["Coffee"])];
    assert_eq!(
        resolve_categories(stored.clone(), AccountKind::Expense),
        stored
    );
    assert_eq!(
        resolve_categories(Vec::new(), AccountKind::Income),
        default_categories(AccountKind::Income)
    );
}

#[test_case("expense", AccountKind::Expense)]
#[test_case("income", AccountKind::Income)]
fn test_account_kind_from_str(input: &str, expected: AccountKind) -> Result<()> {
    assert_eq!(AccountKind::from_str(input)?, expected);
    assert_eq!(expected.to_string(), input);
    Ok(())
}

#[test]
fn test_yaml_store_missing_file_uses_defaults() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let store = YamlCategoryStore::new(dir.path().join("categories.yaml"));
    let account = Account::new("main", "Main", AccountKind::Expense);
    assert_eq!(store.list(&account)?, default_categories(AccountKind::Expense));
    Ok(())
}

#[test]
fn test_yaml_store_save_and_list() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let store = YamlCategoryStore::new(dir.path().join("nested").join("categories.yaml"));
    let wallet = Account::new("wallet", "Wallet", AccountKind::Expense);
    let salary = Account::new("salary", "Salary", AccountKind::Income);
    let categories = vec![
        Category::new("Food", ["Coffee", "Groceries"]).styled("Cart", "#000000"),
        Category::new("Car", ["Fuel"]),
    ];

    store.save(&wallet, &categories)?;
    assert_eq!(store.list(&wallet)?, categories);
    // Other accounts are untouched and fall back to their defaults
    assert_eq!(store.list(&salary)?, default_categories(AccountKind::Income));

    store.save(&wallet, &categories[1..])?;
    assert_eq!(store.list(&wallet)?, categories[1..].to_vec());
    Ok(())
}

#[test]
fn test_yaml_store_empty_file() -> Result<()> {
    let stored = YamlCategoryStore::from_reader("\n  \n".as_bytes())?;
    assert!(stored.is_empty());
    Ok(())
}

#[test]
fn test_in_memory_store() -> Result<()> {
    let mut stored = CategoriesByAccount::new();
    stored.insert("wallet".to_owned(), vec![Category::new("Food", ["Coffee"])]);
    let wallet = Account::new("wallet", "Wallet", AccountKind::Expense);
    assert_eq!(stored.list(&wallet)?[0].name, "Food");
    let other = Account::new("other", "Other", AccountKind::Expense);
    assert_eq!(stored.list(&other)?.len(), 8);
    Ok(())
}
