use super::{AccountKind, Category};

/// Categories a new account of the given kind starts with
pub fn default_categories(kind: AccountKind) -> Vec<Category> {
    match kind {
        AccountKind::Expense => vec![
            Category::new("Shopping", ["Supermarket", "Home utilities"]).styled("Cart", "#1e90ff"),
            Category::new("Car", ["Fuel", "Insurance", "Repairs"]).styled("Car", "#ff6347"),
            Category::new("Home", ["Electricity", "Generator", "Maintenance", "Water"])
                .styled("Home", "#32cd32"),
            Category::new("Entertainment", ["Dining Out", "Movies", "Outing"])
                .styled("Film", "#ff1493"),
            Category::new("Personal", ["Shopping", "Selfcare"]).styled("User", "#ffa500"),
            Category::new("Gifts", ["Birthday", "Wedding", "Christmas"]).styled("Gift", "#8a2be2"),
            Category::new(
                "Healthcare",
                ["Doctor Visit", "Pharmacy", "Skincare", "Health Insurance"],
            )
            .styled("Heart", "#20b2aa"),
            Category::new("Travel", ["Flight", "Hotel", "Car Rental"]).styled("Airplane", "#ff4500"),
        ],
        AccountKind::Income => vec![
            Category::new("Salary", Vec::<String>::new()).styled("💰", "#10b981"),
            Category::new("Bonus", Vec::<String>::new()).styled("🎉", "#3b82f6"),
            Category::new("Gift", Vec::<String>::new()).styled("🎁", "#f59e0b"),
        ],
    }
}

/// Use the stored categories of an account, falling back to the defaults when none are stored
pub fn resolve_categories(stored: Vec<Category>, kind: AccountKind) -> Vec<Category> {
    if stored.is_empty() {
        default_categories(kind)
    } else {
        stored
    }
}
