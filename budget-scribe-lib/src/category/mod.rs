use displaydoc::Display;
use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DefaultOnNull};
use thiserror::Error;

pub use defaults::*;
pub use store::*;

mod defaults;
mod store;
#[cfg(test)]
mod tests;

#[derive(Error, Debug, Display)]
pub enum Error {
    /// io: {0}
    Io(#[from] std::io::Error),
    /// serde_yaml: {0}
    SerdeYaml(#[from] serde_yaml::Error),
}

/// User defined spending or income category
///
/// Missing or `null` fields deserialize to empty values so a malformed stored row never fails to
/// load.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Category {
    /// Display label, also the key transactions refer to the category by
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[serde(default)]
    pub name: String,
    /// Icon name or emoji
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[serde(default)]
    pub icon: String,
    /// Css color
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[serde(default)]
    pub color: String,
    /// Ordered subcategory names
    #[serde_as(deserialize_as = "DefaultOnNull<Vec<DefaultOnNull>>")]
    #[serde(default)]
    pub subs: Vec<String>,
}

impl Category {
    /// Create a category without presentation fields
    pub fn new<S: Into<String>>(name: impl Into<String>, subs: impl IntoIterator<Item = S>) -> Self {
        Self {
            name: name.into(),
            subs: subs.into_iter().map(Into::into).collect(),
            ..Default::default()
        }
    }

    /// Set the icon and color
    pub fn styled(mut self, icon: impl Into<String>, color: impl Into<String>) -> Self {
        self.icon = icon.into();
        self.color = color.into();
        self
    }
}

/// Kind of an account, deciding which default categories it starts with
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Deserialize,
    Serialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum AccountKind {
    #[default]
    Expense,
    Income,
}

/// Account a category list belongs to
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Account {
    /// Identifier categories are stored under
    pub id: String,
    /// Display name
    pub name: String,
    /// Income or expense
    pub kind: AccountKind,
}

impl Account {
    pub fn new(id: impl Into<String>, name: impl Into<String>, kind: AccountKind) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind,
        }
    }
}
