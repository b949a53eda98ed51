use derive_more::{From, Into};
use serde::Serialize;

use crate::{category::Category, util::normalize_token};

/// One match target generated from a category or subcategory name
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeywordForm {
    /// Form as derived from the lowercased, trimmed name
    pub raw: String,
    /// Normalized text input windows are compared against
    pub normalized: String,
    /// Number of whitespace separated words in the raw form
    pub words: usize,
}

impl KeywordForm {
    fn new(raw: String) -> Self {
        Self {
            normalized: normalize_token(&raw),
            words: raw.split_whitespace().count(),
            raw,
        }
    }
}

/// Keyword forms of a single category or subcategory
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IndexEntry {
    /// Forms in generation order, deduplicated
    pub forms: Vec<KeywordForm>,
    /// Category name
    pub category: String,
    /// Subcategory name, absent for the entry of the category itself
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subcategory: Option<String>,
}

/// Flat list of keyword entries built from a category list
///
/// Entries keep the category list order with every category directly followed by its own
/// subcategories. The order is the tie breaker when matching so it must be preserved.
#[derive(Debug, Clone, Default, PartialEq, Eq, From, Into, Serialize)]
pub struct KeywordIndex {
    pub entries: Vec<IndexEntry>,
}

impl KeywordIndex {
    /// Build the index from the current category list
    pub fn build(categories: &[Category]) -> Self {
        let entries = categories
            .iter()
            .flat_map(|category| {
                let own = IndexEntry {
                    forms: keyword_forms(&category.name),
                    category: category.name.clone(),
                    subcategory: None,
                };
                let subs = category.subs.iter().map(|sub| IndexEntry {
                    forms: subcategory_forms(sub),
                    category: category.name.clone(),
                    subcategory: Some(sub.clone()),
                });
                std::iter::once(own).chain(subs)
            })
            .collect::<Vec<_>>();
        entries.into()
    }

    pub fn iter(&self) -> impl Iterator<Item = &IndexEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Extra keywords for well known subcategories, looked up by lowercased subcategory name
const SUBCATEGORY_SYNONYMS: &[(&str, &[&str])] = &[
    ("coffee shops", &["coffee", "starbucks", "cafe"]),
    ("supermarket", &["grocery", "groceries", "supermarket", "spinneys"]),
    ("fuel", &["fuel", "gas", "petrol"]),
    ("rent", &["rent"]),
    ("electricity", &["electric", "electricity", "power"]),
    ("movies", &["movie", "cinema", "netflix"]),
];

/// Built-in synonyms of a subcategory name, empty for names without any
pub fn synonyms(name: &str) -> &'static [&'static str] {
    let name = name.trim().to_lowercase();
    SUBCATEGORY_SYNONYMS
        .iter()
        .find(|(key, _)| *key == name)
        .map(|(_, synonyms)| *synonyms)
        .unwrap_or_default()
}

/// Keyword forms of a subcategory name followed by the forms of its synonyms
pub fn subcategory_forms(name: &str) -> Vec<KeywordForm> {
    let mut forms = keyword_forms(name);
    for form in synonyms(name).iter().flat_map(|s| keyword_forms(s)) {
        if !forms.iter().any(|f| f.raw == form.raw) {
            forms.push(form);
        }
    }
    forms
}

/// Generate the keyword forms of a name
///
/// The name is lowercased and trimmed, then yields the raw form, an alphanumeric-only form, a form
/// with runs of hyphens, underscores and whitespace collapsed to a single space, and each
/// whitespace separated word. Repeated forms are dropped keeping the first.
pub fn keyword_forms(name: &str) -> Vec<KeywordForm> {
    let raw = name.trim().to_lowercase();
    let alphanumeric = raw.chars().filter(|c| c.is_alphanumeric()).collect::<String>();
    let collapsed = raw
        .split(|c: char| c == '-' || c == '_' || c.is_whitespace())
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ");
    let words = raw.split_whitespace().map(str::to_owned).collect::<Vec<_>>();

    let mut forms: Vec<KeywordForm> = Vec::new();
    for form in [raw, alphanumeric, collapsed].into_iter().chain(words) {
        if !forms.iter().any(|f| f.raw == form) {
            forms.push(KeywordForm::new(form));
        }
    }
    forms
}
