use super::keyword_index::{KeywordForm, KeywordIndex};
use crate::util::{normalize_token, within_one_edit};

/// Best category guess for a text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryMatch<'a> {
    pub category: &'a str,
    pub subcategory: Option<&'a str>,
    /// Raw keyword form which matched
    pub keyword: &'a str,
    /// Input window which matched
    pub window: String,
    pub score: usize,
}

/// Split text on whitespace and normalize every token, dropping tokens left empty
pub fn normalize_tokens(text: &str) -> Vec<String> {
    text.split_whitespace()
        .map(normalize_token)
        .filter(|t| !t.is_empty())
        .collect()
}

/// Every run of 1 to `max_window` consecutive tokens joined without separator, with its size
pub fn windows(tokens: &[String], max_window: usize) -> Vec<(String, usize)> {
    (1..=max_window.min(tokens.len()))
        .flat_map(|size| tokens.windows(size).map(move |w| (w.concat(), size)))
        .collect()
}

/// Check if an input window matches a normalized keyword
///
/// Either equal, one containing the other, or a single edit apart. Empty strings never match.
pub fn is_match(window: &str, keyword: &str) -> bool {
    if window.is_empty() || keyword.is_empty() {
        return false;
    }
    window.contains(keyword) || keyword.contains(window) || within_one_edit(window, keyword)
}

/// Score a match, favouring long and multi word keywords matched by wide windows
pub fn score(form: &KeywordForm, window_size: usize) -> usize {
    form.normalized.chars().count() + 10 * form.words + 2 * window_size
}

/// Find the highest scoring category for a text
///
/// Ties keep the first match in index order.
pub fn best_match<'a>(
    text: &str,
    index: &'a KeywordIndex,
    max_window: usize,
) -> Option<CategoryMatch<'a>> {
    let windows = windows(&normalize_tokens(text), max_window);
    let mut best: Option<CategoryMatch> = None;
    for entry in index.iter() {
        for form in &entry.forms {
            for (window, size) in &windows {
                if !is_match(window, &form.normalized) {
                    continue;
                }
                let points = score(form, *size);
                if best.as_ref().map_or(true, |b| points > b.score) {
                    best = Some(CategoryMatch {
                        category: &entry.category,
                        subcategory: entry.subcategory.as_deref(),
                        keyword: &form.raw,
                        window: window.clone(),
                        score: points,
                    });
                }
            }
        }
    }
    best
}
