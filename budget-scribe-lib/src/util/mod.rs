use unicode_normalization::{char::is_combining_mark, UnicodeNormalization};

#[cfg(test)]
mod tests;

/// Normalize a token for fuzzy comparison
///
/// Unicode-decomposes, strips diacritics (combining marks), lowercases and drops every character
/// that is not alphanumeric.
pub fn normalize_token(token: &str) -> String {
    token
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .filter(|c| c.is_alphanumeric())
        .collect()
}

/// Check if two strings differ by at most one substitution, insertion or deletion
///
/// This is a single pass over both strings rather than a full edit distance. Strings whose lengths
/// differ by more than one never match.
pub fn within_one_edit(a: &str, b: &str) -> bool {
    let a = a.chars().collect::<Vec<_>>();
    let b = b.chars().collect::<Vec<_>>();
    let (short, long) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    if long.len() - short.len() > 1 {
        return false;
    }

    let same_length = short.len() == long.len();
    let (mut i, mut j) = (0, 0);
    let mut edited = false;
    while i < short.len() && j < long.len() {
        if short[i] != long[j] {
            if edited {
                return false;
            }
            edited = true;
            // Substitution consumes from both, insertion/deletion only from the longer
            if same_length {
                i += 1;
            }
            j += 1;
            continue;
        }
        i += 1;
        j += 1;
    }
    true
}
