use test_case::test_case;

use super::{normalize_token, within_one_edit};

#[test_case("Coffee", "coffee"; "lowercased")]
#[test_case("Café", "cafe"; "diacritics stripped")]
#[test_case("Dining-Out", "diningout"; "hyphen dropped")]
#[test_case("4.50", "450"; "decimal point dropped")]
#[test_case("  ", ""; "whitespace only")]
#[test_case("$", ""; "symbol only")]
#[test_case("ÉLECTRICITÉ!", "electricite"; "uppercase accents and punctuation")]
fn test_normalize_token(input: &str, expected: &str) {
    assert_eq!(normalize_token(input), expected);
}

#[test_case("fuel", "fuel", true; "identical")]
#[test_case("fuel", "fual", true; "substitution")]
#[test_case("fuel", "fuels", true; "insertion at end")]
#[test_case("rent", "frent", true; "insertion at start")]
#[test_case("movies", "movis", true; "deletion")]
#[test_case("fuel", "fall", false; "two substitutions")]
#[test_case("car", "carrent", false; "length differs by more than one")]
#[test_case("abc", "xbcd", false; "substitution plus insertion")]
#[test_case("", "a", true; "empty and single char")]
fn test_within_one_edit(a: &str, b: &str, expected: bool) {
    assert_eq!(within_one_edit(a, b), expected);
    assert_eq!(within_one_edit(b, a), expected);
}
