use std::{str::FromStr, sync::OnceLock};

use bigdecimal::{BigDecimal, Zero};
use regex::Regex;

fn number_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[0-9]+(?:\.[0-9]{1,2})?").expect("invalid number regex"))
}

fn number_words_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        let ones = "one|two|three|four|five|six|seven|eight|nine";
        let teens = "ten|eleven|twelve|thirteen|fourteen|fifteen|sixteen|seventeen|eighteen|nineteen";
        let tens = "twenty|thirty|forty|fifty|sixty|seventy|eighty|ninety";
        Regex::new(&format!(
            r"\b(?:zero|{ones}|{teens}|{tens})(?:[\s-](?:{ones}))?\b"
        ))
        .expect("invalid number words regex")
    })
}

fn word_value(word: &str) -> u32 {
    match word {
        "one" => 1,
        "two" => 2,
        "three" => 3,
        "four" => 4,
        "five" => 5,
        "six" => 6,
        "seven" => 7,
        "eight" => 8,
        "nine" => 9,
        "ten" => 10,
        "eleven" => 11,
        "twelve" => 12,
        "thirteen" => 13,
        "fourteen" => 14,
        "fifteen" => 15,
        "sixteen" => 16,
        "seventeen" => 17,
        "eighteen" => 18,
        "nineteen" => 19,
        "twenty" => 20,
        "thirty" => 30,
        "forty" => 40,
        "fifty" => 50,
        "sixty" => 60,
        "seventy" => 70,
        "eighty" => 80,
        "ninety" => 90,
        _ => 0,
    }
}

/// Convert a spelled out number by summing the value of every recognized word
///
/// Multipliers are not understood, "one hundred" is 1.
pub fn words_to_number(words: &str) -> BigDecimal {
    words
        .split(|c: char| c == '-' || c.is_whitespace())
        .map(word_value)
        .sum::<u32>()
        .into()
}

/// Find every number in lowercased text in order of appearance
///
/// Digits are preferred. Only when there are none is the first spelled out number used.
pub fn find_numbers(text: &str) -> Vec<BigDecimal> {
    let numbers = number_re()
        .find_iter(text)
        .filter_map(|m| BigDecimal::from_str(m.as_str()).ok())
        .collect::<Vec<_>>();
    if !numbers.is_empty() {
        return numbers;
    }
    number_words_re()
        .find(text)
        .map(|m| vec![words_to_number(m.as_str())])
        .unwrap_or_default()
}

/// Pick the transaction amount from the numbers found in the text
///
/// Several numbers are read as "paid X, got Y back" when the text mentions a refund, and are
/// summed otherwise.
pub fn resolve_amount(numbers: &[BigDecimal], refund: bool) -> BigDecimal {
    match numbers {
        [] => BigDecimal::zero(),
        [amount] => amount.clone(),
        _ if refund => match (numbers.iter().max(), numbers.iter().min()) {
            (Some(max), Some(min)) => max - min,
            _ => BigDecimal::zero(),
        },
        _ => numbers
            .iter()
            .fold(BigDecimal::zero(), |total, n| total + n),
    }
}
