//! Alphanumeric boundaries and number handling

use once_cell::sync::Lazy;
use regex::Regex;

static DIGIT_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"[0-9]+").unwrap());

const ONES: [&str; 20] = [
    "zero",
    "one",
    "two",
    "three",
    "four",
    "five",
    "six",
    "seven",
    "eight",
    "nine",
    "ten",
    "eleven",
    "twelve",
    "thirteen",
    "fourteen",
    "fifteen",
    "sixteen",
    "seventeen",
    "eighteen",
    "nineteen",
];

const TENS: [&str; 10] = [
    "", "", "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety",
];

const SCALES: [&str; 7] = [
    "",
    "thousand",
    "million",
    "billion",
    "trillion",
    "quadrillion",
    "quintillion",
];

/// Insert a space where a non-alphanumeric run meets an alphanumeric character
///
/// Inputs of at most one character become a single space.
pub fn separate_alnum_boundaries(text: &str) -> String {
    let mut chars = text.chars();
    let Some(first) = chars.next() else {
        return " ".to_string();
    };
    if chars.next().is_none() {
        return " ".to_string();
    }

    let mut out = String::with_capacity(text.len() + 8);
    let mut last_alnum = first.is_alphanumeric();
    for c in text.chars() {
        let alnum = c.is_alphanumeric();
        if alnum && !last_alnum {
            out.push(' ');
        }
        out.push(c);
        last_alnum = alnum;
    }
    out
}

/// ASCII, Persian and Arabic-Indic decimal digits; fractions and numerals
/// such as `½` or `Ⅻ` are not digits
fn is_decimal_digit(c: char) -> bool {
    matches!(c, '0'..='9' | '\u{06F0}'..='\u{06F9}' | '\u{0660}'..='\u{0669}')
}

/// Empty string when the text, minus whitespace and commas, is all digits
pub fn remove_numbers_only(text: &str) -> String {
    let mut stripped = text.chars().filter(|c| !c.is_whitespace() && *c != ',').peekable();
    if stripped.peek().is_some() && stripped.all(is_decimal_digit) {
        String::new()
    } else {
        text.to_string()
    }
}

fn below_hundred(n: u64) -> String {
    if n < 20 {
        ONES[n as usize].to_string()
    } else if n % 10 == 0 {
        TENS[(n / 10) as usize].to_string()
    } else {
        format!("{}-{}", TENS[(n / 10) as usize], ONES[(n % 10) as usize])
    }
}

fn below_thousand(n: u64) -> String {
    let hundreds = n / 100;
    let rest = n % 100;
    match (hundreds, rest) {
        (0, r) => below_hundred(r),
        (h, 0) => format!("{} hundred", ONES[h as usize]),
        (h, r) => format!("{} hundred and {}", ONES[h as usize], below_hundred(r)),
    }
}

/// English cardinal spelling, British style
///
/// `105` -> "one hundred and five", `1234` -> "one thousand, two hundred and
/// thirty-four", `1005` -> "one thousand and five".
pub fn number_to_words(n: u64) -> String {
    if n == 0 {
        return ONES[0].to_string();
    }

    let mut groups = Vec::new();
    let mut rest = n;
    while rest > 0 {
        groups.push(rest % 1000);
        rest /= 1000;
    }

    let mut out = String::new();
    for (scale, &group) in groups.iter().enumerate().rev() {
        if group == 0 {
            continue;
        }
        let mut part = below_thousand(group);
        if scale > 0 {
            part.push(' ');
            part.push_str(SCALES[scale]);
        }
        if !out.is_empty() {
            // A trailing group under a hundred joins with "and"
            if scale == 0 && group < 100 {
                out.push_str(" and ");
            } else {
                out.push_str(", ");
            }
        }
        out.push_str(&part);
    }
    out
}

fn spell_digit_run(run: &str) -> String {
    match run.parse::<u64>() {
        Ok(n) => number_to_words(n),
        Err(_) => run
            .chars()
            .filter_map(|c| c.to_digit(10))
            .map(|d| ONES[d as usize])
            .collect::<Vec<_>>()
            .join(" "),
    }
}

/// Replace every ASCII digit run with its English spelling
pub fn convert_numbers_to_words(text: &str) -> String {
    DIGIT_RUN
        .replace_all(text, |caps: &regex::Captures| spell_digit_run(&caps[0]))
        .into_owned()
}
