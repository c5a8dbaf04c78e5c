//! Persian-specific stages: dates, half-spaces, foreign-script stripping

use chrono::{Days, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;

use super::unicode::collapse_whitespace;
use crate::tables::persian::fold_digits;

/// Zero-width non-joiner (Persian half-space)
pub const ZWNJ: char = '\u{200C}';

/// Suffixes that stay a separate word when split off at a half-space
pub const HALF_SPACE_SUFFIXES: &[&str] = &["هایی", "های", "ها", "ترین", "تر", "می"];

static SOLAR_DATE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([0-9]{4})/([0-9]{2})/([0-9]{2})").unwrap());
static LATIN: Lazy<Regex> = Lazy::new(|| Regex::new(r"[a-zA-Z]").unwrap());
static CYRILLIC: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[\x{0400}-\x{04FF}\x{0500}-\x{052F}\x{2DE0}-\x{2DFF}\x{A640}-\x{A69F}]+").unwrap()
});

/// Solar Hijri leap-cycle break years
const BREAKS: [i32; 20] = [
    -61, 9, 38, 199, 426, 686, 756, 818, 1111, 1181, 1210, 1635, 2060, 2097, 2192, 2262, 2324,
    2394, 2456, 3178,
];

struct SolarYear {
    gregorian_year: i32,
    /// Day of March on which Farvardin 1 falls
    march_day: i32,
    leap: bool,
}

fn solar_year(jy: i32) -> Option<SolarYear> {
    if jy < BREAKS[0] || jy >= BREAKS[BREAKS.len() - 1] {
        return None;
    }

    let gy = jy + 621;
    let mut leap_j = -14;
    let mut jp = BREAKS[0];
    let mut jump = 0;
    for &jm in &BREAKS[1..] {
        jump = jm - jp;
        if jy < jm {
            break;
        }
        leap_j += jump / 33 * 8 + (jump % 33) / 4;
        jp = jm;
    }

    let mut n = jy - jp;
    leap_j += n / 33 * 8 + (n % 33 + 3) / 4;
    if jump % 33 == 4 && jump - n == 4 {
        leap_j += 1;
    }

    let leap_g = gy / 4 - (gy / 100 + 1) * 3 / 4 - 150;
    let march_day = 20 + leap_j - leap_g;

    if jump - n < 6 {
        n = n - jump + (jump + 4) / 33 * 33;
    }
    let mut leap = ((n + 1) % 33 - 1) % 4;
    if leap == -1 {
        leap = 4;
    }

    Some(SolarYear {
        gregorian_year: gy,
        march_day,
        leap: leap == 0,
    })
}

/// Convert a Solar Hijri date to the Gregorian calendar
///
/// Returns `None` for out-of-range years, months or days.
pub fn jalali_to_gregorian(year: i32, month: u32, day: u32) -> Option<NaiveDate> {
    let info = solar_year(year)?;
    let month_len = match month {
        1..=6 => 31,
        7..=11 => 30,
        12 if info.leap => 30,
        12 => 29,
        _ => return None,
    };
    if day == 0 || day > month_len {
        return None;
    }

    let start = NaiveDate::from_ymd_opt(info.gregorian_year, 3, info.march_day as u32)?;
    let month = u64::from(month);
    let offset = (month - 1) * 31 - (month / 7) * month.saturating_sub(7) + u64::from(day) - 1;
    start.checked_add_days(Days::new(offset))
}

/// Fold digits, then delete or convert `YYYY/MM/DD` Solar Hijri dates
///
/// With `convert` set a valid date becomes its Gregorian `YYYY-MM-DD`;
/// malformed dates are always deleted.
pub fn handle_persian_dates(text: &str, convert: bool) -> String {
    let text = fold_digits(text);
    SOLAR_DATE
        .replace_all(&text, |caps: &regex::Captures| {
            if !convert {
                return String::new();
            }
            let parsed = (
                caps[1].parse::<i32>(),
                caps[2].parse::<u32>(),
                caps[3].parse::<u32>(),
            );
            match parsed {
                (Ok(y), Ok(m), Ok(d)) => jalali_to_gregorian(y, m, d)
                    .map(|date| date.format("%Y-%m-%d").to_string())
                    .unwrap_or_default(),
                _ => String::new(),
            }
        })
        .into_owned()
}

/// A half-space before a known suffix becomes a space; any other is deleted
pub fn remove_half_space(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for (i, c) in text.char_indices() {
        if c != ZWNJ {
            out.push(c);
            continue;
        }
        let rest = &text[i + c.len_utf8()..];
        if HALF_SPACE_SUFFIXES.iter().any(|s| rest.starts_with(s)) {
            out.push(' ');
        }
    }
    out
}

/// Remove ASCII Latin letters, then collapse whitespace
pub fn strip_latin(text: &str) -> String {
    collapse_whitespace(&LATIN.replace_all(text, ""))
}

/// Remove Cyrillic letters
pub fn strip_cyrillic(text: &str) -> String {
    CYRILLIC.replace_all(text, "").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_date() {
        assert_eq!(
            handle_persian_dates("تاریخ امروز ۱۴۰۲/۰۵/۲۰ است", true),
            "تاریخ امروز 2023-08-11 است"
        );
    }

    #[test]
    fn test_delete_date_by_default() {
        assert_eq!(
            handle_persian_dates("تاریخ امروز ۱۴۰۲/۰۵/۲۰ است", false),
            "تاریخ امروز  است"
        );
    }

    #[test]
    fn test_malformed_date_deleted() {
        assert_eq!(handle_persian_dates("روز 1402/13/01 بود", true), "روز  بود");
        assert_eq!(handle_persian_dates("روز 1402/07/31 بود", true), "روز  بود");
    }

    #[test]
    fn test_known_conversions() {
        let nowruz = jalali_to_gregorian(1402, 1, 1).unwrap();
        assert_eq!(nowruz, NaiveDate::from_ymd_opt(2023, 3, 21).unwrap());

        let nowruz_1403 = jalali_to_gregorian(1403, 1, 1).unwrap();
        assert_eq!(nowruz_1403, NaiveDate::from_ymd_opt(2024, 3, 20).unwrap());

        // 1403 is a leap year, 1402 is not
        assert!(jalali_to_gregorian(1403, 12, 30).is_some());
        assert!(jalali_to_gregorian(1402, 12, 30).is_none());
        assert_eq!(
            jalali_to_gregorian(1402, 12, 29).unwrap(),
            NaiveDate::from_ymd_opt(2024, 3, 19).unwrap()
        );
    }

    #[test]
    fn test_remove_half_space() {
        assert_eq!(remove_half_space("این\u{200C}ها متن\u{200C}ی است"), "این ها متنی است");
        assert_eq!(remove_half_space("بزرگ\u{200C}ترین"), "بزرگ ترین");
        assert_eq!(remove_half_space("کتاب\u{200C}هایی"), "کتاب هایی");
        assert_eq!(remove_half_space("بی\u{200C}نام"), "بینام");
    }

    #[test]
    fn test_strip_latin_and_cyrillic() {
        assert_eq!(strip_latin("سلام hello دنیا"), "سلام دنیا");
        assert_eq!(strip_cyrillic("سلام привет"), "سلام ");
    }
}
