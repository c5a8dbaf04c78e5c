//! Persian lookup tables
//!
//! The zero-width non-joiner is absent from every table; the half-space
//! stage owns it. Pictographic symbols (☑, ➡, ©, keycaps) are absent too:
//! Persian emoji handling runs after the tables and must still see them.

use super::common::{LATIN_VARIANTS, SPECIAL_CHARACTERS};
use super::LookupTable;

/// Punctuation, symbols, diacritics and directional marks
///
/// `,` and `;` first become their Persian forms, which the next entry folds
/// to a space.
pub const SIGNS: &[(&str, &str)] = &[
    (",", "،"),
    ("،", " "),
    (";", "؛"),
    ("؛", " "),
    ("?", " "),
    ("؟", " "),
    ("!", " "),
    (":", " "),
    ("...", " "),
    ("..", " "),
    (". . .", " "),
    ("…", " "),
    ("“", " "),
    ("”", " "),
    ("'", " "),
    ("‘", " "),
    ("’", " "),
    ("\"", " "),
    ("(", " "),
    (")", " "),
    ("-", " "),
    ("—", " "),
    ("_", " "),
    ("@", ""),
    ("#", ""),
    ("$", ""),
    ("%", ""),
    ("٪", ""),
    ("^", ""),
    ("&", ""),
    ("*", ""),
    ("{", ""),
    ("}", ""),
    ("\\\\", ""),
    ("`", ""),
    ("|", ""),
    ("•", " "),
    ("。", " "),
    ("¡", " "),
    ("¿", " "),
    ("¨", " "),
    ("¯", " "),
    ("°", " "),
    ("±", " "),
    ("²", " "),
    ("³", " "),
    ("´", " "),
    ("µ", " "),
    ("¶", " "),
    ("·", " "),
    ("¸", " "),
    ("¹", " "),
    ("↓", " "),
    ("»", " "),
    ("«", " "),
    ("<", " "),
    (">", " "),
    ("+", " "),
    ("~", " "),
    ("=", " "),
    ("×", " "),
    ("《", " "),
    ("》", " "),
    ("\u{0654}", " "),
    ("「", " "),
    ("」", " "),
    ("、", " "),
    ("｀", " "),
    ("〜", " "),
    ("ヽ", " "),
    ("\n", " "),
    ("\r", " "),
    ("\t", " "),
    ("\\", " "),
    ("\u{200E}", " "),
    ("\u{00A0}", " "),
    (".", " "),
    ("–", " "),
    ("\u{064E}", ""),
    ("\u{064F}", ""),
    ("\u{0650}", ""),
    ("\u{064C}", ""),
    ("\u{064D}", ""),
    ("\u{064B}", ""),
    ("‐", " "),
    ("\u{202B}", ""),
    ("\u{202C}", ""),
    ("\u{00AD}", ""),
    ("٫", " "),
    ("\u{20EA}", ""),
    ("\u{0652}", ""),
    ("\u{0651}", ""),
    ("٬", " "),
    ("\u{200B}", ""),
    ("¬", ""),
    ("÷", " "),
    ("]", " "),
    ("\u{FFFD}", ""),
    ("№", " "),
    ("∆", " "),
    ("ŭ", "u"),
    ("[", " "),
    ("√", " "),
    ("\u{FEFF}", ""),
    ("/", " "),
    ("\u{0670}", ""),
    ("＝", " "),
    ("ھ", "ه"),
    ("\u{20D7}", ""),
    ("∞", " "),
    ("ۍ", "ی"),
    ("ە", "ه"),
    ("ª", ""),
    ("ې", "ی"),
    ("\u{202A}", ""),
    ("ŧ", "t"),
    ("ٱ", "ا"),
    ("£", ""),
    ("œ", "oe"),
];

/// Arabic letter variants unified to their Persian forms
pub const ARABIC_VARIANTS: &[(&str, &str)] = &[
    ("ك", "ک"),
    ("ﻙ", "ک"),
    ("ﻚ", "ک"),
    ("ﻛ", "ک"),
    ("ﻜ", "ک"),
    ("ي", "ی"),
    ("ى", "ی"),
    ("ﻱ", "ی"),
    ("ﻲ", "ی"),
    ("ﻳ", "ی"),
    ("ﻴ", "ی"),
    ("ﯼ", "ی"),
    ("ﯽ", "ی"),
    ("ﯾ", "ی"),
    ("ﯿ", "ی"),
    ("ة", "ه"),
    ("ۀ", "ه"),
    ("ە", "ه"),
    ("ھ", "ه"),
    ("ﻪ", "ه"),
    ("ﻩ", "ه"),
    ("ﻫ", "ه"),
    ("ﻬ", "ه"),
    ("أ", "ا"),
    ("إ", "ا"),
    ("ٱ", "ا"),
    ("ﺍ", "ا"),
    ("ﺎ", "ا"),
    ("ؤ", "و"),
    ("ﻭ", "و"),
    ("ﻮ", "و"),
];

/// Persian and Arabic-Indic digits to ASCII
pub const DIGITS: &[(&str, &str)] = &[
    ("۰", "0"),
    ("۱", "1"),
    ("۲", "2"),
    ("۳", "3"),
    ("۴", "4"),
    ("۵", "5"),
    ("۶", "6"),
    ("۷", "7"),
    ("۸", "8"),
    ("۹", "9"),
    ("٠", "0"),
    ("١", "1"),
    ("٢", "2"),
    ("٣", "3"),
    ("٤", "4"),
    ("٥", "5"),
    ("٦", "6"),
    ("٧", "7"),
    ("٨", "8"),
    ("٩", "9"),
];

/// Fold Persian and Arabic-Indic digits to ASCII without touching anything else
pub fn fold_digits(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            '\u{06F0}'..='\u{06F9}' => char::from(b'0' + (c as u32 - 0x06F0) as u8),
            '\u{0660}'..='\u{0669}' => char::from(b'0' + (c as u32 - 0x0660) as u8),
            other => other,
        })
        .collect()
}

/// Persian substitution chain
pub fn tables() -> Vec<LookupTable> {
    vec![
        LookupTable::from_static("signs", SIGNS),
        LookupTable::from_static("arabic_variants", ARABIC_VARIANTS),
        LookupTable::from_static("digits", DIGITS),
        LookupTable::from_static("latin_variants", LATIN_VARIANTS),
        LookupTable::from_static("special_characters", SPECIAL_CHARACTERS),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apply_chain(text: &str) -> String {
        tables().iter().fold(text.to_string(), |acc, t| t.apply(&acc))
    }

    #[test]
    fn test_comma_chains_to_space() {
        assert_eq!(apply_chain("سلام,دنیا"), "سلام دنیا");
        assert_eq!(apply_chain("سلام؛دنیا"), "سلام دنیا");
    }

    #[test]
    fn test_arabic_letters_unified() {
        assert_eq!(apply_chain("كتاب"), "کتاب");
        assert_eq!(apply_chain("علي"), "علی");
        assert_eq!(apply_chain("مدرسة"), "مدرسه");
    }

    #[test]
    fn test_digits_fold() {
        assert_eq!(apply_chain("۱۴۰۲"), "1402");
        assert_eq!(apply_chain("٣٤"), "34");
        assert_eq!(fold_digits("۱۴۰۲/۰۵/۲۰ abc"), "1402/05/20 abc");
    }

    #[test]
    fn test_diacritics_removed() {
        assert_eq!(apply_chain("كَتَبَ"), "کتب");
    }

    #[test]
    fn test_pictographs_left_for_emoji_stage() {
        assert_eq!(apply_chain("خوب ☑ بود"), "خوب ☑ بود");
        assert_eq!(apply_chain("برو ➡ بعدی"), "برو ➡ بعدی");
        assert!(apply_chain("©\u{FE0F} ۲۰۲۴").starts_with('©'));
        assert!(apply_chain("1\u{FE0F}\u{20E3}").contains('\u{20E3}'));
    }

    #[test]
    fn test_zwnj_untouched() {
        assert_eq!(apply_chain("می\u{200C}روم"), "می\u{200C}روم");
    }
}
