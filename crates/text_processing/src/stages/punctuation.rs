//! Punctuation spacing and inline date removal

use corpus_prep_core::Language;
use once_cell::sync::Lazy;
use regex::Regex;

use super::unicode::collapse_whitespace;
use crate::tables::english::month_words;

static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());
static SPACE_BEFORE_PUNCT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"\s([?.!,":;](?:\s|$))"#).unwrap());
static COMMA: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s*,\s*").unwrap());
static SENTENCE_PUNCT: Lazy<Regex> = Lazy::new(|| sentence_punct(Language::English));
static SENTENCE_PUNCT_FA: Lazy<Regex> = Lazy::new(|| sentence_punct(Language::Persian));
static HYPHEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s*-\s*").unwrap());

/// A sentence terminator with the whitespace around it
fn sentence_punct(language: Language) -> Regex {
    let class: String = language
        .sentence_terminators()
        .iter()
        .map(|c| regex::escape(&c.to_string()))
        .collect();
    Regex::new(&format!(r"\s*([{}])\s*", class)).unwrap()
}

/// `<1-2 digits> <month> <4 digits>`, month from the month table
static INLINE_DATE: Lazy<Regex> = Lazy::new(|| {
    let months = month_words()
        .iter()
        .map(|m| regex::escape(m))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!(r"(?i)\b[0-9]{{1,2}} (?:{}) [0-9]{{4}}\b", months)).unwrap()
});

/// Insert a space after every period that is followed by a non-space
fn space_after_period(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 8);
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        out.push(c);
        if c == '.' {
            if let Some(next) = chars.peek() {
                if !next.is_whitespace() {
                    out.push(' ');
                }
            }
        }
    }
    out
}

/// Normalize punctuation spacing and strip inline dates
///
/// English: collapse whitespace, drop the space before sentence punctuation,
/// space after periods, strip dates, `", "` around commas, sentence marks
/// detached as their own words, hyphens glued, collapse and trim.
///
/// Persian: collapse, space after periods, strip dates, detach sentence
/// marks (including `؟`), collapse and trim.
pub fn clean_punctuation(text: &str, language: Language) -> String {
    let text = WHITESPACE.replace_all(text, " ");
    match language {
        Language::English => {
            let text = SPACE_BEFORE_PUNCT.replace_all(&text, "$1");
            let text = space_after_period(&text);
            let text = INLINE_DATE.replace_all(&text, "");
            let text = COMMA.replace_all(&text, ", ");
            let text = SENTENCE_PUNCT.replace_all(&text, " $1 ");
            let text = HYPHEN.replace_all(&text, "-");
            collapse_whitespace(&text)
        }
        Language::Persian => {
            let text = space_after_period(&text);
            let text = INLINE_DATE.replace_all(&text, "");
            let text = SENTENCE_PUNCT_FA.replace_all(&text, " $1 ");
            collapse_whitespace(&text)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detaches_sentence_punctuation() {
        assert_eq!(
            clean_punctuation("hello world! 😊 check out ", Language::English),
            "hello world ! 😊 check out"
        );
        assert_eq!(
            clean_punctuation("end.next sentence", Language::English),
            "end . next sentence"
        );
    }

    #[test]
    fn test_commas_and_hyphens() {
        assert_eq!(
            clean_punctuation("a ,b ,  c well - known", Language::English),
            "a, b, c well-known"
        );
    }

    #[test]
    fn test_strips_month_dates() {
        assert_eq!(
            clean_punctuation("born 1 July 1818 in town", Language::English),
            "born in town"
        );
        assert_eq!(
            clean_punctuation("on 12 sep 2001 it", Language::English),
            "on it"
        );
        // Not a month word
        assert_eq!(
            clean_punctuation("room 12 blue 2001", Language::English),
            "room 12 blue 2001"
        );
    }

    #[test]
    fn test_persian() {
        assert_eq!(
            clean_punctuation("سلام   دنیا؟خوبی", Language::Persian),
            "سلام دنیا ؟ خوبی"
        );
        // `؟` is only a terminator on the Persian side
        assert_eq!(clean_punctuation("چرا؟", Language::English), "چرا؟");
    }

    #[test]
    fn test_empty() {
        assert_eq!(clean_punctuation("", Language::English), "");
        assert_eq!(clean_punctuation("   ", Language::Persian), "");
    }
}
