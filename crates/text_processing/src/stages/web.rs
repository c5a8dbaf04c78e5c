//! URL, markup and social-media element removal

use corpus_prep_core::Language;
use once_cell::sync::Lazy;
use regex::Regex;

use super::unicode::collapse_whitespace;

static HTTP_URL: Lazy<Regex> = Lazy::new(|| Regex::new(r"https?://\S+").unwrap());
static WWW_URL: Lazy<Regex> = Lazy::new(|| Regex::new(r"www\.\S+").unwrap());
static BARE_DOMAIN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:[a-zA-Z0-9-]+\.)+[a-zA-Z]{2,}(?:/\S*)?").unwrap());
static HTML_TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]+>").unwrap());
static HTML_LOOSE: Lazy<Regex> = Lazy::new(|| Regex::new(r"<.*?>+").unwrap());
static IPV4: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b[0-9]{1,3}(?:\.[0-9]{1,3}){3}\b(?::[0-9]+)?").unwrap());
static EMAIL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b").unwrap());

static DOTTED_MENTION: Lazy<Regex> = Lazy::new(|| Regex::new(r"@(?:\w+\.)*\w+").unwrap());
static MENTION: Lazy<Regex> = Lazy::new(|| Regex::new(r"@\w+").unwrap());
static HASHTAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"#\w+").unwrap());

/// Remove bare `host.tld[/path]` domains
///
/// A domain touching `@` belongs to an e-mail address and is left for the
/// e-mail pattern.
fn strip_bare_domains(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut last = 0;
    for m in BARE_DOMAIN.find_iter(text) {
        let before = text[..m.start()].chars().next_back();
        let after = text[m.end()..].chars().next();
        let in_email = before == Some('@') || after == Some('@');
        let glued = after.is_some_and(|c| c.is_alphanumeric());
        if in_email || glued {
            continue;
        }
        out.push_str(&text[last..m.start()]);
        last = m.end();
    }
    out.push_str(&text[last..]);
    out
}

/// Remove URLs, markup, IPv4 literals and e-mail addresses
///
/// Order: http(s) URLs, `www.` URLs, bare domains (Persian only), HTML tags,
/// IPv4 with optional port, e-mail addresses.
pub fn strip_url_html(text: &str, language: Language) -> String {
    let mut text = HTTP_URL.replace_all(text, "").into_owned();
    text = WWW_URL.replace_all(&text, "").into_owned();
    if language == Language::Persian {
        text = strip_bare_domains(&text);
    }
    text = HTML_TAG.replace_all(&text, "").into_owned();
    text = HTML_LOOSE.replace_all(&text, "").into_owned();
    text = IPV4.replace_all(&text, "").into_owned();
    EMAIL.replace_all(&text, "").into_owned()
}

/// Remove mentions and hashtags, turn newlines into spaces, collapse whitespace
pub fn strip_social_elements(text: &str, language: Language) -> String {
    let mut text = text.to_string();
    if language == Language::Persian {
        text = DOTTED_MENTION.replace_all(&text, "").into_owned();
    }
    text = MENTION.replace_all(&text, "").into_owned();
    text = HASHTAG.replace_all(&text, "").into_owned();
    collapse_whitespace(&text.replace('\n', " "))
}
