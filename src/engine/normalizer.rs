//! Text normalization ahead of tokenization.

use once_cell::sync::Lazy;
use regex::Regex;

/// URL-like substrings: anything starting with "http" or "www.".
static URL: Lazy<Regex> = Lazy::new(|| Regex::new(r"http\S+|www\.\S+").expect("valid regex"));

/// Whole whitespace-delimited tokens containing at least one digit.
/// Deliberately drops alphanumeric tokens like "python3" entirely, not just
/// the digits.
static NUMERIC_TOKEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\S*\d+\S*").expect("valid regex"));

/// Strict mode: keep alphanumerics, underscore and whitespace.
static PUNCT_STRICT: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\w\s]").expect("valid regex"));

/// Lenient mode: additionally preserve hyphens and apostrophes, used by
/// abbreviation-expansion-sensitive paths ("full-stack", "bachelor's").
static PUNCT_LENIENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^\w\s'-]").expect("valid regex"));

static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid regex"));

/// Punctuation handling during normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PunctuationMode {
    /// Keep only alphanumerics, underscore and whitespace.
    #[default]
    Strict,
    /// Also preserve hyphens and apostrophes.
    Lenient,
}

/// Normalize raw document text: lowercase, strip URLs, drop digit-containing
/// tokens, remove punctuation per `mode`, collapse whitespace.
///
/// Pure and total: always returns a (possibly empty) string, and applying it
/// twice gives the same result as applying it once.
pub fn normalize(raw: &str, mode: PunctuationMode) -> String {
    let text = raw.to_lowercase();
    let text = URL.replace_all(&text, "");
    let text = NUMERIC_TOKEN.replace_all(&text, "");
    let text = match mode {
        PunctuationMode::Strict => PUNCT_STRICT.replace_all(&text, " "),
        PunctuationMode::Lenient => PUNCT_LENIENT.replace_all(&text, " "),
    };
    let text = WHITESPACE.replace_all(&text, " ");
    text.trim().to_string()
}
