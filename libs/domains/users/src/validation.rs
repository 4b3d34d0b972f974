//! Field format predicates.
//!
//! Pure functions with no side effects; callers turn a `false` into the
//! matching [`UserError`](crate::UserError).

use regex::Regex;
use std::sync::LazyLock;

static EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9+_.-]+@[A-Za-z0-9.-]+$").unwrap());

static PHONE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9+\-]{9,20}$").unwrap());

/// Latin letters (accented included), apostrophes and hyphens; tokens separated
/// by exactly one ASCII whitespace character.
static NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-zÀ-ÖØ-öø-ÿ'\-]+([ \t\n\x0B\x0C\r][A-Za-zÀ-ÖØ-öø-ÿ'\-]+)*$").unwrap()
});

static ISO_DATE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").unwrap());

pub const GENDERS: [&str; 3] = ["Male", "Female", "Other"];

pub const MIN_PASSWORD_LEN: usize = 8;

pub fn is_valid_email(s: &str) -> bool {
    EMAIL.is_match(s)
}

/// At least eight characters with an ASCII uppercase letter and an ASCII digit.
/// Line breaks are never accepted.
pub fn is_valid_password(s: &str) -> bool {
    s.chars().count() >= MIN_PASSWORD_LEN
        && s.chars().any(|c| c.is_ascii_uppercase())
        && s.chars().any(|c| c.is_ascii_digit())
        && !s
            .chars()
            .any(|c| matches!(c, '\n' | '\r' | '\u{0085}' | '\u{2028}' | '\u{2029}'))
}

pub fn is_valid_phone(s: &str) -> bool {
    PHONE.is_match(s)
}

pub fn is_valid_name(s: &str) -> bool {
    NAME.is_match(s)
}

pub fn is_valid_gender(s: &str) -> bool {
    GENDERS.contains(&s)
}

/// `YYYY-MM-DD` with zero-padded month and day. Says nothing about whether
/// the date exists.
pub fn is_iso_date(s: &str) -> bool {
    ISO_DATE.is_match(s)
}

/// Trims and collapses inner whitespace runs to a single space.
pub fn normalize_name(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}
