use std::sync::LazyLock;

use regex::Regex;

pub const NAME_MIN_LEN: usize = 2;
pub const NAME_MAX_LEN: usize = 100;
pub const ADDRESS_MAX_LEN: usize = 100;

// Letters (incl. Latin-1 accented, minus × and ÷), plain space, hyphen.
// Not `\s`: tabs, newlines and NBSP are not allowed in names.
static NAME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-ZÀ-ÖØ-öø-ÿ -]+$").expect("valid name regex"));

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").expect("valid email regex")
});

// ASCII digits only; `\d` would also accept other Unicode digits.
static PHONE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[679][0-9]{8}$").expect("valid phone regex"));

static DATE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").expect("valid date regex"));

/// Length is counted in characters, so "Ñu" is two long.
pub fn is_valid_name(name: &str) -> bool {
    let len = name.chars().count();
    (NAME_MIN_LEN..=NAME_MAX_LEN).contains(&len) && NAME_PATTERN.is_match(name)
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

pub fn is_valid_address(address: &str) -> bool {
    address.chars().count() <= ADDRESS_MAX_LEN
}

pub fn is_valid_phone(phone: &str) -> bool {
    PHONE_PATTERN.is_match(phone)
}

/// Shape only (`YYYY-MM-DD`); "2024-13-45" passes.
pub fn is_valid_date(date: &str) -> bool {
    DATE_PATTERN.is_match(date)
}
