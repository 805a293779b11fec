//! Input validation for the give form

use once_cell::sync::Lazy;
use regex::Regex;

static MOBILE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{10}$").expect("mobile pattern is a valid regex"));

/// Length of an Indian mobile number
pub const MOBILE_DIGITS: usize = 10;

/// Smallest amount accepted for a donation, in rupees
pub const MIN_AMOUNT: f64 = 1.0;

/// A donation amount is valid when it is a finite number of at least one rupee
pub fn validate_amount(amount: f64) -> bool {
    amount.is_finite() && amount >= MIN_AMOUNT
}

/// Exactly ten ASCII digits, nothing before or after
pub fn validate_mobile(mobile: &str) -> bool {
    MOBILE_PATTERN.is_match(mobile)
}

/// Parse the amount field. Blank or non-numeric input gives `None`.
pub fn parse_amount(input: &str) -> Option<f64> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok()
}

/// Parse the fidyah day-count field by its whole-number prefix, so `3.5`
/// counts as 3 days. Negative counts give `None`.
pub fn parse_days(input: &str) -> Option<u32> {
    leading_integer(input.trim()).and_then(|days| u32::try_from(days).ok())
}

/// Integer prefix of `text` (`"360.5"` → 360), like reading a number typed
/// into a form
pub fn leading_integer(text: &str) -> Option<i64> {
    let (sign, digits) = match text.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, text.strip_prefix('+').unwrap_or(text)),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    digits[..end].parse::<i64>().ok().map(|v| sign * v)
}
