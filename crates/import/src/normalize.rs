use chrono::NaiveDate;
use lucre_core::Money;
use regex::Regex;
use rust_decimal::Decimal;
use std::str::FromStr;

/// Parse a raw amount cell. Malformed input degrades to zero — a row
/// with a missing or garbled amount must not abort the import.
pub fn normalize_amount(raw: Option<&str>) -> Money {
    let Some(raw) = raw else {
        return Money::zero();
    };
    let s = raw.trim();

    // Accounting notation: a fully parenthesized value is negative no
    // matter what sign is embedded inside.
    let (parenthesized, s) = match s.strip_prefix('(').and_then(|rest| rest.strip_suffix(')')) {
        Some(inner) => (true, inner),
        None => (false, s),
    };

    let cleaned = s.replace([',', '$', ' '], "");
    let Ok(mut value) = Decimal::from_str(&cleaned) else {
        return Money::zero();
    };
    if parenthesized {
        value = -value.abs();
    }

    Money::from_decimal(value)
}

/// Rewrite US-style `M/D/YYYY` dates to zero-padded ISO-8601. An already
/// ISO date is returned as-is; any other shape passes through unchanged.
pub fn normalize_date(raw: &str) -> String {
    let s = raw.trim();
    if s.is_empty() {
        return String::new();
    }
    if is_iso_date(s) {
        return s.to_string();
    }
    match parse_us_date(s) {
        Some(date) => date.format("%Y-%m-%d").to_string(),
        None => s.to_string(),
    }
}

/// Strict zero-padded `YYYY-MM-DD`, calendar-valid.
pub(crate) fn is_iso_date(s: &str) -> bool {
    let b = s.as_bytes();
    b.len() == 10
        && b[4] == b'-'
        && b[7] == b'-'
        && NaiveDate::parse_from_str(s, "%Y-%m-%d").is_ok()
}

/// `M/D/YYYY` or `MM/DD/YYYY`. The year must have four digits — chrono
/// alone would read `3/4/24` as year 24 and rewrite it into nonsense.
pub(crate) fn parse_us_date(s: &str) -> Option<NaiveDate> {
    let (_, year) = s.rsplit_once('/')?;
    if year.len() != 4 {
        return None;
    }
    NaiveDate::parse_from_str(s, "%m/%d/%Y").ok()
}

/// Two-pass description scrubber with precompiled patterns.
///
/// The first pass runs at import time; the strict pass runs before
/// keyword matching and is idempotent over its own output.
#[derive(Debug, Clone)]
pub struct DescriptionCleaner {
    authorized_on: Regex,
    card_number: Regex,
    whitespace: Regex,
}

impl DescriptionCleaner {
    pub fn new() -> Self {
        Self {
            authorized_on: Regex::new(r"(?i)PURCHASE AUTHORIZED ON \d{2}/\d{2}").unwrap(),
            card_number: Regex::new(r"(?i)CARD \d+").unwrap(),
            whitespace: Regex::new(r"\s+").unwrap(),
        }
    }

    /// Import-time pass: drop statement boilerplate, collapse whitespace
    /// runs, trim, uppercase.
    pub fn clean(&self, raw: &str) -> String {
        let text = self.authorized_on.replace_all(raw, "");
        let text = self.card_number.replace_all(&text, "");
        let text = self.whitespace.replace_all(&text, " ");
        text.trim().to_uppercase()
    }

    /// Strict pass: re-clean, then keep only `A-Z`, digits and spaces so
    /// keyword matching sees uniform text.
    pub fn scrub(&self, raw: &str) -> String {
        let cleaned = self.clean(raw);
        let stripped: String = cleaned
            .chars()
            .filter(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || *c == ' ')
            .collect();
        self.whitespace.replace_all(&stripped, " ").trim().to_string()
    }
}

impl Default for DescriptionCleaner {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn money(s: &str) -> Money {
        Money::from_decimal(Decimal::from_str(s).unwrap())
    }

    // ── normalize_amount ──────────────────────────────────────────────────────

    #[test]
    fn amount_plain() {
        assert_eq!(normalize_amount(Some("123.45")), money("123.45"));
    }

    #[test]
    fn amount_strips_dollar_sign_and_commas() {
        assert_eq!(normalize_amount(Some("$1,234.56")), money("1234.56"));
    }

    #[test]
    fn amount_accounting_parens_force_negative() {
        assert_eq!(normalize_amount(Some("(12.00)")), money("-12.00"));
        assert_eq!(normalize_amount(Some("(-12.00)")), money("-12.00"));
        assert_eq!(normalize_amount(Some("($1,234.56)")), money("-1234.56"));
    }

    #[test]
    fn amount_negative_sign() {
        assert_eq!(normalize_amount(Some("-50.00")), money("-50.00"));
    }

    #[test]
    fn amount_missing_or_unparsable_is_zero() {
        assert_eq!(normalize_amount(None), Money::zero());
        assert_eq!(normalize_amount(Some("")), Money::zero());
        assert_eq!(normalize_amount(Some("N/A")), Money::zero());
        assert_eq!(normalize_amount(Some("(oops)")), Money::zero());
    }

    // ── normalize_date ────────────────────────────────────────────────────────

    #[test]
    fn date_us_slash_is_rewritten_and_padded() {
        assert_eq!(normalize_date("3/4/2024"), "2024-03-04");
        assert_eq!(normalize_date("03/04/2024"), "2024-03-04");
        assert_eq!(normalize_date("12/31/2024"), "2024-12-31");
    }

    #[test]
    fn date_iso_passes_through() {
        assert_eq!(normalize_date("2024-03-04"), "2024-03-04");
    }

    #[test]
    fn date_unrecognized_passes_through() {
        assert_eq!(normalize_date("N/A"), "N/A");
        assert_eq!(normalize_date("13/45/2024"), "13/45/2024");
    }

    #[test]
    fn date_two_digit_year_is_not_rewritten() {
        assert_eq!(normalize_date("3/4/24"), "3/4/24");
    }

    #[test]
    fn date_unpadded_iso_passes_through_unchanged() {
        assert_eq!(normalize_date("2024-3-4"), "2024-3-4");
    }

    #[test]
    fn date_empty_is_empty() {
        assert_eq!(normalize_date(""), "");
        assert_eq!(normalize_date("   "), "");
    }

    // ── DescriptionCleaner ────────────────────────────────────────────────────

    #[test]
    fn clean_removes_authorization_boilerplate() {
        let cleaner = DescriptionCleaner::new();
        assert_eq!(
            cleaner.clean("Purchase authorized on 03/02 Coffee Shop Card 1234"),
            "COFFEE SHOP"
        );
    }

    #[test]
    fn clean_collapses_whitespace_and_uppercases() {
        let cleaner = DescriptionCleaner::new();
        assert_eq!(cleaner.clean("  acme   coffee\tshop "), "ACME COFFEE SHOP");
    }

    #[test]
    fn scrub_strips_punctuation() {
        let cleaner = DescriptionCleaner::new();
        assert_eq!(cleaner.scrub("ACME - COFFEE #42!"), "ACME COFFEE 42");
    }

    #[test]
    fn scrub_is_idempotent() {
        let cleaner = DescriptionCleaner::new();
        let once = cleaner.scrub("Purchase Authorized On 03/02 ACME* Coffee, Card 987");
        let twice = cleaner.scrub(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn scrub_of_clean_output_is_stable() {
        let cleaner = DescriptionCleaner::new();
        let cleaned = cleaner.clean("PAYROLL DEPOSIT");
        assert_eq!(cleaner.scrub(&cleaned), "PAYROLL DEPOSIT");
    }
}
