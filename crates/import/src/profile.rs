use serde::{Deserialize, Serialize};
use std::fmt;

use crate::normalize::{is_iso_date, parse_us_date};

/// Recognized bank CSV layouts, fingerprinted from a sample row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Profile {
    /// Wells Fargo checking export: headerless, five columns, a literal
    /// `*` marker in the third column.
    WellsFargo,
    /// US Bank export with its `Date,Transaction,Name,Memo,Amount` header.
    UsBankWithHeader,
    /// US Bank body rows without the header: ISO dates, five columns.
    UsBankNoHeader,
    /// Unrecognized layout; mapping falls back to column guessing.
    Unknown,
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Profile::WellsFargo => write!(f, "Wells Fargo"),
            Profile::UsBankWithHeader => write!(f, "US Bank (headered)"),
            Profile::UsBankNoHeader => write!(f, "US Bank (headerless)"),
            Profile::Unknown => write!(f, "Unknown"),
        }
    }
}

const US_BANK_HEADER: [&str; 5] = ["date", "transaction", "name", "memo", "amount"];

/// Classify one sample row into a [`Profile`]. First match wins: the
/// US Bank header fingerprint, then the Wells Fargo `*` marker, then
/// ISO-dated US Bank body rows. Pure and deterministic.
pub fn detect_profile(row: &[String]) -> Profile {
    if row.len() < 3 {
        return Profile::Unknown;
    }

    // Tokenizer residue: surrounding quotes and whitespace are not content.
    let cells: Vec<String> = (0..5)
        .map(|i| strip_cell(row.get(i).map(String::as_str).unwrap_or("")))
        .collect();

    let is_header = cells
        .iter()
        .zip(US_BANK_HEADER.iter())
        .all(|(cell, name)| cell.eq_ignore_ascii_case(name));
    if is_header {
        return Profile::UsBankWithHeader;
    }

    if is_us_date(&cells[0]) && cells[2] == "*" {
        return Profile::WellsFargo;
    }

    if is_iso_date(&cells[0]) && row.len() >= 5 {
        return Profile::UsBankNoHeader;
    }

    Profile::Unknown
}

fn strip_cell(cell: &str) -> String {
    cell.trim().trim_matches('"').trim().to_string()
}

fn is_us_date(s: &str) -> bool {
    parse_us_date(s).is_some()
}
