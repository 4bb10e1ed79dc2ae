use lucre_core::Transaction;

use crate::normalize::{normalize_amount, normalize_date, DescriptionCleaner};
use crate::profile::Profile;

/// Maps raw rows into canonical transactions for a detected layout.
///
/// For the headered US Bank layout the header row must be excluded from
/// the row set before mapping begins.
pub struct RowMapper {
    profile: Profile,
    cleaner: DescriptionCleaner,
}

impl RowMapper {
    pub fn new(profile: Profile) -> Self {
        Self {
            profile,
            cleaner: DescriptionCleaner::new(),
        }
    }

    pub fn profile(&self) -> Profile {
        self.profile
    }

    /// Map one raw row. Missing cells degrade to empty/zero, never error.
    pub fn map_row(&self, row: &[String]) -> Transaction {
        let cell = |i: usize| row.get(i).map(String::as_str).unwrap_or("");
        let amount_cell = |i: usize| row.get(i).map(String::as_str);

        match self.profile {
            Profile::WellsFargo => Transaction {
                date: normalize_date(cell(0)),
                amount: normalize_amount(amount_cell(1)),
                description: self.cleaner.clean(cell(4)),
            },
            Profile::UsBankWithHeader | Profile::UsBankNoHeader => Transaction {
                date: normalize_date(cell(0)),
                amount: normalize_amount(amount_cell(4)),
                description: self
                    .cleaner
                    .clean(format!("{} {}", cell(2), cell(3)).trim()),
            },
            // Best-effort column guess for unrecognized layouts.
            Profile::Unknown => Transaction {
                date: normalize_date(cell(0)),
                amount: normalize_amount(amount_cell(1)),
                description: self
                    .cleaner
                    .clean(&format!("{} {} {}", cell(2), cell(3), cell(4))),
            },
        }
    }

    /// Map all rows, order-preserving.
    pub fn map_rows(&self, rows: &[Vec<String>]) -> Vec<Transaction> {
        rows.iter().map(|row| self.map_row(row)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lucre_core::Money;

    fn row(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn maps_wells_fargo_columns() {
        let mapper = RowMapper::new(Profile::WellsFargo);
        let tx = mapper.map_row(&row(&["3/4/2024", "-12.00", "*", "", "COFFEE SHOP"]));
        assert_eq!(tx.date, "2024-03-04");
        assert_eq!(tx.amount, Money::from_cents(-1200));
        assert_eq!(tx.description, "COFFEE SHOP");
    }

    #[test]
    fn maps_us_bank_columns_joining_name_and_memo() {
        let mapper = RowMapper::new(Profile::UsBankNoHeader);
        let tx = mapper.map_row(&row(&["2024-03-04", "DEBIT", "ACME", "RENT", "-900.00"]));
        assert_eq!(tx.date, "2024-03-04");
        assert_eq!(tx.amount, Money::from_cents(-90000));
        assert_eq!(tx.description, "ACME RENT");
    }

    #[test]
    fn us_bank_empty_memo_leaves_no_trailing_space() {
        let mapper = RowMapper::new(Profile::UsBankWithHeader);
        let tx = mapper.map_row(&row(&["2024-03-04", "DEBIT", "ACME", "", "-900.00"]));
        assert_eq!(tx.description, "ACME");
    }

    #[test]
    fn unknown_profile_guesses_columns() {
        let mapper = RowMapper::new(Profile::Unknown);
        let tx = mapper.map_row(&row(&["2024-03-04", "-5.00", "ONE", "TWO", "THREE"]));
        assert_eq!(tx.amount, Money::from_cents(-500));
        assert_eq!(tx.description, "ONE TWO THREE");
    }

    #[test]
    fn short_rows_degrade_to_defaults() {
        let mapper = RowMapper::new(Profile::WellsFargo);
        let tx = mapper.map_row(&row(&["3/4/2024"]));
        assert_eq!(tx.date, "2024-03-04");
        assert!(tx.amount.is_zero());
        assert_eq!(tx.description, "");
    }

    #[test]
    fn map_rows_preserves_order() {
        let mapper = RowMapper::new(Profile::WellsFargo);
        let rows = vec![
            row(&["3/4/2024", "-1.00", "*", "", "FIRST"]),
            row(&["3/5/2024", "-2.00", "*", "", "SECOND"]),
        ];
        let txs = mapper.map_rows(&rows);
        assert_eq!(txs[0].description, "FIRST");
        assert_eq!(txs[1].description, "SECOND");
    }
}
