use serde::{Deserialize, Serialize};

use super::money::Money;

/// Canonical transaction produced by the import mapper and consumed by
/// every downstream component.
///
/// The date stays a string: recognized shapes are rewritten to ISO-8601
/// at normalization time, anything else passes through verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub date: String,
    pub amount: Money,
    pub description: String,
}

impl Transaction {
    pub fn new(date: impl Into<String>, amount: Money, description: impl Into<String>) -> Self {
        Transaction {
            date: date.into(),
            amount,
            description: description.into(),
        }
    }

    /// Reassignment identity: two rows are the same entry when date and
    /// description agree. Distinct rows sharing both fields are
    /// indistinguishable and travel together.
    pub fn same_entry(&self, other: &Transaction) -> bool {
        self.date == other.date && self.description == other.description
    }
}
