use serde::{Deserialize, Serialize};

use super::money::Money;
use super::transaction::Transaction;

/// Totals over the currently displayed transactions.
///
/// `total_expenses` keeps its sign, so `net` is a plain sum.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub total_income: Money,
    pub total_expenses: Money,
    pub net: Money,
}

impl Summary {
    pub fn compute(transactions: &[Transaction]) -> Self {
        let mut total_income = Money::zero();
        let mut total_expenses = Money::zero();

        for tx in transactions {
            if tx.amount.is_positive() {
                total_income += tx.amount;
            } else if tx.amount.is_negative() {
                total_expenses += tx.amount;
            }
        }

        Summary {
            total_income,
            total_expenses,
            net: total_income + total_expenses,
        }
    }
}
