use std::collections::BTreeMap;

use lucre_core::Transaction;
use lucre_import::DescriptionCleaner;
use regex::Regex;

use crate::store::{CategoryStore, INCOME, UNCATEGORIZED};

/// Category name → transactions, list order = categorization pass order.
pub type CategoryGroups = BTreeMap<String, Vec<Transaction>>;

/// Keyword paired with its precompiled whole-word pattern.
struct CompiledKeyword {
    category: String,
    pattern: Regex,
}

/// Assigns each transaction to a category using whole-word keyword rules.
///
/// Keywords are tried longest first so a specific phrase ("WHOLE FOODS")
/// beats a generic one ("FOODS"); equal lengths fall back to lexical
/// order, making the match sequence deterministic.
pub struct Categorizer {
    keywords: Vec<CompiledKeyword>,
    cleaner: DescriptionCleaner,
}

impl Categorizer {
    pub fn new(store: &CategoryStore) -> Self {
        let mut entries: Vec<(&str, &str)> = store.merged().into_iter().collect();
        entries.sort_by(|a, b| b.0.len().cmp(&a.0.len()).then(a.0.cmp(b.0)));

        let keywords = entries
            .into_iter()
            .filter_map(|(keyword, category)| {
                let pattern = format!(r"(?i)\b{}\b", regex::escape(keyword));
                Regex::new(&pattern).ok().map(|pattern| CompiledKeyword {
                    category: category.to_string(),
                    pattern,
                })
            })
            .collect();

        Self {
            keywords,
            cleaner: DescriptionCleaner::new(),
        }
    }

    /// Category for one transaction with an already-scrubbed description.
    /// Positive amounts are income, whatever the description says.
    fn assign(&self, tx: &Transaction) -> &str {
        if tx.amount.is_positive() {
            return INCOME;
        }
        self.keywords
            .iter()
            .find(|ck| ck.pattern.is_match(&tx.description))
            .map(|ck| ck.category.as_str())
            .unwrap_or(UNCATEGORIZED)
    }

    /// Scrub descriptions and group transactions by category, preserving
    /// input order within each group. Never mutates the store.
    pub fn categorize(&self, transactions: &[Transaction]) -> CategoryGroups {
        let mut groups = CategoryGroups::new();
        for tx in transactions {
            let mut tx = tx.clone();
            tx.description = self.cleaner.scrub(&tx.description);
            let category = self.assign(&tx).to_string();
            groups.entry(category).or_default().push(tx);
        }
        groups
    }
}
