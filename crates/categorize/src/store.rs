use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

/// Reserved group for positive-amount transactions.
pub const INCOME: &str = "Income";
/// Reserved group for transactions no keyword matches.
pub const UNCATEGORIZED: &str = "Uncategorized";

#[derive(Error, Debug)]
pub enum RulesError {
    #[error("Failed to parse rules TOML: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Merged keyword→category mapping: an immutable base table overlaid by
/// the user-learned custom table. Custom entries win on key collision.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CategoryStore {
    base: BTreeMap<String, String>,
    custom: BTreeMap<String, String>,
}

impl CategoryStore {
    /// Build a store over a base table. Keywords are stored uppercase.
    pub fn new(base: BTreeMap<String, String>) -> Self {
        let base = base
            .into_iter()
            .map(|(keyword, category)| (keyword.trim().to_uppercase(), category))
            .collect();
        Self {
            base,
            custom: BTreeMap::new(),
        }
    }

    /// Store seeded with the built-in starter table.
    pub fn with_default_rules() -> Self {
        Self::new(
            DEFAULT_RULES
                .iter()
                .map(|(keyword, category)| (keyword.to_string(), category.to_string()))
                .collect(),
        )
    }

    /// Load a base table from TOML `keyword = "Category"` pairs.
    pub fn from_toml(toml_content: &str) -> Result<Self, RulesError> {
        let base: BTreeMap<String, String> = toml::from_str(toml_content)?;
        Ok(Self::new(base))
    }

    /// Replace the custom overlay wholesale (snapshot restore).
    pub fn set_custom(&mut self, custom: BTreeMap<String, String>) {
        self.custom = custom;
    }

    pub fn custom(&self) -> &BTreeMap<String, String> {
        &self.custom
    }

    /// Record a learned rule, overwriting any prior mapping for the keyword.
    pub fn insert_custom(&mut self, keyword: String, category: String) {
        self.custom.insert(keyword, category);
    }

    pub fn category_for(&self, keyword: &str) -> Option<&str> {
        self.custom
            .get(keyword)
            .or_else(|| self.base.get(keyword))
            .map(String::as_str)
    }

    /// Merged view; custom entries shadow base entries with the same key.
    pub fn merged(&self) -> BTreeMap<&str, &str> {
        let mut merged: BTreeMap<&str, &str> = self
            .base
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();
        for (k, v) in &self.custom {
            merged.insert(k, v);
        }
        merged
    }

    pub fn is_empty(&self) -> bool {
        self.base.is_empty() && self.custom.is_empty()
    }
}

/// Starter keyword table covering common US merchant strings. The
/// embedding application can replace it wholesale or extend it via TOML.
pub const DEFAULT_RULES: &[(&str, &str)] = &[
    ("WHOLE FOODS", "Groceries"),
    ("TRADER JOE", "Groceries"),
    ("SAFEWAY", "Groceries"),
    ("KROGER", "Groceries"),
    ("COSTCO", "Groceries"),
    ("STARBUCKS", "Coffee"),
    ("PEETS", "Coffee"),
    ("CHIPOTLE", "Dining"),
    ("MCDONALDS", "Dining"),
    ("DOORDASH", "Dining"),
    ("UBER EATS", "Dining"),
    ("GRUBHUB", "Dining"),
    ("SHELL", "Gas"),
    ("CHEVRON", "Gas"),
    ("EXXON", "Gas"),
    ("UBER", "Transport"),
    ("LYFT", "Transport"),
    ("NETFLIX", "Subscriptions"),
    ("SPOTIFY", "Subscriptions"),
    ("HULU", "Subscriptions"),
    ("AMAZON PRIME", "Subscriptions"),
    ("AMAZON", "Shopping"),
    ("TARGET", "Shopping"),
    ("WALMART", "Shopping"),
    ("RENT", "Housing"),
    ("MORTGAGE", "Housing"),
    ("COMCAST", "Utilities"),
    ("VERIZON", "Utilities"),
    ("CVS", "Health"),
    ("WALGREENS", "Health"),
];
