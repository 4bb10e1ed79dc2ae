//! The facade the embedding application drives: import a CSV export and
//! get back category groups plus a summary; reassign a selection and the
//! engine learns keyword rules for next time.
//!
//! Everything is synchronous and serially invoked — one import or one
//! reassignment at a time, never concurrently.

mod error;

pub use error::EngineError;

use serde::Serialize;

use lucre_categorize::{learner, reassign, Categorizer, CategoryGroups, CategoryStore, Suggestion};
use lucre_core::{Summary, Transaction};
use lucre_import::{detect_profile, tokenize, Profile, RowMapper, TokenizeOptions};
use lucre_storage::SnapshotStore;

/// Snapshot key for the last import's canonical transactions.
pub const LAST_TRANSACTIONS: &str = "last-transactions";
/// Snapshot key for the learned keyword table.
pub const CUSTOM_CATEGORIES: &str = "custom-categories";

/// What an import hands back to the caller for rendering.
#[derive(Debug, Clone, Serialize)]
pub struct ImportOutcome {
    pub profile: Profile,
    pub groups: CategoryGroups,
    pub summary: Summary,
}

/// What a reassignment hands back: the keywords that were learned plus
/// the updated view.
#[derive(Debug, Clone, Serialize)]
pub struct ReassignOutcome {
    pub keywords: Vec<String>,
    pub groups: CategoryGroups,
    pub summary: Summary,
}

/// The categorization engine. Owns the rule tables, the last import's
/// transactions and groups, and the injected persistence port.
pub struct Engine {
    store: Box<dyn SnapshotStore>,
    rules: CategoryStore,
    transactions: Vec<Transaction>,
    groups: CategoryGroups,
}

impl Engine {
    /// Build an engine over `rules`, restoring the learned keyword table
    /// and the last import snapshot from the store. The snapshot is kept
    /// for re-display only; it is never re-categorized automatically.
    pub fn new(mut rules: CategoryStore, store: Box<dyn SnapshotStore>) -> Result<Self, EngineError> {
        if let Some(json) = store.load(CUSTOM_CATEGORIES)? {
            rules.set_custom(serde_json::from_str(&json)?);
        }
        let transactions = match store.load(LAST_TRANSACTIONS)? {
            Some(json) => serde_json::from_str(&json)?,
            None => Vec::new(),
        };

        Ok(Self {
            store,
            rules,
            transactions,
            groups: CategoryGroups::new(),
        })
    }

    /// Two-phase import: a bounded sample parse to detect the layout,
    /// then a full parse, mapping and categorization. Replaces all prior
    /// import state; persists the new snapshot.
    pub fn import(&mut self, data: &str) -> Result<ImportOutcome, EngineError> {
        // 1. Sample parse — detection needs only the first row.
        let sample = tokenize(
            data.as_bytes(),
            &TokenizeOptions {
                preview: Some(1),
                ..TokenizeOptions::default()
            },
        )?;
        let profile = sample
            .first()
            .map(|row| detect_profile(row))
            .unwrap_or(Profile::Unknown);

        // 2. Full parse. The header row is not data.
        let mut rows = tokenize(data.as_bytes(), &TokenizeOptions::default())?;
        if profile == Profile::UsBankWithHeader && !rows.is_empty() {
            rows.remove(0);
        }
        if rows.is_empty() {
            return Err(EngineError::EmptyInput);
        }

        // 3. Map and categorize.
        let mapper = RowMapper::new(profile);
        let transactions = mapper.map_rows(&rows);
        let categorizer = Categorizer::new(&self.rules);
        let groups = categorizer.categorize(&transactions);

        tracing::info!(%profile, rows = transactions.len(), "import complete");

        // 4. Replace state and persist the snapshot.
        self.store
            .save(LAST_TRANSACTIONS, &serde_json::to_string(&transactions)?)?;
        self.transactions = transactions;
        self.groups = groups.clone();

        Ok(ImportOutcome {
            profile,
            groups,
            summary: self.summary(),
        })
    }

    /// Keyword suggestions for a user selection. Pure; no state changes.
    pub fn suggest(&self, selection: &[Transaction]) -> Result<Vec<Suggestion>, EngineError> {
        Ok(learner::suggest(selection)?)
    }

    /// Learn keywords for `category` from the selection, persist the
    /// custom table, and move the selection into the target group.
    /// Validation failures reject before any mutation.
    pub fn reassign(
        &mut self,
        selection: &[Transaction],
        category: &str,
        keywords: &str,
    ) -> Result<ReassignOutcome, EngineError> {
        let accepted = learner::commit(&mut self.rules, selection, category, keywords)?;
        self.store
            .save(CUSTOM_CATEGORIES, &serde_json::to_string(self.rules.custom())?)?;

        reassign(&mut self.groups, selection, category.trim());
        tracing::debug!(
            category = category.trim(),
            keywords = accepted.len(),
            "keywords committed"
        );

        Ok(ReassignOutcome {
            keywords: accepted,
            groups: self.groups.clone(),
            summary: self.summary(),
        })
    }

    /// Totals over the transactions currently displayed.
    pub fn summary(&self) -> Summary {
        Summary::compute(&self.transactions)
    }

    pub fn groups(&self) -> &CategoryGroups {
        &self.groups
    }

    /// The last import's canonical transactions, including those
    /// recovered from the snapshot at construction.
    pub fn last_import(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn rules(&self) -> &CategoryStore {
        &self.rules
    }
}
