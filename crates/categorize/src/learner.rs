use std::collections::BTreeMap;

use lucre_core::Transaction;
use serde::Serialize;
use thiserror::Error;

use crate::store::CategoryStore;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum LearnError {
    #[error("No transactions selected")]
    InvalidSelection,
    #[error("Category name is empty")]
    InvalidCategoryName,
    #[error("No usable keywords supplied")]
    NoValidKeywords,
}

/// Candidate keyword phrase with its occurrence count across a selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Suggestion {
    pub phrase: String,
    pub count: usize,
}

const MAX_SUGGESTIONS: usize = 5;
const MIN_PHRASE_LEN: usize = 4;
const MIN_KEYWORD_LEN: usize = 3;

/// Rank candidate keyword phrases from the selected transactions.
///
/// Each description contributes its 1-, 2- and 3-token prefixes. Short
/// or all-digit phrases are noise (store numbers, card suffixes) and are
/// dropped. Ties at equal count resolve lexically.
pub fn suggest(selection: &[Transaction]) -> Result<Vec<Suggestion>, LearnError> {
    if selection.is_empty() {
        return Err(LearnError::InvalidSelection);
    }

    let mut tally: BTreeMap<String, usize> = BTreeMap::new();
    for tx in selection {
        let tokens: Vec<&str> = tx.description.split_whitespace().collect();
        for n in 1..=tokens.len().min(3) {
            let phrase = tokens[..n].join(" ");
            if phrase.len() >= MIN_PHRASE_LEN && !all_digits(&phrase) {
                *tally.entry(phrase).or_insert(0) += 1;
            }
        }
    }

    let mut ranked: Vec<Suggestion> = tally
        .into_iter()
        .map(|(phrase, count)| Suggestion { phrase, count })
        .collect();
    ranked.sort_by(|a, b| b.count.cmp(&a.count).then(a.phrase.cmp(&b.phrase)));
    ranked.truncate(MAX_SUGGESTIONS);
    Ok(ranked)
}

/// Parse, validate and commit a comma-separated keyword list for
/// `category`. All validation happens before any mutation, so a rejected
/// commit leaves the store untouched. Returns the accepted keywords.
pub fn commit(
    store: &mut CategoryStore,
    selection: &[Transaction],
    category: &str,
    keywords: &str,
) -> Result<Vec<String>, LearnError> {
    if selection.is_empty() {
        return Err(LearnError::InvalidSelection);
    }
    let category = category.trim();
    if category.is_empty() {
        return Err(LearnError::InvalidCategoryName);
    }

    let accepted: Vec<String> = keywords
        .split(',')
        .map(|entry| entry.trim().to_uppercase())
        .filter(|entry| entry.len() >= MIN_KEYWORD_LEN && !all_digits(entry))
        .collect();
    if accepted.is_empty() {
        return Err(LearnError::NoValidKeywords);
    }

    for keyword in &accepted {
        store.insert_custom(keyword.clone(), category.to_string());
    }
    Ok(accepted)
}

fn all_digits(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_digit())
}
