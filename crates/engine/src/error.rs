use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    /// The parse produced no data rows; nothing was categorized or mutated.
    #[error("Import produced no rows")]
    EmptyInput,
    #[error("CSV error: {0}")]
    Csv(#[from] lucre_import::CsvError),
    #[error(transparent)]
    Learn(#[from] lucre_categorize::LearnError),
    #[error("Storage error: {0}")]
    Store(#[from] lucre_storage::StoreError),
    #[error("Snapshot decode error: {0}")]
    Snapshot(#[from] serde_json::Error),
}
