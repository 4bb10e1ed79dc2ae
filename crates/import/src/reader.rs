use std::io::Read;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CsvError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Options forwarded to the row tokenizer.
#[derive(Debug, Clone)]
pub struct TokenizeOptions {
    /// Treat the first record as a header and skip it.
    pub has_headers: bool,
    /// Drop rows whose cells are all blank.
    pub skip_empty_lines: bool,
    /// Stop after this many rows (the bounded sample phase).
    pub preview: Option<usize>,
    pub delimiter: u8,
}

impl Default for TokenizeOptions {
    fn default() -> Self {
        Self {
            has_headers: false,
            skip_empty_lines: true,
            preview: None,
            delimiter: b',',
        }
    }
}

/// Tokenize delimited text into raw string-cell rows.
///
/// Ragged rows are allowed; downstream mapping treats missing cells as
/// empty rather than rejecting the row.
pub fn tokenize<R: Read>(input: R, options: &TokenizeOptions) -> Result<Vec<Vec<String>>, CsvError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(options.has_headers)
        .delimiter(options.delimiter)
        .flexible(true)
        .from_reader(input);

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result?;
        let row: Vec<String> = record.iter().map(|s| s.to_string()).collect();

        if options.skip_empty_lines && row.iter().all(|cell| cell.trim().is_empty()) {
            continue;
        }

        rows.push(row);
        if options.preview.is_some_and(|limit| rows.len() >= limit) {
            break;
        }
    }

    Ok(rows)
}
