use thiserror::Error;

/// Why an uploaded export could not be normalized.
#[derive(Debug, Error)]
pub enum NormalizeError {
    /// A required source column is absent from the header row
    #[error("missing required column '{column}'")]
    Schema { column: &'static str },

    /// A cell could not be parsed. `row` is the 1-based data row, header excluded.
    #[error("row {row}, column '{column}': cannot parse {value:?} as {expected}")]
    Parse {
        row: usize,
        column: &'static str,
        value: String,
        expected: &'static str,
    },

    #[error("reading CSV: {0}")]
    Csv(#[from] csv::Error),
}
