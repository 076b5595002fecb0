//! Error types shared by the expense model and its stores.

use std::path::PathBuf;
use thiserror::Error;

/// Rejections raised while building an [`Expense`](crate::Expense) from user or log input.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExpenseError {
    #[error("expense {field} cannot be empty")]
    Empty { field: &'static str },

    #[error("invalid date '{value}': expected YYYY-MM-DD")]
    InvalidDate { value: String },

    #[error("invalid amount '{value}'")]
    InvalidAmount { value: String },
}

/// Failures of an [`ExpenseStore`](crate::ExpenseStore).
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The log format has no escaping, so delimiters inside a field would split the row.
    #[error("{field} {value:?} contains a comma or line break and cannot be stored")]
    Unescapable { field: &'static str, value: String },

    #[error("expense log line {line} is corrupt: {source}")]
    Corrupt {
        line: usize,
        #[source]
        source: ExpenseError,
    },
}

/// The only way a summary can fail: amounts too large for a decimal.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SummaryError {
    #[error("{what} overflowed while summarizing expenses")]
    Overflow { what: &'static str },
}

pub type StoreResult<T> = Result<T, StoreError>;
