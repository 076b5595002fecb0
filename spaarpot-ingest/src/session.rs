//! Caller-owned upload session: the most recently normalized export.

use serde::{Deserialize, Serialize};

use crate::error::NormalizeError;
use crate::parsers::ing_nl::normalize;
use crate::types::{NormalizedTransaction, RawTable};

/// Holds the transactions of the last successful upload for display.
///
/// The session is never global; whoever drives the upload owns it and
/// decides where (if anywhere) to keep it between requests.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UploadSession {
    /// Name of the uploaded file, if any upload has happened
    pub source: Option<String>,
    pub transactions: Vec<NormalizedTransaction>,
}

impl UploadSession {
    /// Normalize `table` and replace the session contents with the result.
    ///
    /// On error the session is left exactly as it was. Returns the number
    /// of transactions now held.
    pub fn ingest(
        &mut self,
        source: impl Into<String>,
        table: &RawTable,
    ) -> Result<usize, NormalizeError> {
        let transactions = normalize(table)?;
        self.source = Some(source.into());
        self.transactions = transactions;
        Ok(self.transactions.len())
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(s: &str) -> serde_json::Result<Self> {
        serde_json::from_str(s)
    }
}
