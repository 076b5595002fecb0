//! spaarpot-ingest: bank export ingestion and normalization into a common transaction shape.

pub mod error;
pub mod parsers;
pub mod session;
pub mod types;

pub use error::NormalizeError;
pub use parsers::ing_nl::normalize;
pub use session::UploadSession;
pub use types::{NormalizedTransaction, RawTable};
