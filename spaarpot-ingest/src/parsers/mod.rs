//! Bank-specific export parsers.

pub mod ing_nl;
