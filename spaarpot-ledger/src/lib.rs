//! spaarpot-ledger: expense log stores (flat file and in-memory).

pub mod flat_file;
pub mod memory;

pub use flat_file::FlatFileExpenseLog;
pub use memory::MemoryExpenseStore;
