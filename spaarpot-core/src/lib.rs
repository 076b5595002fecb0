//! spaarpot-core: expense records, the monthly budget summarizer, and the
//! storage seam the expense log is written through.

pub mod error;
pub mod expense;
pub mod store;
pub mod summary;
pub mod time;

pub use error::{ExpenseError, StoreError, StoreResult, SummaryError};
pub use expense::Expense;
pub use store::ExpenseStore;
pub use summary::{BudgetSummary, expenses_in_month, summarize};
pub use time::{days_in_month, remaining_days_in_month};
