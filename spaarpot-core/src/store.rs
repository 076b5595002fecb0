//! Storage abstraction for the expense log.

use crate::error::StoreResult;
use crate::expense::Expense;

/// Append-only expense storage.
///
/// Expenses are immutable once written; there is no update or delete path.
/// `append` takes `&mut self`, so a store shared between callers has to be
/// wrapped in something that serializes writers.
pub trait ExpenseStore {
    /// Persist one expense at the end of the log
    fn append(&mut self, expense: &Expense) -> StoreResult<()>;

    /// Read back every expense, in the order they were appended
    fn list_all(&self) -> StoreResult<Vec<Expense>>;
}
