//! In-memory expense store for tests and embedding

use spaarpot_core::{Expense, ExpenseStore, StoreResult};

#[derive(Debug, Clone, Default)]
pub struct MemoryExpenseStore {
    expenses: Vec<Expense>,
}

impl MemoryExpenseStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }
}

impl ExpenseStore for MemoryExpenseStore {
    fn append(&mut self, expense: &Expense) -> StoreResult<()> {
        self.expenses.push(expense.clone());
        Ok(())
    }

    fn list_all(&self) -> StoreResult<Vec<Expense>> {
        Ok(self.expenses.clone())
    }
}
