//! Monthly budget summary over the expense history

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::SummaryError;
use crate::expense::Expense;
use crate::time::remaining_days_in_month;

/// Aggregate spending statistics, recomputed on every request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetSummary {
    /// Summed amount per category. Ordered by name only for stable output.
    pub amount_by_category: BTreeMap<String, Decimal>,
    pub budget: Decimal,
    pub total_spent: Decimal,
    /// `budget - total_spent`; negative once the budget is overspent
    pub remaining_budget: Decimal,
    /// Days left in the current month after today
    pub remaining_days: u32,
    /// What may be spent per remaining day. On the last day of the month
    /// (`remaining_days == 0`) this is the whole remaining budget.
    pub daily_budget: Decimal,
}

impl BudgetSummary {
    pub fn is_over_budget(&self) -> bool {
        self.remaining_budget < Decimal::ZERO
    }
}

/// Summarize `expenses` against `budget` as seen on `today`.
///
/// All expenses are counted regardless of their date; use
/// [`expenses_in_month`] first to restrict the window. Fails only when a
/// sum or the remaining budget does not fit in a `Decimal`.
pub fn summarize(
    expenses: &[Expense],
    budget: Decimal,
    today: NaiveDate,
) -> Result<BudgetSummary, SummaryError> {
    let overflow = |what: &'static str| SummaryError::Overflow { what };

    let mut amount_by_category: BTreeMap<String, Decimal> = BTreeMap::new();
    let mut total_spent = Decimal::ZERO;
    for expense in expenses {
        let slot = amount_by_category
            .entry(expense.category.clone())
            .or_default();
        *slot = slot
            .checked_add(expense.amount)
            .ok_or_else(|| overflow("category total"))?;
        total_spent = total_spent
            .checked_add(expense.amount)
            .ok_or_else(|| overflow("total spent"))?;
    }

    let remaining_budget = budget
        .checked_sub(total_spent)
        .ok_or_else(|| overflow("remaining budget"))?;
    let remaining_days = remaining_days_in_month(today);

    let daily_budget = if remaining_days == 0 {
        remaining_budget
    } else {
        remaining_budget
            .checked_div(Decimal::from(remaining_days))
            .ok_or_else(|| overflow("daily budget"))?
    };

    Ok(BudgetSummary {
        amount_by_category,
        budget,
        total_spent,
        remaining_budget,
        remaining_days,
        daily_budget,
    })
}

/// Expenses dated in the same calendar month as `today`, in their original order
pub fn expenses_in_month(expenses: &[Expense], today: NaiveDate) -> Vec<Expense> {
    expenses
        .iter()
        .filter(|e| e.is_in_month_of(today))
        .cloned()
        .collect()
}
