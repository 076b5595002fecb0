//! Plain-text rendering for command output.

use spaarpot_core::{BudgetSummary, Expense};
use spaarpot_ingest::NormalizedTransaction;
use std::fmt::Write;

pub fn expense_table(expenses: &[Expense]) -> String {
    if expenses.is_empty() {
        return "No expenses logged yet.\n".to_string();
    }

    let mut out = format!("{:<10}  {:<24} {:<14} {:>10}\n", "Date", "Name", "Category", "Amount");
    for e in expenses {
        let _ = writeln!(
            out,
            "{:<10}  {:<24} {:<14} {:>10.2}",
            e.date.format("%Y-%m-%d"),
            e.name,
            e.category,
            e.amount
        );
    }
    out
}

pub fn summary(s: &BudgetSummary) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Budget:     {:>12.2}", s.budget);
    let _ = writeln!(out, "Spent:      {:>12.2}", s.total_spent);
    let _ = writeln!(out, "Remaining:  {:>12.2}", s.remaining_budget);
    let _ = writeln!(out, "Days left:  {:>12}", s.remaining_days);
    let _ = writeln!(out, "Per day:    {:>12.2}", s.daily_budget);
    if s.is_over_budget() {
        out.push_str("Over budget!\n");
    }

    if !s.amount_by_category.is_empty() {
        out.push_str("\nBy category:\n");
        for (category, amount) in &s.amount_by_category {
            let _ = writeln!(out, "  {:<20} {:>12.2}", category, amount);
        }
    }
    out
}

pub fn transaction_table(txns: &[NormalizedTransaction]) -> String {
    if txns.is_empty() {
        return "No bank transactions uploaded yet.\n".to_string();
    }

    let mut out = format!("{:<10}  {:<32} {:>12} {:>12}\n", "Date", "Name", "Amount", "Balance");
    for t in txns {
        let _ = writeln!(
            out,
            "{:<10}  {:<32} {:>12.2} {:>12.2}",
            t.date.format("%Y-%m-%d"),
            t.name,
            t.amount,
            t.balance
        );
    }
    out
}
