//! Manually logged expense records

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::ExpenseError;

/// Date format used by the expense log and by user input.
pub const EXPENSE_DATE_FORMAT: &str = "%Y-%m-%d";

/// A single expense entered by the user
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Expense {
    pub name: String,
    pub category: String,
    /// Amount spent; positive values count against the budget
    pub amount: Decimal,
    pub date: NaiveDate,
}

impl Expense {
    /// Create a new Expense. Name and category are trimmed and must not be blank.
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
        amount: Decimal,
        date: NaiveDate,
    ) -> Result<Self, ExpenseError> {
        let name = name.into().trim().to_string();
        if name.is_empty() {
            return Err(ExpenseError::Empty { field: "name" });
        }
        let category = category.into().trim().to_string();
        if category.is_empty() {
            return Err(ExpenseError::Empty { field: "category" });
        }

        Ok(Self {
            name,
            category,
            amount,
            date,
        })
    }

    /// Parse a `YYYY-MM-DD` date
    pub fn parse_date(s: &str) -> Result<NaiveDate, ExpenseError> {
        NaiveDate::parse_from_str(s.trim(), EXPENSE_DATE_FORMAT).map_err(|_| {
            ExpenseError::InvalidDate {
                value: s.to_string(),
            }
        })
    }

    /// Parse a dot-decimal amount such as `12.50`
    pub fn parse_amount(s: &str) -> Result<Decimal, ExpenseError> {
        Decimal::from_str(s.trim()).map_err(|_| ExpenseError::InvalidAmount {
            value: s.to_string(),
        })
    }

    /// Returns true if the expense falls in the same calendar month as `day`
    pub fn is_in_month_of(&self, day: NaiveDate) -> bool {
        self.date.year() == day.year() && self.date.month() == day.month()
    }
}
