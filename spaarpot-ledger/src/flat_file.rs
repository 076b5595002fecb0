//! Append-only flat-file expense log.
//!
//! One expense per line, comma-delimited, no quoting or escaping:
//!   Lunch,12.50,food,2024-01-15
//!
//! Because nothing is escaped, a field containing a comma or a line break
//! cannot be represented; such expenses are refused at append time.

use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use spaarpot_core::expense::EXPENSE_DATE_FORMAT;
use spaarpot_core::{Expense, ExpenseStore, StoreError, StoreResult};
use tracing::{info, warn};

const FIELDS_PER_LINE: usize = 4;

#[derive(Debug, Clone)]
pub struct FlatFileExpenseLog {
    path: PathBuf,
}

impl FlatFileExpenseLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_err(&self, source: std::io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

fn check_field(field: &'static str, value: &str) -> StoreResult<()> {
    if value.contains(&[',', '\n', '\r'][..]) {
        return Err(StoreError::Unescapable {
            field,
            value: value.to_string(),
        });
    }
    Ok(())
}

/// Render one log line, newline included
fn format_line(expense: &Expense) -> StoreResult<String> {
    check_field("name", &expense.name)?;
    check_field("category", &expense.category)?;

    Ok(format!(
        "{},{},{},{}\n",
        expense.name,
        expense.amount,
        expense.category,
        expense.date.format(EXPENSE_DATE_FORMAT)
    ))
}

/// Parse one trimmed log line. `None` means the line does not have four
/// fields and is skipped.
fn parse_line(line_no: usize, line: &str) -> Option<StoreResult<Expense>> {
    let fields: Vec<&str> = line.split(',').collect();
    if fields.len() != FIELDS_PER_LINE {
        return None;
    }
    let (name, amount, category, date) = (fields[0], fields[1], fields[2], fields[3]);

    let parsed = Expense::parse_amount(amount)
        .and_then(|amount| Ok((amount, Expense::parse_date(date)?)))
        .and_then(|(amount, date)| Expense::new(name, category, amount, date));

    Some(parsed.map_err(|source| StoreError::Corrupt {
        line: line_no,
        source,
    }))
}

/// Contents of a log file, with the 1-based numbers of skipped lines
#[derive(Debug, Default)]
struct ParsedLog {
    expenses: Vec<Expense>,
    skipped: Vec<usize>,
}

fn parse_log(content: &str) -> StoreResult<ParsedLog> {
    let mut log = ParsedLog::default();
    for (i, raw) in content.lines().enumerate() {
        let line_no = i + 1;
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }
        match parse_line(line_no, line) {
            Some(parsed) => log.expenses.push(parsed?),
            None => log.skipped.push(line_no),
        }
    }
    Ok(log)
}

impl ExpenseStore for FlatFileExpenseLog {
    fn append(&mut self, expense: &Expense) -> StoreResult<()> {
        let line = format_line(expense)?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| self.io_err(e))?;
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| self.io_err(e))?;
        // Whole line in a single write.
        file.write_all(line.as_bytes())
            .map_err(|e| self.io_err(e))?;

        info!(
            expense = %expense.name,
            category = %expense.category,
            amount = %expense.amount,
            "appended expense to {}",
            self.path.display()
        );
        Ok(())
    }

    fn list_all(&self) -> StoreResult<Vec<Expense>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(s) => s,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(self.io_err(e)),
        };

        let log = parse_log(&content)?;
        for &line in &log.skipped {
            warn!(
                line,
                "skipping line of {} without {FIELDS_PER_LINE} fields",
                self.path.display()
            );
        }
        Ok(log.expenses)
    }
}
