//! ING (NL) current-account export normalizer
//!
//! Expected semicolon-delimited export, every field quoted:
//!   "Datum";"Naam / Omschrijving";"Rekening";"Tegenrekening";"Code";"Af Bij";
//!   "Bedrag (EUR)";"Mutatiesoort";"Mededelingen";"Saldo na mutatie";"Tag"
//!   "20240115";"Supermarket";"NL01INGB...";"";"BA";"Af";"12,50";...;"487,30";""
//!
//! Only five columns are used. Amounts use a decimal comma, dates are YYYYMMDD.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::str::FromStr;
use tracing::debug;

use crate::error::NormalizeError;
use crate::types::{NormalizedTransaction, RawTable};

pub const COL_DATE: &str = "Datum";
pub const COL_NAME: &str = "Naam / Omschrijving";
pub const COL_DIRECTION: &str = "Af Bij";
pub const COL_AMOUNT: &str = "Bedrag (EUR)";
pub const COL_BALANCE: &str = "Saldo na mutatie";

/// Direction value marking money leaving the account
pub const DEBIT: &str = "Af";

struct Columns {
    date: usize,
    name: usize,
    direction: usize,
    amount: usize,
    balance: usize,
}

impl Columns {
    fn locate(table: &RawTable) -> Result<Self, NormalizeError> {
        let find = |column: &'static str| {
            table
                .column_index(column)
                .ok_or(NormalizeError::Schema { column })
        };

        Ok(Self {
            date: find(COL_DATE)?,
            name: find(COL_NAME)?,
            direction: find(COL_DIRECTION)?,
            amount: find(COL_AMOUNT)?,
            balance: find(COL_BALANCE)?,
        })
    }
}

/// Parse a strict 8-digit YYYYMMDD date.
fn parse_yyyymmdd(s: &str) -> Option<NaiveDate> {
    if s.len() != 8 || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    NaiveDate::parse_from_str(s, "%Y%m%d").ok()
}

/// Parse a decimal-comma number such as `1234,56` or `-0,99`.
fn parse_decimal_comma(s: &str) -> Option<Decimal> {
    Decimal::from_str(&s.trim().replace(',', ".")).ok()
}

/// Normalize a raw ING export into date/name/signed amount/balance rows.
///
/// Fails without returning any rows if a required column is missing or any
/// cell is malformed. Row order is preserved.
pub fn normalize(table: &RawTable) -> Result<Vec<NormalizedTransaction>, NormalizeError> {
    let cols = Columns::locate(table)?;
    let mut out = Vec::with_capacity(table.len());

    for (i, row) in table.rows.iter().enumerate() {
        let row_no = i + 1;
        let cell = |idx: usize| row.get(idx).map(String::as_str).unwrap_or("");
        let parse_err = |column: &'static str, value: &str, expected: &'static str| {
            NormalizeError::Parse {
                row: row_no,
                column,
                value: value.to_string(),
                expected,
            }
        };

        let raw_amount = cell(cols.amount);
        let mut amount = parse_decimal_comma(raw_amount)
            .ok_or_else(|| parse_err(COL_AMOUNT, raw_amount, "a decimal-comma number"))?;

        let raw_balance = cell(cols.balance);
        let balance = parse_decimal_comma(raw_balance)
            .ok_or_else(|| parse_err(COL_BALANCE, raw_balance, "a decimal-comma number"))?;

        // Debits are forced negative even if the export already signed them.
        if cell(cols.direction) == DEBIT {
            amount = -amount.abs();
        }

        let raw_date = cell(cols.date);
        let date = parse_yyyymmdd(raw_date)
            .ok_or_else(|| parse_err(COL_DATE, raw_date, "a YYYYMMDD date"))?;

        out.push(NormalizedTransaction {
            date,
            name: cell(cols.name).to_string(),
            amount,
            balance,
        });
    }

    debug!(rows = out.len(), "normalized ING export");
    Ok(out)
}
