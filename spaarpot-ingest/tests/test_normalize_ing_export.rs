use chrono::NaiveDate;
use rust_decimal::Decimal;
use spaarpot_ingest::{NormalizeError, RawTable, normalize};

/// A full ING export, including the columns the normalizer discards.
const EXPORT: &str = r#""Datum";"Naam / Omschrijving";"Rekening";"Tegenrekening";"Code";"Af Bij";"Bedrag (EUR)";"Mutatiesoort";"Mededelingen";"Saldo na mutatie";"Tag"
"20240115";"Supermarket";"NL01INGB0001234567";"";"BA";"Af";"12,50";"Betaalautomaat";"Pasvolgnr: 001";"487,30";""
"20240116";"Werkgever BV";"NL01INGB0001234567";"NL02RABO0123456789";"GT";"Bij";"2500,00";"Online bankieren";"Salaris januari";"2987,30";""
"20240117";"Gemeente; belasting";"NL01INGB0001234567";"NL03ABNA0987654321";"IC";"Af";"84,20";"Incasso";"Aanslag 2024";"2903,10";"tax"
"20240118";"Terugboeking";"NL01INGB0001234567";"";"DV";"Bij";"-4,99";"Diversen";"";"2898,11";""
"#;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn test_normalize_full_export() {
    let table = RawTable::from_reader(EXPORT.as_bytes(), b';').unwrap();
    assert_eq!(table.headers.len(), 11);

    let txns = normalize(&table).unwrap();
    assert_eq!(txns.len(), table.len());

    let names: Vec<_> = txns.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(
        names,
        vec!["Supermarket", "Werkgever BV", "Gemeente; belasting", "Terugboeking"]
    );

    assert_eq!(txns[0].date, date(2024, 1, 15));
    assert_eq!(txns[0].amount, Decimal::new(-1250, 2));
    assert_eq!(txns[0].balance, Decimal::new(48730, 2));

    assert_eq!(txns[1].amount, Decimal::new(250000, 2));
    assert_eq!(txns[2].amount, Decimal::new(-8420, 2));
    // Credits are not forced positive.
    assert_eq!(txns[3].amount, Decimal::new(-499, 2));
    assert_eq!(txns[3].date, date(2024, 1, 18));
}

#[test]
fn test_debits_are_never_positive() {
    let table = RawTable::from_reader(EXPORT.as_bytes(), b';').unwrap();
    let txns = normalize(&table).unwrap();
    let direction = table.column_index("Af Bij").unwrap();

    for (row, txn) in table.rows.iter().zip(&txns) {
        if row[direction] == "Af" {
            assert!(txn.amount <= Decimal::ZERO, "debit {} is positive", txn.name);
        }
    }
}

#[test]
fn test_normalize_is_deterministic() {
    let table = RawTable::from_reader(EXPORT.as_bytes(), b';').unwrap();
    let first = normalize(&table).unwrap();
    for _ in 0..3 {
        assert_eq!(normalize(&table).unwrap(), first);
    }
}

#[test]
fn test_export_without_balance_column_is_rejected() {
    let export = "Datum;Naam / Omschrijving;Af Bij;Bedrag (EUR)\n20240115;Supermarket;Af;12,50\n";
    let table = RawTable::from_reader(export.as_bytes(), b';').unwrap();
    match normalize(&table) {
        Err(NormalizeError::Schema { column }) => assert_eq!(column, "Saldo na mutatie"),
        other => panic!("expected schema error, got {other:?}"),
    }
}

#[test]
fn test_comma_delimited_file_is_a_schema_error() {
    // Read with the wrong delimiter the whole header collapses into one column.
    let export = "Datum,Naam / Omschrijving,Af Bij,Bedrag (EUR),Saldo na mutatie\n20240115,X,Af,1,2\n";
    let table = RawTable::from_reader(export.as_bytes(), b';').unwrap();
    assert!(matches!(
        normalize(&table),
        Err(NormalizeError::Schema { column: "Datum" })
    ));
}
