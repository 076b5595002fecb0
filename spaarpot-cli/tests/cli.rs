use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;

fn spaarpot(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("spaarpot").unwrap();
    cmd.env("SPAARPOT_HOME", home).env_remove("RUST_LOG");
    cmd
}

const EXPORT: &str = "\"Datum\";\"Naam / Omschrijving\";\"Rekening\";\"Af Bij\";\"Bedrag (EUR)\";\"Saldo na mutatie\"\n\
\"20240115\";\"Supermarket\";\"NL01INGB0001234567\";\"Af\";\"12,50\";\"487,30\"\n\
\"20240116\";\"Werkgever BV\";\"NL01INGB0001234567\";\"Bij\";\"2500,00\";\"2987,30\"\n";

#[test]
fn test_add_expenses_then_summarize() {
    let home = tempfile::tempdir().unwrap();

    for (name, amount, category) in [
        ("Groceries", "50", "food"),
        ("Takeaway", "30", "food"),
        ("Rent", "1000", "rent"),
    ] {
        spaarpot(home.path())
            .args(["expense", "add", name, amount, category, "--date", "2024-01-10"])
            .assert()
            .success()
            .stdout(predicate::str::contains(format!("Added {name}")));
    }

    spaarpot(home.path())
        .args(["expense", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Takeaway"));

    spaarpot(home.path())
        .args(["summary", "--budget", "2000", "--as-of", "2024-01-15"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("1080.00")
                .and(predicate::str::contains("920.00"))
                .and(predicate::str::contains("57.50")),
        );

    let log = fs::read_to_string(home.path().join("expenses.csv")).unwrap();
    assert_eq!(log.lines().next(), Some("Groceries,50,food,2024-01-10"));
}

#[test]
fn test_summary_this_month_ignores_older_expenses() {
    let home = tempfile::tempdir().unwrap();
    spaarpot(home.path())
        .args(["expense", "add", "Old", "400", "misc", "--date", "2023-12-31"])
        .assert()
        .success();
    spaarpot(home.path())
        .args(["expense", "add", "New", "100", "misc", "--date", "2024-01-02"])
        .assert()
        .success();

    spaarpot(home.path())
        .args(["summary", "--this-month", "--budget", "1000", "--as-of", "2024-01-21"])
        .assert()
        .success()
        .stdout(predicate::str::contains("900.00").and(predicate::str::contains("90.00")));
}

#[test]
fn test_negative_amount_is_accepted_as_refund() {
    let home = tempfile::tempdir().unwrap();
    spaarpot(home.path())
        .args(["expense", "add", "Groceries", "50", "food", "--date", "2024-01-10"])
        .assert()
        .success();
    spaarpot(home.path())
        .args(["expense", "add", "Refund", "-5", "food", "--date", "2024-01-11"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added Refund -5.00"));

    spaarpot(home.path())
        .args(["summary", "--budget", "100", "--as-of", "2024-01-21"])
        .assert()
        .success()
        .stdout(predicate::str::contains("45.00").and(predicate::str::contains("55.00")));
}

#[test]
fn test_summary_overflow_is_an_error_not_a_panic() {
    let home = tempfile::tempdir().unwrap();
    for _ in 0..2 {
        spaarpot(home.path())
            .args(["expense", "add", "Yacht", "79228162514264337593543950335", "toys"])
            .assert()
            .success();
    }

    spaarpot(home.path())
        .args(["summary"])
        .assert()
        .failure()
        .stderr(
            predicate::str::contains("overflowed")
                .and(predicate::str::contains("panicked").not()),
        );
}

#[test]
fn test_skipped_log_line_is_warned_with_its_number() {
    let home = tempfile::tempdir().unwrap();
    fs::write(
        home.path().join("expenses.csv"),
        "Lunch,12.50,food,2024-01-15\nFish, chips,9.00,food,2024-01-15\n",
    )
    .unwrap();

    spaarpot(home.path())
        .args(["expense", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Lunch").and(predicate::str::contains("Fish").not()))
        .stderr(predicate::str::contains("WARN").and(predicate::str::contains("line=2")));
}

#[test]
fn test_expense_with_comma_is_refused() {
    let home = tempfile::tempdir().unwrap();
    spaarpot(home.path())
        .args(["expense", "add", "Fish, chips", "9.00", "food"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("comma"));
}

#[test]
fn test_bank_import_and_show() {
    let home = tempfile::tempdir().unwrap();
    let file = home.path().join("jan.csv");
    fs::write(&file, EXPORT).unwrap();

    spaarpot(home.path())
        .args(["bank", "import"])
        .arg(&file)
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Imported 2 transactions")
                .and(predicate::str::contains("-12.50"))
                .and(predicate::str::contains("2500.00")),
        );

    spaarpot(home.path())
        .args(["bank", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("jan.csv").and(predicate::str::contains("Supermarket")));
}

#[test]
fn test_failed_import_keeps_previous_upload() {
    let home = tempfile::tempdir().unwrap();
    let good = home.path().join("jan.csv");
    fs::write(&good, EXPORT).unwrap();
    spaarpot(home.path()).args(["bank", "import"]).arg(&good).assert().success();

    let bad = home.path().join("bad.csv");
    fs::write(&bad, EXPORT.replace("20240116", "2024-01-16")).unwrap();
    spaarpot(home.path())
        .args(["bank", "import"])
        .arg(&bad)
        .assert()
        .failure()
        .stderr(predicate::str::contains("row 2").and(predicate::str::contains("Datum")));

    spaarpot(home.path())
        .args(["bank", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("jan.csv"));
}

#[test]
fn test_non_csv_upload_is_rejected() {
    let home = tempfile::tempdir().unwrap();
    let file = home.path().join("jan.txt");
    fs::write(&file, EXPORT).unwrap();

    spaarpot(home.path())
        .args(["bank", "import"])
        .arg(&file)
        .assert()
        .failure()
        .stderr(predicate::str::contains("only .csv files"));
}

#[test]
fn test_bank_show_without_upload() {
    let home = tempfile::tempdir().unwrap();
    spaarpot(home.path())
        .args(["bank", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No bank transactions uploaded yet."));
}
