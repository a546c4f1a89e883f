//! End-to-end tests reading N26 exports from disk.
//!
//! Run with: cargo test -p n26-importer --test `extract_tests`

use chrono::NaiveDate;
use n26_core::{Amount, MetaValue, Posting, Transaction};
use n26_importer::{ImportError, Importer, Language, N26Config, N26Importer};
use rust_decimal_macros::dec;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const EN_HEADER: &str = "\"Date\",\"Payee\",\"Account number\",\"Transaction type\",\
\"Payment reference\",\"Category\",\"Amount (EUR)\",\"Amount (Foreign Currency)\",\
\"Type Foreign Currency\",\"Exchange Rate\"";

const EN_HEADER_NO_CATEGORY: &str = "\"Date\",\"Payee\",\"Account number\",\
\"Transaction type\",\"Payment reference\",\"Amount (EUR)\",\"Amount (Foreign Currency)\",\
\"Type Foreign Currency\",\"Exchange Rate\"";

const EN_ROWS: &str = "\
\"2021-03-05\",\"Acme Corp\",\"\",\"MasterCard Payment\",\"\",\"Shopping\",\"-12.34\",\"-12.34\",\"EUR\",\"1.0\"
\"2021-03-09\",\"Employer GmbH\",\"DE89370400440532013000\",\"Income\",\"Salary March\",\"Income\",\"2500.00\",\"\",\"\",\"\"
\"2021-03-07\",\"Corner Bakery\",\"\",\"MasterCard Payment\",\"\",\"Food & Groceries\",\"-3.20\",\"-3.20\",\"EUR\",\"1.0\"
";

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

fn write_file(dir: &TempDir, name: &str, content: impl AsRef<[u8]>) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

fn en_export(dir: &TempDir) -> PathBuf {
    write_file(dir, "n26-en.csv", format!("{EN_HEADER}\n{EN_ROWS}"))
}

fn importer() -> N26Importer {
    N26Importer::new(
        N26Config::builder()
            .iban("DE89370400440532013000")
            .account("Assets:N26")
            .account_patterns("Expenses:Shop", ["^Acme"])
            .account_patterns("Income:Salary", ["^Employer"])
            .build(),
    )
    .unwrap()
}

fn filename(path: &Path) -> MetaValue {
    MetaValue::String(path.to_string_lossy().into_owned())
}

#[test]
fn test_extract_preserves_file_order() {
    let dir = TempDir::new().unwrap();
    let path = en_export(&dir);
    let importer = importer();

    assert!(importer.identify(&path));
    let txns = importer.extract(&path, &[]).unwrap();

    assert_eq!(txns.len(), 3);
    let dates: Vec<_> = txns.iter().map(|t| t.date).collect();
    assert_eq!(dates, vec![date(2021, 3, 5), date(2021, 3, 9), date(2021, 3, 7)]);

    let linenos: Vec<_> = txns.iter().map(|t| t.meta["lineno"].clone()).collect();
    assert_eq!(
        linenos,
        vec![
            MetaValue::Number(dec!(0)),
            MetaValue::Number(dec!(1)),
            MetaValue::Number(dec!(2)),
        ]
    );
    assert!(txns.iter().all(|t| t.meta["filename"] == filename(&path)));
}

#[test]
fn test_extract_builds_postings() {
    let dir = TempDir::new().unwrap();
    let path = en_export(&dir);
    let txns = importer().extract(&path, &[]).unwrap();

    let acme = &txns[0];
    assert_eq!(acme.flag, '*');
    assert_eq!(acme.payee.as_deref(), Some("Acme Corp"));
    assert_eq!(acme.narration, "");
    assert_eq!(
        acme.postings,
        vec![
            Posting::new("Assets:N26", Amount::new(dec!(-12.34), "EUR")),
            Posting::auto("Expenses:Shop"),
        ]
    );

    let salary = &txns[1];
    assert_eq!(salary.narration, "Salary March");
    assert_eq!(salary.postings[0].units.as_ref().unwrap().number, dec!(2500.00));
    assert_eq!(salary.postings[1].account, "Income:Salary");

    let bakery = &txns[2];
    assert_eq!(bakery.postings.len(), 1);
    assert_eq!(bakery.postings[0].account, "Assets:N26");
}

#[test]
fn test_file_date_is_latest_row_date() {
    let dir = TempDir::new().unwrap();
    let path = en_export(&dir);
    assert_eq!(importer().file_date(&path).unwrap(), Some(date(2021, 3, 9)));
}

#[test]
fn test_header_without_category_column() {
    let dir = TempDir::new().unwrap();
    let path = write_file(
        &dir,
        "old.csv",
        format!(
            "{EN_HEADER_NO_CATEGORY}\n\
             \"2019-11-02\",\"Acme Corp\",\"\",\"MasterCard Payment\",\"\",\"-9.99\",\"\",\"\",\"\"\n"
        ),
    );
    let importer = importer();

    assert!(importer.identify(&path));
    let txns = importer.extract(&path, &[]).unwrap();
    assert_eq!(txns.len(), 1);
    assert_eq!(txns[0].postings[0].units.as_ref().unwrap().number, dec!(-9.99));
    assert_eq!(importer.file_date(&path).unwrap(), Some(date(2019, 11, 2)));
}

#[test]
fn test_foreign_file_is_not_identified() {
    let dir = TempDir::new().unwrap();
    let path = write_file(
        &dir,
        "other-bank.csv",
        "Date,Description,Amount\n2024-01-15,Coffee,-5.00\n",
    );
    let importer = importer();

    assert!(!importer.identify(&path));
    assert!(importer.extract(&path, &[]).unwrap().is_empty());
    assert_eq!(importer.file_date(&path).unwrap(), None);
}

#[test]
fn test_other_language_is_not_identified() {
    let dir = TempDir::new().unwrap();
    let path = en_export(&dir);
    let german = N26Importer::new(
        N26Config::builder()
            .account("Assets:N26")
            .language(Language::De)
            .build(),
    )
    .unwrap();

    assert!(!german.identify(&path));
    assert!(german.extract(&path, &[]).unwrap().is_empty());
}

#[test]
fn test_comma_decimal_fails_extraction() {
    let dir = TempDir::new().unwrap();
    let path = write_file(
        &dir,
        "bad-amount.csv",
        format!(
            "{EN_HEADER}\n\
             \"2021-03-05\",\"Acme Corp\",\"\",\"MasterCard Payment\",\"\",\"Shopping\",\"12,34\",\"\",\"\",\"\"\n"
        ),
    );
    let importer = importer();

    assert!(importer.identify(&path));
    let err = importer.extract(&path, &[]).unwrap_err();
    assert!(matches!(
        err,
        ImportError::InvalidAmount { row: 0, ref value, .. } if value == "12,34"
    ));
}

#[test]
fn test_malformed_date_fails_file_date_and_extract() {
    let dir = TempDir::new().unwrap();
    let path = write_file(
        &dir,
        "bad-date.csv",
        format!(
            "{EN_HEADER}\n{EN_ROWS}\
             \"05.03.2021\",\"Acme Corp\",\"\",\"MasterCard Payment\",\"\",\"Shopping\",\"1.00\",\"\",\"\",\"\"\n"
        ),
    );
    let importer = importer();

    assert!(matches!(
        importer.file_date(&path),
        Err(ImportError::InvalidDate { row: 3, .. })
    ));
    assert!(matches!(
        importer.extract(&path, &[]),
        Err(ImportError::InvalidDate { row: 3, .. })
    ));
}

#[test]
fn test_header_only_file() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "empty.csv", format!("{EN_HEADER}\n"));
    let importer = importer();

    assert!(importer.identify(&path));
    assert!(importer.extract(&path, &[]).unwrap().is_empty());
    assert_eq!(importer.file_date(&path).unwrap(), None);
}

#[test]
fn test_crlf_and_bom() {
    let dir = TempDir::new().unwrap();
    let content = format!("\u{feff}{EN_HEADER}\r\n{}", EN_ROWS.replace('\n', "\r\n"));
    let path = write_file(&dir, "windows.csv", content);
    let importer = importer();

    assert!(importer.identify(&path));
    assert_eq!(importer.extract(&path, &[]).unwrap().len(), 3);
}

#[test]
fn test_latin1_export() {
    let dir = TempDir::new().unwrap();
    let text = "\"Datum\",\"Empfänger\",\"Kontonummer\",\"Transaktionstyp\",\"Verwendungszweck\",\
\"Kategorie\",\"Betrag (EUR)\",\"Betrag (Fremdwährung)\",\"Fremdwährung\",\"Wechselkurs\"\n\
\"2020-12-24\",\"Bäckerei Müller\",\"\",\"MasterCard Zahlung\",\"Stollen\",\"Lebensmittel\",\"-15.80\",\"\",\"\",\"\"\n";
    let (bytes, _, unmappable) = encoding_rs::WINDOWS_1252.encode(text);
    assert!(!unmappable);
    let path = write_file(&dir, "umsaetze.csv", bytes);

    let config = N26Config::builder()
        .account("Aktiva:N26")
        .language(Language::De)
        .account_patterns("Ausgaben:Lebensmittel", ["^bäckerei"]);

    let utf8 = N26Importer::new(config.clone().build()).unwrap();
    assert!(!utf8.identify(&path));

    let latin1 = N26Importer::new(config.file_encoding("latin1").build()).unwrap();
    assert!(latin1.identify(&path));
    let txns = latin1.extract(&path, &[]).unwrap();
    assert_eq!(txns.len(), 1);
    assert_eq!(txns[0].payee.as_deref(), Some("Bäckerei Müller"));
    assert_eq!(txns[0].narration, "Stollen");
    assert_eq!(txns[0].postings[1].account, "Ausgaben:Lebensmittel");
}

#[test]
fn test_existing_entries_are_ignored() {
    let dir = TempDir::new().unwrap();
    let path = en_export(&dir);
    let importer = importer();

    let first = importer.extract(&path, &[]).unwrap();
    let existing: Vec<Transaction> = first.clone();
    let second = importer.extract(&path, &existing).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_missing_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("missing.csv");
    let importer = importer();

    assert!(!importer.identify(&path));
    assert_eq!(importer.file_date(&path).unwrap(), None);
    assert!(importer.extract(&path, &[]).unwrap().is_empty());
}

#[test]
fn test_json_configured_importer() {
    let dir = TempDir::new().unwrap();
    let config_path = write_file(
        &dir,
        "n26.json",
        r#"{
            "iban": "DE89370400440532013000",
            "account": "Assets:N26",
            "account_patterns": [
                {"account": "Expenses:Food", "patterns": ["^corner"]}
            ]
        }"#,
    );
    let importer = N26Importer::new(N26Config::load(&config_path).unwrap()).unwrap();
    let path = en_export(&dir);

    let txns = importer.extract(&path, &[]).unwrap();
    assert_eq!(txns[2].postings[1].account, "Expenses:Food");
    assert_eq!(txns[0].postings.len(), 1);
}
