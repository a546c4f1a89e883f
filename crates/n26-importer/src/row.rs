//! Mapping of export rows to transactions.

use crate::classifier::PayeeClassifier;
use crate::error::{ImportError, Result};
use crate::schema::{translate, Field, Language};
use chrono::NaiveDate;
use csv::StringRecord;
use n26_core::{Amount, Posting, Transaction};
use rust_decimal::Decimal;
use std::str::FromStr;

/// Date format of the export.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Currency of the primary posting.
pub const CURRENCY: &str = "EUR";

/// Flag set on extracted transactions.
pub const FLAG: char = '*';

/// One data row, addressable by column label.
#[derive(Debug, Clone, Copy)]
pub struct ParsedRow<'r> {
    headers: &'r StringRecord,
    record: &'r StringRecord,
    index: usize,
}

impl<'r> ParsedRow<'r> {
    /// Pair a record with the file's header; `index` is the zero-based
    /// position of the record among the data rows.
    pub const fn new(headers: &'r StringRecord, record: &'r StringRecord, index: usize) -> Self {
        Self {
            headers,
            record,
            index,
        }
    }

    /// Zero-based position among the data rows.
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Value of the column labelled `label`.
    pub fn get(&self, label: &str) -> Option<&'r str> {
        let position = self.headers.iter().position(|header| header == label)?;
        self.record.get(position)
    }

    fn require(&self, label: &str) -> Result<&'r str> {
        self.get(label).ok_or_else(|| ImportError::MissingColumn {
            row: self.index,
            label: label.to_string(),
        })
    }
}

/// Turns rows of one export into transactions.
#[derive(Debug, Clone, Copy)]
pub struct RowMapper<'a> {
    language: Language,
    account: &'a str,
    classifier: &'a PayeeClassifier,
}

impl<'a> RowMapper<'a> {
    /// Create a mapper posting to `account`.
    pub const fn new(language: Language, account: &'a str, classifier: &'a PayeeClassifier) -> Self {
        Self {
            language,
            account,
            classifier,
        }
    }

    /// Read `field` from `row`.
    pub fn field<'r>(&self, row: &ParsedRow<'r>, field: Field) -> Result<&'r str> {
        row.require(translate(self.language, field))
    }

    /// Parse the booking date of `row`.
    pub fn date(&self, row: &ParsedRow<'_>) -> Result<NaiveDate> {
        let value = self.field(row, Field::Date)?;
        parse_date(value, row.index())
    }

    /// Map `row` to a transaction.
    ///
    /// The first posting books the EUR amount on the own account. A second
    /// posting without units is added when the payee resolves to a
    /// counter-account. `filename` and the row index become the
    /// transaction's `filename` and `lineno` metadata.
    pub fn map_row(&self, row: &ParsedRow<'_>, filename: &str) -> Result<Transaction> {
        let date = self.date(row)?;
        let payee = self.field(row, Field::Payee)?;
        let memo = self.field(row, Field::PaymentReference)?;
        let number = parse_amount(self.field(row, Field::AmountEur)?, row.index())?;

        let mut txn = Transaction::new(date, memo)
            .with_flag(FLAG)
            .with_payee(payee)
            .with_meta("filename", filename)
            .with_meta("lineno", row.index())
            .with_posting(Posting::new(self.account, Amount::new(number, CURRENCY)));

        if let Some(counter) = self.classifier.classify(payee) {
            txn = txn.with_posting(Posting::auto(counter));
        }

        tracing::trace!(row = row.index(), %date, payee, postings = txn.postings.len(), "mapped row");
        Ok(txn)
    }
}

/// Parse a `YYYY-MM-DD` date.
///
/// Only four-digit years and two-digit months and days are accepted; no
/// sign, padding or surrounding whitespace.
pub fn parse_date(value: &str, row: usize) -> Result<NaiveDate> {
    let invalid = |source| ImportError::InvalidDate {
        row,
        value: value.to_string(),
        source,
    };

    let bytes = value.as_bytes();
    let well_formed = bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        });
    if !well_formed {
        return Err(invalid(None));
    }

    NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|e| invalid(Some(e)))
}

/// Parse an exact decimal amount with `.` as decimal separator.
///
/// Values with more fractional digits than a [`Decimal`] can hold are
/// rejected rather than rounded.
pub fn parse_amount(value: &str, row: usize) -> Result<Decimal> {
    let invalid = |source| ImportError::InvalidAmount {
        row,
        value: value.to_string(),
        source,
    };

    let text = value.trim();
    let number = Decimal::from_str(text).map_err(|e| invalid(Some(e)))?;

    let fraction_digits = text
        .split_once('.')
        .map_or(0, |(_, fraction)| fraction.chars().filter(char::is_ascii_digit).count());
    if number.scale() as usize != fraction_digits {
        return Err(invalid(None));
    }

    Ok(number)
}
