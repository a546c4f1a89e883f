//! Importer for N26 CSV exports.
//!
//! This crate recognizes the CSV export of N26 bank accounts in English,
//! German and French, and turns each row into a beancount transaction with
//! a EUR posting on the configured account. Payee patterns can assign a
//! counter-account to each transaction.
//!
//! # Overview
//!
//! The import flow follows beancount's importer protocol: a host calls
//! [`Importer::identify`] to check that a file is an N26 export, then
//! [`Importer::extract`] to read its transactions, and optionally
//! [`Importer::file_date`] / [`Importer::file_account`] to file the
//! document away.
//!
//! # Example
//!
//! ```rust,no_run
//! use n26_core::{format_transaction, FormatConfig};
//! use n26_importer::{Importer, Language, N26Config, N26Importer};
//! use std::path::Path;
//!
//! let config = N26Config::builder()
//!     .iban("DE89 3704 0044 0532 0130 00")
//!     .account("Assets:N26:Checking")
//!     .language(Language::De)
//!     .account_patterns("Expenses:Food", ["^REWE", "^EDEKA"])
//!     .build();
//!
//! let importer = N26Importer::new(config)?;
//! let path = Path::new("n26-umsaetze.csv");
//! if importer.identify(path) {
//!     for txn in importer.extract(path, &[])? {
//!         print!("{}", format_transaction(&txn, &FormatConfig::default()));
//!     }
//! }
//! # Ok::<(), n26_importer::ImportError>(())
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod classifier;
pub mod config;
pub mod error;
pub mod header;
pub mod importer;
pub mod row;
pub mod schema;

use chrono::NaiveDate;
use n26_core::Transaction;
use std::path::Path;

pub use classifier::{PayeeClassifier, PayeeRule};
pub use config::{AccountPatterns, N26Config, N26ConfigBuilder};
pub use error::{ImportError, Result};
pub use header::is_valid_header;
pub use importer::N26Importer;
pub use row::{ParsedRow, RowMapper};
pub use schema::{labels_for, translate, translate_key, Field, Language};

/// Trait for file importers.
///
/// Implementors recognize one kind of statement file and turn it into
/// transactions.
pub trait Importer: Send + Sync {
    /// Returns the name of this importer.
    fn name(&self) -> &str;

    /// Check if this importer can handle the given file.
    ///
    /// Unreadable files are reported as not identified rather than as errors.
    fn identify(&self, path: &Path) -> bool;

    /// The account a statement file should be filed under.
    fn file_account(&self, path: &Path) -> &str;

    /// The date that represents the file, or `None` if it is not identified.
    fn file_date(&self, path: &Path) -> Result<Option<NaiveDate>>;

    /// Extract transactions from the given file, in file order.
    ///
    /// `existing` holds previously imported transactions; it is accepted so
    /// that hosts can pass their ledger, but is not consulted.
    fn extract(&self, path: &Path, existing: &[Transaction]) -> Result<Vec<Transaction>>;
}
