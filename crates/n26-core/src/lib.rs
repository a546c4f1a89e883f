//! Ledger records produced by the N26 importer.
//!
//! This crate holds the output side of an import:
//!
//! - [`Amount`] - A decimal number with a currency
//! - [`Posting`] - One leg of a transaction, with or without units
//! - [`Transaction`] - A dated entry with payee, narration and postings
//! - [`format_transaction`] - Beancount text rendering
//!
//! # Example
//!
//! ```
//! use n26_core::{Amount, Posting, Transaction};
//! use rust_decimal_macros::dec;
//! use chrono::NaiveDate;
//!
//! let date = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
//! let txn = Transaction::new(date, "Groceries")
//!     .with_payee("REWE")
//!     .with_posting(Posting::new("Assets:N26", Amount::new(dec!(-23.10), "EUR")))
//!     .with_posting(Posting::auto("Expenses:Food"));
//!
//! assert_eq!(txn.postings.len(), 2);
//! assert!(txn.postings[1].units.is_none());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod amount;
pub mod directive;
pub mod format;

pub use amount::Amount;
pub use directive::{MetaValue, Metadata, Posting, Transaction};
pub use format::{format_transaction, FormatConfig};

// Re-export commonly used external types
pub use chrono::NaiveDate;
pub use rust_decimal::Decimal;
