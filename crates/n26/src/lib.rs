//! Command-line tools for N26 CSV exports.
//!
//! - `n26-extract`: print the transactions of N26 exports in beancount syntax
//! - `n26-identify`: report whether files are N26 exports, with filing
//!   account and date
//!
//! # Example Usage
//!
//! ```bash
//! n26-extract --config n26.json export.csv >> ledger.beancount
//! n26-identify --account Assets:N26 --language de ~/Downloads/*.csv
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod cmd;
