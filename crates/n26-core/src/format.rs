//! Beancount text formatter for imported transactions.
//!
//! Amounts are right-aligned so that their numbers end at a configurable
//! column, the same layout `bean-format` produces.

use crate::{Posting, Transaction};
use std::fmt::Write;

/// Formatter configuration.
#[derive(Debug, Clone)]
pub struct FormatConfig {
    /// Column to align amounts to (default: 60).
    pub amount_column: usize,
    /// Indentation for postings and metadata.
    pub indent: String,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            amount_column: 60,
            indent: "  ".to_string(),
        }
    }
}

impl FormatConfig {
    /// Create a new config with the specified amount column.
    #[must_use]
    pub fn with_column(column: usize) -> Self {
        Self {
            amount_column: column,
            ..Default::default()
        }
    }
}

/// Format a transaction, metadata and postings included.
pub fn format_transaction(txn: &Transaction, config: &FormatConfig) -> String {
    let mut out = String::new();

    write!(out, "{} {}", txn.date, txn.flag).unwrap();

    if let Some(payee) = &txn.payee {
        write!(out, " \"{}\"", escape_string(payee)).unwrap();
    }
    write!(out, " \"{}\"", escape_string(&txn.narration)).unwrap();

    for tag in &txn.tags {
        write!(out, " #{tag}").unwrap();
    }
    for link in &txn.links {
        write!(out, " ^{link}").unwrap();
    }

    out.push('\n');

    for (key, value) in &txn.meta {
        writeln!(out, "{}{}: {}", config.indent, key, value).unwrap();
    }

    for posting in &txn.postings {
        out.push_str(&format_posting(posting, config));
        out.push('\n');
    }

    out
}

/// Format a posting with amount alignment.
fn format_posting(posting: &Posting, config: &FormatConfig) -> String {
    let mut line = String::new();
    line.push_str(&config.indent);
    line.push_str(&posting.account);

    if let Some(units) = &posting.units {
        let amount_str = units.to_string();

        // Pad so the amount ends at the configured column
        let current_len = line.chars().count();
        let target_col = config
            .amount_column
            .saturating_sub(amount_str.chars().count());
        if current_len < target_col {
            line.push_str(&" ".repeat(target_col - current_len));
        } else {
            line.push_str("  "); // Minimum 2 spaces
        }

        line.push_str(&amount_str);
    }

    line
}

/// Escape a string for output (handle quotes and backslashes).
pub(crate) fn escape_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            _ => out.push(c),
        }
    }
    out
}
