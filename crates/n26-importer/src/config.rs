//! Importer configuration.
//!
//! A configuration is usually read from JSON:
//!
//! ```json
//! {
//!   "iban": "DE89 3704 0044 0532 0130 00",
//!   "account": "Assets:N26:Checking",
//!   "language": "de",
//!   "file_encoding": "utf-8",
//!   "account_patterns": [
//!     { "account": "Expenses:Food", "patterns": ["^REWE", "^EDEKA"] },
//!     { "account": "Expenses:Transport", "patterns": ["^BVG"] }
//!   ]
//! }
//! ```
//!
//! `account_patterns` is a list so that rule order is explicit.

use crate::error::{ImportError, Result};
use crate::schema::Language;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Payee patterns that route transactions to one account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountPatterns {
    /// The counter-account.
    pub account: String,
    /// Regular expressions matched against the start of the payee.
    #[serde(default)]
    pub patterns: Vec<String>,
}

/// Configuration of an N26 importer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct N26Config {
    /// IBAN of the exported account, kept as identifying metadata.
    pub iban: String,
    /// Account that receives the primary posting of every transaction.
    pub account: String,
    /// Language of the export's header line.
    #[serde(default)]
    pub language: Language,
    /// Text encoding label of the export (WHATWG label, e.g. `utf-8`).
    #[serde(default = "default_file_encoding")]
    pub file_encoding: String,
    /// Payee rules, in declaration order.
    #[serde(default)]
    pub account_patterns: Vec<AccountPatterns>,
}

fn default_file_encoding() -> String {
    "utf-8".to_string()
}

impl N26Config {
    /// Start building a configuration.
    pub fn builder() -> N26ConfigBuilder {
        N26ConfigBuilder::new()
    }

    /// Parse a configuration from JSON text.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read a JSON configuration file.
    pub fn load(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path).map_err(|source| ImportError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }
}

/// Builder for [`N26Config`].
#[derive(Debug, Clone)]
pub struct N26ConfigBuilder {
    config: N26Config,
}

impl N26ConfigBuilder {
    /// Create a new builder with default language and encoding.
    pub fn new() -> Self {
        Self {
            config: N26Config {
                iban: String::new(),
                account: String::new(),
                language: Language::default(),
                file_encoding: default_file_encoding(),
                account_patterns: Vec::new(),
            },
        }
    }

    /// Set the IBAN.
    pub fn iban(mut self, iban: impl Into<String>) -> Self {
        self.config.iban = iban.into();
        self
    }

    /// Set the own account.
    pub fn account(mut self, account: impl Into<String>) -> Self {
        self.config.account = account.into();
        self
    }

    /// Set the export language.
    pub const fn language(mut self, language: Language) -> Self {
        self.config.language = language;
        self
    }

    /// Set the file encoding label.
    pub fn file_encoding(mut self, label: impl Into<String>) -> Self {
        self.config.file_encoding = label.into();
        self
    }

    /// Append payee patterns for `account` after all previously added ones.
    pub fn account_patterns<I, P>(mut self, account: impl Into<String>, patterns: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<String>,
    {
        self.config.account_patterns.push(AccountPatterns {
            account: account.into(),
            patterns: patterns.into_iter().map(Into::into).collect(),
        });
        self
    }

    /// Build the configuration.
    pub fn build(self) -> N26Config {
        self.config
    }
}

impl Default for N26ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
