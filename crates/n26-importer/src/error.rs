//! Error type for configuring and running the importer.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by the importer.
///
/// Files that simply are not N26 exports never produce an error; they are
/// reported as "not identified" instead.
#[derive(Debug, Error)]
pub enum ImportError {
    /// The configured language has no header schema.
    #[error("language {0} is not supported (yet)")]
    UnsupportedLanguage(String),

    /// The configured file encoding label is unknown.
    #[error("unknown file encoding: {0}")]
    UnknownEncoding(String),

    /// The same payee pattern is configured more than once.
    #[error("{pattern} defined in multiple accounts ({first} and {second})")]
    DuplicatePattern {
        /// The repeated pattern string.
        pattern: String,
        /// Account that declared the pattern first.
        first: String,
        /// Account that declared it again.
        second: String,
    },

    /// A payee pattern is not a valid regular expression.
    #[error("invalid payee pattern {pattern:?} for {account}: {source}")]
    InvalidPattern {
        /// The offending pattern string.
        pattern: String,
        /// Account the pattern was declared for.
        account: String,
        /// The underlying regex error.
        #[source]
        source: regex::Error,
    },

    /// A field key has no column label in the given language.
    #[error("unknown field {key:?} for language {language}")]
    UnknownField {
        /// Language code that was consulted.
        language: String,
        /// The field key that was looked up.
        key: String,
    },

    /// The configuration document could not be read.
    #[error("invalid importer configuration: {0}")]
    Config(#[from] serde_json::Error),

    /// IO error reading a file.
    #[error("failed to read file {path}: {source}")]
    Io {
        /// The path that failed to read.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// The CSV layer could not split a record.
    #[error("malformed CSV in {path}: {source}")]
    Csv {
        /// The file being read.
        path: PathBuf,
        /// The underlying CSV error.
        #[source]
        source: csv::Error,
    },

    /// A data row lacks a column named in the header schema.
    #[error("row {row}: missing column {label:?}")]
    MissingColumn {
        /// Zero-based data row index.
        row: usize,
        /// The column label that was looked up.
        label: String,
    },

    /// A date cell is not in `YYYY-MM-DD` form.
    #[error("row {row}: invalid date {value:?}, expected YYYY-MM-DD")]
    InvalidDate {
        /// Zero-based data row index.
        row: usize,
        /// The raw cell text.
        value: String,
        /// The calendar error, when the text had the right shape.
        #[source]
        source: Option<chrono::ParseError>,
    },

    /// An amount cell is not a plain decimal number, or has more digits
    /// than can be held exactly.
    #[error("row {row}: invalid amount {value:?}")]
    InvalidAmount {
        /// Zero-based data row index.
        row: usize,
        /// The raw cell text.
        value: String,
        /// The decimal parse error, absent when the value would be rounded.
        #[source]
        source: Option<rust_decimal::Error>,
    },
}

impl ImportError {
    /// Whether this error stems from the importer configuration rather than
    /// from a file being read.
    #[must_use]
    pub const fn is_config(&self) -> bool {
        matches!(
            self,
            Self::UnsupportedLanguage(_)
                | Self::UnknownEncoding(_)
                | Self::DuplicatePattern { .. }
                | Self::InvalidPattern { .. }
                | Self::UnknownField { .. }
                | Self::Config(_)
        )
    }
}

/// Result alias used throughout the importer.
pub type Result<T> = std::result::Result<T, ImportError>;
