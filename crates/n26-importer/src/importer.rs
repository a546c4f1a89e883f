//! The N26 importer.
//!
//! Every operation opens the file afresh and reads it from the start, so
//! nothing is cached between calls. The file handle is dropped on every
//! return path, errors included.

use crate::classifier::PayeeClassifier;
use crate::config::N26Config;
use crate::error::{ImportError, Result};
use crate::header::is_valid_header;
use crate::row::{ParsedRow, RowMapper};
use crate::schema::Language;
use crate::Importer;
use chrono::NaiveDate;
use csv::StringRecord;
use encoding_rs::Encoding;
use encoding_rs_io::{DecodeReaderBytes, DecodeReaderBytesBuilder};
use n26_core::Transaction;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Importer for CSV exports of N26 bank accounts.
#[derive(Debug, Clone)]
pub struct N26Importer {
    iban: String,
    account: String,
    language: Language,
    encoding: &'static Encoding,
    classifier: PayeeClassifier,
}

impl N26Importer {
    /// Validate `config` and build an importer.
    ///
    /// Fails on an unknown encoding label, a duplicated payee pattern or a
    /// pattern that does not compile.
    pub fn new(config: N26Config) -> Result<Self> {
        let encoding = Encoding::for_label(config.file_encoding.as_bytes())
            .ok_or_else(|| ImportError::UnknownEncoding(config.file_encoding.clone()))?;
        let classifier = PayeeClassifier::from_patterns(&config.account_patterns)?;

        tracing::debug!(
            language = %config.language,
            encoding = encoding.name(),
            rules = classifier.len(),
            "configured N26 importer"
        );

        Ok(Self {
            iban: config.iban,
            account: config.account,
            language: config.language,
            encoding,
            classifier,
        })
    }

    /// IBAN of the exported account.
    #[must_use]
    pub fn iban(&self) -> &str {
        &self.iban
    }

    /// Account receiving the primary postings.
    #[must_use]
    pub fn account(&self) -> &str {
        &self.account
    }

    /// Language of the expected header.
    #[must_use]
    pub const fn language(&self) -> Language {
        self.language
    }

    /// The payee rules in use.
    #[must_use]
    pub const fn classifier(&self) -> &PayeeClassifier {
        &self.classifier
    }

    fn mapper(&self) -> RowMapper<'_> {
        RowMapper::new(self.language, &self.account, &self.classifier)
    }

    fn open(&self, path: &Path) -> Result<DecodeReaderBytes<File, Vec<u8>>> {
        let file = File::open(path).map_err(|source| ImportError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        // A byte-order mark wins over the configured encoding and is dropped.
        Ok(DecodeReaderBytesBuilder::new()
            .encoding(Some(self.encoding))
            .bom_override(true)
            .strip_bom(true)
            .build(file))
    }

    fn read_header_line(&self, path: &Path) -> Result<String> {
        let mut reader = BufReader::new(self.open(path)?);
        let mut line = String::new();
        reader
            .read_line(&mut line)
            .map_err(|source| ImportError::Io {
                path: path.to_path_buf(),
                source,
            })?;
        Ok(line)
    }

    /// Call `f` for every data row of `path`, in file order.
    fn for_each_row<F>(&self, path: &Path, mut f: F) -> Result<()>
    where
        F: FnMut(&ParsedRow<'_>) -> Result<()>,
    {
        let csv_error = |source: csv::Error| ImportError::Csv {
            path: path.to_path_buf(),
            source,
        };

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .delimiter(b',')
            .quote(b'"')
            .from_reader(self.open(path)?);

        let headers = reader.headers().map_err(csv_error)?.clone();
        let mut record = StringRecord::new();
        let mut index = 0;

        while reader.read_record(&mut record).map_err(csv_error)? {
            f(&ParsedRow::new(&headers, &record, index))?;
            index += 1;
        }

        Ok(())
    }
}

impl Importer for N26Importer {
    fn name(&self) -> &str {
        "N26"
    }

    fn identify(&self, path: &Path) -> bool {
        match self.read_header_line(path) {
            Ok(line) => {
                let identified = is_valid_header(self.language, line.trim());
                if !identified {
                    tracing::debug!(path = %path.display(), "header does not match the N26 export");
                }
                identified
            }
            Err(e) => {
                tracing::debug!(path = %path.display(), error = %e, "cannot read header");
                false
            }
        }
    }

    fn file_account(&self, _path: &Path) -> &str {
        &self.account
    }

    fn file_date(&self, path: &Path) -> Result<Option<NaiveDate>> {
        if !self.identify(path) {
            return Ok(None);
        }

        let mapper = self.mapper();
        let mut latest = None;
        self.for_each_row(path, |row| {
            let date = mapper.date(row)?;
            latest = latest.max(Some(date));
            Ok(())
        })?;

        Ok(latest)
    }

    fn extract(&self, path: &Path, _existing: &[Transaction]) -> Result<Vec<Transaction>> {
        if !self.identify(path) {
            return Ok(Vec::new());
        }

        let mapper = self.mapper();
        let filename = path.to_string_lossy();
        let mut transactions = Vec::new();
        self.for_each_row(path, |row| {
            transactions.push(mapper.map_row(row, &filename)?);
            Ok(())
        })?;

        tracing::info!(
            path = %path.display(),
            count = transactions.len(),
            "extracted transactions"
        );
        Ok(transactions)
    }
}
