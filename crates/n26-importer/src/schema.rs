//! Header schemas of the N26 CSV export.
//!
//! N26 localizes the column labels of its export. Each supported language
//! has one ordered schema; the column order is the order of the header line.
//! The category column was added later and older exports omit it, so it is
//! marked optional.

use crate::error::{ImportError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Export languages with a known header schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Language {
    /// English
    #[default]
    En,
    /// German
    De,
    /// French
    Fr,
}

impl Language {
    /// All supported languages.
    pub const ALL: [Self; 3] = [Self::En, Self::De, Self::Fr];

    /// The language code used in configuration (`en`, `de`, `fr`).
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::De => "de",
            Self::Fr => "fr",
        }
    }

    /// The ordered header schema of this language.
    #[must_use]
    pub const fn schema(self) -> &'static [Column] {
        match self {
            Self::En => &EN,
            Self::De => &DE,
            Self::Fr => &FR,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = ImportError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|language| language.code() == s)
            .ok_or_else(|| ImportError::UnsupportedLanguage(s.to_string()))
    }
}

impl TryFrom<String> for Language {
    type Error = ImportError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<Language> for String {
    fn from(language: Language) -> Self {
        language.code().to_string()
    }
}

/// Semantic fields of an export row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    /// Booking date
    Date,
    /// Counterparty name
    Payee,
    /// Counterparty account number
    AccountNumber,
    /// Kind of transfer (card payment, direct debit, ...)
    TransactionType,
    /// Free text reference, used as narration
    PaymentReference,
    /// N26 spending category (optional column)
    Category,
    /// Amount in EUR
    AmountEur,
    /// Amount in the original currency
    AmountForeignCurrency,
    /// Original currency code
    TypeForeignCurrency,
    /// Exchange rate applied
    ExchangeRate,
}

impl Field {
    /// The configuration key of this field.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Date => "date",
            Self::Payee => "payee",
            Self::AccountNumber => "account_number",
            Self::TransactionType => "transaction_type",
            Self::PaymentReference => "payment_reference",
            Self::Category => "category",
            Self::AmountEur => "amount_eur",
            Self::AmountForeignCurrency => "amount_foreign_currency",
            Self::TypeForeignCurrency => "type_foreign_currency",
            Self::ExchangeRate => "exchange_rate",
        }
    }
}

/// One column of a header schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    /// The semantic field stored in this column.
    pub field: Field,
    /// The label printed in the header line.
    pub label: &'static str,
    /// Whether exports may leave this column out.
    pub optional: bool,
}

const fn column(field: Field, label: &'static str) -> Column {
    Column {
        field,
        label,
        optional: false,
    }
}

const fn optional(field: Field, label: &'static str) -> Column {
    Column {
        field,
        label,
        optional: true,
    }
}

const EN: [Column; 10] = [
    column(Field::Date, "Date"),
    column(Field::Payee, "Payee"),
    column(Field::AccountNumber, "Account number"),
    column(Field::TransactionType, "Transaction type"),
    column(Field::PaymentReference, "Payment reference"),
    optional(Field::Category, "Category"),
    column(Field::AmountEur, "Amount (EUR)"),
    column(Field::AmountForeignCurrency, "Amount (Foreign Currency)"),
    column(Field::TypeForeignCurrency, "Type Foreign Currency"),
    column(Field::ExchangeRate, "Exchange Rate"),
];

const DE: [Column; 10] = [
    column(Field::Date, "Datum"),
    column(Field::Payee, "Empfänger"),
    column(Field::AccountNumber, "Kontonummer"),
    column(Field::TransactionType, "Transaktionstyp"),
    column(Field::PaymentReference, "Verwendungszweck"),
    optional(Field::Category, "Kategorie"),
    column(Field::AmountEur, "Betrag (EUR)"),
    column(Field::AmountForeignCurrency, "Betrag (Fremdwährung)"),
    column(Field::TypeForeignCurrency, "Fremdwährung"),
    column(Field::ExchangeRate, "Wechselkurs"),
];

const FR: [Column; 10] = [
    column(Field::Date, "Date"),
    column(Field::Payee, "Bénéficiaire"),
    column(Field::AccountNumber, "Numéro de compte"),
    column(Field::TransactionType, "Type de transaction"),
    column(Field::PaymentReference, "Référence de paiement"),
    optional(Field::Category, "Catégorie"),
    column(Field::AmountEur, "Montant (EUR)"),
    column(Field::AmountForeignCurrency, "Montant (Devise étrangère)"),
    column(Field::TypeForeignCurrency, "Sélectionnez la devise étrangère"),
    column(Field::ExchangeRate, "Taux de conversion"),
];

/// Header labels of `language` in column order.
///
/// With `include_optional` unset, optional columns are left out and the
/// remaining labels keep their relative order.
#[must_use]
pub fn labels_for(language: Language, include_optional: bool) -> Vec<&'static str> {
    language
        .schema()
        .iter()
        .filter(|column| include_optional || !column.optional)
        .map(|column| column.label)
        .collect()
}

/// The column label `language` uses for `field`.
#[must_use]
pub fn translate(language: Language, field: Field) -> &'static str {
    language
        .schema()
        .iter()
        .find(|column| column.field == field)
        .map_or("", |column| column.label)
}

/// The column label `language` uses for the field with configuration key `key`.
pub fn translate_key(language: Language, key: &str) -> Result<&'static str> {
    language
        .schema()
        .iter()
        .find(|column| column.field.key() == key)
        .map(|column| column.label)
        .ok_or_else(|| ImportError::UnknownField {
            language: language.code().to_string(),
            key: key.to_string(),
        })
}
