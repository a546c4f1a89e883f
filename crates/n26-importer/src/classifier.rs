//! Payee based counter-account resolution.
//!
//! Rules pair a case-insensitive regular expression with a target account.
//! A rule applies when its pattern matches at the start of the payee text;
//! the rest of the payee may be anything. Rules are kept in declaration
//! order and when several apply, the last one declared wins.

use crate::config::AccountPatterns;
use crate::error::{ImportError, Result};
use regex::{Regex, RegexBuilder};
use std::collections::HashMap;

/// A compiled payee pattern and the account it maps to.
#[derive(Debug, Clone)]
pub struct PayeeRule {
    source: String,
    regex: Regex,
    account: String,
}

impl PayeeRule {
    /// Compile `pattern` into a rule for `account`.
    pub fn new(pattern: &str, account: impl Into<String>) -> Result<Self> {
        let account = account.into();
        // Anchor at the start only, like a prefix match.
        let regex = RegexBuilder::new(&format!("^(?:{pattern})"))
            .case_insensitive(true)
            .build()
            .map_err(|source| ImportError::InvalidPattern {
                pattern: pattern.to_string(),
                account: account.clone(),
                source,
            })?;

        Ok(Self {
            source: pattern.to_string(),
            regex,
            account,
        })
    }

    /// The pattern as configured.
    #[must_use]
    pub fn pattern(&self) -> &str {
        &self.source
    }

    /// The target account.
    #[must_use]
    pub fn account(&self) -> &str {
        &self.account
    }

    /// Check whether the pattern matches the start of `payee`.
    #[must_use]
    pub fn matches(&self, payee: &str) -> bool {
        self.regex.is_match(payee)
    }
}

/// Ordered set of payee rules.
#[derive(Debug, Clone, Default)]
pub struct PayeeClassifier {
    rules: Vec<PayeeRule>,
}

impl PayeeClassifier {
    /// Create a classifier without rules; it never resolves an account.
    #[must_use]
    pub const fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Build the rules from account pattern lists, keeping their order.
    ///
    /// Fails if a pattern string appears twice anywhere in `patterns`, even
    /// for the same account, or if a pattern does not compile.
    pub fn from_patterns(patterns: &[AccountPatterns]) -> Result<Self> {
        let mut seen: HashMap<&str, &str> = HashMap::new();
        let mut rules = Vec::new();

        for entry in patterns {
            for pattern in &entry.patterns {
                if let Some(first) = seen.insert(pattern, &entry.account) {
                    return Err(ImportError::DuplicatePattern {
                        pattern: pattern.clone(),
                        first: first.to_string(),
                        second: entry.account.clone(),
                    });
                }
                rules.push(PayeeRule::new(pattern, entry.account.as_str())?);
            }
        }

        Ok(Self { rules })
    }

    /// The rules in declaration order.
    #[must_use]
    pub fn rules(&self) -> &[PayeeRule] {
        &self.rules
    }

    /// Number of rules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Check if there are no rules.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Resolve the counter-account for `payee`.
    ///
    /// Returns the account of the last matching rule, or `None` when no
    /// rule matches.
    #[must_use]
    pub fn classify(&self, payee: &str) -> Option<&str> {
        let mut matched = self.rules.iter().filter(|rule| rule.matches(payee));
        let first = matched.next()?;

        match matched.last() {
            Some(last) => {
                tracing::debug!(
                    payee,
                    first = first.pattern(),
                    chosen = last.pattern(),
                    "several payee patterns match, using the last one"
                );
                Some(last.account())
            }
            None => Some(first.account()),
        }
    }
}
