//! Importer options shared by all commands.

use anyhow::{bail, Context, Result};
use clap::Args;
use n26_importer::{AccountPatterns, Language, N26Config, N26Importer};
use std::path::PathBuf;

/// Options describing the N26 account and its payee rules.
#[derive(Args, Debug, Clone, Default)]
pub struct ImporterArgs {
    /// JSON configuration file (flags below override its values)
    #[arg(short, long, value_name = "JSON")]
    pub config: Option<PathBuf>,

    /// IBAN of the exported account
    #[arg(long)]
    pub iban: Option<String>,

    /// Account receiving the EUR posting of every transaction
    #[arg(short, long)]
    pub account: Option<String>,

    /// Language of the export header (en, de, fr)
    #[arg(short, long)]
    pub language: Option<Language>,

    /// Text encoding of the export (e.g. utf-8, latin1)
    #[arg(short = 'e', long = "encoding", value_name = "LABEL")]
    pub file_encoding: Option<String>,

    /// Payee rule; may be repeated, later rules win ties
    #[arg(short, long = "pattern", value_name = "ACCOUNT=REGEX", value_parser = parse_pattern)]
    pub patterns: Vec<(String, String)>,

    /// Log debug output to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl ImporterArgs {
    /// Merge the config file and flags into one configuration.
    ///
    /// Patterns given as flags are appended after those of the file.
    pub fn to_config(&self) -> Result<N26Config> {
        let mut config = match &self.config {
            Some(path) => N26Config::load(path)
                .with_context(|| format!("failed to load config {}", path.display()))?,
            None => N26Config::builder().build(),
        };

        if let Some(iban) = &self.iban {
            config.iban.clone_from(iban);
        }
        if let Some(account) = &self.account {
            config.account.clone_from(account);
        }
        if let Some(language) = self.language {
            config.language = language;
        }
        if let Some(label) = &self.file_encoding {
            config.file_encoding.clone_from(label);
        }
        for (account, pattern) in &self.patterns {
            config.account_patterns.push(AccountPatterns {
                account: account.clone(),
                patterns: vec![pattern.clone()],
            });
        }

        if config.account.is_empty() {
            bail!("no target account: pass --account or set \"account\" in the config file");
        }

        Ok(config)
    }

    /// Build the importer described by these options.
    pub fn build_importer(&self) -> Result<N26Importer> {
        let config = self.to_config()?;
        N26Importer::new(config).context("invalid importer configuration")
    }
}

/// Parse `ACCOUNT=REGEX`; the regex may itself contain `=`.
fn parse_pattern(s: &str) -> std::result::Result<(String, String), String> {
    let (account, pattern) = s
        .split_once('=')
        .ok_or_else(|| format!("expected ACCOUNT=REGEX, got {s:?}"))?;
    if account.is_empty() || pattern.is_empty() {
        return Err(format!("expected ACCOUNT=REGEX, got {s:?}"));
    }
    Ok((account.to_string(), pattern.to_string()))
}
