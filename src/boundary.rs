//! Request validation helpers
//!
//! Front ends (forms, HTTP handlers, CLIs) use these to turn raw input into
//! the arguments the analyzer and generator expect.

use secrecy::SecretString;
use thiserror::Error;

use crate::generator::{RuleSet, Wordlist};

/// How many generated words a response shows.
pub const DISPLAY_LIMIT: usize = 100;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BoundaryError {
    #[error("Password is required")]
    PasswordRequired,
    #[error("At least one base word is required")]
    BaseWordsRequired,
}

/// Rejects an empty password.
pub fn require_password(raw: &str) -> Result<SecretString, BoundaryError> {
    if raw.is_empty() {
        return Err(BoundaryError::PasswordRequired);
    }
    Ok(SecretString::new(raw.to_string().into()))
}

/// Splits comma-separated base words, trimming each and dropping blanks.
pub fn parse_base_words(raw: &str) -> Result<Vec<String>, BoundaryError> {
    let words: Vec<String> = raw
        .split(',')
        .map(str::trim)
        .filter(|w| !w.is_empty())
        .map(str::to_string)
        .collect();

    if words.is_empty() {
        return Err(BoundaryError::BaseWordsRequired);
    }
    Ok(words)
}

/// Maps submitted rule names. When nothing is submitted, the default rule
/// set applies; unrecognized names are dropped, and a set left empty that
/// way is resolved to the default by the generator.
pub fn parse_rules<I, S>(names: I) -> RuleSet
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut names = names.into_iter().peekable();
    if names.peek().is_none() {
        return RuleSet::default();
    }
    RuleSet::from_names(names)
}

/// Truncated wordlist for display, with the true total.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct WordlistPreview {
    pub wordlist: Vec<String>,
    pub total: usize,
}

impl WordlistPreview {
    pub fn new(wordlist: &Wordlist, limit: usize) -> Self {
        Self {
            wordlist: wordlist.preview(limit),
            total: wordlist.len(),
        }
    }
}

impl From<&Wordlist> for WordlistPreview {
    fn from(wordlist: &Wordlist) -> Self {
        Self::new(wordlist, DISPLAY_LIMIT)
    }
}
