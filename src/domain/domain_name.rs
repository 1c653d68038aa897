use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

const MAX_LABEL_LEN: usize = 63;
const MIN_TLD_LEN: usize = 2;

/// A validated, lowercase domain name.
///
/// Construction goes through [`DomainName::parse`], so every value in
/// circulation already satisfies the label grammar and is normalized to
/// lowercase. Comparisons are therefore effectively case-insensitive.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DomainName(String);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainNameError {
    #[error("domain name is empty")]
    Empty,
    #[error("domain name contains whitespace")]
    ContainsWhitespace,
    #[error("domain name has no dot-separated labels")]
    MissingDot,
    #[error("label '{label}' is not a valid domain label")]
    BadLabel { label: String },
    #[error("top-level label '{label}' must be at least two alphanumeric characters")]
    BadTld { label: String },
}

impl DomainName {
    /// Parses a candidate string into a normalized domain name.
    ///
    /// The candidate is trimmed and lowercased first. Validation is purely
    /// syntactic: dot-separated labels of 1-63 characters from `[a-z0-9-]`,
    /// no leading or trailing hyphen per label, and a final label of at
    /// least two alphanumeric characters. No DNS lookup is performed.
    pub fn parse(candidate: &str) -> Result<Self, DomainNameError> {
        let normalized = candidate.trim().to_ascii_lowercase();

        if normalized.is_empty() {
            return Err(DomainNameError::Empty);
        }

        if normalized.chars().any(char::is_whitespace) {
            return Err(DomainNameError::ContainsWhitespace);
        }

        if !normalized.contains('.') {
            return Err(DomainNameError::MissingDot);
        }

        let labels: Vec<&str> = normalized.split('.').collect();
        for label in &labels {
            validate_label(label)?;
        }

        let tld = labels.last().copied().unwrap_or_default();
        if tld.len() < MIN_TLD_LEN || !tld.chars().all(|ch| ch.is_ascii_alphanumeric()) {
            return Err(DomainNameError::BadTld {
                label: tld.to_owned(),
            });
        }

        Ok(Self(normalized))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn validate_label(label: &str) -> Result<(), DomainNameError> {
    let well_formed = !label.is_empty()
        && label.len() <= MAX_LABEL_LEN
        && !label.starts_with('-')
        && !label.ends_with('-')
        && label
            .chars()
            .all(|ch| ch.is_ascii_lowercase() || ch.is_ascii_digit() || ch == '-');

    if well_formed {
        Ok(())
    } else {
        Err(DomainNameError::BadLabel {
            label: label.to_owned(),
        })
    }
}

impl fmt::Display for DomainName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for DomainName {
    type Error = DomainNameError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<DomainName> for String {
    fn from(value: DomainName) -> Self {
        value.0
    }
}
