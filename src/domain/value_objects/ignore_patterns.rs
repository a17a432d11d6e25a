//! Ignore patterns value object
//!
//! Regular expressions from the `ignore_files` config entry. A key matching
//! any pattern is left out of default sync scopes.

use regex::Regex;
use std::fmt;

/// Maximum number of patterns allowed
const MAX_PATTERNS: usize = 1000;

/// Compiled `ignore_files` patterns
#[derive(Debug, Clone, Default)]
pub struct IgnorePatterns {
    patterns: Vec<Regex>,
}

impl IgnorePatterns {
    /// Create an empty pattern set (matches nothing).
    pub fn empty() -> Self {
        Self::default()
    }

    /// Compile patterns; blank entries are skipped.
    pub fn compile<I, S>(patterns: I) -> Result<Self, IgnoreError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut compiled = Vec::new();

        for pattern in patterns {
            let pattern = pattern.as_ref();
            if pattern.trim().is_empty() {
                continue;
            }

            if compiled.len() == MAX_PATTERNS {
                return Err(IgnoreError::TooManyPatterns {
                    limit: MAX_PATTERNS,
                });
            }

            let regex = Regex::new(pattern).map_err(|e| IgnoreError::InvalidPattern {
                pattern: pattern.to_string(),
                message: e.to_string(),
            })?;
            compiled.push(regex);
        }

        Ok(Self { patterns: compiled })
    }

    /// Check if a key should be ignored.
    pub fn is_ignored(&self, key: &str) -> bool {
        self.patterns.iter().any(|re| re.is_match(key))
    }

    /// Get the number of patterns loaded.
    pub fn pattern_count(&self) -> usize {
        self.patterns.len()
    }

    /// Check if this is an empty pattern set.
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

/// Errors that can occur when compiling ignore patterns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IgnoreError {
    /// A pattern is not a valid regular expression.
    InvalidPattern { pattern: String, message: String },
    /// Too many patterns configured.
    TooManyPatterns { limit: usize },
}

impl fmt::Display for IgnoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPattern { pattern, message } => {
                write!(f, "Invalid pattern '{}' - {}", pattern, message)
            }
            Self::TooManyPatterns { limit } => {
                write!(f, "ignore_files has more than {} patterns", limit)
            }
        }
    }
}

impl std::error::Error for IgnoreError {}
