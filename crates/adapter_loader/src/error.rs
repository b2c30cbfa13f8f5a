//! Loader error types.

use std::fmt;
use std::path::PathBuf;

use saccr_engine::SaccrError;
use thiserror::Error;

/// One problem found in one input record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordIssue {
    /// Position of the record in the `data` array
    pub index: usize,
    /// Record id, when it could be read
    pub id: Option<String>,
    /// Offending field
    pub field: &'static str,
    /// What is wrong with it
    pub message: String,
}

impl RecordIssue {
    pub(crate) fn new(index: usize, id: Option<&str>, field: &'static str, message: impl Into<String>) -> Self {
        Self {
            index,
            id: id.filter(|s| !s.is_empty()).map(str::to_string),
            field,
            message: message.into(),
        }
    }
}

impl fmt::Display for RecordIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.id {
            Some(id) => write!(f, "record {} ({}): {}: {}", self.index, id, self.field, self.message),
            None => write!(f, "record {}: {}: {}", self.index, self.field, self.message),
        }
    }
}

/// Errors raised while loading trades.
#[derive(Debug, Error)]
pub enum LoaderError {
    /// Input file could not be read.
    #[error("Failed to read {path}: {source}")]
    Io {
        /// File that was being read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Input is not a FIRE trade document.
    #[error("Malformed trade JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// One or more records failed validation.
    #[error("{} invalid trade record(s); first: {}", .0.len(), first_issue(.0))]
    Validation(Vec<RecordIssue>),

    /// The engine rejected the validated trades.
    #[error("Engine error: {0}")]
    Engine(#[from] SaccrError),
}

fn first_issue(issues: &[RecordIssue]) -> String {
    issues
        .first()
        .map(ToString::to_string)
        .unwrap_or_else(|| "none".to_string())
}

impl LoaderError {
    /// Returns the record issues of a validation failure.
    pub fn issues(&self) -> &[RecordIssue] {
        match self {
            LoaderError::Validation(issues) => issues,
            _ => &[],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issue_display_with_id() {
        let issue = RecordIssue::new(3, Some("swap_1"), "end_date", "before start_date");
        assert_eq!(issue.to_string(), "record 3 (swap_1): end_date: before start_date");
    }

    #[test]
    fn test_issue_display_without_id() {
        let issue = RecordIssue::new(0, Some(""), "id", "must not be empty");
        assert_eq!(issue.id, None);
        assert_eq!(issue.to_string(), "record 0: id: must not be empty");
    }

    #[test]
    fn test_validation_error_display() {
        let err = LoaderError::Validation(vec![
            RecordIssue::new(1, Some("a"), "currency_code", "bad"),
            RecordIssue::new(2, Some("b"), "notional_amount", "bad"),
        ]);
        assert_eq!(
            err.to_string(),
            "2 invalid trade record(s); first: record 1 (a): currency_code: bad"
        );
        assert_eq!(err.issues().len(), 2);
    }

    #[test]
    fn test_engine_error_converts() {
        let err: LoaderError = SaccrError::DuplicateTrade("T1".to_string()).into();
        assert!(err.to_string().contains("Duplicate trade ID: T1"));
        assert!(err.issues().is_empty());
    }
}
