//! Error types for structured error handling.
//!
//! This module provides:
//! - `DateError`: Errors from date construction and parsing
//! - `CurrencyError`: Errors from currency code parsing

use thiserror::Error;

/// Date-related errors.
///
/// # Examples
/// ```
/// use saccr_core::types::DateError;
///
/// let err = DateError::InvalidDate { year: 2024, month: 2, day: 30 };
/// assert_eq!(format!("{}", err), "Invalid date: 2024-2-30");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateError {
    /// Invalid date components (e.g., February 30th).
    #[error("Invalid date: {year}-{month}-{day}")]
    InvalidDate {
        /// Year component
        year: i32,
        /// Month component (1-12)
        month: u32,
        /// Day component (1-31)
        day: u32,
    },

    /// Failed to parse date string.
    #[error("Date parse error: {0}")]
    ParseError(String),
}

/// Currency-related errors.
///
/// # Examples
/// ```
/// use saccr_core::types::CurrencyError;
///
/// let err = CurrencyError::InvalidCode("US".to_string());
/// assert_eq!(format!("{}", err), "Invalid currency code: US");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CurrencyError {
    /// Code is not three ASCII letters.
    #[error("Invalid currency code: {0}")]
    InvalidCode(String),
}
