//! Time types and the ACT/365.25 year fraction.
//!
//! This module provides:
//! - `Date`: Type-safe date wrapper around chrono::NaiveDate
//! - `year_fraction`: ACT/365.25 year fraction used for SA-CCR time buckets
//!
//! # Examples
//!
//! ```
//! use saccr_core::types::time::{year_fraction, Date};
//!
//! let start = Date::from_ymd(2015, 1, 17).unwrap();
//! let end = Date::from_ymd(2019, 1, 17).unwrap();
//!
//! // 1461 days / 365.25 = 4 years exactly
//! let yf = year_fraction(start, end);
//! assert_eq!(yf, 4.0);
//! ```

use chrono::{DateTime, Datelike, NaiveDate};
use std::fmt;
use std::ops::Sub;
use std::str::FromStr;

use super::error::DateError;

/// Type-safe date wrapper around chrono::NaiveDate.
///
/// Trade files carry dates either as plain ISO 8601 dates or as RFC 3339
/// timestamps; both parse into the calendar date, the time of day is dropped.
///
/// # Examples
///
/// ```
/// use saccr_core::types::time::Date;
///
/// let date = Date::from_ymd(2009, 1, 17).unwrap();
/// assert_eq!(date.year(), 2009);
///
/// let parsed: Date = "2009-01-17T00:00:00Z".parse().unwrap();
/// assert_eq!(date, parsed);
///
/// let later = Date::from_ymd(2009, 1, 27).unwrap();
/// assert_eq!(later - date, 10);
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date(NaiveDate);

impl Date {
    /// Creates a Date from year, month, and day components.
    ///
    /// # Errors
    /// Returns `DateError::InvalidDate` for impossible dates such as February 30th.
    ///
    /// # Examples
    ///
    /// ```
    /// use saccr_core::types::time::Date;
    ///
    /// assert!(Date::from_ymd(2024, 2, 29).is_ok());
    /// assert!(Date::from_ymd(2023, 2, 29).is_err());
    /// ```
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self, DateError> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Date)
            .ok_or(DateError::InvalidDate { year, month, day })
    }

    /// Parses an ISO 8601 date (`YYYY-MM-DD`) or an RFC 3339 timestamp.
    ///
    /// For timestamps the calendar date in the timestamp's own offset is kept.
    ///
    /// # Examples
    ///
    /// ```
    /// use saccr_core::types::time::Date;
    ///
    /// let a = Date::parse("2015-01-17").unwrap();
    /// let b = Date::parse("2015-01-17T00:00:00Z").unwrap();
    /// assert_eq!(a, b);
    ///
    /// assert!(Date::parse("17/01/2015").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, DateError> {
        let s = s.trim();
        if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
            return Ok(Date(date));
        }
        DateTime::parse_from_rfc3339(s)
            .map(|dt| Date(dt.date_naive()))
            .map_err(|e| DateError::ParseError(format!("'{}': {}", s, e)))
    }

    /// Returns the underlying NaiveDate.
    pub fn into_inner(self) -> NaiveDate {
        self.0
    }

    /// Returns the year component.
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Returns the month component (1-12).
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// Returns the day component (1-31).
    pub fn day(&self) -> u32 {
        self.0.day()
    }
}

impl From<NaiveDate> for Date {
    fn from(date: NaiveDate) -> Self {
        Date(date)
    }
}

impl Sub for Date {
    type Output = i64;

    /// Returns the signed number of days from `other` to `self`.
    fn sub(self, other: Self) -> i64 {
        (self.0 - other.0).num_days()
    }
}

impl FromStr for Date {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, DateError> {
        Date::parse(s)
    }
}

impl fmt::Display for Date {
    /// Formats the date as ISO 8601 (YYYY-MM-DD).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

/// Days in a year under ACT/365.25, the fixed year length used for the
/// start, end and maturity of every trade.
pub const DAYS_PER_YEAR: f64 = 365.25;

/// Signed ACT/365.25 year fraction from `start` to `end`.
///
/// Negative when `end` precedes `start`; callers that need a floor
/// apply it themselves.
///
/// ```
/// use saccr_core::types::time::{year_fraction, Date};
///
/// let a = Date::from_ymd(2009, 1, 17).unwrap();
/// let b = Date::from_ymd(2015, 1, 17).unwrap();
///
/// assert!(year_fraction(b, a) < 0.0);
/// assert_eq!(year_fraction(a, b), -year_fraction(b, a));
/// ```
#[inline]
pub fn year_fraction(start: Date, end: Date) -> f64 {
    (end - start) as f64 / DAYS_PER_YEAR
}

#[cfg(feature = "serde")]
mod serde_impl {
    use super::Date;
    use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

    impl Serialize for Date {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            serializer.collect_str(self)
        }
    }

    impl<'de> Deserialize<'de> for Date {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            let s = String::deserialize(deserializer)?;
            Date::parse(&s).map_err(de::Error::custom)
        }
    }
}
