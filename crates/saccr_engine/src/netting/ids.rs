//! Identifier types for netting-set entities.

use std::fmt;

/// Unique identifier for a trade within a netting set.
///
/// # Examples
///
/// ```
/// use saccr_engine::netting::TradeId;
///
/// let id = TradeId::new("swap_1");
/// assert_eq!(id.as_str(), "swap_1");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct TradeId(String);

impl TradeId {
    /// Creates a new trade ID.
    #[inline]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the ID as a string slice.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TradeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for TradeId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for TradeId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Identifier of a netting set.
///
/// # Examples
///
/// ```
/// use saccr_engine::netting::NettingSetId;
///
/// let id = NettingSetId::new("NS001");
/// assert_eq!(id.as_str(), "NS001");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct NettingSetId(String);

impl NettingSetId {
    /// Creates a new netting set ID.
    #[inline]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the ID as a string slice.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NettingSetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for NettingSetId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for NettingSetId {
    fn from(s: String) -> Self {
        Self(s)
    }
}
