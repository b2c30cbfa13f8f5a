//! Netting sets and their trades.
//!
//! This module provides:
//! - [`Trade`]: one validated trade record with a [`TradeBuilder`]
//! - [`LegType`] and [`AssetClass`]: closed enumerations for trade direction
//!   and regulatory category
//! - [`NettingSet`]: the immutable trade table a calculation runs on
//!
//! # Examples
//!
//! ```
//! use saccr_engine::netting::{AssetClass, LegType, NettingSet, NettingSetId, Trade};
//! use saccr_core::types::{CurrencyCode, Date};
//!
//! let d = |y, m, day| Date::from_ymd(y, m, day).unwrap();
//! let trade = Trade::builder()
//!     .id("swap_1")
//!     .asset_class(AssetClass::InterestRate)
//!     .currency(CurrencyCode::new("USD").unwrap())
//!     .notional(10_000.0)
//!     .legs(LegType::Fixed, LegType::Floating)
//!     .valuation_date(d(2009, 1, 17))
//!     .start_date(d(2009, 1, 17))
//!     .end_date(d(2019, 1, 17))
//!     .mtm_dirty(30.0)
//!     .build()
//!     .unwrap();
//!
//! let netting_set = NettingSet::new(NettingSetId::new("NS001"), vec![trade]).unwrap();
//! assert_eq!(netting_set.trade_count(), 1);
//! ```

mod ids;
mod trade;

pub use ids::{NettingSetId, TradeId};
pub use trade::{AssetClass, LegType, Trade, TradeBuilder};

use std::collections::HashSet;

use crate::error::SaccrError;

/// Collection of trades that may be offset against each other.
///
/// Trade order is preserved; every per-trade accessor of the calculator
/// returns values in this order.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct NettingSet {
    id: NettingSetId,
    trades: Vec<Trade>,
}

impl NettingSet {
    /// Creates a netting set from trades.
    ///
    /// # Errors
    ///
    /// `SaccrError::DuplicateTrade` if two trades share an ID.
    pub fn new(id: NettingSetId, trades: Vec<Trade>) -> Result<Self, SaccrError> {
        let mut seen = HashSet::with_capacity(trades.len());
        for trade in &trades {
            if !seen.insert(trade.id()) {
                return Err(SaccrError::DuplicateTrade(trade.id().to_string()));
            }
        }
        Ok(Self { id, trades })
    }

    /// Creates a netting set with no trades.
    pub fn empty(id: NettingSetId) -> Self {
        Self {
            id,
            trades: Vec::new(),
        }
    }

    /// Returns the netting set ID.
    #[inline]
    pub fn id(&self) -> &NettingSetId {
        &self.id
    }

    /// Returns the trades in input order.
    #[inline]
    pub fn trades(&self) -> &[Trade] {
        &self.trades
    }

    /// Returns the number of trades.
    #[inline]
    pub fn trade_count(&self) -> usize {
        self.trades.len()
    }

    /// Returns whether the netting set has no trades.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.trades.is_empty()
    }

    /// Gets a trade by ID.
    pub fn trade(&self, id: &TradeId) -> Option<&Trade> {
        self.trades.iter().find(|t| t.id() == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use saccr_core::types::{CurrencyCode, Date};

    fn trade(id: &str, ccy: &str) -> Trade {
        let d = Date::from_ymd(2020, 1, 1).unwrap();
        Trade::builder()
            .id(id)
            .asset_class(AssetClass::InterestRate)
            .currency(CurrencyCode::new(ccy).unwrap())
            .notional(100.0)
            .legs(LegType::Fixed, LegType::Floating)
            .valuation_date(d)
            .start_date(d)
            .end_date(Date::from_ymd(2021, 1, 1).unwrap())
            .mtm_dirty(0.0)
            .build()
            .unwrap()
    }

    #[test]
    fn test_netting_set_lookup() {
        let ns = NettingSet::new(
            NettingSetId::new("NS001"),
            vec![trade("T1", "USD"), trade("T2", "EUR")],
        )
        .unwrap();

        assert_eq!(ns.id().as_str(), "NS001");
        assert_eq!(ns.trade_count(), 2);
        assert!(ns.trade(&TradeId::new("T2")).is_some());
        assert!(ns.trade(&TradeId::new("T9")).is_none());
    }

    #[test]
    fn test_duplicate_trade_rejected() {
        let result = NettingSet::new(
            NettingSetId::new("NS001"),
            vec![trade("T1", "USD"), trade("T1", "EUR")],
        );
        assert_eq!(result, Err(SaccrError::DuplicateTrade("T1".to_string())));
    }

    #[test]
    fn test_empty_netting_set() {
        let ns = NettingSet::empty(NettingSetId::new("NS0"));
        assert!(ns.is_empty());
        assert_eq!(ns.trade_count(), 0);
    }
}
