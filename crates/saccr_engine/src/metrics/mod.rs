//! Per-trade SA-CCR metrics (BCBS 279 paragraphs 155-164).
//!
//! Every trade is handled independently:
//!
//! ```text
//! S  = max((start - as_of) / 365.25, 0)        E  = (end - start) / 365.25
//! SD = (exp(-0.05 S) - exp(-0.05 E)) / 0.05    d  = notional * SD
//! M  = (end - as_of) / 365.25                  MF = sqrt(min(M, 1))
//! delta = +1 receive floating, -1 receive fixed
//! ```
//!
//! The scalar formulas are exposed as free functions; [`TradeMetrics`] bundles
//! them for one trade and [`TradeMetricsTable`] holds the whole netting set
//! in input order.

use std::collections::HashMap;

use saccr_core::types::{year_fraction, CurrencyCode, Date};
use tracing::{debug, warn};

use crate::error::SaccrError;
use crate::netting::{NettingSet, Trade, TradeId};
use crate::parallel::{try_map_ordered, ParallelConfig};

/// Continuous discount rate of the supervisory duration.
pub const SUPERVISORY_DISCOUNT_RATE: f64 = 0.05;

/// Horizon (years) at which the unmargined maturity factor is capped.
pub const MATURITY_FACTOR_HORIZON: f64 = 1.0;

/// Start and end of the trade period in years: `(S, E)`.
///
/// `S` is floored at zero, so a trade that has already started is treated
/// as starting today. `E` runs from the start date, not the as-of date.
///
/// ```
/// use saccr_core::types::Date;
/// use saccr_engine::metrics::start_end;
///
/// let as_of = Date::from_ymd(2015, 1, 17).unwrap();
/// let start = Date::from_ymd(2014, 1, 17).unwrap();
/// let end = Date::from_ymd(2019, 1, 17).unwrap();
///
/// let (s, e) = start_end(as_of, start, end);
/// assert_eq!(s, 0.0);
/// assert!(e > 4.99 && e < 5.0);
/// ```
#[inline]
pub fn start_end(valuation_date: Date, start_date: Date, end_date: Date) -> (f64, f64) {
    let s = year_fraction(valuation_date, start_date).max(0.0);
    let e = year_fraction(start_date, end_date);
    (s, e)
}

/// Supervisory duration `(exp(-0.05 S) - exp(-0.05 E)) / 0.05`.
#[inline]
pub fn supervisory_duration(s: f64, e: f64) -> f64 {
    let r = SUPERVISORY_DISCOUNT_RATE;
    ((-r * s).exp() - (-r * e).exp()) / r
}

/// Trade-level adjusted notional `notional * SD`.
#[inline]
pub fn adjusted_notional(notional: f64, supervisory_duration: f64) -> f64 {
    notional * supervisory_duration
}

/// Remaining maturity in years from the as-of date.
#[inline]
pub fn maturity(valuation_date: Date, end_date: Date) -> f64 {
    year_fraction(valuation_date, end_date)
}

/// Maturity factor `sqrt(min(M, 1))`.
///
/// A trade that has already matured (`M <= 0`) gets a factor of zero.
///
/// ```
/// use saccr_engine::metrics::maturity_factor;
///
/// assert_eq!(maturity_factor(10.0), 1.0);
/// assert_eq!(maturity_factor(0.25), 0.5);
/// assert_eq!(maturity_factor(-0.5), 0.0);
/// ```
#[inline]
pub fn maturity_factor(maturity: f64) -> f64 {
    maturity.clamp(0.0, MATURITY_FACTOR_HORIZON).sqrt()
}

/// Derived SA-CCR quantities for one trade.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TradeMetrics {
    /// Trade the metrics belong to
    pub trade_id: TradeId,
    /// Hedging set (trade currency)
    pub hedging_set: CurrencyCode,
    /// Years from as-of date to start, floored at zero
    pub start: f64,
    /// Years from start to end
    pub end: f64,
    /// Years from as-of date to end
    pub maturity: f64,
    /// Supervisory duration
    pub supervisory_duration: f64,
    /// Notional times supervisory duration
    pub adjusted_notional: f64,
    /// +1 or -1
    pub supervisory_delta: f64,
    /// `sqrt(min(maturity, 1))`, zero for matured trades
    pub maturity_factor: f64,
}

impl TradeMetrics {
    /// Computes all metrics for a trade.
    ///
    /// # Errors
    ///
    /// Fails for non interest-rate trades and for trades whose legs give no
    /// supervisory delta.
    pub fn compute(trade: &Trade) -> Result<Self, SaccrError> {
        trade.ensure_supported()?;
        let supervisory_delta = trade.supervisory_delta()?;

        let (start, end) = start_end(trade.valuation_date(), trade.start_date(), trade.end_date());
        let sd = supervisory_duration(start, end);
        let maturity = maturity(trade.valuation_date(), trade.end_date());

        if maturity <= 0.0 {
            warn!(
                trade = %trade.id(),
                maturity,
                "trade has matured as of its valuation date; maturity factor is zero"
            );
        }

        Ok(Self {
            trade_id: trade.id().clone(),
            hedging_set: trade.currency().clone(),
            start,
            end,
            maturity,
            supervisory_duration: sd,
            adjusted_notional: adjusted_notional(trade.notional(), sd),
            supervisory_delta,
            maturity_factor: maturity_factor(maturity),
        })
    }

    /// Contribution to its maturity bucket: `d * delta * MF`.
    #[inline]
    pub fn effective_notional(&self) -> f64 {
        self.adjusted_notional * self.supervisory_delta * self.maturity_factor
    }
}

/// Metrics for every trade of a netting set, in input order.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TradeMetricsTable {
    rows: Vec<TradeMetrics>,
    #[cfg_attr(feature = "serde", serde(skip))]
    index: HashMap<TradeId, usize>,
}

impl TradeMetricsTable {
    /// Computes metrics for every trade of the netting set.
    ///
    /// # Errors
    ///
    /// The first unsupported trade aborts the whole table.
    pub fn compute(netting_set: &NettingSet, config: &ParallelConfig) -> Result<Self, SaccrError> {
        let rows = try_map_ordered(netting_set.trades(), config, TradeMetrics::compute)?;
        debug!(
            netting_set = %netting_set.id(),
            trades = rows.len(),
            parallel = config.should_parallelize(rows.len()),
            "computed per-trade metrics"
        );
        Ok(Self::from_rows(rows))
    }

    /// Builds a table from precomputed rows.
    pub fn from_rows(rows: Vec<TradeMetrics>) -> Self {
        let index = rows
            .iter()
            .enumerate()
            .map(|(i, row)| (row.trade_id.clone(), i))
            .collect();
        Self { rows, index }
    }

    /// Returns the rows in input order.
    #[inline]
    pub fn rows(&self) -> &[TradeMetrics] {
        &self.rows
    }

    /// Returns the number of rows.
    #[inline]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns whether the table is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Gets the metrics of one trade.
    pub fn get(&self, id: &TradeId) -> Option<&TradeMetrics> {
        self.index.get(id).map(|&i| &self.rows[i])
    }

    /// Extracts one column.
    pub fn column<F>(&self, field: F) -> Vec<f64>
    where
        F: Fn(&TradeMetrics) -> f64,
    {
        self.rows.iter().map(field).collect()
    }
}
