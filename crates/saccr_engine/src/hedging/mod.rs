//! Hedging-set and maturity-bucket aggregation (BCBS 279 paragraphs 166-168).
//!
//! Interest-rate trades are grouped by currency into hedging sets, and within
//! each hedging set into three maturity buckets: (0, 1], (1, 5] and (5, inf)
//! years. Each (hedging set, bucket) pair has an effective notional
//!
//! ```text
//! D_jk = sum over trades of d_i * delta_i * MF_i
//! ```
//!
//! Every hedging set always carries all three buckets; an empty bucket is
//! exactly zero.

use std::collections::BTreeMap;
use std::fmt;
use std::ops::Index;

use saccr_core::types::CurrencyCode;
use tracing::debug;

use crate::metrics::TradeMetricsTable;

/// Upper bound (years) of the first maturity bucket.
pub const SHORT_BUCKET_LIMIT: f64 = 1.0;

/// Upper bound (years) of the second maturity bucket.
pub const MEDIUM_BUCKET_LIMIT: f64 = 5.0;

/// Number of maturity buckets per hedging set.
pub const BUCKET_COUNT: usize = 3;

/// Interest-rate maturity bucket.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MaturityBucket {
    /// Maturity up to and including one year
    UpToOneYear,
    /// Maturity above one and up to five years
    OneToFiveYears,
    /// Maturity above five years
    OverFiveYears,
}

impl MaturityBucket {
    /// All buckets in index order.
    pub const ALL: [MaturityBucket; BUCKET_COUNT] = [
        MaturityBucket::UpToOneYear,
        MaturityBucket::OneToFiveYears,
        MaturityBucket::OverFiveYears,
    ];

    /// Assigns a maturity in years to its bucket.
    ///
    /// Bounds are right-inclusive. Matured trades (maturity <= 0) fall into
    /// the first bucket so that every trade has exactly one bucket; their
    /// maturity factor is zero, so they add nothing to it.
    ///
    /// ```
    /// use saccr_engine::hedging::MaturityBucket;
    ///
    /// assert_eq!(MaturityBucket::from_maturity(1.0), MaturityBucket::UpToOneYear);
    /// assert_eq!(MaturityBucket::from_maturity(1.0001), MaturityBucket::OneToFiveYears);
    /// assert_eq!(MaturityBucket::from_maturity(5.0), MaturityBucket::OneToFiveYears);
    /// assert_eq!(MaturityBucket::from_maturity(9.9986), MaturityBucket::OverFiveYears);
    /// ```
    pub fn from_maturity(maturity: f64) -> Self {
        if maturity <= SHORT_BUCKET_LIMIT {
            MaturityBucket::UpToOneYear
        } else if maturity <= MEDIUM_BUCKET_LIMIT {
            MaturityBucket::OneToFiveYears
        } else {
            MaturityBucket::OverFiveYears
        }
    }

    /// Position of the bucket in a [`BucketNotionals`] triple.
    #[inline]
    pub fn index(&self) -> usize {
        match self {
            MaturityBucket::UpToOneYear => 0,
            MaturityBucket::OneToFiveYears => 1,
            MaturityBucket::OverFiveYears => 2,
        }
    }

    /// Short label used in reports.
    pub fn label(&self) -> &'static str {
        match self {
            MaturityBucket::UpToOneYear => "<=1Y",
            MaturityBucket::OneToFiveYears => "1Y-5Y",
            MaturityBucket::OverFiveYears => ">5Y",
        }
    }
}

impl fmt::Display for MaturityBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Effective notionals `[D1, D2, D3]` of one hedging set.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct BucketNotionals([f64; BUCKET_COUNT]);

impl BucketNotionals {
    /// Creates a triple from explicit values.
    pub fn new(notionals: [f64; BUCKET_COUNT]) -> Self {
        Self(notionals)
    }

    /// Adds a trade's effective notional to a bucket.
    #[inline]
    pub fn add(&mut self, bucket: MaturityBucket, effective_notional: f64) {
        self.0[bucket.index()] += effective_notional;
    }

    /// Returns the triple as an array.
    #[inline]
    pub fn as_array(&self) -> [f64; BUCKET_COUNT] {
        self.0
    }
}

impl Index<MaturityBucket> for BucketNotionals {
    type Output = f64;

    fn index(&self, bucket: MaturityBucket) -> &f64 {
        &self.0[bucket.index()]
    }
}

/// Effective notionals per hedging set, keyed by currency.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct HedgingSetNotionals(BTreeMap<CurrencyCode, BucketNotionals>);

impl HedgingSetNotionals {
    /// Aggregates per-trade metrics into hedging sets and buckets.
    ///
    /// Creating the entry first guarantees that every hedging set with at
    /// least one trade carries all three buckets.
    pub fn aggregate(metrics: &TradeMetricsTable) -> Self {
        let mut sets: BTreeMap<CurrencyCode, BucketNotionals> = BTreeMap::new();
        for row in metrics.rows() {
            let bucket = MaturityBucket::from_maturity(row.maturity);
            sets.entry(row.hedging_set.clone())
                .or_default()
                .add(bucket, row.effective_notional());
        }
        debug!(hedging_sets = sets.len(), "aggregated effective notionals");
        Self(sets)
    }

    /// Returns the notionals of one hedging set.
    pub fn get(&self, currency: &CurrencyCode) -> Option<&BucketNotionals> {
        self.0.get(currency)
    }

    /// Iterates hedging sets in currency order.
    pub fn iter(&self) -> impl Iterator<Item = (&CurrencyCode, &BucketNotionals)> {
        self.0.iter()
    }

    /// Returns the number of hedging sets.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns whether there are no hedging sets.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(CurrencyCode, BucketNotionals)> for HedgingSetNotionals {
    fn from_iter<I: IntoIterator<Item = (CurrencyCode, BucketNotionals)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::TradeMetrics;
    use crate::netting::TradeId;

    fn row(id: &str, ccy: &str, maturity: f64, notional: f64, delta: f64) -> TradeMetrics {
        TradeMetrics {
            trade_id: TradeId::new(id),
            hedging_set: CurrencyCode::new(ccy).unwrap(),
            start: 0.0,
            end: maturity,
            maturity,
            supervisory_duration: 1.0,
            adjusted_notional: notional,
            supervisory_delta: delta,
            maturity_factor: crate::metrics::maturity_factor(maturity),
        }
    }

    #[test]
    fn test_bucket_boundaries() {
        assert_eq!(MaturityBucket::from_maturity(0.5), MaturityBucket::UpToOneYear);
        assert_eq!(MaturityBucket::from_maturity(5.0001), MaturityBucket::OverFiveYears);
        assert_eq!(MaturityBucket::from_maturity(0.0), MaturityBucket::UpToOneYear);
        assert_eq!(MaturityBucket::from_maturity(-3.0), MaturityBucket::UpToOneYear);
    }

    #[test]
    fn test_bucket_index_matches_all_order() {
        for (i, bucket) in MaturityBucket::ALL.iter().enumerate() {
            assert_eq!(bucket.index(), i);
        }
    }

    #[test]
    fn test_empty_buckets_are_zero_not_missing() {
        let table = TradeMetricsTable::from_rows(vec![row("A", "USD", 10.0, 100.0, 1.0)]);
        let sets = HedgingSetNotionals::aggregate(&table);

        let usd = sets.get(&CurrencyCode::new("USD").unwrap()).unwrap();
        assert_eq!(usd.as_array(), [0.0, 0.0, 100.0]);
        assert_eq!(usd[MaturityBucket::UpToOneYear], 0.0);
    }

    #[test]
    fn test_offsetting_within_bucket() {
        let table = TradeMetricsTable::from_rows(vec![
            row("A", "EUR", 3.0, 500.0, 1.0),
            row("B", "EUR", 4.0, 200.0, -1.0),
        ]);
        let sets = HedgingSetNotionals::aggregate(&table);
        let eur = sets.get(&CurrencyCode::new("EUR").unwrap()).unwrap();
        assert_eq!(eur[MaturityBucket::OneToFiveYears], 300.0);
    }

    #[test]
    fn test_hedging_sets_do_not_mix() {
        let table = TradeMetricsTable::from_rows(vec![
            row("A", "USD", 3.0, 500.0, 1.0),
            row("B", "EUR", 3.0, 500.0, -1.0),
        ]);
        let sets = HedgingSetNotionals::aggregate(&table);

        assert_eq!(sets.len(), 2);
        let order: Vec<&str> = sets.iter().map(|(c, _)| c.as_str()).collect();
        assert_eq!(order, vec!["EUR", "USD"]);
        assert_eq!(sets.get(&CurrencyCode::new("USD").unwrap()).unwrap()[MaturityBucket::OneToFiveYears], 500.0);
    }

    #[test]
    fn test_short_trade_scaled_by_maturity_factor() {
        let table = TradeMetricsTable::from_rows(vec![row("A", "GBP", 0.25, 1_000.0, -1.0)]);
        let sets = HedgingSetNotionals::aggregate(&table);
        let gbp = sets.get(&CurrencyCode::new("GBP").unwrap()).unwrap();
        assert_eq!(gbp.as_array(), [-500.0, 0.0, 0.0]);
    }

    #[test]
    fn test_empty_table_has_no_hedging_sets() {
        let sets = HedgingSetNotionals::aggregate(&TradeMetricsTable::default());
        assert!(sets.is_empty());
    }
}
