//! # saccr_engine (L2: Calculation)
//!
//! SA-CCR (BCBS 279) exposure at default for interest-rate netting sets.
//!
//! This crate provides:
//! - Netting sets and validated trades with closed leg/asset-class enums
//! - Per-trade metrics: supervisory duration, adjusted notional, maturity
//!   factor, supervisory delta
//! - Hedging-set aggregation into three maturity buckets
//! - Interest-rate add-on, replacement cost, PFE multiplier and EAD
//! - Rayon-based parallelisation of per-trade work
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │            saccr_engine (L2)            │
//! ├─────────────────────────────────────────┤
//! │  netting/    - Trade, NettingSet        │
//! │  metrics/    - S, E, SD, d, M, MF, δ    │
//! │  hedging/    - currency × bucket D_jk   │
//! │  addon/      - hedging-set add-on       │
//! │  exposure/   - RC, multiplier, EAD      │
//! │  parallel/   - Rayon utilities          │
//! │  calculator  - ExposureAtDefault        │
//! └─────────────────────────────────────────┘
//!          ↓
//! ┌─────────────────────────────────────────┐
//! │             saccr_core (L1)             │
//! │   Date, year_fraction, CurrencyCode     │
//! └─────────────────────────────────────────┘
//! ```
//!
//! Stages run strictly in order (metrics, aggregation, add-on, combiner);
//! each consumes the previous stage's output and nothing is mutated
//! afterwards.
//!
//! ## Example
//!
//! ```
//! use saccr_core::types::{CurrencyCode, Date};
//! use saccr_engine::calculator::ExposureAtDefault;
//! use saccr_engine::netting::{AssetClass, LegType, NettingSet, NettingSetId, Trade};
//!
//! let d = |y, m, day| Date::from_ymd(y, m, day).unwrap();
//! let swap = Trade::builder()
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
//! let netting_set = NettingSet::new(NettingSetId::new("NS001"), vec![swap]).unwrap();
//! let ead = ExposureAtDefault::new(&netting_set).unwrap();
//!
//! assert_eq!(ead.replacement_cost(), 30.0);
//! assert!(ead.calculate() > ead.replacement_cost());
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Serialize results (metrics table, breakdown) for reporting

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod addon;
pub mod calculator;
pub mod error;
pub mod exposure;
pub mod hedging;
pub mod metrics;
pub mod netting;
pub mod parallel;

pub use calculator::{calculate_ead, EadBreakdown, ExposureAtDefault, HedgingSetBreakdown};
pub use error::SaccrError;
pub use netting::{AssetClass, LegType, NettingSet, NettingSetId, Trade, TradeId};
pub use parallel::ParallelConfig;
