//! # adapter_loader (A: Adapter Layer)
//!
//! Reads FIRE-style derivative JSON (`{"data": [ ... ]}`), validates every
//! record and hands the engine a ready [`saccr_engine::NettingSet`].
//!
//! Validation is exhaustive: a file with several bad records reports all of
//! them in one [`LoaderError::Validation`], each as a [`RecordIssue`] naming
//! the record index, id and field.
//!
//! ## Example
//!
//! ```no_run
//! use adapter_loader::JsonTradeLoader;
//! use saccr_engine::ExposureAtDefault;
//!
//! let netting_set = JsonTradeLoader::from_path("trades.json")?
//!     .with_netting_set_id("NS001")
//!     .into_netting_set()?;
//! let ead = ExposureAtDefault::new(&netting_set)?;
//! println!("EAD = {:.2}", ead.calculate());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![deny(missing_docs)]

mod error;
mod loader;
mod record;

pub use error::{LoaderError, RecordIssue};
pub use loader::{load_netting_set, JsonTradeLoader, DEFAULT_NETTING_SET_ID};
pub use record::{TradeDocument, TradeRecord};
