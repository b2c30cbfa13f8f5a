//! JSON trade loader.

use std::collections::HashSet;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use std::str::FromStr;

use saccr_engine::netting::{NettingSet, NettingSetId, Trade};
use tracing::{debug, info, warn};

use crate::error::{LoaderError, RecordIssue};
use crate::record::{TradeDocument, TradeRecord};

/// Netting set ID used when the caller does not supply one.
pub const DEFAULT_NETTING_SET_ID: &str = "default";

/// Loads a FIRE derivative document and turns it into a [`NettingSet`].
///
/// Every record of the file belongs to one netting set.
///
/// # Examples
///
/// ```
/// use adapter_loader::JsonTradeLoader;
///
/// let json = r#"{"data": [{
///     "id": "swap_a", "date": "2009-01-17", "asset_class": "ir",
///     "currency_code": "USD", "notional_amount": 10000,
///     "payment_type": "fixed", "receive_type": "floating",
///     "start_date": "2009-01-17", "end_date": "2019-01-17", "mtm_dirty": 30
/// }]}"#;
///
/// let netting_set = json.parse::<JsonTradeLoader>().unwrap().into_netting_set().unwrap();
/// assert_eq!(netting_set.trade_count(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct JsonTradeLoader {
    netting_set_id: NettingSetId,
    records: Vec<TradeRecord>,
}

impl JsonTradeLoader {
    /// Reads a trade document from a file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, LoaderError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| LoaderError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let loader = Self::from_reader(BufReader::new(file))?;
        info!(path = %path.display(), records = loader.records.len(), "loaded trade file");
        Ok(loader)
    }

    /// Reads a trade document from any reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, LoaderError> {
        let document: TradeDocument = serde_json::from_reader(reader)?;
        Ok(Self::from_records(document.data))
    }

    /// Wraps already deserialised records.
    pub fn from_records(records: Vec<TradeRecord>) -> Self {
        Self {
            netting_set_id: NettingSetId::new(DEFAULT_NETTING_SET_ID),
            records,
        }
    }

    /// Sets the ID of the netting set built by [`Self::into_netting_set`].
    pub fn with_netting_set_id(mut self, id: impl Into<NettingSetId>) -> Self {
        self.netting_set_id = id.into();
        self
    }

    /// Returns the raw records in file order.
    #[inline]
    pub fn records(&self) -> &[TradeRecord] {
        &self.records
    }

    /// Validates every record.
    ///
    /// # Errors
    ///
    /// `LoaderError::Validation` listing every issue of every record.
    pub fn validate(&self) -> Result<(), LoaderError> {
        self.convert().map(|_| ())
    }

    /// Validates the records and builds the netting set.
    pub fn into_netting_set(self) -> Result<NettingSet, LoaderError> {
        let trades = self.convert()?;
        Ok(NettingSet::new(self.netting_set_id, trades)?)
    }

    fn convert(&self) -> Result<Vec<Trade>, LoaderError> {
        let mut issues = Vec::new();
        let mut trades = Vec::with_capacity(self.records.len());
        let mut seen = HashSet::with_capacity(self.records.len());

        for (index, record) in self.records.iter().enumerate() {
            if !record.id.is_empty() && !seen.insert(record.id.as_str()) {
                issues.push(RecordIssue::new(
                    index,
                    Some(&record.id),
                    "id",
                    "duplicate trade id",
                ));
            }
            match record.to_trade(index) {
                Ok(trade) => trades.push(trade),
                Err(mut record_issues) => issues.append(&mut record_issues),
            }
        }

        if issues.is_empty() {
            debug!(trades = trades.len(), "all trade records valid");
            Ok(trades)
        } else {
            for issue in &issues {
                warn!(%issue, "invalid trade record");
            }
            Err(LoaderError::Validation(issues))
        }
    }
}

impl FromStr for JsonTradeLoader {
    type Err = LoaderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let document: TradeDocument = serde_json::from_str(s)?;
        Ok(Self::from_records(document.data))
    }
}

/// Loads a file straight into a netting set.
pub fn load_netting_set(path: impl AsRef<Path>) -> Result<NettingSet, LoaderError> {
    JsonTradeLoader::from_path(path)?.into_netting_set()
}
