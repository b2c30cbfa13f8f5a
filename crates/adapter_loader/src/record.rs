//! Raw FIRE derivative records and their validation.
//!
//! Records are deserialised with every field in its wire form (dates and
//! enumerations as strings) so that a bad value surfaces as a
//! [`RecordIssue`] naming the field rather than as an opaque JSON error.
//! Unknown fields are ignored; FIRE documents carry many more attributes
//! than the engine needs.

use serde::{Deserialize, Serialize};

use saccr_core::types::{CurrencyCode, Date};
use saccr_engine::netting::{AssetClass, LegType, Trade};

use crate::error::RecordIssue;

/// Top-level FIRE document: `{"data": [ ... ]}`.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct TradeDocument {
    /// Trade records in file order
    pub data: Vec<TradeRecord>,
}

/// One derivative record as it appears on the wire.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct TradeRecord {
    /// Trade identifier
    pub id: String,
    /// Valuation date of the record (ISO 8601 date or timestamp)
    pub date: String,
    /// Asset class tag, e.g. `ir`
    pub asset_class: String,
    /// ISO 4217 code of the hedging set
    pub currency_code: String,
    /// Face value
    pub notional_amount: f64,
    /// Pay leg type
    pub payment_type: String,
    /// Receive leg type
    pub receive_type: String,
    /// First accrual date
    pub start_date: String,
    /// Final date
    pub end_date: String,
    /// Dirty mark-to-market
    pub mtm_dirty: f64,
    /// Product type, e.g. `vanilla_swap`
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub product_type: Option<String>,
    /// Trade date
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trade_date: Option<String>,
    /// Value date
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value_date: Option<String>,
}

impl TradeRecord {
    /// Validates the record and converts it into an engine trade.
    ///
    /// All problems of the record are returned together.
    pub fn to_trade(&self, index: usize) -> Result<Trade, Vec<RecordIssue>> {
        let mut issues = Vec::new();
        let id = Some(self.id.as_str());
        let mut issue = |field: &'static str, message: String| {
            issues.push(RecordIssue::new(index, id, field, message));
        };

        if self.id.trim().is_empty() {
            issue("id", "must not be empty".to_string());
        }

        let mut date = |field: &'static str, raw: &str| match Date::parse(raw) {
            Ok(d) => Some(d),
            Err(e) => {
                issue(field, e.to_string());
                None
            }
        };
        let valuation_date = date("date", &self.date);
        let start_date = date("start_date", &self.start_date);
        let end_date = date("end_date", &self.end_date);
        let trade_date = self.trade_date.as_deref().and_then(|raw| date("trade_date", raw));
        let value_date = self.value_date.as_deref().and_then(|raw| date("value_date", raw));

        if let (Some(start), Some(end)) = (start_date, end_date) {
            if end < start {
                issue("end_date", format!("{} is before start_date {}", end, start));
            }
        }

        if !self.notional_amount.is_finite() || self.notional_amount < 0.0 {
            issue(
                "notional_amount",
                format!("must be a finite non-negative number, got {}", self.notional_amount),
            );
        }
        if !self.mtm_dirty.is_finite() {
            issue("mtm_dirty", format!("must be finite, got {}", self.mtm_dirty));
        }

        let currency = CurrencyCode::new(&self.currency_code)
            .map_err(|e| issue("currency_code", e.to_string()))
            .ok();
        let payment_type = self
            .payment_type
            .parse::<LegType>()
            .map_err(|e| issue("payment_type", e.to_string()))
            .ok();
        let receive_type = self
            .receive_type
            .parse::<LegType>()
            .map_err(|e| issue("receive_type", e.to_string()))
            .ok();
        let asset_class = self
            .asset_class
            .parse::<AssetClass>()
            .map_err(|e| issue("asset_class", e.to_string()))
            .ok();

        match (
            valuation_date,
            start_date,
            end_date,
            currency,
            payment_type,
            receive_type,
            asset_class,
        ) {
            (Some(as_of), Some(start), Some(end), Some(ccy), Some(pay), Some(recv), Some(class))
                if issues.is_empty() =>
            {
                Trade::builder()
                    .id(self.id.as_str())
                    .asset_class(class)
                    .currency(ccy)
                    .notional(self.notional_amount)
                    .legs(pay, recv)
                    .valuation_date(as_of)
                    .start_date(start)
                    .end_date(end)
                    .trade_date(trade_date)
                    .value_date(value_date)
                    .mtm_dirty(self.mtm_dirty)
                    .product_type(self.product_type.clone())
                    .build()
                    .map_err(|e| vec![RecordIssue::new(index, id, "record", e.to_string())])
            }
            _ => Err(issues),
        }
    }
}
