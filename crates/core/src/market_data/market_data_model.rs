//! Market data domain models.
//!
//! Rows arrive from the query service loosely shaped: numeric fields may be
//! JSON numbers, numeric strings, null, or absent, and a live `price` field
//! may stand in for `close`. All of that is normalized here, at deserialize
//! time, so every derivation downstream can assume fully-populated numeric
//! fields (defaulted to zero). Normalization never fails: upstream data
//! quality is outside this layer's control.

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// One symbol's price/volume record for a snapshot or time-series point.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct StockRow {
    pub symbol: String,
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub open: Decimal,
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub high: Decimal,
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub low: Decimal,
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub close: Decimal,
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub volume: Decimal,
    /// Present only in history responses.
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub turnover: Decimal,
    /// Live quote field, accepted as an alias for the display price.
    #[serde(
        default,
        deserialize_with = "lenient_opt_decimal",
        skip_serializing_if = "Option::is_none"
    )]
    pub price: Option<Decimal>,
    /// Upstream value kept for display; derivations recompute rather than
    /// trusting a possibly stale figure.
    #[serde(
        default,
        deserialize_with = "lenient_opt_decimal",
        skip_serializing_if = "Option::is_none"
    )]
    pub change_percent: Option<Decimal>,
    /// Time-series point identifier, present only on history rows.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
}

impl StockRow {
    /// Price used for ranking and rendering: the live quote when present,
    /// otherwise the close (already zero-defaulted).
    pub fn display_price(&self) -> Decimal {
        self.price.unwrap_or(self.close)
    }
}

fn decimal_from_value(value: &Value) -> Option<Decimal> {
    match value {
        Value::Number(n) => n.to_string().parse().ok(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn lenient_decimal<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(decimal_from_value(&value).unwrap_or(Decimal::ZERO))
}

fn lenient_opt_decimal<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(decimal_from_value(&value))
}
