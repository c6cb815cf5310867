//! Derived-view models consumed by the rendering layer.

use crate::market_data::StockRow;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Headline KPIs over a full row collection.
///
/// Extrema carry the whole winning row so the UI can show symbol and value
/// together; all are `None` for an empty collection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct MarketSnapshot {
    pub total: usize,
    pub highest_price: Option<StockRow>,
    pub lowest_price: Option<StockRow>,
    pub highest_volume: Option<StockRow>,
}

/// One ranked leaderboard row, tagged with watchlist membership.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntry {
    #[serde(flatten)]
    pub row: StockRow,
    /// Ranking price: live quote when present, else close, else zero. Kept
    /// beside the row rather than written back onto it.
    pub display_price: Decimal,
    pub watched: bool,
}

/// A row annotated with its share of total traded volume.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VolumeShare {
    #[serde(flatten)]
    pub row: StockRow,
    pub percent: Decimal,
}

/// Per-field maxima across a history series, rendered as summary tiles.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct HistoryExtremes {
    pub high: Decimal,
    pub low: Decimal,
    pub volume: Decimal,
    pub turnover: Decimal,
}

/// Summary of one symbol's time series over the selected window.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct HistoryMetrics {
    pub latest: StockRow,
    pub first: StockRow,
    /// Percent change from first to latest close, rounded to 2 decimals.
    pub change_percent: Decimal,
    pub is_positive: bool,
    pub extremes: HistoryExtremes,
}
