//! Service computing derived views over raw row collections.

use std::sync::Arc;

use log::debug;
use rust_decimal::Decimal;

use crate::constants::TOP_STOCKS_LIMIT;
use crate::market_data::StockRow;
use crate::watchlist::WatchlistServiceTrait;

use super::{HistoryExtremes, HistoryMetrics, LeaderboardEntry, MarketSnapshot, VolumeShare};

const ONE_HUNDRED: Decimal = Decimal::ONE_HUNDRED;

/// Trait for the derivation service.
///
/// Every method is deterministic over its input and never fails: empty
/// collections have defined zero/`None` results.
pub trait AnalyticsServiceTrait: Send + Sync {
    /// Headline KPIs: universe size plus close/volume extrema, ties broken
    /// by first occurrence in input order.
    fn market_snapshot(&self, rows: &[StockRow]) -> MarketSnapshot;

    /// Bounded leaderboard: stable-sorted descending by display price,
    /// truncated to the top 8, each entry tagged with watchlist membership.
    fn price_leaders(&self, rows: &[StockRow]) -> Vec<LeaderboardEntry>;

    /// Each row's percentage share of total traded volume. A zero total
    /// yields all-zero shares rather than NaN.
    fn volume_distribution(&self, rows: &[StockRow]) -> Vec<VolumeShare>;

    /// Summary of one symbol's ascending time series: first/latest close,
    /// percent change, and per-field maxima over the whole window.
    fn history_metrics(&self, series: &[StockRow]) -> HistoryMetrics;
}

/// Computes derived views for the dashboard.
pub struct AnalyticsService {
    watchlist: Arc<dyn WatchlistServiceTrait>,
}

impl AnalyticsService {
    pub fn new(watchlist: Arc<dyn WatchlistServiceTrait>) -> Self {
        Self { watchlist }
    }
}

impl AnalyticsServiceTrait for AnalyticsService {
    fn market_snapshot(&self, rows: &[StockRow]) -> MarketSnapshot {
        let mut highest_price: Option<&StockRow> = None;
        let mut lowest_price: Option<&StockRow> = None;
        let mut highest_volume: Option<&StockRow> = None;

        // Strict comparisons keep the first occurrence on ties.
        for row in rows {
            if highest_price.is_none_or(|best| row.close > best.close) {
                highest_price = Some(row);
            }
            if lowest_price.is_none_or(|best| row.close < best.close) {
                lowest_price = Some(row);
            }
            if highest_volume.is_none_or(|best| row.volume > best.volume) {
                highest_volume = Some(row);
            }
        }

        MarketSnapshot {
            total: rows.len(),
            highest_price: highest_price.cloned(),
            lowest_price: lowest_price.cloned(),
            highest_volume: highest_volume.cloned(),
        }
    }

    fn price_leaders(&self, rows: &[StockRow]) -> Vec<LeaderboardEntry> {
        let mut ranked: Vec<(Decimal, &StockRow)> = rows
            .iter()
            .map(|row| (row.display_price(), row))
            .collect();
        // Stable sort: equal display prices keep input order, so repeated
        // calls on identical input rank identically.
        ranked.sort_by(|a, b| b.0.cmp(&a.0));
        ranked.truncate(TOP_STOCKS_LIMIT);

        debug!("Ranked {} of {} rows for the leaderboard", ranked.len(), rows.len());

        ranked
            .into_iter()
            .map(|(display_price, row)| LeaderboardEntry {
                watched: self.watchlist.is_watching(&row.symbol),
                row: row.clone(),
                display_price,
            })
            .collect()
    }

    fn volume_distribution(&self, rows: &[StockRow]) -> Vec<VolumeShare> {
        let total_volume: Decimal = rows.iter().map(|r| r.volume).sum();

        rows.iter()
            .map(|row| VolumeShare {
                percent: if total_volume.is_zero() {
                    Decimal::ZERO
                } else {
                    row.volume * ONE_HUNDRED / total_volume
                },
                row: row.clone(),
            })
            .collect()
    }

    fn history_metrics(&self, series: &[StockRow]) -> HistoryMetrics {
        let first = series.first().cloned().unwrap_or_default();
        let latest = series.last().cloned().unwrap_or_default();

        let change_percent = if series.len() < 2 || first.close.is_zero() {
            Decimal::ZERO
        } else {
            ((latest.close - first.close) / first.close * ONE_HUNDRED).round_dp(2)
        };

        let mut extremes = HistoryExtremes::default();
        for row in series {
            extremes.high = extremes.high.max(row.high);
            extremes.low = extremes.low.max(row.low);
            extremes.volume = extremes.volume.max(row.volume);
            extremes.turnover = extremes.turnover.max(row.turnover);
        }

        HistoryMetrics {
            is_positive: latest.close >= first.close,
            latest,
            first,
            change_percent,
            extremes,
        }
    }
}
