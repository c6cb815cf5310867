//! Analytics module - derived views over raw row collections.
//!
//! Every view here is a pure function of its input, recomputed on every
//! call; the only cross-dependency is the leaderboard reading watchlist
//! membership for its `watched` tags.

mod analytics_model;
mod analytics_service;

pub use analytics_model::{HistoryExtremes, HistoryMetrics, LeaderboardEntry, MarketSnapshot, VolumeShare};
pub use analytics_service::{AnalyticsService, AnalyticsServiceTrait};
