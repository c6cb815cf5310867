//! Application-wide constants.

/// Maximum number of entries returned by the price leaderboard.
pub const TOP_STOCKS_LIMIT: usize = 8;

/// Durable-store key holding the serialized watchlist.
pub const WATCHLIST_STORE_KEY: &str = "stock-watchlist-storage";

/// History window sizes offered to the user, in quarters.
pub const HISTORY_WINDOWS: [u32; 3] = [2, 4, 12];
