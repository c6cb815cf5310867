use crate::errors::Result;
use crate::market_data::StockRow;
use async_trait::async_trait;

/// Trait for watchlist persistence operations.
///
/// The store holds a single named entry with the full serialized sequence;
/// `save` always writes the whole list.
#[async_trait]
pub trait WatchlistRepositoryTrait: Send + Sync {
    fn load(&self) -> Result<Vec<StockRow>>;
    async fn save(&self, rows: &[StockRow]) -> Result<()>;
}

/// Trait for watchlist service operations.
///
/// All operations are total: duplicate adds and absent removes are signals,
/// not errors, and a failed durable write never rolls back the in-memory
/// mutation.
#[async_trait]
pub trait WatchlistServiceTrait: Send + Sync {
    /// Appends `row` unless its symbol is already tracked. Returns whether
    /// the row was added; callers use the boolean to pick user feedback.
    async fn add(&self, row: StockRow) -> bool;

    /// Removes the row with the given symbol. No-op when absent.
    async fn remove(&self, symbol: &str);

    /// Whether a row with the given symbol is currently tracked.
    fn is_watching(&self, symbol: &str) -> bool;

    /// Snapshot of the current ordered sequence.
    fn list(&self) -> Vec<StockRow>;
}
