use async_trait::async_trait;
use std::sync::Arc;

use crate::db::KvStore;
use stockscope_core::constants::WATCHLIST_STORE_KEY;
use stockscope_core::errors::{Result, StorageError};
use stockscope_core::market_data::StockRow;
use stockscope_core::watchlist::WatchlistRepositoryTrait;

/// Watchlist persistence over the key-value store: the full ordered
/// sequence lives as one JSON entry under a single named key.
pub struct SqliteWatchlistRepository {
    store: Arc<KvStore>,
}

impl SqliteWatchlistRepository {
    pub fn new(store: Arc<KvStore>) -> Self {
        SqliteWatchlistRepository { store }
    }
}

#[async_trait]
impl WatchlistRepositoryTrait for SqliteWatchlistRepository {
    fn load(&self) -> Result<Vec<StockRow>> {
        match self.store.get(WATCHLIST_STORE_KEY)? {
            Some(payload) => {
                let rows = serde_json::from_str(&payload).map_err(StorageError::from)?;
                Ok(rows)
            }
            // First launch: no entry yet, the watchlist starts empty.
            None => Ok(Vec::new()),
        }
    }

    async fn save(&self, rows: &[StockRow]) -> Result<()> {
        let payload = serde_json::to_string(rows).map_err(StorageError::from)?;
        self.store.set(WATCHLIST_STORE_KEY, &payload)
    }
}
