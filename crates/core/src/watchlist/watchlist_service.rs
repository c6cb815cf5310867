use super::{WatchlistRepositoryTrait, WatchlistServiceTrait};
use crate::market_data::StockRow;
use async_trait::async_trait;
use log::warn;
use std::sync::{Arc, PoisonError, RwLock};

/// Service maintaining the unique, ordered, persistent set of tracked rows.
///
/// In-memory state is authoritative for the session (optimistic
/// write-through): every mutation updates memory first, then persists the
/// full list through the injected repository. A failed write is logged as a
/// warning and does not undo the mutation.
pub struct WatchlistService {
    repository: Arc<dyn WatchlistRepositoryTrait>,
    entries: RwLock<Vec<StockRow>>,
}

impl WatchlistService {
    /// Creates the service, restoring prior persisted state. A failed
    /// restore starts the session with an empty watchlist.
    pub fn new(repository: Arc<dyn WatchlistRepositoryTrait>) -> Self {
        let entries = match repository.load() {
            Ok(rows) => rows,
            Err(e) => {
                warn!("Failed to restore watchlist, starting empty: {}", e);
                Vec::new()
            }
        };
        WatchlistService {
            repository,
            entries: RwLock::new(entries),
        }
    }

    async fn persist(&self, snapshot: Vec<StockRow>) {
        if let Err(e) = self.repository.save(&snapshot).await {
            warn!("Failed to persist watchlist, in-memory state kept: {}", e);
        }
    }
}

#[async_trait]
impl WatchlistServiceTrait for WatchlistService {
    async fn add(&self, row: StockRow) -> bool {
        let snapshot = {
            let mut entries = self
                .entries
                .write()
                .unwrap_or_else(PoisonError::into_inner);
            if entries.iter().any(|e| e.symbol == row.symbol) {
                return false;
            }
            entries.push(row);
            entries.clone()
        };
        self.persist(snapshot).await;
        true
    }

    async fn remove(&self, symbol: &str) {
        let snapshot = {
            let mut entries = self
                .entries
                .write()
                .unwrap_or_else(PoisonError::into_inner);
            let before = entries.len();
            entries.retain(|e| e.symbol != symbol);
            if entries.len() == before {
                return;
            }
            entries.clone()
        };
        self.persist(snapshot).await;
    }

    fn is_watching(&self, symbol: &str) -> bool {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .any(|e| e.symbol == symbol)
    }

    fn list(&self) -> Vec<StockRow> {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}
