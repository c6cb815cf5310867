//! Tests for the WatchlistService contract.
//!
//! # Critical Contract Points
//!
//! 1. Uniqueness: `add` rejects a duplicate symbol without mutating state
//! 2. Idempotence: repeated `add`/`remove` calls are safe signals, not errors
//! 3. Optimistic write-through: a failed durable write keeps the in-memory
//!    mutation
//! 4. Restore: prior persisted state is loaded at construction, a failed
//!    load starts empty

use crate::errors::{Error, Result, StorageError};
use crate::market_data::StockRow;
use crate::watchlist::{WatchlistRepositoryTrait, WatchlistService, WatchlistServiceTrait};
use async_trait::async_trait;
use rust_decimal_macros::dec;
use std::sync::{Arc, Mutex};

#[derive(Default)]
struct MockWatchlistRepository {
    rows: Mutex<Vec<StockRow>>,
    fail_on_save: Mutex<bool>,
    fail_on_load: Mutex<bool>,
    save_count: Mutex<usize>,
}

impl MockWatchlistRepository {
    fn new() -> Self {
        Self::default()
    }

    fn with_rows(rows: Vec<StockRow>) -> Self {
        Self {
            rows: Mutex::new(rows),
            ..Self::default()
        }
    }

    fn set_fail_on_save(&self, fail: bool) {
        *self.fail_on_save.lock().unwrap() = fail;
    }

    fn set_fail_on_load(&self, fail: bool) {
        *self.fail_on_load.lock().unwrap() = fail;
    }

    fn persisted(&self) -> Vec<StockRow> {
        self.rows.lock().unwrap().clone()
    }

    fn save_count(&self) -> usize {
        *self.save_count.lock().unwrap()
    }
}

#[async_trait]
impl WatchlistRepositoryTrait for MockWatchlistRepository {
    fn load(&self) -> Result<Vec<StockRow>> {
        if *self.fail_on_load.lock().unwrap() {
            return Err(Error::Storage(StorageError::ConnectionFailed(
                "intentional load failure".into(),
            )));
        }
        Ok(self.rows.lock().unwrap().clone())
    }

    async fn save(&self, rows: &[StockRow]) -> Result<()> {
        *self.save_count.lock().unwrap() += 1;
        if *self.fail_on_save.lock().unwrap() {
            return Err(Error::Storage(StorageError::QueryFailed(
                "intentional save failure".into(),
            )));
        }
        *self.rows.lock().unwrap() = rows.to_vec();
        Ok(())
    }
}

fn row(symbol: &str) -> StockRow {
    StockRow {
        symbol: symbol.to_string(),
        close: dec!(100),
        volume: dec!(1000),
        ..Default::default()
    }
}

#[tokio::test]
async fn add_appends_and_persists() {
    let repo = Arc::new(MockWatchlistRepository::new());
    let service = WatchlistService::new(repo.clone());

    assert!(service.add(row("TCS")).await);
    assert!(service.add(row("INFY")).await);

    let symbols: Vec<_> = service.list().iter().map(|r| r.symbol.clone()).collect();
    assert_eq!(symbols, vec!["TCS", "INFY"]);
    assert_eq!(repo.persisted().len(), 2);
}

#[tokio::test]
async fn duplicate_add_is_rejected_without_mutation() {
    let repo = Arc::new(MockWatchlistRepository::new());
    let service = WatchlistService::new(repo.clone());

    assert!(service.add(row("TCS")).await);
    let saves_after_first = repo.save_count();

    assert!(!service.add(row("TCS")).await);
    assert_eq!(service.list().len(), 1);
    // Rejected add must not trigger a durable write either.
    assert_eq!(repo.save_count(), saves_after_first);
}

#[tokio::test]
async fn remove_is_idempotent() {
    let repo = Arc::new(MockWatchlistRepository::new());
    let service = WatchlistService::new(repo.clone());

    service.add(row("TCS")).await;
    service.remove("TCS").await;
    assert!(service.list().is_empty());

    // Removing an absent symbol is a no-op, not an error.
    service.remove("TCS").await;
    service.remove("NEVER-ADDED").await;
    assert!(service.list().is_empty());
}

#[tokio::test]
async fn add_then_remove_round_trip() {
    let service = WatchlistService::new(Arc::new(MockWatchlistRepository::new()));

    service.add(row("HDFC")).await;
    assert!(service.is_watching("HDFC"));

    service.remove("HDFC").await;
    assert!(!service.is_watching("HDFC"));
}

#[tokio::test]
async fn restores_persisted_state_preserving_order() {
    let repo = Arc::new(MockWatchlistRepository::with_rows(vec![
        row("TCS"),
        row("INFY"),
    ]));
    let service = WatchlistService::new(repo);

    let symbols: Vec<_> = service.list().iter().map(|r| r.symbol.clone()).collect();
    assert_eq!(symbols, vec!["TCS", "INFY"]);
    assert!(service.is_watching("INFY"));
}

#[tokio::test]
async fn failed_restore_starts_empty() {
    let repo = Arc::new(MockWatchlistRepository::new());
    repo.set_fail_on_load(true);

    let service = WatchlistService::new(repo);
    assert!(service.list().is_empty());
}

#[tokio::test]
async fn failed_save_keeps_in_memory_mutation() {
    let repo = Arc::new(MockWatchlistRepository::new());
    let service = WatchlistService::new(repo.clone());
    repo.set_fail_on_save(true);

    assert!(service.add(row("TCS")).await);
    assert!(service.is_watching("TCS"));
    assert!(repo.persisted().is_empty());

    // The session keeps working once the store recovers.
    repo.set_fail_on_save(false);
    assert!(service.add(row("INFY")).await);
    assert_eq!(repo.persisted().len(), 2);
}

#[tokio::test]
async fn list_returns_a_snapshot() {
    let service = WatchlistService::new(Arc::new(MockWatchlistRepository::new()));
    service.add(row("TCS")).await;

    let mut snapshot = service.list();
    snapshot.clear();

    assert_eq!(service.list().len(), 1);
}
