//! Stale-response guard for history fetches.
//!
//! The history window selector refetches on every change with no explicit
//! cancellation, so a slow earlier response can land after a newer request
//! was issued. Each in-flight fetch is tagged with the parameters that
//! produced it; a response whose tag no longer matches the latest request
//! is discarded instead of overwriting newer data.

use crate::market_data::StockRow;
use std::sync::{PoisonError, RwLock};

/// Parameters identifying one history fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryRequest {
    pub symbol: String,
    pub quarters: u32,
}

/// Tracks the latest requested history parameters and filters completions.
#[derive(Default)]
pub struct HistoryRequestGuard {
    latest: RwLock<Option<HistoryRequest>>,
}

impl HistoryRequestGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a new fetch as the latest one and returns its tag.
    pub fn begin(&self, symbol: &str, quarters: u32) -> HistoryRequest {
        let tag = HistoryRequest {
            symbol: symbol.to_string(),
            quarters,
        };
        *self
            .latest
            .write()
            .unwrap_or_else(PoisonError::into_inner) = Some(tag.clone());
        tag
    }

    /// Accepts a completed fetch only if its tag still matches the latest
    /// request; stale completions return `None` and are dropped.
    pub fn accept(&self, tag: &HistoryRequest, rows: Vec<StockRow>) -> Option<Vec<StockRow>> {
        let latest = self.latest.read().unwrap_or_else(PoisonError::into_inner);
        if latest.as_ref() == Some(tag) {
            Some(rows)
        } else {
            log::debug!(
                "Discarding stale history response for {} ({}q)",
                tag.symbol,
                tag.quarters
            );
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(n: usize) -> Vec<StockRow> {
        (0..n)
            .map(|i| StockRow {
                symbol: "TCS".to_string(),
                date: Some(format!("Q{}", i + 1)),
                ..Default::default()
            })
            .collect()
    }

    #[test]
    fn latest_request_is_accepted() {
        let guard = HistoryRequestGuard::new();
        let tag = guard.begin("TCS", 4);
        assert_eq!(guard.accept(&tag, rows(4)).unwrap().len(), 4);
    }

    #[test]
    fn superseded_request_is_discarded() {
        let guard = HistoryRequestGuard::new();
        let slow = guard.begin("TCS", 12);
        let fast = guard.begin("TCS", 2);

        // The newer selection completes first.
        assert!(guard.accept(&fast, rows(2)).is_some());
        // The older, slower response must not overwrite it.
        assert!(guard.accept(&slow, rows(12)).is_none());
    }

    #[test]
    fn symbol_change_also_supersedes() {
        let guard = HistoryRequestGuard::new();
        let old = guard.begin("TCS", 4);
        guard.begin("INFY", 4);
        assert!(guard.accept(&old, rows(4)).is_none());
    }

    #[test]
    fn same_parameters_reissued_still_match() {
        let guard = HistoryRequestGuard::new();
        let first = guard.begin("TCS", 4);
        guard.begin("TCS", 4);
        assert!(guard.accept(&first, rows(4)).is_some());
    }
}
