//! Watchlist module - the persistent set of tracked symbols.

mod watchlist_service;
#[cfg(test)]
mod watchlist_service_tests;
mod watchlist_traits;

pub use watchlist_service::WatchlistService;
pub use watchlist_traits::{WatchlistRepositoryTrait, WatchlistServiceTrait};
