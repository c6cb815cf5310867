//! Stockscope Core - Domain entities, services, and traits.
//!
//! This crate contains the market-data derivation and watchlist logic for
//! the Stockscope dashboard. It is storage-agnostic and defines traits that
//! are implemented by the `storage-sqlite` crate.

pub mod analytics;
pub mod constants;
pub mod errors;
pub mod market_data;
pub mod query;
pub mod watchlist;

// Re-export common types
pub use market_data::StockRow;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
