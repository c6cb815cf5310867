//! SQLite storage implementation for Stockscope.
//!
//! This crate is the only place in the application where rusqlite
//! dependencies exist. It implements the repository traits defined in
//! `stockscope-core` over a single key-value table: the watchlist is one
//! serialized entry, read at startup and rewritten after every mutation.
//!
//! ```text
//!          core (domain)
//!                │
//!                ▼
//!    storage-sqlite (this crate)
//!                │
//!                ▼
//!            SQLite DB
//! ```

pub mod db;
pub mod errors;

// Repository implementations
pub mod watchlist;

// Re-export database utilities
pub use db::KvStore;
pub use watchlist::SqliteWatchlistRepository;

// Re-export from stockscope-core for convenience
pub use stockscope_core::errors::{Error, Result, StorageError};
