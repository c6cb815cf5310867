mod repository;

pub use repository::SqliteWatchlistRepository;
