//! Market data module - the canonical stock row and boundary normalization.

mod market_data_model;

pub use market_data_model::StockRow;
