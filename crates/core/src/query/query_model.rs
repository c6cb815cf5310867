//! Wire models for the query service.

use crate::market_data::StockRow;
use serde::{Deserialize, Serialize};

/// Free-text query with optional history hints.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct QueryRequest {
    pub query: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quarters: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keywords: Option<Vec<String>>,
}

impl QueryRequest {
    pub fn free_text(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            quarters: None,
            keywords: None,
        }
    }

    /// History request for one symbol over the given window, phrased the
    /// way the query service expects.
    pub fn history(symbol: &str, quarters: u32) -> Self {
        Self {
            query: format!("{} history", symbol),
            quarters: Some(quarters),
            keywords: Some(vec![symbol.to_string()]),
        }
    }
}

/// Query service reply: a natural-language message plus the raw rows feeding
/// the derivations. Rows pass through boundary normalization on deserialize.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct QueryResponse {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub data: Vec<StockRow>,
    #[serde(default)]
    pub intent: Option<String>,
}
