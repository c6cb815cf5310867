//! Query module - boundary to the external conversational query service.

mod history_guard;
mod query_client;
mod query_model;

pub use history_guard::{HistoryRequest, HistoryRequestGuard};
pub use query_client::{HttpQueryClient, QueryClientTrait};
pub use query_model::{QueryRequest, QueryResponse};
