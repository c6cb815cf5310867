//! HTTP client for the query service.

use super::{QueryRequest, QueryResponse};
use crate::errors::Result;
use async_trait::async_trait;
use log::debug;

/// Trait for the query-service client.
///
/// The client performs a single attempt per call; retry policy belongs to
/// the service, not this layer.
#[async_trait]
pub trait QueryClientTrait: Send + Sync {
    async fn query(&self, request: &QueryRequest) -> Result<QueryResponse>;

    /// Fetches one symbol's time series over the given window, in quarters.
    /// Changing the window means a fresh fetch, never client-side slicing.
    async fn history(&self, symbol: &str, quarters: u32) -> Result<QueryResponse> {
        self.query(&QueryRequest::history(symbol, quarters)).await
    }
}

/// Query-service client over HTTP.
pub struct HttpQueryClient {
    client: reqwest::Client,
    base_url: String,
}

impl HttpQueryClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl QueryClientTrait for HttpQueryClient {
    async fn query(&self, request: &QueryRequest) -> Result<QueryResponse> {
        debug!("Querying service: {}", request.query);
        let response = self
            .client
            .post(format!("{}/chat", self.base_url))
            .json(request)
            .send()
            .await?
            .error_for_status()?
            .json::<QueryResponse>()
            .await?;
        Ok(response)
    }
}
