use async_trait::async_trait;
use axum::http::HeaderMap;
use tracing::debug;

use crate::domain::chain::{ChainClient, ChainError, ChainResponse, HopRequest};
use crate::infrastructure::observability::inject_trace_context;

/// Chain client issuing `GET <address>/chain` with reqwest
///
/// Carries no timeout of its own; the coordinator bounds every hop.
#[derive(Debug, Clone)]
pub struct HttpChainClient {
    client: reqwest::Client,
}

impl HttpChainClient {
    pub fn new() -> Result<Self, reqwest::Error> {
        Ok(Self {
            client: reqwest::Client::builder()
                .user_agent(concat!("traffic-testbench/", env!("CARGO_PKG_VERSION")))
                .build()?,
        })
    }

    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ChainClient for HttpChainClient {
    async fn forward(&self, request: &HopRequest) -> Result<ChainResponse, ChainError> {
        let url = request.url();
        let mut headers = HeaderMap::new();
        inject_trace_context(&mut headers);

        debug!(url = %url, sequence = %request.sequence, trace_id = %request.trace_id, "Forwarding chain hop");

        let response = self
            .client
            .get(&url)
            .query(&[
                ("seq", request.sequence.as_str()),
                ("traceId", request.trace_id.as_str()),
            ])
            .headers(headers)
            .send()
            .await
            .map_err(|e| ChainError::transport(e.to_string()))?;

        let status = response.status();

        if !status.is_success() {
            let body = response.json::<ChainResponse>().await.ok().map(Box::new);

            return Err(ChainError::Downstream {
                status: status.as_u16(),
                body,
            });
        }

        response
            .json::<ChainResponse>()
            .await
            .map_err(|e| ChainError::decode(e.to_string()))
    }
}
