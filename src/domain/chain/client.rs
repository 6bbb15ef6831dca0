//! Outbound hop transport

use async_trait::async_trait;

use super::entity::{ChainResponse, TraceId};
use super::error::ChainError;

/// One forwarded chain call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HopRequest {
    /// Base URL of the next instance, as produced by the resolver
    pub address: String,
    pub sequence: String,
    pub trace_id: TraceId,
}

impl HopRequest {
    pub fn url(&self) -> String {
        format!("{}/chain", self.address.trim_end_matches('/'))
    }
}

/// Trait for forwarding a chain request to another instance (for mocking)
#[async_trait]
pub trait ChainClient: Send + Sync + std::fmt::Debug {
    /// Issue the call and decode the downstream chain response
    ///
    /// Non-2xx answers come back as [`ChainError::Downstream`], with the body
    /// attached when it decodes as a chain response.
    async fn forward(&self, request: &HopRequest) -> Result<ChainResponse, ChainError>;
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_appends_chain_path() {
        let request = HopRequest {
            address: "http://instance-4:3000/".to_string(),
            sequence: "4".to_string(),
            trace_id: TraceId::new("t"),
        };

        assert_eq!(request.url(), "http://instance-4:3000/chain");
    }
}
