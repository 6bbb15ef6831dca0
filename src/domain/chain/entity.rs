//! Chain request and response entities

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::sequence::{InstanceId, Sequence};
use crate::domain::random::base36_token;

/// Correlation identifier shared by every hop of one chain
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TraceId(String);

impl TraceId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generate a fresh id: `trace-<epoch millis>-<random base-36 suffix>`
    pub fn generate() -> Self {
        Self(format!(
            "trace-{}-{}",
            chrono::Utc::now().timestamp_millis(),
            base36_token(13)
        ))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TraceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for TraceId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Inbound chain request parameters
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChainRequest {
    #[serde(default)]
    pub seq: Option<String>,
    #[serde(default, rename = "traceId")]
    pub trace_id: Option<String>,
}

impl ChainRequest {
    pub fn new(seq: impl Into<String>) -> Self {
        Self {
            seq: Some(seq.into()),
            trace_id: None,
        }
    }

    pub fn with_trace_id(mut self, trace_id: impl Into<String>) -> Self {
        self.trace_id = Some(trace_id.into());
        self
    }
}

/// Completion payload produced by the last hop of a chain
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinalResult {
    pub status: String,
    pub data: String,
    pub random_value: f64,
}

impl FinalResult {
    pub fn completed(original_sequence: &str) -> Self {
        Self {
            status: "completed".to_string(),
            data: format!("Processed data from chain {}", original_sequence),
            random_value: rand::random(),
        }
    }
}

/// Response tree node produced by one hop
///
/// Fields a downstream instance sends that this type does not know about are
/// kept in `extra` so an embedded child is passed upward verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChainResponse {
    pub instance: InstanceId,
    pub timestamp: i64,
    pub trace_id: TraceId,
    pub message: String,
    pub original_sequence: String,
    #[serde(default)]
    pub chain_position: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remaining_sequence: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub processing_time: Option<u64>,
    #[serde(default)]
    pub child_responses: Vec<ChainResponse>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub final_result: Option<FinalResult>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_chain_time: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ChainResponse {
    /// Start a response carrying only what every hop knows up front
    pub fn new(
        instance: InstanceId,
        trace_id: TraceId,
        message: impl Into<String>,
        original_sequence: impl Into<String>,
    ) -> Self {
        Self {
            instance,
            timestamp: chrono::Utc::now().timestamp_millis(),
            trace_id,
            message: message.into(),
            original_sequence: original_sequence.into(),
            chain_position: None,
            remaining_sequence: None,
            processing_time: None,
            child_responses: Vec::new(),
            final_result: None,
            total_chain_time: None,
            error: None,
            error_message: None,
            extra: Map::new(),
        }
    }

    pub fn with_position(mut self, position: Option<usize>, remaining: &Sequence) -> Self {
        self.chain_position = position;
        self.remaining_sequence = Some(remaining.to_string());
        self
    }

    pub fn with_processing_time(mut self, processing_time: u64) -> Self {
        self.processing_time = Some(processing_time);
        self
    }

    pub fn fail(&mut self, error: impl Into<String>, error_message: impl Into<String>) {
        self.error = Some(error.into());
        self.error_message = Some(error_message.into());
    }

    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }

    pub fn is_terminal(&self) -> bool {
        self.final_result.is_some()
    }

    /// The single downstream response embedded in this node, if any
    pub fn child(&self) -> Option<&ChainResponse> {
        self.child_responses.first()
    }

    /// Walk this node and its descendants, root first
    pub fn hops(&self) -> Hops<'_> {
        Hops { next: Some(self) }
    }
}

/// Iterator over a response chain, see [`ChainResponse::hops`]
#[derive(Debug)]
pub struct Hops<'a> {
    next: Option<&'a ChainResponse>,
}

impl<'a> Iterator for Hops<'a> {
    type Item = &'a ChainResponse;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.child();
        Some(current)
    }
}

/// Where a hop ended up in the chain state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HopState {
    /// Relayed the whole sequence to the instance that should handle it
    Forwarding,
    /// Local work done, waiting on the next hop
    Processing,
    /// Last hop, produced the completion payload
    Terminal,
    /// Next hop answered successfully
    Completed,
    /// Next hop could not be reached or answered with an error
    Failed,
}

impl HopState {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Forwarding => "forwarding",
            Self::Processing => "processing",
            Self::Terminal => "terminal",
            Self::Completed => "completed",
            Self::Failed => "failed",
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failed)
    }
}

impl fmt::Display for HopState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Final state of a hop together with the response it produced
#[derive(Debug, Clone)]
pub struct HopOutcome {
    pub state: HopState,
    pub response: ChainResponse,
}

impl HopOutcome {
    pub fn new(state: HopState, response: ChainResponse) -> Self {
        Self { state, response }
    }
}
