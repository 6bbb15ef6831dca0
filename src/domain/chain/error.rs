//! Chain hop errors

use thiserror::Error;

use super::entity::ChainResponse;
use super::sequence::InstanceId;

/// Reasons a hop could not obtain an answer from the next instance
#[derive(Debug, Clone, Error)]
pub enum ChainError {
    #[error("invalid instance identifier '{symbol}'")]
    InvalidInstance { symbol: char },

    #[error("no address known for instance {instance}")]
    UnknownInstance { instance: InstanceId },

    #[error("timeout of {timeout_ms}ms exceeded")]
    Timeout { timeout_ms: u64 },

    #[error("{message}")]
    Transport { message: String },

    #[error("Request failed with status code {status}")]
    Downstream {
        status: u16,
        body: Option<Box<ChainResponse>>,
    },

    #[error("invalid response from downstream instance: {message}")]
    Decode { message: String },

    #[error("hop task aborted: {message}")]
    Task { message: String },
}

impl ChainError {
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// Split off the chain-shaped error report a failing downstream hop sent
    ///
    /// Returns the report when the downstream answered non-2xx with a chain
    /// response carrying its own `error`, otherwise hands the error back.
    pub fn into_report(self) -> Result<Box<ChainResponse>, ChainError> {
        match self {
            Self::Downstream {
                body: Some(body), ..
            } if body.is_error() => Ok(body),
            other => Err(other),
        }
    }
}
