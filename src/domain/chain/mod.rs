//! Chain domain - Cascading multi-instance call simulation

mod client;
mod coordinator;
mod entity;
mod error;
mod resolver;
mod sequence;

pub use client::{ChainClient, HopRequest};
pub use coordinator::{ChainCoordinator, ChainSettings, DEFAULT_HOP_TIMEOUT};
pub use entity::{
    ChainRequest, ChainResponse, FinalResult, HopOutcome, HopState, Hops, TraceId,
};
pub use error::ChainError;
pub use resolver::{InstanceResolver, NamingResolver, StaticResolver};
pub use sequence::{
    AddressingDiscipline, HopPlan, InstanceId, Sequence, Slot, DEFAULT_SEQUENCE,
};

#[cfg(test)]
pub use client::mock;
