//! Domain layer - Core simulation logic and entities

pub mod chain;
pub mod crud;
pub mod error;
pub mod random;

pub use chain::{
    AddressingDiscipline, ChainClient, ChainCoordinator, ChainError, ChainRequest, ChainResponse,
    ChainSettings, FinalResult, HopOutcome, HopRequest, HopState, InstanceId, InstanceResolver,
    NamingResolver, Sequence, StaticResolver, TraceId,
};
pub use crud::{CrudFlags, InMemoryRecordRepository, Record, RecordRepository};
pub use error::DomainError;
