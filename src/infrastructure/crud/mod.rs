//! CRUD simulation infrastructure

mod service;

pub use service::{CrudReport, CrudService, OperationOutcome};
