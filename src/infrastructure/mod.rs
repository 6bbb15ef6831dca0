//! Infrastructure layer - External service implementations

pub mod chain;
pub mod crud;
pub mod observability;
