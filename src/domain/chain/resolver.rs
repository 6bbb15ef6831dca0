//! Instance address resolution

use std::collections::HashMap;
use std::fmt;

use super::error::ChainError;
use super::sequence::InstanceId;

/// Maps an instance identifier to the base URL its `/chain` endpoint lives under
pub trait InstanceResolver: Send + Sync + fmt::Debug {
    fn resolve(&self, instance: InstanceId) -> Result<String, ChainError>;
}

/// Deterministic naming convention: `<base>-<id>:<port>`
///
/// Instance `0` resolves to the bare base address unless
/// `zero_is_unsuffixed` is turned off. Nothing checks that the address is
/// reachable; that only shows up when a hop calls it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamingResolver {
    base_url: String,
    port: u16,
    zero_is_unsuffixed: bool,
}

impl NamingResolver {
    pub fn new(base_url: impl Into<String>, port: u16) -> Self {
        Self {
            base_url: base_url.into(),
            port,
            zero_is_unsuffixed: true,
        }
    }

    pub fn with_zero_unsuffixed(mut self, zero_is_unsuffixed: bool) -> Self {
        self.zero_is_unsuffixed = zero_is_unsuffixed;
        self
    }

    pub fn address_of(&self, instance: InstanceId) -> String {
        if instance == 0 && self.zero_is_unsuffixed {
            format!("{}:{}", self.base_url, self.port)
        } else {
            format!("{}-{}:{}", self.base_url, instance, self.port)
        }
    }
}

impl InstanceResolver for NamingResolver {
    fn resolve(&self, instance: InstanceId) -> Result<String, ChainError> {
        Ok(self.address_of(instance))
    }
}

/// Fixed table of instance addresses
#[derive(Debug, Clone, Default)]
pub struct StaticResolver {
    addresses: HashMap<InstanceId, String>,
}

impl StaticResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_instance(mut self, instance: InstanceId, address: impl Into<String>) -> Self {
        self.addresses.insert(instance, address.into());
        self
    }
}

impl InstanceResolver for StaticResolver {
    fn resolve(&self, instance: InstanceId) -> Result<String, ChainError> {
        self.addresses
            .get(&instance)
            .cloned()
            .ok_or(ChainError::UnknownInstance { instance })
    }
}
