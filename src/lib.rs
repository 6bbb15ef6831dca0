//! Traffic Testbench
//!
//! Synthetic HTTP traffic for exercising observability pipelines:
//! - Multi-instance `/chain` requests that hop across a fleet of identical
//!   instances while carrying one trace id
//! - Single-hop simulators for latency, errors, status codes and CRUD load

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;

use api::state::AppState;
use domain::{ChainCoordinator, InMemoryRecordRepository, InstanceResolver, NamingResolver};
use infrastructure::chain::HttpChainClient;
use infrastructure::crud::CrudService;

/// Resolver deriving peer addresses from the instance configuration
pub fn naming_resolver(config: &AppConfig) -> NamingResolver {
    NamingResolver::new(&config.instance.base_url, config.instance.port)
        .with_zero_unsuffixed(config.instance.zero_is_unsuffixed)
}

/// Build application state using the naming resolver from configuration
pub fn create_app_state_with_config(config: &AppConfig) -> anyhow::Result<AppState> {
    create_app_state(config, Arc::new(naming_resolver(config)))
}

/// Build application state with a custom resolver
pub fn create_app_state(
    config: &AppConfig,
    resolver: Arc<dyn InstanceResolver>,
) -> anyhow::Result<AppState> {
    let client = Arc::new(HttpChainClient::new()?);
    let coordinator = ChainCoordinator::new(config.chain_settings(), resolver, client);
    let crud_service = CrudService::new(Arc::new(InMemoryRecordRepository::new()));

    Ok(AppState::new(
        Arc::new(coordinator),
        Arc::new(crud_service),
        config.instance.clone(),
        config.simulators.clone(),
    ))
}
