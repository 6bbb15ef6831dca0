//! Application state for shared services

use std::sync::Arc;
use std::time::Instant;

use crate::config::{InstanceConfig, SimulatorConfig};
use crate::domain::ChainCoordinator;
use crate::infrastructure::crud::CrudService;

/// Application state handed to every handler
#[derive(Debug, Clone)]
pub struct AppState {
    pub coordinator: Arc<ChainCoordinator>,
    pub crud_service: Arc<CrudService>,
    pub instance: InstanceConfig,
    pub simulators: SimulatorConfig,
    pub started_at: Instant,
}

impl AppState {
    pub fn new(
        coordinator: Arc<ChainCoordinator>,
        crud_service: Arc<CrudService>,
        instance: InstanceConfig,
        simulators: SimulatorConfig,
    ) -> Self {
        Self {
            coordinator,
            crud_service,
            instance,
            simulators,
            started_at: Instant::now(),
        }
    }
}
