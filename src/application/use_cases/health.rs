use std::sync::Arc;

use crate::domain::{HealthStatus, RelayConfig};

pub struct HealthUseCase {
    config: Arc<RelayConfig>,
}

impl HealthUseCase {
    pub fn new(config: Arc<RelayConfig>) -> Self {
        Self { config }
    }

    pub fn execute(&self) -> HealthStatus {
        HealthStatus::ok(self.config.service_name())
    }
}
