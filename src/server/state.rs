//! Application state shared across HTTP handlers

use crate::auth::PermissionGate;
use crate::config::Config;
use std::sync::Arc;

/// HTTP server state shared across handlers
///
/// Everything here is read-only after startup; the identity cache behind the gate is
/// the only mutable state and is internally synchronized.
#[derive(Clone, Debug)]
pub struct AppState {
    /// Gateway configuration (shared read-only)
    pub config: Arc<Config>,
    /// Authorization guards
    pub gate: Arc<PermissionGate>,
}

impl AppState {
    pub fn new(config: Config, gate: PermissionGate) -> Self {
        Self {
            config: Arc::new(config),
            gate: Arc::new(gate),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}
