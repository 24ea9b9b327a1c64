use crate::{BroadcastRegistry, Metrics, RegistryHandle};

/// Shared state for the gateway handlers
#[derive(Clone)]
pub struct AppState {
    pub registry: RegistryHandle,
    pub metrics: Metrics,
}

impl AppState {
    pub fn new(registry: RegistryHandle, metrics: Metrics) -> Self {
        Self { registry, metrics }
    }

    /// Spawn a fresh broadcast registry and wrap it. Needs a tokio runtime.
    pub fn spawn(metrics: Metrics) -> Self {
        let registry = BroadcastRegistry::spawn(metrics.clone());
        Self::new(registry, metrics)
    }
}
