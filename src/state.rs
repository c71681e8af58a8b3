// src/state.rs
use std::sync::Arc;

use crate::config::Settings;
use crate::services::metrics_manager::MetricsManager;

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub settings: Settings,
    pub metrics: MetricsManager,
}

impl AppState {
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            metrics: MetricsManager::new(),
        }
    }
}
