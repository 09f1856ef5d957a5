use std::path::Path;

use crate::config::{load_config, DashboardConfig};
use crate::error::AppError;
use crate::source::{load_snapshot, SnapshotSource};

/// Everything a command reads: the loaded snapshot and the tunables. Built
/// once at startup and only borrowed afterwards.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub source: SnapshotSource,
    pub config: DashboardConfig,
}

impl AppState {
    pub fn new(source: SnapshotSource, config: DashboardConfig) -> Self {
        AppState { source, config }
    }

    pub fn load(data_dir: &Path, config_path: Option<&Path>) -> Result<Self, AppError> {
        let config = load_config(config_path)?;
        let source = load_snapshot(data_dir)?;
        Ok(AppState::new(source, config))
    }
}
