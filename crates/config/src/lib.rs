pub mod schema;

pub use schema::{MonitorConfig, DEFAULT_BASE_PATH, DEFAULT_INTERVAL};

use std::path::PathBuf;

/// Build the runtime config, applying the command-line base path (if any)
/// over the defaults.
///
/// A missing directory is accepted with a warning: every quantity will simply
/// be reported as absent.
pub fn resolve(base_path: Option<PathBuf>) -> MonitorConfig {
    let mut config = MonitorConfig::default();

    if let Some(path) = base_path {
        config.base_path = path;
    }

    if !config.base_path.is_dir() {
        tracing::warn!(
            "Power-supply directory '{}' not found; all quantities will be absent.",
            config.base_path.display()
        );
    }

    config
}
