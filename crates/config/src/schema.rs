use std::path::PathBuf;
use std::time::Duration;

/// Power-supply directory read when no path is given on the command line.
pub const DEFAULT_BASE_PATH: &str = "/sys/class/power_supply/BAT1";

/// Time between two samples.
pub const DEFAULT_INTERVAL: Duration = Duration::from_secs(10);

/// Runtime settings, fixed at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonitorConfig {
    /// Directory holding the `status`, `capacity`, `energy_*` … files.
    pub base_path: PathBuf,
    /// Sampling interval.
    pub interval: Duration,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            base_path: PathBuf::from(DEFAULT_BASE_PATH),
            interval:  DEFAULT_INTERVAL,
        }
    }
}

impl MonitorConfig {
    /// Interval as a compact human string, e.g. `"10s"` or `"1m30s"`.
    pub fn interval_label(&self) -> String {
        let secs = self.interval.as_secs();
        match (secs / 60, secs % 60) {
            (0, s) => format!("{s}s"),
            (m, 0) => format!("{m}m"),
            (m, s) => format!("{m}m{s}s"),
        }
    }
}
