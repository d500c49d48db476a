//! Driver timing configuration.

use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Timing knobs for the recognition driver.
///
/// Matching thresholds are compile-time constants on purpose; only the
/// timings that depend on the host environment are configurable.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DriverConfig {
    /// How long a recognized-command notification stays visible, in ms.
    pub feedback_hold_ms: u64,
    /// Restart delay after a transient capture error, in ms. Scaled by
    /// the consecutive-error counter, capped at `max_backoff_steps`.
    pub error_restart_ms: u64,
    /// Restart delay after the recognizer ends naturally, in ms. Short,
    /// because periodic self-ending is steady-state behavior.
    pub end_restart_ms: u64,
    /// Cap on the error-backoff multiplier.
    pub max_backoff_steps: u32,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            feedback_hold_ms: 1800,
            error_restart_ms: 1000,
            end_restart_ms: 100,
            max_backoff_steps: 5,
        }
    }
}

impl DriverConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read driver config: {}", path.display()))?;
        let config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse driver config: {}", path.display()))?;
        Ok(config)
    }

    pub fn feedback_hold(&self) -> Duration {
        Duration::from_millis(self.feedback_hold_ms)
    }

    pub fn end_restart(&self) -> Duration {
        Duration::from_millis(self.end_restart_ms)
    }

    /// Backoff for the nth consecutive transient error (1-based).
    pub fn error_restart(&self, consecutive_errors: u32) -> Duration {
        let steps = consecutive_errors.clamp(1, self.max_backoff_steps);
        Duration::from_millis(self.error_restart_ms * u64::from(steps))
    }
}
