use crate::{ConfigError, ConfigErrorResult};

use serde::Deserialize;

const DEFAULT_CLASSIFICATIONS_PER_VIEWER: u32 = 30;
const MAX_CLASSIFICATIONS_PER_VIEWER: u32 = 1000;
const DEFAULT_QUOTA_WINDOW_SECS: u64 = 60;
const MAX_QUOTA_WINDOW_SECS: u64 = 24 * 60 * 60;

/// How many images one viewer may send to the model per window.
///
/// A viewer over quota is turned away before anything reaches the
/// inference endpoint.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct QuotaConfig {
    pub classifications_per_viewer: u32,
    pub window_secs: u64,
}

impl Default for QuotaConfig {
    fn default() -> Self {
        Self {
            classifications_per_viewer: DEFAULT_CLASSIFICATIONS_PER_VIEWER,
            window_secs: DEFAULT_QUOTA_WINDOW_SECS,
        }
    }
}

impl QuotaConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if !(1..=MAX_CLASSIFICATIONS_PER_VIEWER).contains(&self.classifications_per_viewer) {
            return Err(ConfigError::classifier(format!(
                "quota.classifications_per_viewer must be between 1 and {MAX_CLASSIFICATIONS_PER_VIEWER}, got {}",
                self.classifications_per_viewer
            )));
        }

        if !(1..=MAX_QUOTA_WINDOW_SECS).contains(&self.window_secs) {
            return Err(ConfigError::classifier(format!(
                "quota.window_secs must be between 1 and {MAX_QUOTA_WINDOW_SECS} (one day), got {}",
                self.window_secs
            )));
        }

        Ok(())
    }

    /// e.g. "30 classifications per viewer every 60s"
    pub fn describe(&self) -> String {
        format!(
            "{} classifications per viewer every {}s",
            self.classifications_per_viewer, self.window_secs
        )
    }
}
