use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Name under which `confy` keeps both the settings and the draft store.
pub const APP_NAME: &str = "autosave";
pub const CONFIG_NAME: &str = "config";

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// Quiet time after the last edit before the draft is written.
    #[serde(default = "default_debounce")]
    pub debounce_ms: u64,
    /// How long the saved indicator stays lit.
    #[serde(default = "default_notification")]
    pub notification_ms: u64,
}

fn default_debounce() -> u64 {
    500
}

fn default_notification() -> u64 {
    1500
}

impl Default for Config {
    fn default() -> Self {
        Self {
            debounce_ms: default_debounce(),
            notification_ms: default_notification(),
        }
    }
}

impl Config {
    pub fn load() -> Self {
        match confy::load(APP_NAME, CONFIG_NAME) {
            Ok(cfg) => cfg,
            Err(e) => {
                tracing::warn!(error = %e, "could not read settings, using defaults");
                Self::default()
            }
        }
    }

    pub fn timings(&self) -> Timings {
        Timings {
            debounce: Duration::from_millis(self.debounce_ms),
            notification: Duration::from_millis(self.notification_ms),
        }
    }
}

/// The two fixed windows of a save cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timings {
    pub debounce: Duration,
    pub notification: Duration,
}

impl Default for Timings {
    fn default() -> Self {
        Config::default().timings()
    }
}
