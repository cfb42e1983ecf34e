use std::env;
use std::time::Duration;

use serde::{Deserialize, Serialize};

fn default_timeout_seconds() -> u64 {
    10
}

fn default_concurrency() -> usize {
    8
}

/// Limits applied to every outbound HTTP call
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkConfig {
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
    /// Max in-flight per-word lookups
    #[serde(default = "default_concurrency")]
    pub concurrency: usize,
}

impl NetworkConfig {
    pub fn new() -> Self {
        let timeout_seconds = env::var("COGNATE_TIMEOUT_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_timeout_seconds);

        let concurrency = env::var("COGNATE_CONCURRENCY")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_concurrency);

        Self {
            timeout_seconds,
            concurrency,
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds.max(1))
    }
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            timeout_seconds: default_timeout_seconds(),
            concurrency: default_concurrency(),
        }
    }
}
