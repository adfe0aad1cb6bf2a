//! Webhook verification configuration
//!
//! # Example
//!
//! ```
//! use standard_webhooks::WebhookConfig;
//!
//! let config = WebhookConfig::default().with_tolerance_secs(60);
//! assert!(config.validate().is_ok());
//! ```

use super::errors::{Result, WebhookError};
use super::tolerance::DEFAULT_TOLERANCE_SECS;
use serde::{Deserialize, Serialize};
use std::env;
use std::time::Duration;

/// Upper bound on the tolerance window (one year).
pub const MAX_TOLERANCE_SECS: u64 = 365 * 24 * 60 * 60;

/// Environment variable read by [`WebhookConfig::from_env`].
pub const TOLERANCE_ENV_VAR: &str = "WEBHOOK_TOLERANCE_SECS";

/// Verification settings, passed at construction.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WebhookConfig {
    /// Allowed skew between the message timestamp and now, in seconds
    pub tolerance_secs: u64,
}

impl Default for WebhookConfig {
    fn default() -> Self {
        Self {
            tolerance_secs: DEFAULT_TOLERANCE_SECS,
        }
    }
}

impl WebhookConfig {
    /// Create a new configuration with validation
    pub fn new(tolerance_secs: u64) -> Result<Self> {
        let config = Self { tolerance_secs };
        config.validate()?;
        Ok(config)
    }

    /// Create configuration from environment variables.
    ///
    /// - `WEBHOOK_TOLERANCE_SECS`: tolerance window (default: 300)
    ///
    /// Absent, unparseable or out-of-range values fall back to the default.
    pub fn from_env() -> Self {
        let tolerance_secs = env::var(TOLERANCE_ENV_VAR)
            .ok()
            .and_then(|v| v.trim().parse::<u64>().ok())
            .filter(|secs| *secs <= MAX_TOLERANCE_SECS)
            .unwrap_or(DEFAULT_TOLERANCE_SECS);

        Self { tolerance_secs }
    }

    /// Validate the window
    pub fn validate(&self) -> Result<()> {
        if self.tolerance_secs > MAX_TOLERANCE_SECS {
            return Err(WebhookError::InvalidConfig(format!(
                "tolerance_secs must be at most {MAX_TOLERANCE_SECS}, got {}",
                self.tolerance_secs
            )));
        }
        Ok(())
    }

    /// Builder-style method to set the tolerance window
    pub fn with_tolerance_secs(mut self, secs: u64) -> Self {
        self.tolerance_secs = secs;
        self
    }

    /// Tolerance window as a `Duration`.
    pub fn tolerance(&self) -> Duration {
        Duration::from_secs(self.tolerance_secs)
    }
}
