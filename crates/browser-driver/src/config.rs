//! Browser session configuration

use chromiumoxide::browser::BrowserConfig;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use crate::errors::DriverError;

/// Configuration for launching a browser session
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DriverConfig {
    /// Run without a visible window
    pub headless: bool,

    /// Chrome/Chromium executable; system default when unset
    pub executable: Option<PathBuf>,

    /// Deadline for individual CDP commands
    pub request_timeout_ms: u64,

    /// Deadline for the browser process to come up
    pub launch_timeout_ms: u64,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            headless: true,
            executable: None,
            request_timeout_ms: 30_000,
            launch_timeout_ms: 20_000,
        }
    }
}

impl DriverConfig {
    pub(crate) fn browser_config(&self) -> Result<BrowserConfig, DriverError> {
        if let Some(path) = &self.executable {
            if !path.exists() {
                return Err(DriverError::Launch(format!(
                    "chrome executable not found at {}",
                    path.display()
                )));
            }
        }

        let mut builder = BrowserConfig::builder()
            .request_timeout(Duration::from_millis(self.request_timeout_ms))
            .launch_timeout(Duration::from_millis(self.launch_timeout_ms));

        if !self.headless {
            builder = builder.with_head();
        }

        if let Some(path) = &self.executable {
            builder = builder.chrome_executable(path.clone());
        }

        builder.build().map_err(DriverError::Launch)
    }
}
