//! Runner configuration

use anyhow::{Context, Result};
use flow_runner::EnvironmentUrls;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{info, warn};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RunnerConfig {
    /// Run the browser without a visible window
    pub headless: bool,

    /// Chrome/Chromium executable; system default when unset
    pub chrome_path: Option<PathBuf>,

    /// Pause after each step, milliseconds
    pub step_pause_ms: u64,

    /// Base URL per target environment
    pub environments: EnvironmentUrls,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            headless: true,
            chrome_path: None,
            step_pause_ms: 500,
            environments: EnvironmentUrls::default(),
        }
    }
}

pub async fn load_config(config_path: Option<&Path>) -> Result<RunnerConfig> {
    let config_path = match config_path {
        Some(path) => path.to_path_buf(),
        None => {
            let mut path = dirs::config_dir().context("failed to get config directory")?;
            path.push("signup-runner");
            path.push("config.yaml");
            path
        }
    };

    if config_path.exists() {
        let content = fs::read_to_string(&config_path)
            .await
            .context("failed to read config file")?;

        let config: RunnerConfig =
            serde_yaml::from_str(&content).context("failed to parse config file")?;

        info!("loaded configuration from: {}", config_path.display());
        Ok(config)
    } else {
        warn!(
            "config file not found, using defaults: {}",
            config_path.display()
        );
        Ok(RunnerConfig::default())
    }
}
