//! Error types for the page driver

use chromiumoxide::error::CdpError;
use thiserror::Error;

use crate::driver::Role;

/// Errors surfaced by browser sessions and page interactions
#[derive(Debug, Error)]
pub enum DriverError {
    /// Browser engine could not be launched or wired up
    #[error("failed to launch browser: {0}")]
    Launch(String),

    /// Navigation did not complete
    #[error("navigation to {url} failed: {reason}")]
    Navigation { url: String, reason: String },

    /// No element matched the requested role and accessible name
    #[error("no {role} element with accessible name {name:?}")]
    ElementNotFound { role: Role, name: String },

    /// Browser command timed out
    #[error("browser command timed out: {0}")]
    Timeout(String),

    /// CDP communication or protocol error
    #[error("CDP I/O error: {0}")]
    CdpIo(String),

    /// In-page script evaluation failed
    #[error("script evaluation failed: {0}")]
    Script(String),
}

impl DriverError {
    pub(crate) fn from_cdp(err: CdpError) -> Self {
        match err {
            CdpError::Timeout => DriverError::Timeout(err.to_string()),
            other => DriverError::CdpIo(other.to_string()),
        }
    }
}
