//! Flow execution error types

use browser_driver::DriverError;
use thiserror::Error;

/// Flow execution errors
#[derive(Debug, Error)]
pub enum FlowError {
    /// A step action failed; the cause is carried unchanged
    #[error("step '{step}' failed: {cause:#}")]
    StepFailed {
        step: String,
        cause: anyhow::Error,
    },

    /// Initial navigation failed before any step ran
    #[error("navigation to {url} failed")]
    NavigationFailed {
        url: String,
        #[source]
        source: DriverError,
    },
}

impl FlowError {
    /// Name of the step that aborted the flow, if any
    pub fn step_name(&self) -> Option<&str> {
        match self {
            FlowError::StepFailed { step, .. } => Some(step),
            FlowError::NavigationFailed { .. } => None,
        }
    }
}
