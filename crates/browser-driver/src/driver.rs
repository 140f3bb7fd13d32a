//! Page driver trait and role descriptors
//!
//! The flow layer locates elements the way an operator would describe
//! them: by ARIA role plus accessible name. The driver resolves that
//! description to a concrete element and performs the interaction.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::DriverError;

/// ARIA roles the driver knows how to locate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Link,
    Textbox,
    Checkbox,
    Button,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Link => "link",
            Role::Textbox => "textbox",
            Role::Checkbox => "checkbox",
            Role::Button => "button",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Capabilities a flow needs from a live page
///
/// Every call blocks until the corresponding UI action settles or fails;
/// there is no queuing or retry at this layer.
#[async_trait]
pub trait PageDriver: Send + Sync {
    /// Navigate to a URL and wait for the load to settle
    async fn navigate(&self, url: &str) -> Result<(), DriverError>;

    /// Current page address
    async fn current_url(&self) -> Result<String, DriverError>;

    /// Click the element matching role and accessible name
    async fn click(&self, role: Role, name: &str) -> Result<(), DriverError>;

    /// Replace the value of the matching input with `text`
    async fn fill(&self, role: Role, name: &str, text: &str) -> Result<(), DriverError>;

    /// Ensure the matching checkbox is checked
    async fn check(&self, role: Role, name: &str) -> Result<(), DriverError>;
}
