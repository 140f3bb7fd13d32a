//! Step definitions
//!
//! A step pairs a diagnostic name with an opaque action. The name is
//! used only for logging; the runner never inspects the action beyond
//! invoking it.

use async_trait::async_trait;
use browser_driver::PageDriver;
use std::sync::Arc;

/// A named unit of work executed against a live page
#[async_trait]
pub trait StepAction: Send + Sync {
    async fn run(&self, page: &dyn PageDriver) -> anyhow::Result<()>;
}

/// One named, atomic interaction unit within a flow
#[derive(Clone)]
pub struct Step {
    name: String,
    action: Arc<dyn StepAction>,
}

impl Step {
    pub fn new(name: impl Into<String>, action: Arc<dyn StepAction>) -> Self {
        Self {
            name: name.into(),
            action,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn action(&self) -> &dyn StepAction {
        self.action.as_ref()
    }
}
