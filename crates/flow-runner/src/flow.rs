//! Flow orchestrator

use browser_driver::PageDriver;
use std::time::Duration;
use tokio::time::sleep;
use tracing::info;

use crate::env::Environment;
use crate::errors::FlowError;
use crate::runner::run_step;
use crate::step::Step;

const DEFAULT_STEP_PAUSE: Duration = Duration::from_millis(500);

/// An ordered step sequence executed against a single page
pub struct Flow {
    name: String,
    steps: Vec<Step>,
    step_pause: Duration,
}

impl Flow {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            steps: Vec::new(),
            step_pause: DEFAULT_STEP_PAUSE,
        }
    }

    pub fn with_step(mut self, step: Step) -> Self {
        self.steps.push(step);
        self
    }

    pub fn with_step_pause(mut self, pause: Duration) -> Self {
        self.step_pause = pause;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Navigate to `url` and run every step in order.
    ///
    /// The environment inferred from the URL is logged for diagnostics
    /// only; it never changes behavior. A fixed pause follows each step
    /// so asynchronous UI work can settle. The first failing step halts
    /// the flow; remaining steps never run.
    pub async fn execute(&self, page: &dyn PageDriver, url: &str) -> Result<(), FlowError> {
        page.navigate(url)
            .await
            .map_err(|source| FlowError::NavigationFailed {
                url: url.to_string(),
                source,
            })?;

        let env = Environment::from_url(url);
        info!("detected environment: {env}");

        for step in &self.steps {
            run_step(page, step).await?;
            sleep(self.step_pause).await;
        }

        Ok(())
    }
}
