//! Step runner
//!
//! Adds observability around a single step and nothing else: failures
//! are logged with their cause and re-raised unchanged so the first
//! failing step always halts the remaining sequence. No retries; each
//! step executes at most once per flow invocation.

use browser_driver::PageDriver;
use tracing::{error, info};

use crate::errors::FlowError;
use crate::step::Step;

pub async fn run_step(page: &dyn PageDriver, step: &Step) -> Result<(), FlowError> {
    info!("STEP: {} - started", step.name());
    match step.action().run(page).await {
        Ok(()) => {
            info!("STEP: {} - succeeded", step.name());
            Ok(())
        }
        Err(cause) => {
            error!("STEP: {} - failed: {:#}", step.name(), cause);
            Err(FlowError::StepFailed {
                step: step.name().to_string(),
                cause,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::step::StepAction;
    use anyhow::anyhow;
    use async_trait::async_trait;
    use browser_driver::{DriverError, Role};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    struct NullPage;

    #[async_trait]
    impl PageDriver for NullPage {
        async fn navigate(&self, _url: &str) -> Result<(), DriverError> {
            Ok(())
        }
        async fn current_url(&self) -> Result<String, DriverError> {
            Ok("about:blank".to_string())
        }
        async fn click(&self, _role: Role, _name: &str) -> Result<(), DriverError> {
            Ok(())
        }
        async fn fill(&self, _role: Role, _name: &str, _text: &str) -> Result<(), DriverError> {
            Ok(())
        }
        async fn check(&self, _role: Role, _name: &str) -> Result<(), DriverError> {
            Ok(())
        }
    }

    struct CountingAction {
        invocations: Arc<AtomicUsize>,
    }

    #[async_trait]
    impl StepAction for CountingAction {
        async fn run(&self, _page: &dyn PageDriver) -> anyhow::Result<()> {
            self.invocations.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    struct FailingAction;

    #[async_trait]
    impl StepAction for FailingAction {
        async fn run(&self, _page: &dyn PageDriver) -> anyhow::Result<()> {
            Err(anyhow!("element timed out"))
        }
    }

    #[tokio::test]
    async fn successful_step_runs_exactly_once() {
        let invocations = Arc::new(AtomicUsize::new(0));
        let step = Step::new(
            "signup",
            Arc::new(CountingAction {
                invocations: invocations.clone(),
            }),
        );

        run_step(&NullPage, &step).await.unwrap();
        assert_eq!(invocations.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn failure_carries_step_name_and_cause() {
        let step = Step::new("signup", Arc::new(FailingAction));
        let err = run_step(&NullPage, &step).await.unwrap_err();

        assert_eq!(err.step_name(), Some("signup"));
        let rendered = err.to_string();
        assert!(rendered.contains("signup"));
        assert!(rendered.contains("element timed out"));
    }
}
