//! Session lifecycle management
//!
//! One session per flow invocation: acquired before the flow starts,
//! released exactly once afterwards regardless of outcome. A flow
//! failure is fatal to the flow but not to the process; it surfaces as
//! a logged summary and a [`FlowOutcome`], never as a propagated error.

use async_trait::async_trait;
use browser_driver::{BrowserSession, DriverError, PageDriver};
use flow_runner::Flow;
use tracing::{error, info, warn};

/// Outcome of one flow invocation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowOutcome {
    /// Every step succeeded
    Completed,
    /// A step or the initial navigation failed; remaining steps did not run
    Aborted,
}

/// Scoped session seam: provides the page a flow runs against and a
/// single consuming release
#[async_trait]
pub trait FlowSession: Send {
    fn page(&self) -> &dyn PageDriver;

    async fn close(self) -> Result<(), DriverError>
    where
        Self: Sized;
}

#[async_trait]
impl FlowSession for BrowserSession {
    fn page(&self) -> &dyn PageDriver {
        BrowserSession::page(self)
    }

    async fn close(self) -> Result<(), DriverError> {
        BrowserSession::close(self).await
    }
}

/// Run a flow against a freshly acquired session.
///
/// The session is released on every exit path. Teardown errors are
/// logged and never override the flow outcome.
pub async fn run_flow<S: FlowSession>(session: S, flow: &Flow, url: &str) -> FlowOutcome {
    info!("=== {} flow started ===", flow.name());

    let outcome = match flow.execute(session.page(), url).await {
        Ok(()) => {
            info!("{} flow completed", flow.name());
            FlowOutcome::Completed
        }
        Err(err) => {
            error!("{} flow aborted: {err}", flow.name());
            FlowOutcome::Aborted
        }
    };

    if let Err(err) = session.close().await {
        warn!("session teardown failed: {err}");
    }

    info!("=== {} flow finished ===", flow.name());
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;
    use browser_driver::Role;
    use flow_runner::{Step, StepAction};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use std::time::Duration;

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

    struct MockSession {
        page: NullPage,
        releases: Arc<AtomicUsize>,
    }

    #[async_trait]
    impl FlowSession for MockSession {
        fn page(&self) -> &dyn PageDriver {
            &self.page
        }

        async fn close(self) -> Result<(), DriverError> {
            self.releases.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    struct OutcomeAction {
        fail: bool,
    }

    #[async_trait]
    impl StepAction for OutcomeAction {
        async fn run(&self, _page: &dyn PageDriver) -> anyhow::Result<()> {
            if self.fail {
                Err(anyhow!("timeout waiting for element"))
            } else {
                Ok(())
            }
        }
    }

    fn flow_with(fail: bool) -> Flow {
        Flow::new("signup")
            .with_step(Step::new("signup", Arc::new(OutcomeAction { fail })))
            .with_step_pause(Duration::ZERO)
    }

    #[tokio::test]
    async fn completed_flow_releases_session_once() {
        let releases = Arc::new(AtomicUsize::new(0));
        let session = MockSession {
            page: NullPage,
            releases: releases.clone(),
        };

        let outcome = run_flow(session, &flow_with(false), "http://stage.example.com").await;

        assert_eq!(outcome, FlowOutcome::Completed);
        assert_eq!(releases.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn aborted_flow_still_releases_session_once() {
        let releases = Arc::new(AtomicUsize::new(0));
        let session = MockSession {
            page: NullPage,
            releases: releases.clone(),
        };

        let outcome = run_flow(session, &flow_with(true), "http://qa.example.com").await;

        assert_eq!(outcome, FlowOutcome::Aborted);
        assert_eq!(releases.load(Ordering::SeqCst), 1);
    }
}
