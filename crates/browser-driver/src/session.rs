//! Browser session lifecycle
//!
//! One session owns the engine process, its event handler task and a
//! single page. Acquisition order is engine, then page; release walks
//! the same order in reverse and always tears the handler task down.

use chromiumoxide::browser::Browser;
use futures::StreamExt;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::config::DriverConfig;
use crate::errors::DriverError;
use crate::page::CdpPage;

pub struct BrowserSession {
    browser: Browser,
    handler_task: JoinHandle<()>,
    page: CdpPage,
}

impl BrowserSession {
    /// Launch the browser engine and open a fresh page.
    pub async fn launch(config: DriverConfig) -> Result<Self, DriverError> {
        let browser_config = config.browser_config()?;
        let (mut browser, mut handler) = Browser::launch(browser_config)
            .await
            .map_err(|err| DriverError::Launch(err.to_string()))?;

        let handler_task = tokio::spawn(async move {
            while let Some(event) = handler.next().await {
                if event.is_err() {
                    debug!(target: "browser-driver", "cdp handler stream closed");
                    break;
                }
            }
        });

        let page = match browser.new_page("about:blank").await {
            Ok(page) => page,
            Err(err) => {
                let _ = browser.close().await;
                let _ = browser.wait().await;
                handler_task.abort();
                return Err(DriverError::Launch(format!("failed to open page: {err}")));
            }
        };

        info!(target: "browser-driver", "browser session established");
        Ok(Self {
            browser,
            handler_task,
            page: CdpPage::new(page),
        })
    }

    pub fn page(&self) -> &CdpPage {
        &self.page
    }

    /// Release the session: page first, then the engine.
    ///
    /// Both close attempts run unconditionally; the first failure is
    /// reported after teardown finishes.
    pub async fn close(self) -> Result<(), DriverError> {
        let BrowserSession {
            mut browser,
            handler_task,
            page,
        } = self;

        let page_result = page.into_inner().close().await;
        let browser_result = browser.close().await;
        let _ = browser.wait().await;
        handler_task.abort();

        info!(target: "browser-driver", "browser session released");
        page_result.map_err(DriverError::from_cdp)?;
        browser_result.map_err(DriverError::from_cdp)?;
        Ok(())
    }
}
