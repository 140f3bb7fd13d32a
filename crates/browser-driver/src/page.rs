//! chromiumoxide-backed implementation of [`PageDriver`]

use async_trait::async_trait;
use chromiumoxide::element::Element;
use chromiumoxide::page::Page;
use serde_json::Value;
use tracing::debug;
use uuid::Uuid;

use crate::driver::{PageDriver, Role};
use crate::errors::DriverError;
use crate::locator::{anchor_selector, build_locator_script};

/// A single live page inside a browser session
pub struct CdpPage {
    page: Page,
}

impl CdpPage {
    pub(crate) fn new(page: Page) -> Self {
        Self { page }
    }

    pub(crate) fn into_inner(self) -> Page {
        self.page
    }

    async fn resolve(&self, role: Role, name: &str) -> Result<Element, DriverError> {
        let token = format!("anchor-{}", Uuid::new_v4().simple());
        let script = build_locator_script(role, name, &token);
        let value: Value = self
            .page
            .evaluate(script)
            .await
            .map_err(DriverError::from_cdp)?
            .into_value()
            .map_err(|err| DriverError::Script(err.to_string()))?;

        let status = value.get("status").and_then(|v| v.as_str());
        if status != Some("ok") {
            return Err(DriverError::ElementNotFound {
                role,
                name: name.to_string(),
            });
        }

        let selector = anchor_selector(&token);
        debug!(target: "browser-driver", %role, name, %selector, "anchor resolved");
        self.page
            .find_element(selector)
            .await
            .map_err(DriverError::from_cdp)
    }
}

#[async_trait]
impl PageDriver for CdpPage {
    async fn navigate(&self, url: &str) -> Result<(), DriverError> {
        self.page
            .goto(url)
            .await
            .map_err(|err| DriverError::Navigation {
                url: url.to_string(),
                reason: err.to_string(),
            })?;
        self.page
            .wait_for_navigation()
            .await
            .map_err(|err| DriverError::Navigation {
                url: url.to_string(),
                reason: err.to_string(),
            })?;
        Ok(())
    }

    async fn current_url(&self) -> Result<String, DriverError> {
        self.page
            .url()
            .await
            .map_err(DriverError::from_cdp)?
            .ok_or_else(|| DriverError::CdpIo("page reported no url".to_string()))
    }

    async fn click(&self, role: Role, name: &str) -> Result<(), DriverError> {
        let element = self.resolve(role, name).await?;
        element.click().await.map_err(DriverError::from_cdp)?;
        Ok(())
    }

    async fn fill(&self, role: Role, name: &str, text: &str) -> Result<(), DriverError> {
        let element = self.resolve(role, name).await?;
        element.click().await.map_err(DriverError::from_cdp)?;
        element
            .call_js_fn("function() { this.value = ''; }", false)
            .await
            .map_err(DriverError::from_cdp)?;
        element.type_str(text).await.map_err(DriverError::from_cdp)?;
        Ok(())
    }

    async fn check(&self, role: Role, name: &str) -> Result<(), DriverError> {
        let element = self.resolve(role, name).await?;
        let returns = element
            .call_js_fn("function() { return this.checked === true; }", false)
            .await
            .map_err(DriverError::from_cdp)?;
        let already_checked = returns
            .result
            .value
            .as_ref()
            .and_then(|v| v.as_bool())
            .unwrap_or(false);
        if !already_checked {
            element.click().await.map_err(DriverError::from_cdp)?;
        }
        Ok(())
    }
}
