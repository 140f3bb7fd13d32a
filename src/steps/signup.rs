//! Signup form step
//!
//! Fills out and submits the signup form with a freshly generated
//! account. Elements are addressed by ARIA role and accessible name so
//! the step survives markup changes that keep the form's labels intact.

use anyhow::Result;
use async_trait::async_trait;
use browser_driver::{PageDriver, Role};
use flow_runner::{Step, StepAction};
use rand::Rng;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::sleep;
use tracing::info;

const DEFAULT_PASSWORD: &str = "123123";
const DEFAULT_EMAIL: &str = "testqwer1234@test.co.kr";
const DEFAULT_NAME: &str = "test";
const USER_ID_LEN: usize = 5;

pub struct SignupStep {
    password: String,
    email: String,
    display_name: String,
    submit_settle: Duration,
}

impl Default for SignupStep {
    fn default() -> Self {
        Self {
            password: DEFAULT_PASSWORD.to_string(),
            email: DEFAULT_EMAIL.to_string(),
            display_name: DEFAULT_NAME.to_string(),
            // client-side validation enables the submit control asynchronously
            submit_settle: Duration::from_secs(1),
        }
    }
}

impl SignupStep {
    pub fn with_submit_settle(mut self, settle: Duration) -> Self {
        self.submit_settle = settle;
        self
    }
}

#[async_trait]
impl StepAction for SignupStep {
    async fn run(&self, page: &dyn PageDriver) -> Result<()> {
        let user_id = random_lowercase(USER_ID_LEN);

        page.click(Role::Link, "Sign Up").await?;
        page.fill(Role::Textbox, "ID", &user_id).await?;
        page.fill(Role::Textbox, "Password", &self.password).await?;
        page.fill(Role::Textbox, "Confirm Password", &self.password)
            .await?;
        page.fill(Role::Textbox, "Name", &self.display_name).await?;
        page.fill(Role::Textbox, "Email", &self.email).await?;
        page.check(Role::Checkbox, "Agree to Terms").await?;
        sleep(self.submit_settle).await;
        page.click(Role::Button, "Sign Up").await?;

        info!(user_id = %user_id, "submitted signup form");
        Ok(())
    }
}

/// The signup step as wired into the CLI flow
pub fn signup_step() -> Step {
    Step::new("signup", Arc::new(SignupStep::default()))
}

fn random_lowercase(len: usize) -> String {
    let mut rng = rand::thread_rng();
    (0..len)
        .map(|_| rng.gen_range(b'a'..=b'z') as char)
        .collect()
}
