//! signup-runner
//!
//! CLI tool that drives the target application's signup form through a
//! real Chromium browser: acquire a session, navigate, run the signup
//! step sequence, report the outcome through the log stream and release
//! the session on every exit path.

pub mod config;
pub mod session;
pub mod steps;

pub use config::RunnerConfig;
pub use session::{run_flow, FlowOutcome, FlowSession};
