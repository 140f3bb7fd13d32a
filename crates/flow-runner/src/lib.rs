//! Sequential UI flow orchestration
//!
//! A flow is an ordered list of named steps executed against a single
//! live page. The runner adds per-step observability and propagates the
//! first failure unchanged, halting the remaining sequence.

pub mod env;
pub mod errors;
pub mod flow;
pub mod runner;
pub mod step;

pub use env::{Environment, EnvironmentUrls, UnknownEnvironment};
pub use errors::FlowError;
pub use flow::Flow;
pub use runner::run_step;
pub use step::{Step, StepAction};
