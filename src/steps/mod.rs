//! Step actions used by the CLI flows

pub mod signup;

pub use signup::{signup_step, SignupStep};
