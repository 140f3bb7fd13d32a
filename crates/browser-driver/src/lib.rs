//! CDP-backed UI driver.
//!
//! Exposes the capabilities a flow needs from a live browser page:
//! navigation plus element interaction by ARIA role and accessible name.
//! The flow core only sees the [`PageDriver`] trait; the chromiumoxide
//! wiring stays behind it.

pub mod config;
pub mod driver;
pub mod errors;
mod locator;
pub mod page;
pub mod session;

pub use config::DriverConfig;
pub use driver::{PageDriver, Role};
pub use errors::DriverError;
pub use page::CdpPage;
pub use session::BrowserSession;
