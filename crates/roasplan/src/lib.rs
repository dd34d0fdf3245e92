//! Presentation layer for the IP-ROAS calculation engine
//!
//! Everything in this crate is thin glue over `roasplan_core`: scenario
//! loading, logging setup, report rendering, and the context snapshot handed
//! to the external chat assistant. No business logic lives here.

pub mod logging;
pub mod report;
pub mod scenario;
pub mod snapshot;

pub use logging::init_logging;
pub use scenario::Scenario;
pub use snapshot::context_snapshot;
