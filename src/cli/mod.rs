//! CLI command handlers.
//!
//! Testable handlers invoked by main.rs, one per subcommand.

mod diff;
mod identify;

pub use diff::run_diff;
pub use identify::run_identify;

// Re-export config types used by handlers
pub use crate::config::{DiffConfig, IdentifyConfig};
