//! Pipeline orchestration for inventory operations.
//!
//! Shared load → diff → report steps used by the CLI command handlers.

mod diff_stage;
mod output;
mod parse;
mod report_stage;

pub use diff_stage::compute_diff;
pub use output::{write_output, OutputTarget};
pub use parse::load_inventory_with_context;
pub use report_stage::{output_diff_report, output_identify_report};

/// Exit codes for CI/CD integration
pub mod exit_codes {
    /// Success (differences alone never fail without `--fail-on-change`)
    pub const SUCCESS: i32 = 0;
    /// Differences were reported and `--fail-on-change` was set
    pub const CHANGES_DETECTED: i32 = 1;
    /// An error occurred
    pub const ERROR: i32 = 3;
}
