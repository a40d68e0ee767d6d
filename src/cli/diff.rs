//! Diff command handler.
//!
//! Implements the `diff` subcommand for reconciling two inventories.

use crate::config::DiffConfig;
use crate::pipeline::{compute_diff, exit_codes, load_inventory_with_context, output_diff_report};
use crate::reports::ReportMetadata;
use anyhow::Result;

/// Run the diff command, returning the desired exit code.
///
/// The caller is responsible for calling `std::process::exit()` with the
/// returned code when it is non-zero.
#[allow(clippy::needless_pass_by_value)]
pub fn run_diff(config: DiffConfig) -> Result<i32> {
    let quiet = config.quiet;

    let a = load_inventory_with_context(&config.paths.a, quiet)?;
    let b = load_inventory_with_context(&config.paths.b, quiet)?;

    let (records, comparator) = compute_diff(&config.settings, &a, &b, quiet);

    let metadata = ReportMetadata {
        inventory_a: Some(config.paths.a.display().to_string()),
        inventory_b: Some(config.paths.b.display().to_string()),
        entities_a: a.len(),
        entities_b: b.len(),
        comparator,
    };
    output_diff_report(&config.output, &records, &metadata, quiet)?;

    Ok(determine_exit_code(&config, records.len()))
}

/// Differences only affect the exit code when `fail_on_change` is set.
const fn determine_exit_code(config: &DiffConfig, record_count: usize) -> i32 {
    if config.settings.fail_on_change && record_count > 0 {
        return exit_codes::CHANGES_DETECTED;
    }
    exit_codes::SUCCESS
}
