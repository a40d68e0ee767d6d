//! Report output stage.

use crate::diff::DiffRecord;
use crate::identify::Identification;
use crate::config::OutputConfig;
use crate::reports::{create_reporter, ReportMetadata};
use anyhow::Result;

use super::{write_output, OutputTarget};

/// Render diff records in the configured format and write them out.
pub fn output_diff_report(
    output: &OutputConfig,
    records: &[DiffRecord],
    metadata: &ReportMetadata,
    quiet: bool,
) -> Result<()> {
    let target = OutputTarget::from_option(output.file.clone());
    let reporter = create_reporter(output.effective_format());
    let report = reporter.generate_diff_report(records, metadata)?;

    write_output(&report, &target, quiet)
}

/// Render identification results in the configured format and write them out.
pub fn output_identify_report(
    output: &OutputConfig,
    results: &[Identification],
    quiet: bool,
) -> Result<()> {
    let target = OutputTarget::from_option(output.file.clone());
    let reporter = create_reporter(output.effective_format());
    let report = reporter.generate_identify_report(results)?;

    write_output(&report, &target, quiet)
}
