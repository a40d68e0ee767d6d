//! Identify command handler.
//!
//! Implements the `identify` subcommand for classifying files by signature.

use crate::config::IdentifyConfig;
use crate::identify::IdentifierChain;
use crate::pipeline::{exit_codes, output_identify_report};
use anyhow::Result;

/// Run the identify command. Unreadable files are reported as unknown, so
/// only output failures produce an error.
#[allow(clippy::needless_pass_by_value)]
pub fn run_identify(config: IdentifyConfig) -> Result<i32> {
    let chain = if config.settings.use_extensions {
        IdentifierChain::default()
    } else {
        IdentifierChain::magic_only()
    };

    if !config.quiet {
        tracing::info!(
            "Identifying {} files using strategies: {}",
            config.paths.len(),
            chain.strategy_names().join(", ")
        );
    }

    let results = chain.identify_paths(&config.paths);
    output_identify_report(&config.output, &results, config.quiet)?;

    Ok(exit_codes::SUCCESS)
}
