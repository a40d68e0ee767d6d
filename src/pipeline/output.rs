//! Output handling for reports.

use anyhow::{Context, Result};
use std::io::Write as _;
use std::path::PathBuf;

/// Target for output - either stdout or a file
#[derive(Debug, Clone)]
pub enum OutputTarget {
    /// Write to stdout
    Stdout,
    /// Write to a file
    File(PathBuf),
}

impl OutputTarget {
    /// Create output target from optional path
    #[must_use]
    pub fn from_option(path: Option<PathBuf>) -> Self {
        match path {
            Some(p) => Self::File(p),
            None => Self::Stdout,
        }
    }
}

/// Write output to the target (stdout or file).
///
/// Content is written as-is, with a newline appended only when a non-empty
/// report does not already end with one. An empty report writes nothing.
pub fn write_output(content: &str, target: &OutputTarget, quiet: bool) -> Result<()> {
    let needs_newline = !content.is_empty() && !content.ends_with('\n');

    match target {
        OutputTarget::Stdout => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(content.as_bytes())
                .context("Failed to write report to stdout")?;
            if needs_newline {
                writeln!(stdout).context("Failed to write report to stdout")?;
            }
            stdout.flush().context("Failed to flush stdout")?;
            Ok(())
        }
        OutputTarget::File(path) => {
            let mut data = content.to_string();
            if needs_newline {
                data.push('\n');
            }
            std::fs::write(path, data)
                .with_context(|| format!("Failed to write output to {}", path.display()))?;
            if !quiet {
                tracing::info!("Report written to {}", path.display());
            }
            Ok(())
        }
    }
}
