//! Inventory loading for the pipeline.

use crate::model::Inventory;
use anyhow::{Context, Result};
use std::path::Path;

/// Load an inventory with context for error messages
pub fn load_inventory_with_context(path: &Path, quiet: bool) -> Result<Inventory> {
    if !quiet {
        tracing::info!("Loading inventory: {}", path.display());
    }

    let inventory = Inventory::from_path(path)
        .with_context(|| format!("Failed to load inventory: {}", path.display()))?;

    if !quiet {
        tracing::info!(
            "Loaded {} entities claiming {} paths",
            inventory.len(),
            inventory.path_claims()
        );
    }

    Ok(inventory)
}
