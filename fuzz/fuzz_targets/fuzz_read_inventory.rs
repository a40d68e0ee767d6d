#![no_main]
use libfuzzer_sys::fuzz_target;
use sbom_delta::diff::{diff, Sha256Comparator};
use sbom_delta::model::Inventory;

/// Fuzz the inventory reader.
///
/// Any document that parses is then diffed against itself, which must
/// produce no records.
fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(inventory) = Inventory::from_json_str(s) {
            assert!(diff(&inventory, &inventory, &Sha256Comparator).is_empty());
        }
    }
});
