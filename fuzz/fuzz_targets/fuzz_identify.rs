#![no_main]
use libfuzzer_sys::fuzz_target;
use sbom_delta::identify::{IdentifierChain, MAGIC_PREFIX_LEN};
use std::path::Path;

/// Fuzz the signature classifier.
///
/// Feeds arbitrary prefixes, truncated the way file reads truncate them,
/// through the default strategy chain.
fuzz_target!(|data: &[u8]| {
    let prefix = &data[..data.len().min(MAGIC_PREFIX_LEN)];
    let _ = sbom_delta::identify::identify(prefix);
    let _ = IdentifierChain::default().identify(Path::new("fuzz.input"), prefix);
});
