//! Benchmarks for signature identification.
//!
//! Run with: cargo bench --bench identify_benchmark

use criterion::{criterion_group, criterion_main, Criterion};
use sbom_delta::identify::{identify, IdentifierChain};
use std::hint::black_box;
use std::path::{Path, PathBuf};

const PREFIXES: &[&[u8]] = &[
    b"\x7fELF\x02\x01\x01\x00",
    b"MZ\x90\x00\x03\x00\x00\x00",
    b"\xd0\xcf\x11\xe0\xa1\xb1\x1a\xe1",
    b"PK\x03\x04\x14\x00\x00\x00",
    b"",
];

fn bench_identify_prefix(c: &mut Criterion) {
    c.bench_function("identify_prefixes", |b| {
        b.iter(|| {
            for prefix in PREFIXES {
                black_box(identify(black_box(prefix)));
            }
        });
    });

    let chain = IdentifierChain::default();
    c.bench_function("chain_identify_prefixes", |b| {
        b.iter(|| {
            for prefix in PREFIXES {
                black_box(chain.identify(Path::new("lib/app.jar"), black_box(prefix)));
            }
        });
    });
}

fn bench_identify_files(c: &mut Criterion) {
    let Ok(dir) = tempfile::tempdir() else {
        return;
    };
    let paths: Vec<PathBuf> = (0..256)
        .map(|i| {
            let path = dir.path().join(format!("file-{i}.bin"));
            let _ = std::fs::write(&path, PREFIXES[i % PREFIXES.len()]);
            path
        })
        .collect();

    let chain = IdentifierChain::default();
    c.bench_function("identify_paths_256_files", |b| {
        b.iter(|| black_box(chain.identify_paths(black_box(&paths))));
    });
}

criterion_group!(benches, bench_identify_prefix, bench_identify_files);
criterion_main!(benches);
