//! Pipeline and CLI integration tests.
//!
//! These tests exercise the full load → diff → report pipeline, error
//! handling paths, and the command handlers with real fixture files.

use sbom_delta::cli::{run_diff, run_identify};
use sbom_delta::config::{AppConfig, DiffConfig, DiffPaths, IdentifyConfig};
use sbom_delta::diff::{diff, ComparatorKind, DiffRecord, Sha256Comparator, Side};
use sbom_delta::identify::{identify_file, FileType, IdentifierChain};
use sbom_delta::model::{Inventory, SoftwareEntity};
use sbom_delta::pipeline::{exit_codes, load_inventory_with_context};
use sbom_delta::reports::{create_reporter, ReportFormat, ReportMetadata};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

// ============================================================================
// Test Fixtures
// ============================================================================

const FIXTURES_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures");

fn fixture_path(name: &str) -> PathBuf {
    Path::new(FIXTURES_DIR).join(name)
}

fn entity(sha256: &str, paths: &[&str]) -> SoftwareEntity {
    SoftwareEntity::new(sha256).with_paths(paths.iter().copied())
}

fn text_report(records: &[DiffRecord]) -> String {
    create_reporter(ReportFormat::Text)
        .generate_diff_report(records, &ReportMetadata::default())
        .expect("text report")
}

fn write_file(dir: &TempDir, name: &str, bytes: &[u8]) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, bytes).expect("write fixture");
    path
}

// ============================================================================
// End-to-end diff scenarios
// ============================================================================

mod diff_scenarios {
    use super::*;

    #[test]
    fn identical_inventories_produce_no_output() {
        let a = Inventory::new(vec![entity("111", &["/a"])]);
        let b = Inventory::new(vec![entity("111", &["/a"])]);

        let records = diff(&a, &b, &Sha256Comparator);
        assert!(records.is_empty());
        assert_eq!(text_report(&records), "");
    }

    #[test]
    fn changed_digest_produces_one_mismatch_block() {
        let a = Inventory::new(vec![entity("111", &["/a"])]);
        let b = Inventory::new(vec![entity("222", &["/a"])]);

        let records = diff(&a, &b, &Sha256Comparator);
        assert_eq!(
            records,
            vec![DiffRecord::Mismatch {
                path: "/a".to_string(),
                criterion: "SHA256".to_string(),
                value_a: "111".to_string(),
                value_b: "222".to_string(),
            }]
        );
        assert_eq!(
            text_report(&records),
            "/a:\n    < SHA256: 111\n    > SHA256: 222\n\n"
        );
    }

    #[test]
    fn path_only_in_a_produces_presence_block() {
        let a = Inventory::new(vec![entity("111", &["/a"])]);
        let b = Inventory::default();

        let records = diff(&a, &b, &Sha256Comparator);
        assert_eq!(
            records,
            vec![DiffRecord::Presence {
                path: "/a".to_string(),
                present_in: Side::A,
            }]
        );
        assert_eq!(text_report(&records), "/a:\n    < EXISTS\n    > DOES NOT EXIST\n\n");
    }

    #[test]
    fn path_only_in_b_is_the_mirror_image() {
        let records = diff(
            &Inventory::default(),
            &Inventory::new(vec![entity("111", &["/a"])]),
            &Sha256Comparator,
        );
        assert_eq!(text_report(&records), "/a:\n    < DOES NOT EXIST\n    > EXISTS\n\n");
    }

    #[test]
    fn blocks_follow_component_path_order() {
        let a = Inventory::new(vec![entity("111", &["/etc/foo.conf", "/etc/foo/bar"])]);

        let records = diff(&a, &Inventory::default(), &Sha256Comparator);
        let paths: Vec<_> = records.iter().map(DiffRecord::path).collect();
        assert_eq!(paths, vec!["/etc/foo/bar", "/etc/foo.conf"]);
        assert_eq!(
            text_report(&records),
            "/etc/foo/bar:\n    < EXISTS\n    > DOES NOT EXIST\n\n\
             /etc/foo.conf:\n    < EXISTS\n    > DOES NOT EXIST\n\n"
        );
    }

    #[test]
    fn fixture_inventories() {
        let a = Inventory::from_path(&fixture_path("before.json")).expect("parse before");
        let b = Inventory::from_path(&fixture_path("after.json")).expect("parse after");

        let records = diff(&a, &b, &Sha256Comparator);
        let paths: Vec<&str> = records.iter().map(DiffRecord::path).collect();
        assert_eq!(
            paths,
            vec![
                "/lib/libc.so.6",
                "/usr/lib/libc.so.6",
                "/usr/sbin/sshd",
                "/usr/sbin/telnetd",
            ]
        );
        assert!(records[2].is_present_in(Side::B) && !records[2].is_present_in(Side::A));
        assert!(records[3].is_present_in(Side::A) && !records[3].is_present_in(Side::B));
    }
}

// ============================================================================
// Pipeline + command handlers
// ============================================================================

mod handlers {
    use super::*;

    fn diff_config(output: PathBuf, configure: impl FnOnce(&mut AppConfig)) -> DiffConfig {
        let mut app = AppConfig::default();
        app.output.file = Some(output);
        configure(&mut app);
        DiffConfig::from_app(
            DiffPaths {
                a: fixture_path("before.json"),
                b: fixture_path("after.json"),
            },
            &app,
            true,
        )
    }

    #[test]
    fn load_inventory_reports_path_on_error() {
        let tmp = TempDir::new().unwrap();
        let bad = write_file(&tmp, "bad.json", b"{\"software\": 5}");

        let err = load_inventory_with_context(&bad, true).unwrap_err();
        let message = format!("{err:#}");
        assert!(message.contains("bad.json"), "{message}");
        assert!(message.contains("software"), "{message}");
    }

    #[test]
    fn run_diff_writes_text_report_and_succeeds_with_differences() {
        let tmp = TempDir::new().unwrap();
        let out = tmp.path().join("report.txt");

        let code = run_diff(diff_config(out.clone(), |_| {})).expect("diff runs");
        assert_eq!(code, exit_codes::SUCCESS);

        let report = std::fs::read_to_string(&out).unwrap();
        assert!(report.starts_with("/lib/libc.so.6:\n    < SHA256: "));
        assert!(report.contains("/usr/sbin/telnetd:\n    < EXISTS\n    > DOES NOT EXIST\n"));
    }

    #[test]
    fn run_diff_fail_on_change() {
        let tmp = TempDir::new().unwrap();
        let config = diff_config(tmp.path().join("report.txt"), |app| {
            app.diff.fail_on_change = true;
        });
        assert_eq!(run_diff(config).unwrap(), exit_codes::CHANGES_DETECTED);
    }

    #[test]
    fn run_diff_json_with_several_criteria() {
        let tmp = TempDir::new().unwrap();
        let out = tmp.path().join("report.json");
        let config = diff_config(out.clone(), |app| {
            app.output.format = Some(ReportFormat::Json);
            app.diff.comparators = vec![ComparatorKind::Sha256, ComparatorKind::Size];
        });
        run_diff(config).unwrap();

        let json: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&out).unwrap()).unwrap();
        assert_eq!(json["tool"]["name"], "sbom-delta");
        assert_eq!(json["inputs"]["comparator"], "criteria-set");
        // Two libc paths fail both SHA256 and SIZE, plus two presence records
        assert_eq!(json["summary"]["mismatches"], 4);
        assert_eq!(json["summary"]["only_in_a"], 1);
        assert_eq!(json["summary"]["only_in_b"], 1);
        assert_eq!(json["summary"]["total"], 6);
    }

    #[test]
    fn run_diff_missing_inventory_is_an_error() {
        let tmp = TempDir::new().unwrap();
        let mut config = diff_config(tmp.path().join("report.txt"), |_| {});
        config.paths.b = tmp.path().join("missing.json");
        assert!(run_diff(config).is_err());
    }

    #[test]
    fn run_identify_labels_each_file() {
        let tmp = TempDir::new().unwrap();
        let pe = write_file(&tmp, "tool.bin", &[0x4D, 0x5A, 0x90, 0x00]);
        let jar = write_file(&tmp, "app.jar", b"PK\x03\x04");
        let out = tmp.path().join("identify.txt");

        let mut app = AppConfig::default();
        app.output.file = Some(out.clone());
        let config = IdentifyConfig::from_app(vec![pe.clone(), jar.clone()], &app, true);
        assert_eq!(run_identify(config).unwrap(), exit_codes::SUCCESS);

        let report = std::fs::read_to_string(&out).unwrap();
        assert_eq!(
            report,
            format!("{}: PE\n{}: JAVAARCHIVE\n", pe.display(), jar.display())
        );
    }
}

// ============================================================================
// Signature classifier on real files
// ============================================================================

mod classifier_files {
    use super::*;

    #[test]
    fn pe_file() {
        let tmp = TempDir::new().unwrap();
        let path = write_file(&tmp, "a", &[0x4D, 0x5A, 0x90, 0x00]);
        assert_eq!(identify_file(&path), Some(FileType::Pe));
    }

    #[test]
    fn elf_file() {
        let tmp = TempDir::new().unwrap();
        let path = write_file(&tmp, "a", &[0x7F, 0x45, 0x4C, 0x46, 0x02, 0x01, 0x01, 0x00]);
        assert_eq!(identify_file(&path), Some(FileType::Elf));
    }

    #[test]
    fn ole_file() {
        let tmp = TempDir::new().unwrap();
        let mut bytes = vec![0xD0, 0xCF, 0x11, 0xE0, 0xA1, 0xB1, 0x1A, 0xE1];
        bytes.extend_from_slice(&[0u8; 504]);
        let path = write_file(&tmp, "installer", &bytes);
        assert_eq!(identify_file(&path), Some(FileType::Ole));
    }

    #[test]
    fn empty_file_is_unknown() {
        let tmp = TempDir::new().unwrap();
        let path = write_file(&tmp, "empty", b"");
        assert_eq!(identify_file(&path), None);
    }

    #[test]
    fn nonexistent_file_is_unknown() {
        assert_eq!(identify_file(Path::new("/nonexistent/sbom-delta/file")), None);
    }

    #[test]
    fn directory_is_unknown() {
        let tmp = TempDir::new().unwrap();
        assert_eq!(identify_file(tmp.path()), None);
    }

    #[test]
    fn magic_beats_misleading_extension() {
        let tmp = TempDir::new().unwrap();
        let path = write_file(&tmp, "library.dll", b"\x7fELF\x02\x01\x01\x00");
        let result = IdentifierChain::default().identify_file(&path);
        assert_eq!(result.file_type, Some(FileType::Elf));
        assert_eq!(result.strategy, Some("magic"));
    }

    #[test]
    fn extension_only_with_default_chain() {
        let tmp = TempDir::new().unwrap();
        let path = write_file(&tmp, "Main.class", b"\xca\xfe\xba\xbe");

        assert_eq!(
            IdentifierChain::default().identify_file(&path).file_type,
            Some(FileType::JavaClass)
        );
        assert_eq!(IdentifierChain::magic_only().identify_file(&path).file_type, None);
    }
}
