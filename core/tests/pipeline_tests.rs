// End-to-end classification of synthetic inputs

use encscan_core::test_utils::{
    random_bytes, text_bytes, write_fixture, write_random, write_zeros, FixedProbe,
    MissingToolProbe,
};
use encscan_core::*;
use std::sync::Arc;

const TEN_MB: usize = 10 * 1_048_576;

fn detector(config: DetectionConfig, probe: Arc<dyn FilesystemProbe>) -> Detector {
    let engine = Arc::new(SignatureEngine::builtin().expect("built-in rules compile"));
    Detector::new(config, engine, probe).expect("valid config")
}

/// Config whose compressors all resolve: `cat` copies stdin to stdout, so
/// every ratio is exactly 1.
fn identity_compressors() -> DetectionConfig {
    DetectionConfig {
        compressors: vec![CompressorSpec::new("identity", "cat")],
        ..Default::default()
    }
}

fn missing_compressors() -> DetectionConfig {
    DetectionConfig {
        compressors: vec![CompressorSpec::new("gzip", "encscan-no-such-compressor")],
        ..Default::default()
    }
}

#[test]
fn all_zero_input_is_not_encrypted() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_zeros(dir.path(), "zeros.img", TEN_MB);
    let probe = Arc::new(FixedProbe::none());

    let report = detector(DetectionConfig::default(), probe.clone())
        .classify(&path)
        .unwrap();

    assert_eq!(report.classification, Classification::NoEncryption);
    assert_eq!(report.stage, Stage::NoFilesystem);
    assert_eq!(probe.calls(), 1);
    let autocorr = report.autocorrelation.as_ref().unwrap();
    assert_eq!(autocorr.blocks, 10);
    assert_eq!(autocorr.constant_blocks, 10);
    assert!(!report.results[0].indicates_encryption);
}

#[test]
fn random_input_without_filesystem_is_file_based() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_random(dir.path(), "random.img", TEN_MB, 0x5eed);

    let report = detector(DetectionConfig::default(), Arc::new(FixedProbe::none()))
        .classify(&path)
        .unwrap();

    assert_eq!(report.classification, Classification::FileBasedEncryption);
    assert_eq!(report.stage, Stage::NoFilesystem);
    assert_eq!(report.results.len(), 1);
    assert_eq!(report.results[0].kind, TestKind::Autocorrelation);
    assert!(report.results[0].statistic <= 0.125);
    assert!(report.vote_count.is_none());
}

#[test]
fn luks_header_fires_the_signature_gate() {
    let dir = tempfile::tempdir().unwrap();
    let mut data = random_bytes(2 * 1_048_576, 3);
    data[..8].copy_from_slice(&[0x4C, 0x55, 0x4B, 0x53, 0xBA, 0xBE, 0x00, 0x01]);
    let path = write_fixture(dir.path(), "luks.img", &data);
    let probe = Arc::new(FixedProbe::new("ext4"));

    let report = detector(DetectionConfig::default(), probe.clone())
        .classify(&path)
        .unwrap();

    assert_eq!(report.stage, Stage::ToolSignature);
    assert_eq!(report.classification, Classification::FullDiskEncryption);
    assert!(report.tool_scan.hits["LUKSv1"] >= 1);
    assert!(report.results.is_empty());
    assert_eq!(probe.calls(), 0, "gate must terminate before the probe runs");
}

#[test]
fn empty_input_is_undefined() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_fixture(dir.path(), "empty.img", &[]);

    let err = detector(DetectionConfig::default(), Arc::new(FixedProbe::none()))
        .classify(&path)
        .unwrap_err();
    assert!(matches!(err, EncScanError::UndefinedStatistic(_)));
}

#[test]
fn missing_input_is_unreadable() {
    let dir = tempfile::tempdir().unwrap();
    let err = detector(DetectionConfig::default(), Arc::new(FixedProbe::none()))
        .classify(&dir.path().join("absent.img"))
        .unwrap_err();
    assert_eq!(err.kind(), "InputUnreadable");
    assert!(err.is_fatal());
}

#[test]
fn random_input_with_filesystem_votes_full_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_random(dir.path(), "volume.img", 4 * 1_048_576, 42);

    let report = detector(identity_compressors(), Arc::new(FixedProbe::new("ext4")))
        .classify(&path)
        .unwrap();

    assert_eq!(report.stage, Stage::Voting);
    assert_eq!(report.filesystem, "ext4");
    assert_eq!(report.classification, Classification::FullDiskEncryption);
    assert!(report.vote_count.unwrap() >= 3);
    // five voting results plus chi-squared
    assert_eq!(report.results.len(), 6);
    assert!(report.histogram.as_ref().unwrap().entropy > 7.95);
    assert!(report.degradations.is_empty());
}

#[test]
fn text_with_filesystem_votes_no_encryption() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_fixture(dir.path(), "notes.img", &text_bytes(2 * 1_048_576));

    let report = detector(missing_compressors(), Arc::new(FixedProbe::new("ntfs")))
        .classify(&path)
        .unwrap();

    assert_eq!(report.stage, Stage::Voting);
    assert_eq!(report.classification, Classification::NoEncryption);
    assert!(report.vote_count.unwrap() <= 2);
}

#[test]
fn missing_compressor_degrades_but_still_classifies() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_random(dir.path(), "volume.img", 2 * 1_048_576, 9);

    let report = detector(missing_compressors(), Arc::new(FixedProbe::new("ext4")))
        .classify(&path)
        .unwrap();

    let compression = report
        .results
        .iter()
        .find(|r| r.kind == TestKind::Compression)
        .unwrap();
    assert!(!compression.indicates_encryption);
    assert_eq!(compression.statistic, 0.0);
    assert!(report
        .degradations
        .iter()
        .any(|d| d.kind == "ToolUnavailable" && d.reason.contains("encscan-no-such-compressor")));
    // four remaining tests still carry the vote
    assert_eq!(report.classification, Classification::FullDiskEncryption);
}

#[test]
fn failing_probe_is_treated_as_no_filesystem() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_random(dir.path(), "random.img", 1_048_576, 5);

    let report = detector(DetectionConfig::default(), Arc::new(MissingToolProbe))
        .classify(&path)
        .unwrap();

    assert_eq!(report.stage, Stage::NoFilesystem);
    assert_eq!(report.filesystem, "");
    assert_eq!(report.degradations.len(), 1);
    assert_eq!(report.degradations[0].kind, "ToolUnavailable");
}

#[test]
fn parallel_battery_matches_sequential() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_random(dir.path(), "volume.img", 3 * 1_048_576 + 1234, 77);

    let sequential = detector(identity_compressors(), Arc::new(FixedProbe::new("ext4")))
        .run_battery(&path)
        .unwrap();
    let parallel = detector(
        DetectionConfig {
            parallel: true,
            ..identity_compressors()
        },
        Arc::new(FixedProbe::new("ext4")),
    )
    .run_battery(&path)
    .unwrap();

    assert_eq!(sequential, parallel);
    assert_eq!(sequential.histogram.bytes_read, 3 * 1_048_576 + 1234);
    assert_eq!(sequential.autocorrelation.skipped_tail_bytes, 1234);
}

#[test]
fn optimized_sibling_is_analysed() {
    let dir = tempfile::tempdir().unwrap();
    let mut data = vec![0u8; 4 * 1_048_576];
    data[1_048_576..2 * 1_048_576].copy_from_slice(&random_bytes(1_048_576, 1));
    let path = write_fixture(dir.path(), "sparse.img", &data);

    let config = DetectionConfig {
        optimize: true,
        ..Default::default()
    };
    let report = detector(config, Arc::new(FixedProbe::none()))
        .classify(&path)
        .unwrap();

    assert_eq!(report.analysed, dir.path().join("sparse_opt.img"));
    assert_eq!(report.block_size, 1_048_576);
    assert_eq!(report.classification, Classification::FileBasedEncryption);
}

#[test]
fn all_zero_optimized_input_falls_back_to_original() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_zeros(dir.path(), "blank.img", 64 * 1024);

    let config = DetectionConfig {
        optimize: true,
        ..Default::default()
    };
    let report = detector(config, Arc::new(FixedProbe::none()))
        .classify(&path)
        .unwrap();

    assert_eq!(report.analysed, path);
    assert_eq!(report.classification, Classification::NoEncryption);
}

#[test]
fn out_of_range_probe_is_recorded_not_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_random(dir.path(), "small.img", 4096, 12);

    let tools = RuleSet::compile([("Far Header", "c0ffee11c0ffee11", ScanMode::OffsetProbe(9))]).unwrap();
    let engine = Arc::new(SignatureEngine::new(tools, RuleSet::default()));
    let detector = Detector::new(
        DetectionConfig {
            block_size: 1024,
            ..Default::default()
        },
        engine,
        Arc::new(FixedProbe::none()),
    )
    .unwrap();

    let report = detector.classify(&path).unwrap();
    assert_ne!(report.stage, Stage::ToolSignature);
    assert_eq!(report.degradations[0].kind, "SeekOutOfRange");
}
