//! Scans inputs against the encryption-tool rules and the file-format
//! catalogue.

use super::{RuleSet, ScanMode, SignatureRule};
use crate::block::{effective_block_size, open_input, BlockStream};
use crate::progress::{ProgressCallback, ProgressReporter};
use crate::stats::{Comparison, TestKind, TestResult};
use crate::EncScanError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{Read, Seek, SeekFrom};
use std::path::Path;
use std::sync::Arc;

/// A rule that could not be evaluated and was left out of the counts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleFailure {
    pub rule: String,
    pub kind: String,
    pub reason: String,
}

impl RuleFailure {
    fn from_error(rule: &str, err: &EncScanError) -> Self {
        Self {
            rule: rule.to_string(),
            kind: err.kind().to_string(),
            reason: err.to_string(),
        }
    }
}

/// Per-tool match counts from the encryption-tool scan.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ToolScan {
    pub hits: BTreeMap<String, usize>,
    pub failures: Vec<RuleFailure>,
    pub hail_mary: bool,
}

impl ToolScan {
    pub fn any_found(&self) -> bool {
        self.hits.values().any(|&count| count > 0)
    }

    /// Tools with a non-zero count, by name.
    pub fn found(&self) -> Vec<(&str, usize)> {
        self.hits
            .iter()
            .filter(|(_, &count)| count > 0)
            .map(|(name, &count)| (name.as_str(), count))
            .collect()
    }

    pub fn summary(&self) -> String {
        self.hits
            .iter()
            .map(|(name, count)| format!("{} - {}", name, count))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Totals of the generic catalogue scan.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SignatureTally {
    /// Matches per rule; rules without matches are omitted.
    pub counts: BTreeMap<String, usize>,
    pub total_matches: usize,
    pub size_mb: f64,
    /// Matches per megabyte.
    pub density: f64,
}

impl SignatureTally {
    pub fn to_result(&self, threshold: f64) -> TestResult {
        TestResult::compared(
            TestKind::SignatureDensity,
            self.density,
            threshold,
            Comparison::AtMost,
        )
    }
}

/// Both rule sets, compiled once and shared read-only across runs.
#[derive(Debug, Clone)]
pub struct SignatureEngine {
    tools: RuleSet,
    files: RuleSet,
}

impl SignatureEngine {
    pub fn new(tools: RuleSet, files: RuleSet) -> Self {
        Self { tools, files }
    }

    /// Engine with the built-in tool rules and file-format catalogue.
    pub fn builtin() -> Result<Self, EncScanError> {
        let tools = RuleSet::encryption_tools()?;
        let files = RuleSet::file_formats()?;
        tracing::debug!(
            "signature engine: {} tool rules, {} file rules",
            tools.len(),
            files.len()
        );
        Ok(Self::new(tools, files))
    }

    /// Targeted scan honouring each rule's scan mode. Full-scan rules stream
    /// every block; probe rules read a single block at their offset. The
    /// read position is restored to the start after every probe.
    pub fn scan_tools(
        &self,
        path: &Path,
        block_size: usize,
        progress: Arc<dyn ProgressCallback>,
    ) -> Result<ToolScan, EncScanError> {
        let (mut file, len) = open_input(path)?;
        let block_size = effective_block_size(len, block_size);
        let mut scan = ToolScan::default();

        for rule in self.tools.rules() {
            let outcome = match rule.mode() {
                ScanMode::FullScan => {
                    full_scan(&mut file, len, block_size, rule, progress.clone())
                }
                mode => probe(&mut file, len, block_size, rule, mode),
            };

            match outcome {
                Ok(count) => {
                    scan.hits.insert(rule.name().to_string(), count);
                }
                Err(e) if !e.is_fatal() => {
                    tracing::warn!("rule '{}' skipped: {}", rule.name(), e);
                    scan.failures.push(RuleFailure::from_error(rule.name(), &e));
                    scan.hits.insert(rule.name().to_string(), 0);
                }
                Err(EncScanError::Io(e)) => return Err(EncScanError::unreadable(path, e)),
                Err(e) => return Err(e),
            }
        }

        tracing::info!("encryption tool scan: {}", scan.summary());
        Ok(scan)
    }

    /// Scan every block against every tool rule regardless of its scan mode.
    pub fn scan_tools_hail_mary(
        &self,
        path: &Path,
        block_size: usize,
        progress: Arc<dyn ProgressCallback>,
    ) -> Result<ToolScan, EncScanError> {
        let hits = self.scan_blocks(path, block_size, &self.tools, "tool signatures", progress)?;
        let scan = ToolScan {
            hits,
            failures: Vec::new(),
            hail_mary: true,
        };
        tracing::info!("encryption tool scan (all blocks): {}", scan.summary());
        Ok(scan)
    }

    /// Count generic file-format signatures and express them per megabyte.
    pub fn signature_density(
        &self,
        path: &Path,
        block_size: usize,
        progress: Arc<dyn ProgressCallback>,
    ) -> Result<SignatureTally, EncScanError> {
        let (_, len) = open_input(path)?;
        if len == 0 {
            return Err(EncScanError::UndefinedStatistic(
                "signature density of an empty input".to_string(),
            ));
        }

        let mut counts = self.scan_blocks(path, block_size, &self.files, "file signatures", progress)?;
        counts.retain(|_, count| *count > 0);
        let total_matches: usize = counts.values().sum();
        let size_mb = len as f64 / 1_048_576.0;
        let density = total_matches as f64 / size_mb;

        tracing::debug!(
            "file signatures: {} matches from {} rules over {:.2} MB",
            total_matches,
            counts.len(),
            size_mb
        );
        Ok(SignatureTally {
            counts,
            total_matches,
            size_mb,
            density,
        })
    }

    fn scan_blocks(
        &self,
        path: &Path,
        block_size: usize,
        rules: &RuleSet,
        task: &'static str,
        progress: Arc<dyn ProgressCallback>,
    ) -> Result<BTreeMap<String, usize>, EncScanError> {
        let (file, len) = open_input(path)?;
        let mut stream = BlockStream::new(file, effective_block_size(len, block_size));
        let mut reporter = ProgressReporter::new(task, len, progress);
        let mut counts: BTreeMap<String, usize> =
            rules.names().map(|name| (name.to_string(), 0)).collect();

        while let Some(block) = stream
            .next_block()
            .map_err(|e| EncScanError::unreadable(path, e))?
        {
            let hex = hex::encode(block);
            for rule in rules.rules() {
                let found = rule.count_matches(&hex);
                if found > 0 {
                    *counts.entry(rule.name().to_string()).or_default() += found;
                }
            }
            reporter.add_bytes(block.len() as u64);
        }
        Ok(counts)
    }
}

fn full_scan(
    file: &mut File,
    len: u64,
    block_size: usize,
    rule: &SignatureRule,
    progress: Arc<dyn ProgressCallback>,
) -> Result<usize, EncScanError> {
    file.seek(SeekFrom::Start(0))?;
    let mut stream = BlockStream::new(&mut *file, block_size);
    let mut reporter = ProgressReporter::new("tool signatures", len, progress);
    let mut count = 0;
    while let Some(block) = stream.next_block()? {
        count += rule.count_matches(&hex::encode(block));
        reporter.add_bytes(block.len() as u64);
    }
    file.seek(SeekFrom::Start(0))?;
    Ok(count)
}

fn probe(
    file: &mut File,
    len: u64,
    block_size: usize,
    rule: &SignatureRule,
    mode: ScanMode,
) -> Result<usize, EncScanError> {
    let offset = mode
        .resolve_offset(len, block_size)
        .map_err(|offset| EncScanError::SeekOutOfRange {
            rule: rule.name().to_string(),
            offset,
            len,
        })?;

    file.seek(SeekFrom::Start(offset))?;
    let mut buffer = Vec::with_capacity(block_size);
    (&mut *file).take(block_size as u64).read_to_end(&mut buffer)?;
    file.seek(SeekFrom::Start(0))?;

    tracing::debug!(
        "rule '{}' probed {} bytes at offset {}",
        rule.name(),
        buffer.len(),
        offset
    );
    Ok(rule.count_matches(&hex::encode(&buffer)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::progress::NoOpProgress;
    use std::io::Write;

    fn noop() -> Arc<dyn ProgressCallback> {
        Arc::new(NoOpProgress)
    }

    fn write_file(data: &[u8]) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(data).unwrap();
        file.flush().unwrap();
        file
    }

    fn marker_engine(mode: ScanMode) -> SignatureEngine {
        let tools = RuleSet::compile([("Marker", "c0ffee11", mode)]).unwrap();
        let files = RuleSet::compile([
            ("Marker", "c0ffee11", ScanMode::FullScan),
            ("Other", "abcdef0123", ScanMode::FullScan),
        ])
        .unwrap();
        SignatureEngine::new(tools, files)
    }

    #[test]
    fn test_full_scan_counts_every_block() {
        let mut data = vec![0u8; 4 * 1024];
        for block in 0..4 {
            data[block * 1024 + 100..block * 1024 + 104].copy_from_slice(&[0xC0, 0xFF, 0xEE, 0x11]);
        }
        let file = write_file(&data);

        let scan = marker_engine(ScanMode::FullScan)
            .scan_tools(file.path(), 1024, noop())
            .unwrap();
        assert_eq!(scan.hits["Marker"], 4);
        assert!(scan.any_found());
    }

    #[test]
    fn test_probe_reads_only_its_block() {
        let mut data = vec![0u8; 4 * 1024];
        data[2 * 1024..2 * 1024 + 4].copy_from_slice(&[0xC0, 0xFF, 0xEE, 0x11]);
        let file = write_file(&data);

        let third = marker_engine(ScanMode::OffsetProbe(3))
            .scan_tools(file.path(), 1024, noop())
            .unwrap();
        assert_eq!(third.hits["Marker"], 1);

        let first = marker_engine(ScanMode::OffsetProbe(1))
            .scan_tools(file.path(), 1024, noop())
            .unwrap();
        assert_eq!(first.hits["Marker"], 0);
        assert!(!first.any_found());
    }

    #[test]
    fn test_negative_probe_reads_from_end() {
        let mut data = vec![0u8; 4 * 1024];
        data[3 * 1024 + 512..3 * 1024 + 516].copy_from_slice(&[0xC0, 0xFF, 0xEE, 0x11]);
        let file = write_file(&data);

        let scan = marker_engine(ScanMode::OffsetProbe(-1))
            .scan_tools(file.path(), 1024, noop())
            .unwrap();
        assert_eq!(scan.hits["Marker"], 1);
    }

    #[test]
    fn test_out_of_range_probe_is_reported_not_fatal() {
        let file = write_file(&vec![0u8; 2 * 1024]);

        let scan = marker_engine(ScanMode::OffsetProbe(5))
            .scan_tools(file.path(), 1024, noop())
            .unwrap();
        assert_eq!(scan.hits["Marker"], 0);
        assert_eq!(scan.failures.len(), 1);
        assert_eq!(scan.failures[0].kind, "SeekOutOfRange");
    }

    #[test]
    fn test_hail_mary_ignores_offsets() {
        let mut data = vec![0u8; 4 * 1024];
        data[10..14].copy_from_slice(&[0xC0, 0xFF, 0xEE, 0x11]);
        data[3 * 1024..3 * 1024 + 4].copy_from_slice(&[0xC0, 0xFF, 0xEE, 0x11]);
        let file = write_file(&data);

        let engine = marker_engine(ScanMode::OffsetProbe(2));
        let targeted = engine.scan_tools(file.path(), 1024, noop()).unwrap();
        assert_eq!(targeted.hits["Marker"], 0);

        let all = engine.scan_tools_hail_mary(file.path(), 1024, noop()).unwrap();
        assert_eq!(all.hits["Marker"], 2);
        assert!(all.hail_mary);
    }

    #[test]
    fn test_signature_density_per_megabyte() {
        let mut data = vec![0u8; 1_048_576];
        for i in 0..10 {
            data[i * 1000..i * 1000 + 4].copy_from_slice(&[0xC0, 0xFF, 0xEE, 0x11]);
        }
        let file = write_file(&data);

        let tally = marker_engine(ScanMode::FullScan)
            .signature_density(file.path(), 65_536, noop())
            .unwrap();
        assert_eq!(tally.total_matches, 10);
        assert_eq!(tally.counts.len(), 1);
        assert_eq!(tally.size_mb, 1.0);
        assert_eq!(tally.density, 10.0);
        assert!(tally.to_result(150.0).indicates_encryption);
    }

    #[test]
    fn test_luks_header_detected_by_builtin_rules() {
        let mut data = vec![0u8; 8192];
        data[..8].copy_from_slice(&[0x4C, 0x55, 0x4B, 0x53, 0xBA, 0xBE, 0x00, 0x01]);
        let file = write_file(&data);

        let engine = SignatureEngine::new(
            RuleSet::encryption_tools().unwrap(),
            RuleSet::default(),
        );
        let scan = engine.scan_tools(file.path(), 1_048_576, noop()).unwrap();
        assert_eq!(scan.found(), vec![("LUKSv1", 1)]);
        assert!(scan.failures.is_empty());
    }
}
