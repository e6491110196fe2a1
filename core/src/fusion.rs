//! Two-stage decision fusion.
//!
//! Stage 0 checks the encryption-tool signatures. Without a hit, the
//! filesystem probe decides between Stage 2a (autocorrelation alone) and
//! Stage 2b (five-way threshold vote).

use crate::block::{effective_block_size, open_input};
use crate::config::{DetectionConfig, Thresholds};
use crate::histogram::HistogramBuilder;
use crate::prepare::ensure_optimized;
use crate::probe::{is_recognized, FilesystemProbe};
use crate::progress::{NoOpProgress, ProgressCallback};
use crate::report::{Degradation, VerdictReport};
use crate::signature::{SignatureEngine, SignatureTally, ToolScan};
use crate::stats::{
    autocorrelation, chi_squared, ks_test, shannon_entropy, AutocorrelationOutcome, Comparison,
    CompressionOutcome, CompressionTest, KsOutcome, TestKind, TestResult,
};
use crate::EncScanError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Number of tests that vote in Stage 2b.
pub const VOTING_TESTS: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Classification {
    NoEncryption,
    FullDiskEncryption,
    FileBasedEncryption,
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Classification::NoEncryption => "no encryption",
            Classification::FullDiskEncryption => "full-disk encryption",
            Classification::FileBasedEncryption => "file-based encryption",
        })
    }
}

/// Which stage produced the classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Stage {
    /// Stage 0: an encryption-tool signature matched.
    ToolSignature,
    /// Stage 2a: no filesystem recognised, autocorrelation decides.
    NoFilesystem,
    /// Stage 2b: filesystem recognised, threshold vote decides.
    Voting,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Stage::ToolSignature => "stage 0 (encryption tool signatures)",
            Stage::NoFilesystem => "stage 2a (no filesystem)",
            Stage::Voting => "stage 2b (threshold vote)",
        })
    }
}

/// Map a Stage 2b vote count to a label. Counts outside `0..=5` fall back to
/// `NoEncryption` and return the internal error to report.
pub fn label_for_votes(votes: usize) -> (Classification, Option<String>) {
    match votes {
        0..=2 => (Classification::NoEncryption, None),
        3..=VOTING_TESTS => (Classification::FullDiskEncryption, None),
        other => (
            Classification::NoEncryption,
            Some(format!(
                "vote count {} outside 0..={}; defaulting to no encryption",
                other, VOTING_TESTS
            )),
        ),
    }
}

/// Statistics derived from the shared byte histogram.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistogramStats {
    pub bytes_read: u64,
    pub ks: KsOutcome,
    pub entropy: f64,
    pub chi_squared: f64,
}

/// Every test of the Stage 2b battery, computed on one input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Battery {
    pub autocorrelation: AutocorrelationOutcome,
    pub histogram: HistogramStats,
    pub compression: CompressionOutcome,
    pub signatures: SignatureTally,
}

impl Battery {
    /// The five voting results in a fixed order: autocorrelation, KS,
    /// compression, signature density, entropy.
    pub fn votes(&self, thresholds: &Thresholds) -> Vec<TestResult> {
        vec![
            self.autocorrelation.to_result(thresholds.autocorrelation),
            self.histogram.ks.to_result(thresholds.ks),
            self.compression.to_result(thresholds.compression),
            self.signatures.to_result(thresholds.signature_density),
            entropy_result(self.histogram.entropy, thresholds.entropy),
        ]
    }

    /// Voting results followed by the informational chi-squared statistic.
    pub fn results(&self, thresholds: &Thresholds) -> Vec<TestResult> {
        let mut results = self.votes(thresholds);
        results.push(TestResult::informational(
            TestKind::ChiSquared,
            self.histogram.chi_squared,
        ));
        results
    }

    pub fn vote_count(&self, thresholds: &Thresholds) -> usize {
        self.votes(thresholds)
            .iter()
            .filter(|r| r.indicates_encryption)
            .count()
    }
}

fn entropy_result(entropy: f64, threshold: f64) -> TestResult {
    TestResult::compared(
        TestKind::Entropy,
        entropy,
        threshold,
        Comparison::AtLeast,
    )
}

/// Runs the full classification pipeline for one input at a time. The
/// compiled signature engine is shared read-only and may serve many inputs.
pub struct Detector {
    config: DetectionConfig,
    engine: Arc<SignatureEngine>,
    probe: Arc<dyn FilesystemProbe>,
    progress: Arc<dyn ProgressCallback>,
}

impl Detector {
    pub fn new(
        config: DetectionConfig,
        engine: Arc<SignatureEngine>,
        probe: Arc<dyn FilesystemProbe>,
    ) -> Result<Self, EncScanError> {
        config.validate()?;
        Ok(Self {
            config,
            engine,
            probe,
            progress: Arc::new(NoOpProgress),
        })
    }

    pub fn with_progress(mut self, progress: Arc<dyn ProgressCallback>) -> Self {
        self.progress = progress;
        self
    }

    pub fn config(&self) -> &DetectionConfig {
        &self.config
    }

    /// Classify the input at `path`.
    ///
    /// Unreadable and empty inputs fail before any test runs. Missing
    /// compressors, probe failures and out-of-range signature probes are
    /// recorded as degradations in the report.
    pub fn classify(&self, path: &Path) -> Result<VerdictReport, EncScanError> {
        let (_, len) = open_input(path)?;
        if len == 0 {
            return Err(EncScanError::UndefinedStatistic(format!(
                "{} is empty; no statistic is defined",
                path.display()
            )));
        }

        let mut report = VerdictReport::new(path);
        let analysed = self.analysed_input(path, &mut report);
        let (_, analysed_len) = open_input(&analysed)?;
        report.analysed = analysed.clone();
        report.block_size = effective_block_size(analysed_len, self.config.block_size);

        // Stage 0
        let tools = self.scan_tools(path)?;
        for failure in &tools.failures {
            report.degradations.push(Degradation {
                source: format!("signature rule '{}'", failure.rule),
                kind: failure.kind.clone(),
                reason: failure.reason.clone(),
            });
        }
        let found = tools.found();
        if !found.is_empty() {
            let names: Vec<String> = found
                .iter()
                .map(|(name, count)| format!("{} - {}", name, count))
                .collect();
            report.trail.push(format!(
                "stage 0: encryption tool signatures found: {}",
                names.join(", ")
            ));
            report.tool_scan = tools;
            return Ok(report.finish(Classification::FullDiskEncryption, Stage::ToolSignature));
        }
        report.trail.push("stage 0: no encryption tool signatures".to_string());
        report.tool_scan = tools;

        let autocorr = autocorrelation(
            &analysed,
            self.config.block_size,
            self.config.max_autocorrelation_lag,
            self.progress.clone(),
        )?;

        // Stage 1
        let filesystem = match self.probe.probe(path) {
            Ok(fs) => fs,
            Err(e) => {
                tracing::warn!("{} probe failed on {}: {}", self.probe.name(), path.display(), e);
                report.degradations.push(Degradation::from_error(
                    format!("{} probe", self.probe.name()),
                    &e,
                ));
                String::new()
            }
        };
        report.filesystem = filesystem.clone();

        if !is_recognized(&filesystem) {
            report.trail.push(format!(
                "stage 1: no filesystem recognised by the {} probe",
                self.probe.name()
            ));
            let result = autocorr.to_result(self.config.thresholds.autocorrelation);
            let classification = if result.indicates_encryption {
                report.trail.push(
                    "stage 2a: low autocorrelation variability, likely per-file encryption or compressed content"
                        .to_string(),
                );
                Classification::FileBasedEncryption
            } else {
                report.trail.push("stage 2a: structured content".to_string());
                Classification::NoEncryption
            };
            report.results.push(result);
            report.autocorrelation = Some(autocorr);
            return Ok(report.finish(classification, Stage::NoFilesystem));
        }

        report.trail.push(format!("stage 1: filesystem '{}' recognised", filesystem));
        let battery = self.complete_battery(&analysed, autocorr)?;
        if let Some(reason) = &battery.compression.unavailable {
            report.degradations.push(Degradation {
                source: "compression test".to_string(),
                kind: "ToolUnavailable".to_string(),
                reason: reason.clone(),
            });
        }

        let votes = battery.vote_count(&self.config.thresholds);
        let (classification, internal_error) = label_for_votes(votes);
        report.trail.push(format!(
            "stage 2b: {} of {} tests indicate encryption",
            votes, VOTING_TESTS
        ));
        report.results = battery.results(&self.config.thresholds);
        report.vote_count = Some(votes);
        report.internal_error = internal_error;
        report.attach_battery(battery);
        Ok(report.finish(classification, Stage::Voting))
    }

    /// Compute every Stage 2b statistic on `path` without classifying it.
    pub fn run_battery(&self, path: &Path) -> Result<Battery, EncScanError> {
        let (_, len) = open_input(path)?;
        if len == 0 {
            return Err(EncScanError::UndefinedStatistic(format!(
                "{} is empty; no statistic is defined",
                path.display()
            )));
        }
        let autocorr = autocorrelation(
            path,
            self.config.block_size,
            self.config.max_autocorrelation_lag,
            self.progress.clone(),
        )?;
        self.complete_battery(path, autocorr)
    }

    fn scan_tools(&self, path: &Path) -> Result<ToolScan, EncScanError> {
        if self.config.hail_mary {
            self.engine
                .scan_tools_hail_mary(path, self.config.block_size, self.progress.clone())
        } else {
            self.engine
                .scan_tools(path, self.config.block_size, self.progress.clone())
        }
    }

    /// The optimized sibling when enabled and non-empty, else the input.
    fn analysed_input(&self, path: &Path, report: &mut VerdictReport) -> PathBuf {
        if !self.config.optimize {
            return path.to_path_buf();
        }
        match ensure_optimized(path) {
            Ok(summary) if summary.output_bytes > 0 => {
                report.trail.push(format!(
                    "optimized: analysing {} ({} of {} bytes)",
                    summary.output.display(),
                    summary.output_bytes,
                    summary.input_bytes
                ));
                summary.output
            }
            Ok(summary) => {
                tracing::warn!(
                    "{} has no bytes left after optimization, analysing the original",
                    summary.output.display()
                );
                report.trail.push("optimized: nothing left, analysing the original".to_string());
                path.to_path_buf()
            }
            Err(e) => {
                tracing::warn!("optimization of {} failed: {}", path.display(), e);
                report
                    .degradations
                    .push(Degradation::from_error("optimization pre-pass", &e));
                path.to_path_buf()
            }
        }
    }

    fn complete_battery(
        &self,
        path: &Path,
        autocorrelation: AutocorrelationOutcome,
    ) -> Result<Battery, EncScanError> {
        let (histogram, (compression, signatures)) = if self.config.parallel {
            rayon::join(
                || self.histogram_stats(path),
                || {
                    rayon::join(
                        || self.compression(path),
                        || self.signature_density(path),
                    )
                },
            )
        } else {
            (
                self.histogram_stats(path),
                (self.compression(path), self.signature_density(path)),
            )
        };

        Ok(Battery {
            autocorrelation,
            histogram: histogram?,
            compression: compression?,
            signatures: signatures?,
        })
    }

    fn histogram_stats(&self, path: &Path) -> Result<HistogramStats, EncScanError> {
        let histogram = HistogramBuilder::new(self.config.block_size)
            .with_parallel(self.config.parallel)
            .with_progress(self.progress.clone())
            .build_from_path(path)?;
        Ok(HistogramStats {
            bytes_read: histogram.total(),
            ks: ks_test(&histogram)?,
            entropy: shannon_entropy(&histogram)?,
            chi_squared: chi_squared(&histogram)?,
        })
    }

    fn compression(&self, path: &Path) -> Result<CompressionOutcome, EncScanError> {
        CompressionTest::new(self.config.compressors.clone()).run(path)
    }

    fn signature_density(&self, path: &Path) -> Result<SignatureTally, EncScanError> {
        self.engine
            .signature_density(path, self.config.block_size, self.progress.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vote_mapping() {
        assert_eq!(label_for_votes(0), (Classification::NoEncryption, None));
        assert_eq!(label_for_votes(2), (Classification::NoEncryption, None));
        assert_eq!(label_for_votes(3), (Classification::FullDiskEncryption, None));
        assert_eq!(label_for_votes(5), (Classification::FullDiskEncryption, None));

        let (label, error) = label_for_votes(6);
        assert_eq!(label, Classification::NoEncryption);
        assert!(error.unwrap().contains("vote count 6"));
    }

    fn battery(autocorr: f64, ks: f64, ratio: f64, density: f64, entropy: f64) -> Battery {
        Battery {
            autocorrelation: AutocorrelationOutcome {
                statistic: autocorr,
                mean_block_score: 0.01,
                blocks: 4,
                constant_blocks: 0,
                skipped_tail_bytes: 0,
                block_size: 1024,
            },
            histogram: HistogramStats {
                bytes_read: 4096,
                ks: KsOutcome {
                    statistic: ks,
                    max_diff_position: 0,
                    bytes_read: 4096,
                    critical_value_001: 1.63 / 64.0,
                    critical_value_005: 1.36 / 64.0,
                },
                entropy,
                chi_squared: 250.0,
            },
            compression: CompressionOutcome {
                original_bytes: 4096,
                ratios: Vec::new(),
                mean: ratio,
                unavailable: None,
            },
            signatures: SignatureTally {
                density,
                ..Default::default()
            },
        }
    }

    #[test]
    fn test_battery_votes_in_fixed_order() {
        let thresholds = Thresholds::default();
        let random = battery(0.001, 0.01, 1.0, 3.0, 7.99);
        assert_eq!(random.vote_count(&thresholds), 5);

        let kinds: Vec<TestKind> = random.results(&thresholds).iter().map(|r| r.kind).collect();
        assert_eq!(
            kinds,
            vec![
                TestKind::Autocorrelation,
                TestKind::KolmogorovSmirnov,
                TestKind::Compression,
                TestKind::SignatureDensity,
                TestKind::Entropy,
                TestKind::ChiSquared,
            ]
        );

        let structured = battery(0.3, 0.5, 4.0, 900.0, 3.2);
        assert_eq!(structured.vote_count(&thresholds), 0);
    }

    #[test]
    fn test_disabled_compression_cannot_vote() {
        let thresholds = Thresholds::default();
        let mut b = battery(0.001, 0.01, 1.0, 3.0, 7.99);
        b.compression.unavailable = Some("pigz not found in PATH".to_string());
        b.compression.mean = 0.0;

        let votes = b.votes(&thresholds);
        assert!(!votes[2].indicates_encryption);
        assert_eq!(b.vote_count(&thresholds), 4);
    }

    #[test]
    fn test_entropy_threshold_is_inclusive() {
        let result = entropy_result(7.95, 7.95);
        assert!(result.indicates_encryption);
        assert_eq!(result.reference.unwrap().comparison, Comparison::AtLeast);
    }
}
