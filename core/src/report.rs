//! Verdict report: the classification plus everything that led to it.

use crate::fusion::{Battery, Classification, HistogramStats, Stage};
use crate::signature::{SignatureTally, ToolScan};
use crate::stats::{AutocorrelationOutcome, CompressionOutcome, TestResult};
use crate::EncScanError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// A non-fatal problem that weakened the run without aborting it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Degradation {
    pub source: String,
    pub kind: String,
    pub reason: String,
}

impl Degradation {
    pub fn from_error(source: impl Into<String>, err: &EncScanError) -> Self {
        Self {
            source: source.into(),
            kind: err.kind().to_string(),
            reason: err.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerdictReport {
    pub run_id: Uuid,
    pub started_at: DateTime<Utc>,
    pub input: PathBuf,
    /// File the statistics were computed on; differs from `input` when the
    /// optimization pre-pass ran.
    pub analysed: PathBuf,
    /// Effective block size for the analysed file.
    pub block_size: usize,
    pub classification: Classification,
    pub stage: Stage,
    /// Ordered, human-readable account of each stage decision.
    pub trail: Vec<String>,
    pub tool_scan: ToolScan,
    /// Raw probe answer; empty when Stage 0 decided.
    pub filesystem: String,
    pub results: Vec<TestResult>,
    pub autocorrelation: Option<AutocorrelationOutcome>,
    pub histogram: Option<HistogramStats>,
    pub compression: Option<CompressionOutcome>,
    pub signatures: Option<SignatureTally>,
    pub vote_count: Option<usize>,
    pub degradations: Vec<Degradation>,
    pub internal_error: Option<String>,
}

impl VerdictReport {
    /// A fresh report for `input`; the classification is provisional until
    /// [`VerdictReport::finish`].
    pub fn new(input: &Path) -> Self {
        Self {
            run_id: Uuid::new_v4(),
            started_at: Utc::now(),
            input: input.to_path_buf(),
            analysed: input.to_path_buf(),
            block_size: 0,
            classification: Classification::NoEncryption,
            stage: Stage::ToolSignature,
            trail: Vec::new(),
            tool_scan: ToolScan::default(),
            filesystem: String::new(),
            results: Vec::new(),
            autocorrelation: None,
            histogram: None,
            compression: None,
            signatures: None,
            vote_count: None,
            degradations: Vec::new(),
            internal_error: None,
        }
    }

    pub fn finish(mut self, classification: Classification, stage: Stage) -> Self {
        self.classification = classification;
        self.stage = stage;
        tracing::info!(
            "{}: {} ({})",
            self.input.display(),
            classification,
            stage
        );
        if let Some(error) = &self.internal_error {
            tracing::error!("{}: internal error: {}", self.input.display(), error);
        }
        self
    }

    pub fn attach_battery(&mut self, battery: Battery) {
        self.autocorrelation = Some(battery.autocorrelation);
        self.histogram = Some(battery.histogram);
        self.compression = Some(battery.compression);
        self.signatures = Some(battery.signatures);
    }

    pub fn is_degraded(&self) -> bool {
        !self.degradations.is_empty()
    }

    pub fn to_json(&self) -> Result<String, EncScanError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl fmt::Display for VerdictReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Input:          {}", self.input.display())?;
        if self.analysed != self.input {
            writeln!(f, "Analysed:       {}", self.analysed.display())?;
        }
        writeln!(f, "Run:            {} at {}", self.run_id, self.started_at.to_rfc3339())?;
        writeln!(f, "Block size:     {} bytes", self.block_size)?;
        if !self.tool_scan.hits.is_empty() {
            writeln!(f, "Tool scan:      {}", self.tool_scan.summary())?;
        }
        if self.stage != Stage::ToolSignature {
            let fs = if self.filesystem.trim().is_empty() {
                "(none)"
            } else {
                self.filesystem.as_str()
            };
            writeln!(f, "Filesystem:     {}", fs)?;
        }

        if !self.results.is_empty() {
            writeln!(f)?;
            writeln!(f, "Tests:")?;
            for result in &self.results {
                writeln!(f, "  {}", result)?;
            }
        }
        if let Some(histogram) = &self.histogram {
            writeln!(
                f,
                "  KS max gap at byte 0x{:02x}; critical values {:.6} (0.01), {:.6} (0.05)",
                histogram.ks.max_diff_position,
                histogram.ks.critical_value_001,
                histogram.ks.critical_value_005
            )?;
        }
        if let Some(votes) = self.vote_count {
            writeln!(f, "  votes: {}/5", votes)?;
        }

        writeln!(f)?;
        for step in &self.trail {
            writeln!(f, "  - {}", step)?;
        }
        for degradation in &self.degradations {
            writeln!(
                f,
                "  ! {} degraded ({}): {}",
                degradation.source, degradation.kind, degradation.reason
            )?;
        }
        if let Some(error) = &self.internal_error {
            writeln!(f, "  ! internal error: {}", error)?;
        }
        write!(f, "Classification: {} [{}]", self.classification, self.stage)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_round_trip_keeps_classification() {
        let mut report = VerdictReport::new(Path::new("/cases/disk.img"));
        report.tool_scan.hits.insert("LUKSv1".to_string(), 1);
        report.trail.push("stage 0: encryption tool signatures found: LUKSv1 - 1".to_string());
        let report = report.finish(Classification::FullDiskEncryption, Stage::ToolSignature);

        let json = report.to_json().unwrap();
        assert!(json.contains("\"FullDiskEncryption\""));
        let parsed: VerdictReport = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.run_id, report.run_id);
        assert_eq!(parsed.stage, Stage::ToolSignature);
    }

    #[test]
    fn test_text_rendering_lists_degradations() {
        let mut report = VerdictReport::new(Path::new("disk.img"));
        report.degradations.push(Degradation::from_error(
            "compression test",
            &EncScanError::ToolUnavailable("pixz not found in PATH".to_string()),
        ));
        let report = report.finish(Classification::NoEncryption, Stage::Voting);

        assert!(report.is_degraded());
        let text = report.to_string();
        assert!(text.contains("compression test degraded (ToolUnavailable)"));
        assert!(text.ends_with("Classification: no encryption [stage 2b (threshold vote)]"));
    }
}
