//! Average compression ratio across external general-purpose compressors.
//!
//! Each compressor reads the input on stdin; the compressed stream on stdout
//! is counted and discarded. Missing or failing compressors disable the test
//! instead of failing the run.

use crate::block::open_input;
use crate::config::CompressorSpec;
use crate::stats::{Comparison, TestKind, TestResult};
use crate::EncScanError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::process::{Command, Stdio};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompressorRatio {
    pub name: String,
    pub compressed_bytes: u64,
    pub ratio: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompressionOutcome {
    pub original_bytes: u64,
    pub ratios: Vec<CompressorRatio>,
    /// Arithmetic mean of the ratios, 0 when the test was disabled.
    pub mean: f64,
    /// Why the test was disabled, if it was.
    pub unavailable: Option<String>,
}

impl CompressionOutcome {
    fn disabled(original_bytes: u64, reason: String) -> Self {
        Self {
            original_bytes,
            ratios: Vec::new(),
            mean: 0.0,
            unavailable: Some(reason),
        }
    }

    pub fn is_available(&self) -> bool {
        self.unavailable.is_none()
    }

    pub fn to_result(&self, threshold: f64) -> TestResult {
        match &self.unavailable {
            Some(reason) => TestResult::disabled(
                TestKind::Compression,
                threshold,
                Comparison::AtMost,
                reason.clone(),
            ),
            None => TestResult::compared(
                TestKind::Compression,
                self.mean,
                threshold,
                Comparison::AtMost,
            ),
        }
    }
}

pub struct CompressionTest {
    compressors: Vec<CompressorSpec>,
}

impl CompressionTest {
    pub fn new(compressors: Vec<CompressorSpec>) -> Self {
        Self { compressors }
    }

    /// Every configured compressor must resolve on the PATH.
    pub fn check_availability(&self) -> Result<(), EncScanError> {
        for spec in &self.compressors {
            which::which(&spec.program).map_err(|_| {
                EncScanError::ToolUnavailable(format!("{} not found in PATH", spec.program))
            })?;
        }
        Ok(())
    }

    pub fn run(&self, path: &Path) -> Result<CompressionOutcome, EncScanError> {
        let (_, original_bytes) = open_input(path)?;
        if original_bytes == 0 {
            return Err(EncScanError::UndefinedStatistic(
                "compression ratio of an empty input".to_string(),
            ));
        }

        if let Err(e) = self.check_availability() {
            tracing::warn!("compression test disabled: {}", e);
            return Ok(CompressionOutcome::disabled(original_bytes, e.to_string()));
        }

        let mut ratios = Vec::with_capacity(self.compressors.len());
        for spec in &self.compressors {
            match compressed_size(spec, path) {
                Ok(compressed_bytes) => {
                    let ratio = original_bytes as f64 / compressed_bytes as f64;
                    tracing::debug!("{}: {} -> {} bytes ({:.4})", spec.name, original_bytes, compressed_bytes, ratio);
                    ratios.push(CompressorRatio {
                        name: spec.name.clone(),
                        compressed_bytes,
                        ratio,
                    });
                }
                Err(e @ EncScanError::InputUnreadable { .. }) => return Err(e),
                Err(e) => {
                    tracing::warn!("compression test disabled: {}", e);
                    return Ok(CompressionOutcome::disabled(original_bytes, e.to_string()));
                }
            }
        }

        let mean = ratios.iter().map(|r| r.ratio).sum::<f64>() / ratios.len() as f64;
        Ok(CompressionOutcome {
            original_bytes,
            ratios,
            mean,
            unavailable: None,
        })
    }
}

/// Pipe the file through one compressor and count its output bytes.
pub fn compressed_size(spec: &CompressorSpec, path: &Path) -> Result<u64, EncScanError> {
    let (input, _) = open_input(path)?;
    let mut child = Command::new(&spec.program)
        .args(&spec.args)
        .stdin(Stdio::from(input))
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|e| EncScanError::ToolUnavailable(format!("failed to run {}: {}", spec.program, e)))?;

    let counted = match child.stdout.take() {
        Some(mut stdout) => std::io::copy(&mut stdout, &mut std::io::sink()),
        None => Ok(0),
    };
    let status = child.wait()?;
    let compressed = counted?;

    if !status.success() {
        return Err(EncScanError::External(format!(
            "{} exited with {}",
            spec.program, status
        )));
    }
    if compressed == 0 {
        return Err(EncScanError::External(format!(
            "{} produced no output",
            spec.program
        )));
    }
    Ok(compressed)
}
