//! One-sample Kolmogorov-Smirnov statistic against the uniform byte CDF.

use crate::histogram::ByteHistogram;
use crate::stats::{Comparison, TestKind, TestResult};
use crate::EncScanError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KsOutcome {
    /// Maximum absolute gap between the empirical and uniform CDFs.
    pub statistic: f64,
    /// Byte value at which the maximum gap first occurs.
    pub max_diff_position: u8,
    pub bytes_read: u64,
    /// `1.63 / sqrt(N)`
    pub critical_value_001: f64,
    /// `1.36 / sqrt(N)`
    pub critical_value_005: f64,
}

impl KsOutcome {
    pub fn to_result(&self, threshold: f64) -> TestResult {
        TestResult::compared(
            TestKind::KolmogorovSmirnov,
            self.statistic,
            threshold,
            Comparison::AtMost,
        )
    }
}

/// Walk byte values 0..=255 in ascending order, accumulating both CDFs, and
/// record the largest absolute difference.
pub fn ks_test(histogram: &ByteHistogram) -> Result<KsOutcome, EncScanError> {
    if histogram.is_empty() {
        return Err(EncScanError::UndefinedStatistic(
            "Kolmogorov-Smirnov test of an empty input".to_string(),
        ));
    }

    let total = histogram.total() as f64;
    let mut cumulative = 0u64;
    let mut statistic = 0.0f64;
    let mut max_diff_position = 0u8;

    for (value, &count) in histogram.counts().iter().enumerate() {
        cumulative += count;
        let empirical = cumulative as f64 / total;
        let theoretical = (value + 1) as f64 / 256.0;
        let diff = (empirical - theoretical).abs();
        if diff > statistic {
            statistic = diff;
            max_diff_position = value as u8;
        }
    }

    let root = total.sqrt();
    Ok(KsOutcome {
        statistic,
        max_diff_position,
        bytes_read: histogram.total(),
        critical_value_001: 1.63 / root,
        critical_value_005: 1.36 / root,
    })
}
