//! Block-wise lag autocorrelation variability.
//!
//! Every full-size block is centred on its own mean and scored by the mean
//! absolute Pearson correlation between the block and its lagged copies for
//! lags `1..min(len, max_lag)`. The statistic is the population standard
//! deviation of those block scores. A trailing short block is never scored.

use crate::block::{effective_block_size, open_input, BlockStream};
use crate::progress::{ProgressCallback, ProgressReporter};
use crate::stats::{Comparison, TestKind, TestResult};
use crate::EncScanError;
use serde::{Deserialize, Serialize};
use std::io::Read;
use std::path::Path;
use std::sync::Arc;

/// Sums of squared deviations below this are treated as zero variance.
const VARIANCE_EPSILON: f64 = 1e-9;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AutocorrelationOutcome {
    /// Standard deviation of the per-block scores.
    pub statistic: f64,
    /// Mean of the per-block scores.
    pub mean_block_score: f64,
    /// Full-size blocks scored.
    pub blocks: usize,
    /// Scored blocks in which every byte was identical.
    pub constant_blocks: usize,
    /// Bytes of the trailing short block that were not scored.
    pub skipped_tail_bytes: u64,
    pub block_size: usize,
}

impl AutocorrelationOutcome {
    /// Low variability supports encryption, unless every block was constant:
    /// identical scores from featureless data say nothing about randomness.
    pub fn indicates_encryption(&self, threshold: f64) -> bool {
        self.constant_blocks < self.blocks
            && Comparison::AtMost.holds(self.statistic, threshold)
    }

    pub fn to_result(&self, threshold: f64) -> TestResult {
        let mut result = TestResult::compared(
            TestKind::Autocorrelation,
            self.statistic,
            threshold,
            Comparison::AtMost,
        );
        result.indicates_encryption = self.indicates_encryption(threshold);
        if self.constant_blocks == self.blocks {
            result = result.with_note(format!("all {} blocks constant", self.blocks));
        }
        result
    }
}

/// Run the test over the file at `path`.
pub fn autocorrelation(
    path: &Path,
    block_size: usize,
    max_lag: usize,
    progress: Arc<dyn ProgressCallback>,
) -> Result<AutocorrelationOutcome, EncScanError> {
    let (file, len) = open_input(path)?;
    autocorrelation_from_reader(file, len, block_size, max_lag, progress).map_err(|e| match e {
        EncScanError::Io(io) => EncScanError::unreadable(path, io),
        other => other,
    })
}

pub fn autocorrelation_from_reader<R: Read>(
    reader: R,
    input_len: u64,
    block_size: usize,
    max_lag: usize,
    progress: Arc<dyn ProgressCallback>,
) -> Result<AutocorrelationOutcome, EncScanError> {
    let block_size = effective_block_size(input_len, block_size);
    let mut stream = BlockStream::new(reader, block_size);
    let mut reporter = ProgressReporter::new("autocorrelation", input_len, progress);
    let mut centred = Vec::with_capacity(block_size);
    let mut scores = Vec::new();
    let mut constant_blocks = 0;
    let mut skipped_tail_bytes = 0;

    while let Some(block) = stream.next_block()? {
        reporter.add_bytes(block.len() as u64);
        if block.len() < block_size {
            skipped_tail_bytes = block.len() as u64;
            break;
        }
        let (score, constant) = block_score(block, max_lag, &mut centred);
        if constant {
            constant_blocks += 1;
        }
        scores.push(score);
    }

    if scores.is_empty() {
        return Err(EncScanError::UndefinedStatistic(format!(
            "autocorrelation needs at least one full {}-byte block",
            block_size
        )));
    }

    let mean = scores.iter().sum::<f64>() / scores.len() as f64;
    let variance = scores.iter().map(|s| (s - mean) * (s - mean)).sum::<f64>() / scores.len() as f64;

    tracing::debug!(
        "autocorrelation: {} blocks, {} constant, mean score {:.6}, std {:.6}",
        scores.len(),
        constant_blocks,
        mean,
        variance.sqrt()
    );

    Ok(AutocorrelationOutcome {
        statistic: variance.sqrt(),
        mean_block_score: mean,
        blocks: scores.len(),
        constant_blocks,
        skipped_tail_bytes,
        block_size,
    })
}

/// Mean absolute lag correlation of one block, and whether the block was
/// constant. Lags whose correlation is undefined (a zero-variance side) count
/// as perfectly correlated.
pub fn block_score(block: &[u8], max_lag: usize, centred: &mut Vec<f64>) -> (f64, bool) {
    let n = block.len();
    let mean = block.iter().map(|&b| b as f64).sum::<f64>() / n as f64;
    centred.clear();
    centred.extend(block.iter().map(|&b| b as f64 - mean));

    let constant = block.iter().all(|&b| b == block[0]);
    let lag_limit = n.min(max_lag);
    if constant || lag_limit < 2 {
        return (1.0, constant);
    }

    let mut total = 0.0;
    for lag in 1..lag_limit {
        let r = pearson(&centred[lag..], &centred[..n - lag]).unwrap_or(1.0);
        total += r.abs();
    }
    (total / (lag_limit - 1) as f64, false)
}

/// Pearson correlation of two equal-length series, `None` when either side
/// has no variance.
fn pearson(x: &[f64], y: &[f64]) -> Option<f64> {
    let n = x.len() as f64;
    let mean_x = x.iter().sum::<f64>() / n;
    let mean_y = y.iter().sum::<f64>() / n;

    let (mut sxy, mut sxx, mut syy) = (0.0, 0.0, 0.0);
    for (&a, &b) in x.iter().zip(y) {
        let dx = a - mean_x;
        let dy = b - mean_y;
        sxy += dx * dy;
        sxx += dx * dx;
        syy += dy * dy;
    }

    if sxx <= VARIANCE_EPSILON || syy <= VARIANCE_EPSILON {
        return None;
    }
    Some(sxy / (sxx * syy).sqrt())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::progress::NoOpProgress;
    use rand::{RngCore, SeedableRng};
    use std::io::Cursor;

    fn run(data: &[u8], block_size: usize) -> Result<AutocorrelationOutcome, EncScanError> {
        autocorrelation_from_reader(
            Cursor::new(data),
            data.len() as u64,
            block_size,
            50,
            Arc::new(NoOpProgress),
        )
    }

    #[test]
    fn test_random_blocks_have_low_variability() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(99);
        let mut data = vec![0u8; 16 * 4096];
        rng.fill_bytes(&mut data);

        let outcome = run(&data, 4096).unwrap();
        assert_eq!(outcome.blocks, 16);
        assert_eq!(outcome.constant_blocks, 0);
        assert!(outcome.mean_block_score < 0.05);
        assert!(outcome.statistic < 0.125);
        assert!(outcome.indicates_encryption(0.125));
    }

    #[test]
    fn test_all_zero_input_does_not_indicate_encryption() {
        let outcome = run(&vec![0u8; 8 * 1024], 1024).unwrap();
        assert_eq!(outcome.constant_blocks, 8);
        assert_eq!(outcome.mean_block_score, 1.0);
        assert!(!outcome.indicates_encryption(0.125));
        assert!(!outcome.to_result(0.125).indicates_encryption);
    }

    #[test]
    fn test_trailing_short_block_is_dropped() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(5);
        let mut data = vec![0u8; 2 * 1024 + 512];
        rng.fill_bytes(&mut data);

        let outcome = run(&data, 1024).unwrap();
        assert_eq!(outcome.blocks, 2);
        assert_eq!(outcome.skipped_tail_bytes, 512);
    }

    #[test]
    fn test_alternating_pattern_is_fully_correlated() {
        let block: Vec<u8> = (0..256).map(|i| if i % 2 == 0 { 0 } else { 255 }).collect();
        let (score, constant) = block_score(&block, 50, &mut Vec::new());
        assert!(!constant);
        assert!((score - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_mixed_blocks_raise_variability() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(21);
        let mut data = vec![0u8; 8 * 1024];
        rng.fill_bytes(&mut data[..4 * 1024]);

        let outcome = run(&data, 1024).unwrap();
        assert_eq!(outcome.constant_blocks, 4);
        assert!(outcome.statistic > 0.125);
        assert!(!outcome.indicates_encryption(0.125));
    }

    #[test]
    fn test_small_input_uses_reduced_block() {
        let data: Vec<u8> = (0..300u32).map(|i| (i * 37 % 256) as u8).collect();
        let outcome = run(&data, 1_048_576).unwrap();
        assert_eq!(outcome.block_size, 256);
        assert_eq!(outcome.blocks, 1);
        assert_eq!(outcome.statistic, 0.0);
    }

    #[test]
    fn test_empty_input_is_undefined() {
        assert!(matches!(
            run(&[], 1024),
            Err(EncScanError::UndefinedStatistic(_))
        ));
    }
}
