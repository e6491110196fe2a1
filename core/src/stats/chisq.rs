//! Pearson chi-squared goodness of fit against the uniform byte distribution.

use crate::histogram::ByteHistogram;
use crate::EncScanError;

/// Sum over all 256 byte values of `(observed - expected)^2 / expected`,
/// with `expected = total / 256`.
pub fn chi_squared(histogram: &ByteHistogram) -> Result<f64, EncScanError> {
    if histogram.is_empty() {
        return Err(EncScanError::UndefinedStatistic(
            "chi-squared of an empty input".to_string(),
        ));
    }

    let expected = histogram.total() as f64 / 256.0;
    let statistic = histogram
        .counts()
        .iter()
        .map(|&observed| {
            let diff = observed as f64 - expected;
            diff * diff / expected
        })
        .sum();
    Ok(statistic)
}
