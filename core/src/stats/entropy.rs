//! Shannon entropy of the byte distribution, in bits per byte.

use crate::histogram::ByteHistogram;
use crate::EncScanError;

/// `-sum(p * log2(p))` over every observed byte value, `p = count / total`.
/// Unobserved values contribute nothing.
pub fn shannon_entropy(histogram: &ByteHistogram) -> Result<f64, EncScanError> {
    if histogram.is_empty() {
        return Err(EncScanError::UndefinedStatistic(
            "entropy of an empty input".to_string(),
        ));
    }

    let total = histogram.total() as f64;
    let sum: f64 = histogram
        .counts()
        .iter()
        .filter(|&&count| count > 0)
        .map(|&count| {
            let p = count as f64 / total;
            p * p.log2()
        })
        .sum();

    // -0.0 for single-valued input
    Ok((-sum).max(0.0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{RngCore, SeedableRng};

    #[test]
    fn test_constant_input_has_zero_entropy() {
        let histogram = ByteHistogram::from_bytes(&[0x41u8; 4096]);
        assert_eq!(shannon_entropy(&histogram).unwrap(), 0.0);
    }

    #[test]
    fn test_uniform_input_has_eight_bits() {
        let histogram = ByteHistogram::from_counts([17u64; 256]);
        assert_eq!(shannon_entropy(&histogram).unwrap(), 8.0);
    }

    #[test]
    fn test_two_values_have_one_bit() {
        let histogram = ByteHistogram::from_bytes(&[0, 1, 0, 1, 0, 1, 0, 1]);
        assert!((shannon_entropy(&histogram).unwrap() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_random_input_is_bounded_and_high() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(3);
        let mut data = vec![0u8; 1 << 20];
        rng.fill_bytes(&mut data);
        let entropy = shannon_entropy(&ByteHistogram::from_bytes(&data)).unwrap();
        assert!(entropy < 8.0);
        assert!(entropy > 7.99);
    }

    #[test]
    fn test_empty_input_is_undefined() {
        assert!(shannon_entropy(&ByteHistogram::new()).is_err());
    }
}
