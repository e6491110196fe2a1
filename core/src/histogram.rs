//! Byte-frequency histogram built by streaming the input in blocks.

use crate::block::{effective_block_size, open_input, BlockStream};
use crate::progress::{NoOpProgress, ProgressCallback, ProgressReporter};
use crate::EncScanError;
use rayon::prelude::*;
use std::io::Read;
use std::path::Path;
use std::sync::Arc;

/// Sub-slice length handed to each rayon task when counting a block in parallel.
const PARALLEL_CHUNK: usize = 64 * 1024;

/// Counts of every byte value 0..=255 plus the number of bytes counted.
///
/// `counts().iter().sum() == total()` holds for every value of this type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ByteHistogram {
    counts: [u64; 256],
    total: u64,
}

impl Default for ByteHistogram {
    fn default() -> Self {
        Self::new()
    }
}

impl ByteHistogram {
    pub fn new() -> Self {
        Self {
            counts: [0u64; 256],
            total: 0,
        }
    }

    pub fn from_bytes(data: &[u8]) -> Self {
        let mut histogram = Self::new();
        histogram.add_block(data);
        histogram
    }

    /// Build from raw per-value counts; the total is derived from them.
    pub fn from_counts(counts: [u64; 256]) -> Self {
        let total = counts.iter().sum();
        Self { counts, total }
    }

    pub fn add_block(&mut self, data: &[u8]) {
        for &byte in data {
            self.counts[byte as usize] += 1;
        }
        self.total += data.len() as u64;
    }

    /// Add another histogram's counts into this one.
    pub fn merge(&mut self, other: &ByteHistogram) {
        for (mine, theirs) in self.counts.iter_mut().zip(other.counts.iter()) {
            *mine += theirs;
        }
        self.total += other.total;
    }

    pub fn merged(mut self, other: ByteHistogram) -> Self {
        self.merge(&other);
        self
    }

    /// Count a block by splitting it across the rayon pool and reducing the
    /// partial histograms.
    pub fn from_bytes_parallel(data: &[u8]) -> Self {
        data.par_chunks(PARALLEL_CHUNK)
            .map(ByteHistogram::from_bytes)
            .reduce(ByteHistogram::new, ByteHistogram::merged)
    }

    pub fn count(&self, byte: u8) -> u64 {
        self.counts[byte as usize]
    }

    /// Counts indexed by byte value, in ascending order.
    pub fn counts(&self) -> &[u64; 256] {
        &self.counts
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Number of distinct byte values observed.
    pub fn distinct_values(&self) -> usize {
        self.counts.iter().filter(|&&c| c > 0).count()
    }
}

/// Streams an input into a [`ByteHistogram`].
pub struct HistogramBuilder {
    block_size: usize,
    parallel: bool,
    progress: Arc<dyn ProgressCallback>,
}

impl HistogramBuilder {
    pub fn new(block_size: usize) -> Self {
        Self {
            block_size,
            parallel: false,
            progress: Arc::new(NoOpProgress),
        }
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn with_progress(mut self, progress: Arc<dyn ProgressCallback>) -> Self {
        self.progress = progress;
        self
    }

    pub fn build_from_path(&self, path: &Path) -> Result<ByteHistogram, EncScanError> {
        let (file, len) = open_input(path)?;
        self.build_from_reader(file, len)
            .map_err(|e| EncScanError::unreadable(path, e))
    }

    /// Read `reader` to the end. `input_len` drives the effective block size.
    pub fn build_from_reader<R: Read>(
        &self,
        reader: R,
        input_len: u64,
    ) -> std::io::Result<ByteHistogram> {
        let block_size = effective_block_size(input_len, self.block_size);
        let mut stream = BlockStream::new(reader, block_size);
        let mut reporter = ProgressReporter::new("histogram", input_len, self.progress.clone());
        let mut total = ByteHistogram::new();

        while let Some(block) = stream.next_block()? {
            let partial = if self.parallel {
                ByteHistogram::from_bytes_parallel(block)
            } else {
                ByteHistogram::from_bytes(block)
            };
            total.merge(&partial);
            reporter.add_bytes(block.len() as u64);
        }

        tracing::debug!(
            "histogram: {} bytes in blocks of {}, {} distinct values",
            total.total(),
            block_size,
            total.distinct_values()
        );
        Ok(total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{RngCore, SeedableRng};
    use std::io::Cursor;

    #[test]
    fn test_sum_of_counts_equals_total() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(7);
        let mut data = vec![0u8; 100_003];
        rng.fill_bytes(&mut data);

        let histogram = HistogramBuilder::new(4096)
            .build_from_reader(Cursor::new(&data), data.len() as u64)
            .unwrap();
        assert_eq!(histogram.total(), data.len() as u64);
        assert_eq!(histogram.counts().iter().sum::<u64>(), histogram.total());
    }

    #[test]
    fn test_parallel_counting_matches_sequential() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(11);
        let mut data = vec![0u8; 300_000];
        rng.fill_bytes(&mut data);

        let sequential = HistogramBuilder::new(128 * 1024)
            .build_from_reader(Cursor::new(&data), data.len() as u64)
            .unwrap();
        let parallel = HistogramBuilder::new(128 * 1024)
            .with_parallel(true)
            .build_from_reader(Cursor::new(&data), data.len() as u64)
            .unwrap();
        assert_eq!(sequential, parallel);
    }

    #[test]
    fn test_short_tail_block_is_counted() {
        let data = vec![0xAAu8; 10];
        let histogram = HistogramBuilder::new(4)
            .build_from_reader(Cursor::new(&data), 10)
            .unwrap();
        assert_eq!(histogram.count(0xAA), 10);
        assert_eq!(histogram.total(), 10);
    }

    #[test]
    fn test_merge_is_additive() {
        let a = ByteHistogram::from_bytes(&[1, 2, 2]);
        let b = ByteHistogram::from_bytes(&[2, 3]);
        let merged = a.clone().merged(b.clone());
        assert_eq!(merged.count(2), 3);
        assert_eq!(merged.total(), 5);
        assert_eq!(merged, b.merged(a));
    }

    #[test]
    fn test_from_counts_derives_total() {
        let mut counts = [0u64; 256];
        counts[0] = 3;
        counts[255] = 4;
        let histogram = ByteHistogram::from_counts(counts);
        assert_eq!(histogram.total(), 7);
        assert_eq!(histogram.distinct_values(), 2);
    }

    #[test]
    fn test_build_from_path_empty_file() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let histogram = HistogramBuilder::new(1024).build_from_path(file.path()).unwrap();
        assert!(histogram.is_empty());
    }
}
