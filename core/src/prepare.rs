//! Optimization pre-pass: drop all-zero regions before statistical analysis.
//!
//! The optimized copy is written next to the input as `<stem>_opt<.ext>` and
//! reused on later runs.

use crate::block::{open_input, BlockStream};
use crate::EncScanError;
use serde::{Deserialize, Serialize};
use std::io::{BufWriter, Read, Write};
use tempfile::NamedTempFile;
use std::path::{Path, PathBuf};

/// Granularity at which zero regions are detected and dropped.
pub const ZERO_REGION_GRANULARITY: usize = 4096;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptimizeSummary {
    pub output: PathBuf,
    pub input_bytes: u64,
    pub output_bytes: u64,
    /// `false` when an existing sibling was reused.
    pub created: bool,
}

/// Sibling path of the optimized copy: `disk.img` -> `disk_opt.img`.
pub fn optimized_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let name = match input.extension() {
        Some(ext) => format!("{}_opt.{}", stem, ext.to_string_lossy()),
        None => format!("{}_opt", stem),
    };
    input.with_file_name(name)
}

/// Copy `input` to `output`, skipping every `granularity`-sized chunk that
/// contains only zero bytes.
///
/// The copy is staged in a temporary file beside `output` and renamed into
/// place only once it is complete, so a failed run never leaves a partial
/// sibling behind.
pub fn optimize_image(
    input: &Path,
    output: &Path,
    granularity: usize,
) -> Result<OptimizeSummary, EncScanError> {
    let (file, input_bytes) = open_input(input)?;
    let output_bytes = write_optimized(file, input, output, granularity)?;

    tracing::info!(
        "{} -> {}: {} of {} bytes kept",
        input.display(),
        output.display(),
        output_bytes,
        input_bytes
    );
    Ok(OptimizeSummary {
        output: output.to_path_buf(),
        input_bytes,
        output_bytes,
        created: true,
    })
}

fn write_optimized<R: Read>(
    source: R,
    input: &Path,
    output: &Path,
    granularity: usize,
) -> Result<u64, EncScanError> {
    let parent = match output.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    let staged = NamedTempFile::new_in(parent)?;
    let mut writer = BufWriter::new(staged);
    let mut stream = BlockStream::new(source, granularity);
    let mut output_bytes = 0u64;

    while let Some(chunk) = stream
        .next_block()
        .map_err(|e| EncScanError::unreadable(input, e))?
    {
        if chunk.iter().all(|&b| b == 0) {
            continue;
        }
        writer.write_all(chunk)?;
        output_bytes += chunk.len() as u64;
    }

    let staged = writer.into_inner().map_err(|e| e.into_error())?;
    staged.as_file().sync_all()?;
    staged.persist(output).map_err(|e| e.error)?;
    Ok(output_bytes)
}

/// Return the optimized sibling of `input`, creating it when missing.
pub fn ensure_optimized(input: &Path) -> Result<OptimizeSummary, EncScanError> {
    let output = optimized_path(input);
    if output.is_file() {
        let (_, input_bytes) = open_input(input)?;
        let (_, output_bytes) = open_input(&output)?;
        tracing::debug!("reusing optimized file {}", output.display());
        return Ok(OptimizeSummary {
            output,
            input_bytes,
            output_bytes,
            created: false,
        });
    }
    tracing::info!("optimized file {} not found, creating it", output.display());
    optimize_image(input, &output, ZERO_REGION_GRANULARITY)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_optimized_path_naming() {
        assert_eq!(optimized_path(Path::new("/cases/disk.img")), PathBuf::from("/cases/disk_opt.img"));
        assert_eq!(optimized_path(Path::new("/cases/disk")), PathBuf::from("/cases/disk_opt"));
        assert_eq!(optimized_path(Path::new("a.tar.gz")), PathBuf::from("a.tar_opt.gz"));
    }

    #[test]
    fn test_zero_regions_are_dropped() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("image.bin");
        let mut data = vec![0u8; 4 * 16];
        data[16..32].fill(0x11);
        data[60] = 0x22;
        std::fs::write(&input, &data).unwrap();

        let output = dir.path().join("image_opt.bin");
        let summary = optimize_image(&input, &output, 16).unwrap();
        assert_eq!(summary.output_bytes, 32);

        let written = std::fs::read(&output).unwrap();
        assert_eq!(&written[..16], &[0x11u8; 16]);
        assert_eq!(written[16 + 12], 0x22);
    }

    /// Yields `limit` bytes of 0xAB, then fails.
    struct FailingReader {
        remaining: usize,
    }

    impl Read for FailingReader {
        fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
            if self.remaining == 0 {
                return Err(std::io::Error::new(std::io::ErrorKind::Other, "device went away"));
            }
            let n = buf.len().min(self.remaining);
            buf[..n].fill(0xAB);
            self.remaining -= n;
            Ok(n)
        }
    }

    #[test]
    fn test_failed_read_leaves_no_sibling() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("image.bin");
        let output = optimized_path(&input);

        let source = FailingReader { remaining: 3 * 4096 + 100 };
        let err = write_optimized(source, &input, &output, 4096).unwrap_err();
        assert!(matches!(err, EncScanError::InputUnreadable { .. }));

        assert!(!output.exists());
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_existing_sibling_is_reused() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("image.bin");
        std::fs::write(&input, vec![0xFFu8; 8192]).unwrap();

        let first = ensure_optimized(&input).unwrap();
        assert!(first.created);
        assert_eq!(first.output_bytes, 8192);

        let second = ensure_optimized(&input).unwrap();
        assert!(!second.created);
        assert_eq!(second.output, first.output);
    }
}
