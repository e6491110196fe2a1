/// Test utilities: canned filesystem probes and fixture writers
use crate::probe::FilesystemProbe;
use crate::EncScanError;
use rand::{RngCore, SeedableRng};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

/// Probe that always gives the same answer and counts its calls
pub struct FixedProbe {
    answer: String,
    calls: AtomicUsize,
}

impl FixedProbe {
    pub fn new(answer: &str) -> Self {
        Self {
            answer: answer.to_string(),
            calls: AtomicUsize::new(0),
        }
    }

    /// Probe reporting no filesystem
    pub fn none() -> Self {
        Self::new("")
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl FilesystemProbe for FixedProbe {
    fn name(&self) -> &str {
        "fixed"
    }

    fn probe(&self, _path: &Path) -> Result<String, EncScanError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.answer.clone())
    }
}

/// Probe whose backing tool is never available
pub struct MissingToolProbe;

impl FilesystemProbe for MissingToolProbe {
    fn name(&self) -> &str {
        "missing"
    }

    fn probe(&self, _path: &Path) -> Result<String, EncScanError> {
        Err(EncScanError::ToolUnavailable(
            "probe tool not found in PATH".to_string(),
        ))
    }
}

pub fn write_fixture(dir: &Path, name: &str, data: &[u8]) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, data).expect("failed to write fixture");
    path
}

pub fn write_zeros(dir: &Path, name: &str, len: usize) -> PathBuf {
    write_fixture(dir, name, &vec![0u8; len])
}

/// Reproducible pseudo-random bytes from a seeded `StdRng`
pub fn random_bytes(len: usize, seed: u64) -> Vec<u8> {
    let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
    let mut data = vec![0u8; len];
    rng.fill_bytes(&mut data);
    data
}

pub fn write_random(dir: &Path, name: &str, len: usize, seed: u64) -> PathBuf {
    write_fixture(dir, name, &random_bytes(len, seed))
}

/// Plain text-like content: repeated ASCII lines
pub fn text_bytes(len: usize) -> Vec<u8> {
    let line = b"The quick brown fox jumps over the lazy dog 0123456789\n";
    line.iter().copied().cycle().take(len).collect()
}
