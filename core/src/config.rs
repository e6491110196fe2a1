use crate::EncScanError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default read block size (1 MiB).
pub const DEFAULT_BLOCK_SIZE: usize = 1_048_576;

/// Default upper bound (exclusive) of the autocorrelation lag range.
pub const DEFAULT_MAX_LAG: usize = 50;

/// Reference thresholds consumed by decision fusion.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Thresholds {
    /// Autocorrelation variability at or below this supports encryption.
    pub autocorrelation: f64,
    /// KS statistic at or below this supports encryption.
    pub ks: f64,
    /// Mean compression ratio at or below this supports encryption.
    pub compression: f64,
    /// Signature matches per MB at or below this support encryption.
    pub signature_density: f64,
    /// Entropy (bits/byte) at or above this supports encryption.
    pub entropy: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            autocorrelation: 0.125,
            ks: 0.1,
            compression: 1.1,
            signature_density: 150.0,
            entropy: 7.95,
        }
    }
}

/// One general-purpose compressor used by the compression-ratio test. The
/// program reads the input on stdin and writes the compressed stream to stdout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompressorSpec {
    pub name: String,
    pub program: String,
    #[serde(default)]
    pub args: Vec<String>,
}

impl CompressorSpec {
    pub fn new(name: &str, program: &str) -> Self {
        Self {
            name: name.to_string(),
            program: program.to_string(),
            args: Vec::new(),
        }
    }

    pub fn default_set() -> Vec<CompressorSpec> {
        vec![
            CompressorSpec::new("gzip", "pigz"),
            CompressorSpec::new("lz4", "lz4"),
            CompressorSpec::new("bzip2", "lbzip2"),
            CompressorSpec::new("zstd", "zstd"),
            CompressorSpec::new("xz", "pixz"),
        ]
    }
}

/// Which filesystem probe answers the Stage 1 gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ProbeKind {
    /// Built-in boot sector and partition table detectors.
    #[default]
    Native,
    /// `parted -m <file> print`.
    Parted,
    /// `parted` when it is on the PATH, the native probe otherwise.
    Auto,
}

impl std::str::FromStr for ProbeKind {
    type Err = EncScanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "native" => Ok(ProbeKind::Native),
            "parted" => Ok(ProbeKind::Parted),
            "auto" => Ok(ProbeKind::Auto),
            other => Err(EncScanError::Configuration(format!(
                "unknown probe kind '{}' (expected native, parted or auto)",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectionConfig {
    pub block_size: usize,
    pub thresholds: Thresholds,
    pub compressors: Vec<CompressorSpec>,
    pub probe: ProbeKind,
    /// Analyse the `_opt` sibling with all-zero regions removed.
    pub optimize: bool,
    /// Scan every block for every encryption-tool rule, ignoring offsets.
    pub hail_mary: bool,
    /// Run the Stage 2b tests concurrently.
    pub parallel: bool,
    pub max_autocorrelation_lag: usize,
}

impl Default for DetectionConfig {
    fn default() -> Self {
        Self {
            block_size: DEFAULT_BLOCK_SIZE,
            thresholds: Thresholds::default(),
            compressors: CompressorSpec::default_set(),
            probe: ProbeKind::default(),
            optimize: false,
            hail_mary: false,
            parallel: false,
            max_autocorrelation_lag: DEFAULT_MAX_LAG,
        }
    }
}

impl DetectionConfig {
    /// Load a JSON configuration file. Missing fields take their defaults.
    pub fn from_file(path: &Path) -> Result<Self, EncScanError> {
        let raw = std::fs::read_to_string(path).map_err(|e| {
            EncScanError::Configuration(format!("cannot read {}: {}", path.display(), e))
        })?;
        let config: DetectionConfig = serde_json::from_str(&raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), EncScanError> {
        if self.block_size == 0 {
            return Err(EncScanError::Configuration(
                "block_size must be greater than zero".to_string(),
            ));
        }
        if self.compressors.is_empty() {
            return Err(EncScanError::Configuration(
                "at least one compressor is required".to_string(),
            ));
        }
        if self.max_autocorrelation_lag < 2 {
            return Err(EncScanError::Configuration(
                "max_autocorrelation_lag must be at least 2".to_string(),
            ));
        }
        let t = &self.thresholds;
        for (name, value) in [
            ("autocorrelation", t.autocorrelation),
            ("ks", t.ks),
            ("compression", t.compression),
            ("signature_density", t.signature_density),
            ("entropy", t.entropy),
        ] {
            if !value.is_finite() {
                return Err(EncScanError::Configuration(format!(
                    "threshold '{}' must be a finite number",
                    name
                )));
            }
        }
        Ok(())
    }
}
