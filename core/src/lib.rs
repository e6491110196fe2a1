pub mod block;
pub mod config;
pub mod error;
pub mod fusion;
pub mod histogram;
pub mod prepare;
pub mod probe;
pub mod progress;
pub mod report;
pub mod signature;
pub mod stats;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use config::{CompressorSpec, DetectionConfig, ProbeKind, Thresholds};
pub use error::EncScanError;
pub use fusion::{label_for_votes, Battery, Classification, Detector, Stage};
pub use histogram::{ByteHistogram, HistogramBuilder};
pub use probe::{is_recognized, FilesystemProbe, UNKNOWN_FILESYSTEM};
pub use progress::{FnProgress, LoggingProgress, NoOpProgress, ProgressCallback, ScanProgress};
pub use report::{Degradation, VerdictReport};
pub use signature::{RuleSet, ScanMode, SignatureEngine, SignatureTally, ToolScan};
pub use stats::{TestKind, TestResult};
