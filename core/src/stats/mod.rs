//! Statistical randomness tests.
//!
//! Each test reduces the input to one scalar and compares it against a
//! reference threshold. The flag on a [`TestResult`] is `true` when the
//! statistic is consistent with uniformly random (encrypted-looking) data.

pub mod autocorr;
pub mod chisq;
pub mod compression;
pub mod entropy;
pub mod ks;

pub use autocorr::{autocorrelation, AutocorrelationOutcome};
pub use chisq::chi_squared;
pub use compression::{CompressionOutcome, CompressionTest};
pub use entropy::shannon_entropy;
pub use ks::{ks_test, KsOutcome};

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TestKind {
    ChiSquared,
    Entropy,
    KolmogorovSmirnov,
    Compression,
    Autocorrelation,
    SignatureDensity,
}

impl TestKind {
    pub fn label(&self) -> &'static str {
        match self {
            TestKind::ChiSquared => "chi-squared",
            TestKind::Entropy => "Shannon entropy",
            TestKind::KolmogorovSmirnov => "Kolmogorov-Smirnov",
            TestKind::Compression => "average compression ratio",
            TestKind::Autocorrelation => "autocorrelation variability",
            TestKind::SignatureDensity => "file signatures per MB",
        }
    }
}

impl fmt::Display for TestKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Which side of the threshold supports the encryption hypothesis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Comparison {
    AtMost,
    AtLeast,
}

impl Comparison {
    pub fn holds(&self, statistic: f64, threshold: f64) -> bool {
        match self {
            Comparison::AtMost => statistic <= threshold,
            Comparison::AtLeast => statistic >= threshold,
        }
    }

    fn symbol(&self) -> &'static str {
        match self {
            Comparison::AtMost => "<=",
            Comparison::AtLeast => ">=",
        }
    }
}

/// Threshold a statistic is compared against.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Reference {
    pub comparison: Comparison,
    pub value: f64,
}

/// Outcome of one test: the statistic and whether it supports encryption.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestResult {
    pub kind: TestKind,
    pub statistic: f64,
    /// `None` for informational statistics that never vote.
    pub reference: Option<Reference>,
    pub indicates_encryption: bool,
    /// Set when the test ran in a degraded mode.
    pub note: Option<String>,
}

impl TestResult {
    pub fn compared(kind: TestKind, statistic: f64, threshold: f64, comparison: Comparison) -> Self {
        Self {
            kind,
            statistic,
            reference: Some(Reference {
                comparison,
                value: threshold,
            }),
            indicates_encryption: comparison.holds(statistic, threshold),
            note: None,
        }
    }

    pub fn informational(kind: TestKind, statistic: f64) -> Self {
        Self {
            kind,
            statistic,
            reference: None,
            indicates_encryption: false,
            note: None,
        }
    }

    /// A test that could not run; it never supports encryption.
    pub fn disabled(
        kind: TestKind,
        threshold: f64,
        comparison: Comparison,
        reason: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            statistic: 0.0,
            reference: Some(Reference {
                comparison,
                value: threshold,
            }),
            indicates_encryption: false,
            note: Some(reason.into()),
        }
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }
}

impl fmt::Display for TestResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {:.6}", self.kind, self.statistic)?;
        if let Some(reference) = &self.reference {
            write!(
                f,
                " (reference {} {}) -> {}",
                reference.comparison.symbol(),
                reference.value,
                if self.indicates_encryption { "random" } else { "structured" }
            )?;
        }
        if let Some(note) = &self.note {
            write!(f, " [{}]", note)?;
        }
        Ok(())
    }
}
