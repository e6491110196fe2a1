//! Byte-pattern signature rules matched against hex-encoded content.

pub mod catalogue;
pub mod engine;
pub mod tools;

pub use engine::{RuleFailure, SignatureEngine, SignatureTally, ToolScan};

use crate::EncScanError;
use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Compiled program size limit per rule; wide `.{n}` gaps need more than the
/// regex crate's default.
const RULE_SIZE_LIMIT: usize = 64 * (1 << 20);

/// Where in the input a rule looks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScanMode {
    /// Every block from the start of the input.
    FullScan,
    /// One block at a sector index: positive counts 1-based from the start,
    /// negative counts back from the end. Never zero.
    OffsetProbe(i64),
}

impl ScanMode {
    pub fn from_sector(sector: i64) -> Self {
        if sector == 0 {
            ScanMode::FullScan
        } else {
            ScanMode::OffsetProbe(sector)
        }
    }

    /// Byte offset of the probed block, or the out-of-range signed offset.
    /// `FullScan` always starts at 0.
    pub fn resolve_offset(&self, input_len: u64, block_size: usize) -> Result<u64, i64> {
        let block = block_size as i64;
        let len = input_len as i64;
        let offset = match *self {
            ScanMode::FullScan => return Ok(0),
            ScanMode::OffsetProbe(sector) if sector > 0 => (sector - 1).saturating_mul(block),
            ScanMode::OffsetProbe(sector) => len.saturating_sub(sector.saturating_abs().saturating_mul(block)),
        };
        if offset < 0 || offset >= len {
            Err(offset)
        } else {
            Ok(offset as u64)
        }
    }
}

/// A named, compiled, case-insensitive hex pattern.
#[derive(Debug, Clone)]
pub struct SignatureRule {
    name: String,
    regex: Regex,
    mode: ScanMode,
}

impl SignatureRule {
    pub fn compile(name: &str, pattern: &str, mode: ScanMode) -> Result<Self, EncScanError> {
        let regex = RegexBuilder::new(pattern)
            .case_insensitive(true)
            .size_limit(RULE_SIZE_LIMIT)
            .build()
            .map_err(|e| EncScanError::PatternCompile {
                rule: name.to_string(),
                reason: e.to_string(),
            })?;
        Ok(Self {
            name: name.to_string(),
            regex,
            mode,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn mode(&self) -> ScanMode {
        self.mode
    }

    /// Number of non-overlapping matches in `hex`.
    pub fn count_matches(&self, hex: &str) -> usize {
        self.regex.find_iter(hex).count()
    }
}

/// An immutable set of rules with unique names, ordered by name.
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    rules: Vec<SignatureRule>,
}

impl RuleSet {
    /// Compile `(name, pattern, mode)` entries. Any malformed pattern or
    /// repeated name fails the whole set.
    pub fn compile<'a, I>(entries: I) -> Result<Self, EncScanError>
    where
        I: IntoIterator<Item = (&'a str, &'a str, ScanMode)>,
    {
        let mut by_name = BTreeMap::new();
        for (name, pattern, mode) in entries {
            let rule = SignatureRule::compile(name, pattern, mode)?;
            if by_name.insert(name.to_string(), rule).is_some() {
                return Err(EncScanError::PatternCompile {
                    rule: name.to_string(),
                    reason: "duplicate rule name".to_string(),
                });
            }
        }
        Ok(Self {
            rules: by_name.into_values().collect(),
        })
    }

    /// The built-in encryption-tool rules.
    pub fn encryption_tools() -> Result<Self, EncScanError> {
        Self::compile(
            tools::ENCRYPTION_TOOL_SIGNATURES
                .iter()
                .map(|&(name, pattern, sector)| (name, pattern, ScanMode::from_sector(sector))),
        )
    }

    /// The built-in generic file-format catalogue.
    pub fn file_formats() -> Result<Self, EncScanError> {
        Self::compile(
            catalogue::FILE_SIGNATURES
                .iter()
                .map(|&(name, pattern)| (name, pattern, ScanMode::FullScan)),
        )
    }

    pub fn rules(&self) -> &[SignatureRule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.rules.iter().map(|r| r.name())
    }
}
