use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EncScanError {
    #[error("Input unreadable: {path}: {reason}")]
    InputUnreadable { path: PathBuf, reason: String },

    #[error("Tool unavailable: {0}")]
    ToolUnavailable(String),

    #[error("Failed to compile signature rule '{rule}': {reason}")]
    PatternCompile { rule: String, reason: String },

    #[error("Statistic undefined: {0}")]
    UndefinedStatistic(String),

    #[error("Seek out of range for rule '{rule}': offset {offset} in a {len}-byte input")]
    SeekOutOfRange { rule: String, offset: i64, len: u64 },

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("External command failed: {0}")]
    External(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl EncScanError {
    pub fn unreadable(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        EncScanError::InputUnreadable {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    /// Whether the error aborts classification of the whole input. Non-fatal
    /// kinds degrade a single test or rule and are recorded in the report.
    pub fn is_fatal(&self) -> bool {
        !matches!(
            self,
            EncScanError::ToolUnavailable(_) | EncScanError::SeekOutOfRange { .. }
        )
    }

    /// Short machine-readable name of the error kind.
    pub fn kind(&self) -> &'static str {
        match self {
            EncScanError::InputUnreadable { .. } => "InputUnreadable",
            EncScanError::ToolUnavailable(_) => "ToolUnavailable",
            EncScanError::PatternCompile { .. } => "PatternCompileError",
            EncScanError::UndefinedStatistic(_) => "UndefinedStatistic",
            EncScanError::SeekOutOfRange { .. } => "SeekOutOfRange",
            EncScanError::Configuration(_) => "Configuration",
            EncScanError::External(_) => "External",
            EncScanError::Io(_) => "Io",
            EncScanError::Serialization(_) => "Serialization",
        }
    }
}
