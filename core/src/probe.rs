use crate::EncScanError;
use std::path::Path;

/// Sentinel reported when no filesystem is recognised.
pub const UNKNOWN_FILESYSTEM: &str = "unknown";

/// Answers "which filesystem, if any, does this input carry?"
pub trait FilesystemProbe: Send + Sync {
    fn name(&self) -> &str;

    /// Filesystem type name, or `""` / [`UNKNOWN_FILESYSTEM`] when none is
    /// recognised.
    fn probe(&self, path: &Path) -> Result<String, EncScanError>;
}

/// Whether a probe answer names a real filesystem.
pub fn is_recognized(filesystem: &str) -> bool {
    let trimmed = filesystem.trim();
    !(trimmed.is_empty() || trimmed.eq_ignore_ascii_case(UNKNOWN_FILESYSTEM))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentinels_are_not_recognized() {
        assert!(!is_recognized(""));
        assert!(!is_recognized("unknown"));
        assert!(!is_recognized(" "));
        assert!(is_recognized("ext4"));
        assert!(is_recognized("ntfs"));
    }
}
