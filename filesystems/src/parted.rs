// External probe backed by GNU parted

use encscan_core::block::open_input;
use encscan_core::{EncScanError, FilesystemProbe};
use std::path::{Path, PathBuf};
use std::process::Command;

/// Runs `parted -m <file> print` and reports the filesystem column of the
/// last partition line.
#[derive(Debug, Clone)]
pub struct PartedProbe {
    program: PathBuf,
}

impl PartedProbe {
    pub fn new() -> Self {
        Self::with_program("parted")
    }

    pub fn with_program(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn is_available(&self) -> bool {
        which::which(&self.program).is_ok()
    }
}

impl Default for PartedProbe {
    fn default() -> Self {
        Self::new()
    }
}

impl FilesystemProbe for PartedProbe {
    fn name(&self) -> &str {
        "parted"
    }

    fn probe(&self, path: &Path) -> Result<String, EncScanError> {
        open_input(path)?;
        let program = which::which(&self.program).map_err(|_| {
            EncScanError::ToolUnavailable(format!("{} not found in PATH", self.program.display()))
        })?;

        let output = Command::new(program)
            .arg("-m")
            .arg(path)
            .arg("print")
            .output()
            .map_err(|e| EncScanError::External(format!("failed to run parted: {}", e)))?;

        let mut text = String::from_utf8_lossy(&output.stdout).into_owned();
        text.push_str(&String::from_utf8_lossy(&output.stderr));
        let fs = parse_parted_output(&text);
        log::debug!("parted on {}: '{}'", path.display(), fs);
        Ok(fs)
    }
}

/// Filesystem column of the last partition line of `parted -m` output.
///
/// Any output mentioning `Error` yields `""`, as does output without a
/// partition line.
pub fn parse_parted_output(output: &str) -> String {
    if output.contains("Error") {
        return String::new();
    }
    let Some(last) = output.lines().map(str::trim).filter(|l| !l.is_empty()).last() else {
        return String::new();
    };
    let fields: Vec<&str> = last.split(':').collect();
    if fields.len() < 3 {
        return String::new();
    }
    fields[fields.len() - 3].trim().to_string()
}
