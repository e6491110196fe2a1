// Built-in filesystem probe: boot sectors first, then partitions

use crate::detection::detect_filesystem_at;
use crate::partition::read_partition_table;
use encscan_core::block::open_input;
use encscan_core::{EncScanError, FilesystemProbe, UNKNOWN_FILESYSTEM};
use std::path::Path;

/// Recognises filesystems from on-disk signatures without external tools.
///
/// A bare volume is checked at offset 0. Otherwise each partition of an MBR
/// or GPT table is checked in table order and the first hit wins.
#[derive(Debug, Default, Clone, Copy)]
pub struct NativeProbe;

impl NativeProbe {
    pub fn new() -> Self {
        Self
    }
}

impl FilesystemProbe for NativeProbe {
    fn name(&self) -> &str {
        "native"
    }

    fn probe(&self, path: &Path) -> Result<String, EncScanError> {
        let (mut file, len) = open_input(path)?;
        let unreadable = |e: std::io::Error| EncScanError::unreadable(path, e);

        if let Some(fs) = detect_filesystem_at(&mut file, 0).map_err(unreadable)? {
            log::info!("{}: {} volume", path.display(), fs);
            return Ok(fs);
        }

        if let Some(table) = read_partition_table(&mut file).map_err(unreadable)? {
            for partition in &table.partitions {
                if partition.start >= len {
                    log::warn!(
                        "{}: partition {} starts beyond the end of the image",
                        path.display(),
                        partition.index
                    );
                    continue;
                }
                if let Some(fs) = detect_filesystem_at(&mut file, partition.start).map_err(unreadable)? {
                    log::info!(
                        "{}: {} in {:?} partition {}",
                        path.display(),
                        fs,
                        table.kind,
                        partition.index
                    );
                    return Ok(fs);
                }
            }
        }

        log::debug!("{}: no filesystem recognised", path.display());
        Ok(UNKNOWN_FILESYSTEM.to_string())
    }
}
