// Filesystem probes for the Stage 1 gate
pub mod detection;
pub mod native;
pub mod parted;
pub mod partition;

pub use detection::{detect_filesystem_at, detect_volume, FilesystemDetector};
pub use native::NativeProbe;
pub use parted::{parse_parted_output, PartedProbe};
pub use partition::{read_partition_table, PartitionEntry, PartitionTable, TableKind};

use encscan_core::{FilesystemProbe, ProbeKind};
use std::sync::Arc;

/// Build the probe selected by configuration. `Auto` prefers parted when it
/// is on the PATH.
pub fn probe_for(kind: ProbeKind) -> Arc<dyn FilesystemProbe> {
    match kind {
        ProbeKind::Native => Arc::new(NativeProbe::new()),
        ProbeKind::Parted => Arc::new(PartedProbe::new()),
        ProbeKind::Auto => {
            let parted = PartedProbe::new();
            if parted.is_available() {
                log::debug!("using parted for filesystem detection");
                Arc::new(parted)
            } else {
                log::debug!("parted not found, using the native probe");
                Arc::new(NativeProbe::new())
            }
        }
    }
}
