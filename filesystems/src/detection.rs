// Filesystem detection trait and boot-sector detectors

use std::io::{self, Read, Seek, SeekFrom};

/// Length of the boot sector and of the extended superblock window.
pub const SECTOR_SIZE: usize = 512;

/// Offset of the ext2/3/4 and HFS+ superblocks relative to the volume start.
pub const EXT_SUPERBLOCK_OFFSET: u64 = 1024;

/// Trait for filesystem-specific detection logic
pub trait FilesystemDetector {
    /// Check if the given boot sector and optional extended data matches this filesystem
    ///
    /// # Parameters
    /// - `boot_sector`: First 512 bytes of the volume
    /// - `ext_superblock`: Optional 512 bytes at offset 1024 of the volume
    ///
    /// # Returns
    /// - `Some(variant)` if detected (e.g., "ntfs", "ext4", "fat32")
    /// - `None` if not this filesystem
    fn detect(boot_sector: &[u8], ext_superblock: Option<&[u8]>) -> Option<String>;
}

pub struct NtfsDetector;

impl FilesystemDetector for NtfsDetector {
    fn detect(boot_sector: &[u8], _ext_superblock: Option<&[u8]>) -> Option<String> {
        // OEM ID "NTFS    " at offset 3
        if boot_sector.len() >= 11 && &boot_sector[3..11] == b"NTFS    " {
            Some("ntfs".to_string())
        } else {
            None
        }
    }
}

pub struct ExFatDetector;

impl FilesystemDetector for ExFatDetector {
    fn detect(boot_sector: &[u8], _ext_superblock: Option<&[u8]>) -> Option<String> {
        if boot_sector.len() >= 11 && &boot_sector[3..11] == b"EXFAT   " {
            Some("exfat".to_string())
        } else {
            None
        }
    }
}

pub struct FatDetector;

impl FilesystemDetector for FatDetector {
    fn detect(boot_sector: &[u8], _ext_superblock: Option<&[u8]>) -> Option<String> {
        detect_fat_variant(boot_sector)
    }
}

/// FAT12/16/32 from a boot sector. The type labels at 0x36 and 0x52 are
/// trusted first; otherwise the cluster count decides.
pub fn detect_fat_variant(boot_sector: &[u8]) -> Option<String> {
    if boot_sector.len() < SECTOR_SIZE {
        return None;
    }
    if boot_sector[0x1FE] != 0x55 || boot_sector[0x1FF] != 0xAA {
        return None;
    }
    // An MBR carries the same 0x55AA signature; a BPB starts with a jump.
    if boot_sector[0] != 0xEB && boot_sector[0] != 0xE9 {
        return None;
    }

    let bytes_per_sector = u16::from_le_bytes([boot_sector[0x0B], boot_sector[0x0C]]);
    let sectors_per_cluster = boot_sector[0x0D];
    if !matches!(bytes_per_sector, 512 | 1024 | 2048 | 4096)
        || sectors_per_cluster == 0
        || !sectors_per_cluster.is_power_of_two()
    {
        return None;
    }

    if &boot_sector[0x52..0x57] == b"FAT32" {
        return Some("fat32".to_string());
    }
    if &boot_sector[0x36..0x3B] == b"FAT16" {
        return Some("fat16".to_string());
    }
    if &boot_sector[0x36..0x3B] == b"FAT12" {
        return Some("fat12".to_string());
    }

    let total_sectors = if boot_sector[0x13] != 0 || boot_sector[0x14] != 0 {
        u16::from_le_bytes([boot_sector[0x13], boot_sector[0x14]]) as u32
    } else {
        u32::from_le_bytes([boot_sector[0x20], boot_sector[0x21], boot_sector[0x22], boot_sector[0x23]])
    };
    let total_clusters = total_sectors / sectors_per_cluster as u32;

    match total_clusters {
        0..=4084 => Some("fat12".to_string()),
        4085..=65524 => Some("fat16".to_string()),
        _ => Some("fat32".to_string()),
    }
}

pub struct ExtDetector;

impl FilesystemDetector for ExtDetector {
    fn detect(_boot_sector: &[u8], ext_superblock: Option<&[u8]>) -> Option<String> {
        let sb = ext_superblock?;
        // s_magic 0xEF53 at offset 56
        if sb.len() < 100 || sb[56] != 0x53 || sb[57] != 0xEF {
            return None;
        }
        let compat = u32::from_le_bytes([sb[92], sb[93], sb[94], sb[95]]);
        let incompat = u32::from_le_bytes([sb[96], sb[97], sb[98], sb[99]]);

        // EXTENTS | 64BIT | FLEX_BG
        if incompat & (0x0040 | 0x0080 | 0x0200) != 0 {
            return Some("ext4".to_string());
        }
        // HAS_JOURNAL
        if compat & 0x0004 != 0 {
            return Some("ext3".to_string());
        }
        Some("ext2".to_string())
    }
}

pub struct XfsDetector;

impl FilesystemDetector for XfsDetector {
    fn detect(boot_sector: &[u8], _ext_superblock: Option<&[u8]>) -> Option<String> {
        if boot_sector.len() >= 4 && &boot_sector[0..4] == b"XFSB" {
            Some("xfs".to_string())
        } else {
            None
        }
    }
}

pub struct HfsPlusDetector;

impl FilesystemDetector for HfsPlusDetector {
    fn detect(_boot_sector: &[u8], ext_superblock: Option<&[u8]>) -> Option<String> {
        match ext_superblock {
            Some(header) if header.len() >= 2 && &header[0..2] == b"H+" => Some("hfs+".to_string()),
            Some(header) if header.len() >= 2 && &header[0..2] == b"HX" => Some("hfsx".to_string()),
            _ => None,
        }
    }
}

/// Read the boot sector and the extended superblock of the volume starting
/// at `base`. Short inputs yield short buffers; the superblock is `None`
/// when the input ends before it.
pub fn read_detection_data<R: Read + Seek>(
    reader: &mut R,
    base: u64,
) -> io::Result<(Vec<u8>, Option<Vec<u8>>)> {
    let boot_sector = read_at(reader, base, SECTOR_SIZE)?;
    let ext_superblock = match base.checked_add(EXT_SUPERBLOCK_OFFSET) {
        Some(offset) => read_at(reader, offset, SECTOR_SIZE)?,
        None => Vec::new(),
    };
    reader.seek(SeekFrom::Start(0))?;

    let ext_superblock = if ext_superblock.is_empty() {
        None
    } else {
        Some(ext_superblock)
    };
    Ok((boot_sector, ext_superblock))
}

/// Read up to `len` bytes at `offset`. The buffer grows with the data
/// actually read, so `len` may exceed the input.
pub(crate) fn read_at<R: Read + Seek>(reader: &mut R, offset: u64, len: usize) -> io::Result<Vec<u8>> {
    reader.seek(SeekFrom::Start(offset))?;
    let mut buffer = Vec::new();
    (&mut *reader).take(len as u64).read_to_end(&mut buffer)?;
    Ok(buffer)
}

/// Run every detector against one volume's detection data.
pub fn detect_volume(boot_sector: &[u8], ext_superblock: Option<&[u8]>) -> Option<String> {
    NtfsDetector::detect(boot_sector, ext_superblock)
        .or_else(|| ExFatDetector::detect(boot_sector, ext_superblock))
        .or_else(|| FatDetector::detect(boot_sector, ext_superblock))
        .or_else(|| ExtDetector::detect(boot_sector, ext_superblock))
        .or_else(|| XfsDetector::detect(boot_sector, ext_superblock))
        .or_else(|| HfsPlusDetector::detect(boot_sector, ext_superblock))
}

/// Detect a filesystem on the volume starting at `base`.
pub fn detect_filesystem_at<R: Read + Seek>(reader: &mut R, base: u64) -> io::Result<Option<String>> {
    let (boot_sector, ext_superblock) = read_detection_data(reader, base)?;
    Ok(detect_volume(&boot_sector, ext_superblock.as_deref()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fat_boot_sector(label_offset: usize, label: &[u8], total_sectors: u16) -> Vec<u8> {
        let mut sector = vec![0u8; SECTOR_SIZE];
        sector[0] = 0xEB;
        sector[0x0B..0x0D].copy_from_slice(&512u16.to_le_bytes());
        sector[0x0D] = 4;
        sector[0x13..0x15].copy_from_slice(&total_sectors.to_le_bytes());
        sector[label_offset..label_offset + label.len()].copy_from_slice(label);
        sector[0x1FE] = 0x55;
        sector[0x1FF] = 0xAA;
        sector
    }

    #[test]
    fn test_fat_labels() {
        assert_eq!(detect_fat_variant(&fat_boot_sector(0x52, b"FAT32", 0)), Some("fat32".into()));
        assert_eq!(detect_fat_variant(&fat_boot_sector(0x36, b"FAT16", 0)), Some("fat16".into()));
    }

    #[test]
    fn test_fat_cluster_count_fallback() {
        // 8000 sectors / 4 per cluster = 2000 clusters
        assert_eq!(detect_fat_variant(&fat_boot_sector(0x36, b"     ", 8000)), Some("fat12".into()));
        // 40000 / 4 = 10000 clusters
        assert_eq!(detect_fat_variant(&fat_boot_sector(0x36, b"     ", 40000)), Some("fat16".into()));
    }

    #[test]
    fn test_mbr_is_not_fat() {
        let mut mbr = vec![0u8; SECTOR_SIZE];
        mbr[0x1FE] = 0x55;
        mbr[0x1FF] = 0xAA;
        assert_eq!(detect_fat_variant(&mbr), None);
        assert_eq!(detect_volume(&mbr, None), None);
    }

    #[test]
    fn test_ext_variants() {
        let mut sb = vec![0u8; SECTOR_SIZE];
        sb[56] = 0x53;
        sb[57] = 0xEF;
        assert_eq!(ExtDetector::detect(&[], Some(&sb)), Some("ext2".into()));

        sb[92] = 0x04;
        assert_eq!(ExtDetector::detect(&[], Some(&sb)), Some("ext3".into()));

        sb[96] = 0x40;
        assert_eq!(ExtDetector::detect(&[], Some(&sb)), Some("ext4".into()));
    }

    #[test]
    fn test_oem_ids() {
        let mut sector = vec![0u8; SECTOR_SIZE];
        sector[3..11].copy_from_slice(b"NTFS    ");
        assert_eq!(detect_volume(&sector, None), Some("ntfs".into()));

        sector[3..11].copy_from_slice(b"EXFAT   ");
        assert_eq!(detect_volume(&sector, None), Some("exfat".into()));
    }

    #[test]
    fn test_short_input_reads_partial_data() {
        let mut cursor = std::io::Cursor::new(vec![0u8; 100]);
        let (boot, ext) = read_detection_data(&mut cursor, 0).unwrap();
        assert_eq!(boot.len(), 100);
        assert!(ext.is_none());
    }

    #[test]
    fn test_read_at_large_len_reads_what_exists() {
        let mut cursor = std::io::Cursor::new(vec![7u8; 64]);
        let data = read_at(&mut cursor, 32, usize::MAX).unwrap();
        assert_eq!(data, vec![7u8; 32]);
    }

    #[test]
    fn test_volume_at_end_of_address_space() {
        let mut cursor = std::io::Cursor::new(vec![0u8; 64]);
        let (boot, ext) = read_detection_data(&mut cursor, u64::MAX - 10).unwrap();
        assert!(boot.is_empty());
        assert!(ext.is_none());
    }
}
