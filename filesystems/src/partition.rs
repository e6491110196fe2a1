// MBR and GPT partition table parsing, just enough to locate volumes

use crate::detection::{read_at, SECTOR_SIZE};
use byteorder::{ByteOrder, LittleEndian};
use std::io::{self, Read, Seek};

const MBR_TABLE_OFFSET: usize = 446;
const MBR_ENTRY_SIZE: usize = 16;
const GPT_PROTECTIVE_TYPE: u8 = 0xEE;
const GPT_SIGNATURE: &[u8; 8] = b"EFI PART";

/// Upper bound on GPT entries examined; the standard table holds 128.
const MAX_GPT_ENTRIES: u32 = 128;
const MIN_GPT_ENTRY_SIZE: usize = 128;
const MAX_GPT_ENTRY_SIZE: usize = 4096;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableKind {
    Mbr,
    Gpt,
}

/// A partition's location in bytes from the start of the image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PartitionEntry {
    pub index: usize,
    pub start: u64,
    pub length: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartitionTable {
    pub kind: TableKind,
    pub partitions: Vec<PartitionEntry>,
}

/// Parse the partition table at the start of the image, if any.
pub fn read_partition_table<R: Read + Seek>(reader: &mut R) -> io::Result<Option<PartitionTable>> {
    let mbr = read_at(reader, 0, SECTOR_SIZE)?;
    if mbr.len() < SECTOR_SIZE || mbr[510] != 0x55 || mbr[511] != 0xAA {
        return Ok(None);
    }

    let mut partitions = Vec::new();
    let mut protective = false;
    for i in 0..4 {
        let entry = &mbr[MBR_TABLE_OFFSET + i * MBR_ENTRY_SIZE..MBR_TABLE_OFFSET + (i + 1) * MBR_ENTRY_SIZE];
        let partition_type = entry[4];
        if partition_type == 0 {
            continue;
        }
        if partition_type == GPT_PROTECTIVE_TYPE {
            protective = true;
            continue;
        }
        let first_lba = LittleEndian::read_u32(&entry[8..12]) as u64;
        let sectors = LittleEndian::read_u32(&entry[12..16]) as u64;
        if first_lba == 0 || sectors == 0 {
            continue;
        }
        partitions.push(PartitionEntry {
            index: i + 1,
            start: first_lba * SECTOR_SIZE as u64,
            length: sectors * SECTOR_SIZE as u64,
        });
    }

    if protective {
        return read_gpt(reader);
    }
    if partitions.is_empty() {
        return Ok(None);
    }
    log::debug!("MBR with {} partitions", partitions.len());
    Ok(Some(PartitionTable {
        kind: TableKind::Mbr,
        partitions,
    }))
}

fn read_gpt<R: Read + Seek>(reader: &mut R) -> io::Result<Option<PartitionTable>> {
    let header = read_at(reader, SECTOR_SIZE as u64, SECTOR_SIZE)?;
    if header.len() < 92 || &header[0..8] != GPT_SIGNATURE {
        log::debug!("protective MBR without a GPT header");
        return Ok(None);
    }
    if !gpt_header_crc_valid(&header) {
        log::warn!("GPT header CRC mismatch, ignoring partition table");
        return Ok(None);
    }

    let entries_lba = LittleEndian::read_u64(&header[72..80]);
    let entry_count = LittleEndian::read_u32(&header[80..84]).min(MAX_GPT_ENTRIES) as usize;
    let entry_size = LittleEndian::read_u32(&header[84..88]) as usize;
    if !(MIN_GPT_ENTRY_SIZE..=MAX_GPT_ENTRY_SIZE).contains(&entry_size) || entry_size % 8 != 0 {
        log::warn!("GPT entry size {} out of range", entry_size);
        return Ok(None);
    }
    let table_offset = entries_lba
        .checked_mul(SECTOR_SIZE as u64)
        .filter(|&offset| offset <= i64::MAX as u64);
    let Some(table_offset) = table_offset else {
        log::warn!("GPT entry array LBA {} out of range", entries_lba);
        return Ok(None);
    };

    // entry_count <= 128 and entry_size <= 4096 bound this read to 512 KiB
    let table = read_at(reader, table_offset, entry_count * entry_size)?;

    let mut partitions = Vec::new();
    for (i, entry) in table.chunks_exact(entry_size).enumerate() {
        // unused entries have an all-zero type GUID
        if entry[0..16].iter().all(|&b| b == 0) {
            continue;
        }
        let first_lba = LittleEndian::read_u64(&entry[32..40]);
        let last_lba = LittleEndian::read_u64(&entry[40..48]);
        match gpt_extent(first_lba, last_lba) {
            Some((start, length)) => partitions.push(PartitionEntry {
                index: i + 1,
                start,
                length,
            }),
            None => log::debug!("skipping GPT entry {} with LBA range {}..={}", i + 1, first_lba, last_lba),
        }
    }

    log::debug!("GPT with {} partitions", partitions.len());
    Ok(Some(PartitionTable {
        kind: TableKind::Gpt,
        partitions,
    }))
}

/// Byte start and length of an inclusive LBA range, `None` when the range is
/// inverted or does not fit in `u64` bytes.
fn gpt_extent(first_lba: u64, last_lba: u64) -> Option<(u64, u64)> {
    let sectors = last_lba.checked_sub(first_lba)?.checked_add(1)?;
    let start = first_lba.checked_mul(SECTOR_SIZE as u64)?;
    let length = sectors.checked_mul(SECTOR_SIZE as u64)?;
    start.checked_add(length)?;
    Some((start, length))
}

/// CRC32 over the header with its own CRC field zeroed.
fn gpt_header_crc_valid(header: &[u8]) -> bool {
    let size = LittleEndian::read_u32(&header[12..16]) as usize;
    if !(92..=header.len()).contains(&size) {
        return false;
    }
    let stored = LittleEndian::read_u32(&header[16..20]);
    let mut copy = header[..size].to_vec();
    copy[16..20].fill(0);
    crc32fast::hash(&copy) == stored
}

#[cfg(test)]
mod tests {
    use super::*;
    use byteorder::WriteBytesExt;
    use std::io::Cursor;

    fn mbr_with(partition_type: u8, first_lba: u32, sectors: u32) -> Vec<u8> {
        let mut image = vec![0u8; 4096];
        let entry = MBR_TABLE_OFFSET;
        image[entry + 4] = partition_type;
        LittleEndian::write_u32(&mut image[entry + 8..entry + 12], first_lba);
        LittleEndian::write_u32(&mut image[entry + 12..entry + 16], sectors);
        image[510] = 0x55;
        image[511] = 0xAA;
        image
    }

    #[test]
    fn test_mbr_first_partition() {
        let image = mbr_with(0x83, 2048, 4096);
        let table = read_partition_table(&mut Cursor::new(image)).unwrap().unwrap();
        assert_eq!(table.kind, TableKind::Mbr);
        assert_eq!(
            table.partitions,
            vec![PartitionEntry { index: 1, start: 2048 * 512, length: 4096 * 512 }]
        );
    }

    #[test]
    fn test_no_signature_no_table() {
        let image = vec![0u8; 4096];
        assert!(read_partition_table(&mut Cursor::new(image)).unwrap().is_none());
    }

    fn gpt_image(entries_lba: u64, entry_count: u32, entry_size: u32) -> Vec<u8> {
        let mut image = mbr_with(GPT_PROTECTIVE_TYPE, 1, 100);

        let mut header = vec![0u8; 92];
        header[0..8].copy_from_slice(GPT_SIGNATURE);
        LittleEndian::write_u32(&mut header[12..16], 92);
        LittleEndian::write_u64(&mut header[72..80], entries_lba);
        LittleEndian::write_u32(&mut header[80..84], entry_count);
        LittleEndian::write_u32(&mut header[84..88], entry_size);
        let crc = crc32fast::hash(&header);
        (&mut header[16..20]).write_u32::<LittleEndian>(crc).unwrap();
        image[512..512 + 92].copy_from_slice(&header);
        image
    }

    fn write_gpt_entry(image: &mut [u8], offset: usize, first_lba: u64, last_lba: u64) {
        image[offset] = 0xAF; // non-zero type GUID
        LittleEndian::write_u64(&mut image[offset + 32..offset + 40], first_lba);
        LittleEndian::write_u64(&mut image[offset + 40..offset + 48], last_lba);
    }

    #[test]
    fn test_gpt_entries() {
        let mut image = gpt_image(2, 4, 128);
        write_gpt_entry(&mut image, 2 * 512, 6, 7);

        let table = read_partition_table(&mut Cursor::new(image.clone())).unwrap().unwrap();
        assert_eq!(table.kind, TableKind::Gpt);
        assert_eq!(table.partitions.len(), 1);
        assert_eq!(table.partitions[0].start, 6 * 512);
        assert_eq!(table.partitions[0].length, 2 * 512);

        image[512 + 40] ^= 0xFF;
        assert!(read_partition_table(&mut Cursor::new(image)).unwrap().is_none());
    }

    #[test]
    fn test_gpt_entry_size_out_of_range() {
        for entry_size in [u32::MAX, 8192, 64, 132] {
            let image = gpt_image(2, 4, entry_size);
            assert!(
                read_partition_table(&mut Cursor::new(image)).unwrap().is_none(),
                "entry size {}",
                entry_size
            );
        }
    }

    #[test]
    fn test_gpt_huge_entry_count_is_capped() {
        let mut image = gpt_image(2, u32::MAX, 4096);
        image.resize(2 * 512 + 4096, 0);
        write_gpt_entry(&mut image, 2 * 512, 6, 7);
        let table = read_partition_table(&mut Cursor::new(image)).unwrap().unwrap();
        assert_eq!(table.partitions.len(), 1);
    }

    #[test]
    fn test_gpt_entry_array_lba_overflow() {
        let image = gpt_image(u64::MAX / 4, 4, 128);
        assert!(read_partition_table(&mut Cursor::new(image)).unwrap().is_none());
    }

    #[test]
    fn test_gpt_entry_array_beyond_image() {
        let image = gpt_image(1 << 40, 4, 128);
        let table = read_partition_table(&mut Cursor::new(image)).unwrap().unwrap();
        assert!(table.partitions.is_empty());
    }

    #[test]
    fn test_gpt_overflowing_entries_are_skipped() {
        let mut image = gpt_image(2, 4, 128);
        write_gpt_entry(&mut image, 2 * 512, 6, u64::MAX);
        write_gpt_entry(&mut image, 2 * 512 + 128, u64::MAX / 2, u64::MAX / 2);
        write_gpt_entry(&mut image, 2 * 512 + 256, 9, 8);
        write_gpt_entry(&mut image, 2 * 512 + 384, 6, 7);

        let table = read_partition_table(&mut Cursor::new(image)).unwrap().unwrap();
        assert_eq!(
            table.partitions,
            vec![PartitionEntry { index: 4, start: 6 * 512, length: 2 * 512 }]
        );
    }
}
