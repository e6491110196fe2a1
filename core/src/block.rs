//! Sequential fixed-size block reads over an input file.

use crate::EncScanError;
use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::Path;

/// Open an input for analysis, returning the handle and its size in bytes.
///
/// Missing paths, directories and permission problems all map to
/// [`EncScanError::InputUnreadable`].
pub fn open_input(path: &Path) -> Result<(File, u64), EncScanError> {
    let metadata = std::fs::metadata(path).map_err(|e| EncScanError::unreadable(path, e))?;
    if !metadata.is_file() {
        return Err(EncScanError::unreadable(path, "not a regular file"));
    }
    let file = File::open(path).map_err(|e| EncScanError::unreadable(path, e))?;
    Ok((file, metadata.len()))
}

/// Block size actually used for an input of `input_len` bytes.
///
/// Inputs smaller than the requested size read in blocks of the largest power
/// of two not exceeding the input length. Empty inputs keep the request.
pub fn effective_block_size(input_len: u64, requested: usize) -> usize {
    if input_len == 0 || input_len >= requested as u64 {
        return requested;
    }
    1usize << (63 - input_len.leading_zeros())
}

/// A finite, non-restartable sequence of blocks read from `R`.
///
/// Every block except possibly the last holds exactly `block_size` bytes.
pub struct BlockStream<R> {
    reader: R,
    buffer: Vec<u8>,
    bytes_read: u64,
    finished: bool,
}

impl<R: Read> BlockStream<R> {
    pub fn new(reader: R, block_size: usize) -> Self {
        Self {
            reader,
            buffer: vec![0u8; block_size.max(1)],
            bytes_read: 0,
            finished: false,
        }
    }

    /// Total bytes handed out so far.
    pub fn bytes_read(&self) -> u64 {
        self.bytes_read
    }

    /// Read the next block. Returns `Ok(None)` at end of stream; a short
    /// block is only ever returned last.
    pub fn next_block(&mut self) -> std::io::Result<Option<&[u8]>> {
        if self.finished {
            return Ok(None);
        }

        let mut filled = 0;
        while filled < self.buffer.len() {
            match self.reader.read(&mut self.buffer[filled..]) {
                Ok(0) => {
                    self.finished = true;
                    break;
                }
                Ok(n) => filled += n,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        }

        if filled == 0 {
            return Ok(None);
        }
        self.bytes_read += filled as u64;
        Ok(Some(&self.buffer[..filled]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_effective_block_size() {
        assert_eq!(effective_block_size(10 * 1_048_576, 1_048_576), 1_048_576);
        assert_eq!(effective_block_size(1_048_576, 1_048_576), 1_048_576);
        assert_eq!(effective_block_size(1000, 1_048_576), 512);
        assert_eq!(effective_block_size(1024, 1_048_576), 1024);
        assert_eq!(effective_block_size(1, 1_048_576), 1);
        assert_eq!(effective_block_size(0, 4096), 4096);
    }

    #[test]
    fn test_stream_yields_short_tail_last() {
        let data: Vec<u8> = (0..10u8).collect();
        let mut stream = BlockStream::new(Cursor::new(data), 4);

        let mut sizes = Vec::new();
        while let Some(block) = stream.next_block().unwrap() {
            sizes.push(block.len());
        }
        assert_eq!(sizes, vec![4, 4, 2]);
        assert_eq!(stream.bytes_read(), 10);
        assert!(stream.next_block().unwrap().is_none());
    }

    /// Reader that returns at most three bytes per call.
    struct Trickle(Cursor<Vec<u8>>);

    impl Read for Trickle {
        fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
            let n = buf.len().min(3);
            self.0.read(&mut buf[..n])
        }
    }

    #[test]
    fn test_stream_fills_blocks_from_partial_reads() {
        let mut stream = BlockStream::new(Trickle(Cursor::new(vec![7u8; 16])), 8);
        assert_eq!(stream.next_block().unwrap().map(|b| b.len()), Some(8));
        assert_eq!(stream.next_block().unwrap().map(|b| b.len()), Some(8));
        assert!(stream.next_block().unwrap().is_none());
    }

    #[test]
    fn test_open_input_rejects_directory_and_missing() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            open_input(dir.path()),
            Err(EncScanError::InputUnreadable { .. })
        ));
        assert!(matches!(
            open_input(&dir.path().join("absent.img")),
            Err(EncScanError::InputUnreadable { .. })
        ));
    }
}
