use std::fs::File;
use std::os::unix::fs::FileExt;

use memmap2::{Advice, Mmap, MmapOptions};
use tracing::trace;

use crate::error::{Error, Result};

/// Random access to the bytes of a fixed-length input.
pub trait BlockSource {
    fn len(&self) -> u64;

    /// Hints that `[offset, offset + len)` is about to be read.
    /// Best effort; never fails.
    fn prefetch(&self, offset: u64, len: usize);

    /// Returns the `len` bytes starting at `offset`.
    fn block(&mut self, offset: u64, len: usize) -> Result<&[u8]>;
}

/// Read-only mapping of a whole file.
pub struct MappedSource {
    map: Mmap,
}

impl MappedSource {
    pub fn map(file: &File) -> Result<Self> {
        // SAFETY: the mapping is read-only and private. The file must not be
        // truncated while mapped, which is the caller's contract for input files.
        let map = unsafe { MmapOptions::new().map(file) }.map_err(Error::MapFailed)?;
        Ok(Self { map })
    }
}

impl BlockSource for MappedSource {
    fn len(&self) -> u64 {
        self.map.len() as u64
    }

    fn prefetch(&self, offset: u64, len: usize) {
        if let Err(e) = self.map.advise_range(Advice::WillNeed, offset as usize, len) {
            trace!(offset, len, error = %e, "read-ahead hint ignored");
        }
    }

    fn block(&mut self, offset: u64, len: usize) -> Result<&[u8]> {
        let start = offset as usize;
        Ok(&self.map[start..start + len])
    }
}

/// Positioned reads into a single block buffer allocated up front.
pub struct PositionedSource<'a> {
    file: &'a File,
    len: u64,
    buf: Vec<u8>,
}

impl<'a> PositionedSource<'a> {
    pub fn new(file: &'a File, len: u64, block_size: usize) -> Self {
        Self {
            file,
            len,
            buf: vec![0; block_size],
        }
    }
}

impl<'a> BlockSource for PositionedSource<'a> {
    fn len(&self) -> u64 {
        self.len
    }

    fn prefetch(&self, _offset: u64, _len: usize) {}

    fn block(&mut self, offset: u64, len: usize) -> Result<&[u8]> {
        debug_assert!(len <= self.buf.len());
        let buf = &mut self.buf[..len];
        self.file
            .read_exact_at(buf, offset)
            .map_err(|source| Error::Read { offset, source })?;
        Ok(buf)
    }
}
