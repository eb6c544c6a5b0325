use std::fs::File;
use std::io::Write;

use bytes::BytesMut;
use tracing::{debug, trace};

use crate::config::{Access, Options};
use crate::error::Result;
use crate::source::{BlockSource, MappedSource, PositionedSource};
use crate::stdin::regular_len;
use crate::stdout::Stdout;

/// Block boundaries of an input of `size` bytes, in processing order.
///
/// Yields `(start, len)` pairs from the end of the input towards its
/// beginning. Only the first block (the tail of the input) may be shorter
/// than `block_size`; it is a full block when `size` is an exact multiple.
/// A `block_size` of 0 yields no blocks.
#[derive(Debug, Clone)]
pub struct Blocks {
    start: u64,
    next_len: u64,
    block_size: u64,
}

impl Blocks {
    pub fn new(size: u64, block_size: usize) -> Self {
        let block_size = block_size as u64;
        if block_size == 0 {
            return Self {
                start: 0,
                next_len: 0,
                block_size,
            };
        }
        let tail = size % block_size;
        Self {
            start: size,
            next_len: if tail == 0 { block_size } else { tail },
            block_size,
        }
    }
}

impl Iterator for Blocks {
    type Item = (u64, usize);

    fn next(&mut self) -> Option<Self::Item> {
        if self.start == 0 {
            return None;
        }
        let len = self.next_len;
        self.start -= len;
        self.next_len = self.block_size;
        Some((self.start, len as usize))
    }
}

/// `dst[i] = src[len - 1 - i]`
pub fn mem_rev(dst: &mut [u8], src: &[u8]) {
    assert_eq!(dst.len(), src.len());
    for (d, s) in dst.iter_mut().zip(src.iter().rev()) {
        *d = *s;
    }
}

/// Writes the byte reversal of `source` to `output`, one block at a time.
///
/// Returns the number of bytes written.
pub fn reverse_source<S, W>(source: &mut S, output: &mut Stdout<W>, options: &Options) -> Result<u64>
where
    S: BlockSource,
    W: Write,
{
    options.validate()?;

    let mut reversed = BytesMut::from(vec![0u8; options.block_size]);
    let prefetch = options.prefetch as u64;
    let mut written = 0;

    for (start, len) in Blocks::new(source.len(), options.block_size) {
        if prefetch > 0 && start > prefetch {
            source.prefetch(start - prefetch, options.prefetch);
        }

        let block = source.block(start, len)?;
        mem_rev(&mut reversed[..len], block);
        output.write_block(&reversed[..len])?;

        trace!(start, len, "block written");
        written += len as u64;
    }

    Ok(written)
}

/// Writes the byte reversal of the regular file `input` to `output`.
pub fn reverse_file_to_stream<W: Write>(
    input: &File,
    output: &mut Stdout<W>,
    options: &Options,
) -> Result<u64> {
    options.validate()?;

    let size = regular_len(input)?;
    debug!(size, block_size = options.block_size, access = ?options.access, "reversing input");
    if size == 0 {
        return Ok(0);
    }

    match options.access {
        Access::Mapped => {
            let mut source = MappedSource::map(input)?;
            reverse_source(&mut source, output, options)
        }
        Access::Positioned => {
            let mut source = PositionedSource::new(input, size, options.block_size);
            reverse_source(&mut source, output, options)
        }
    }
}
