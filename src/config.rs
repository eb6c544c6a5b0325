use crate::error::{Error, Result};

/// Bytes reversed per iteration. Page aligned.
pub const BLOCK_SIZE: usize = 32768;

/// Read-ahead distance, in blocks.
pub const PREFETCH_BLOCKS: usize = 32;

pub const PREFETCH: usize = PREFETCH_BLOCKS * BLOCK_SIZE;

/// How block contents are fetched from the input file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// Read-only memory map with a "will need" hint ahead of the cursor.
    Mapped,
    /// Positioned reads into a fixed block buffer, tail first.
    Positioned,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Options {
    pub block_size: usize,
    pub prefetch: usize,
    pub access: Access,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            block_size: BLOCK_SIZE,
            prefetch: PREFETCH,
            access: Access::Mapped,
        }
    }
}

impl Options {
    /// Changes the block capacity, keeping the prefetch distance at
    /// `PREFETCH_BLOCKS` blocks.
    pub fn with_block_size(mut self, block_size: usize) -> Self {
        self.block_size = block_size;
        self.prefetch = block_size.saturating_mul(PREFETCH_BLOCKS);
        self
    }

    pub fn with_access(mut self, access: Access) -> Self {
        self.access = access;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.block_size == 0 {
            return Err(Error::InvalidOptions("block size must be non-zero"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_reference_sizing() {
        let opts = Options::default();
        assert_eq!(opts.block_size, 32768);
        assert_eq!(opts.prefetch, 32 * 32768);
        assert_eq!(opts.access, Access::Mapped);
        assert!(opts.validate().is_ok());
    }

    #[test]
    fn block_size_rescales_prefetch() {
        let opts = Options::default().with_block_size(4);
        assert_eq!(opts.prefetch, 128);
    }

    #[test]
    fn zero_block_size_is_rejected() {
        let err = Options::default().with_block_size(0).validate().unwrap_err();
        assert_eq!(err.kind(), crate::ErrorKind::InvalidOptions);
    }
}
