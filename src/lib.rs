//! Byte-for-byte reversal of regular files.
//!
//! The input is walked from its end towards its beginning in fixed-size
//! blocks. Each block is reversed into a scratch buffer and written out in
//! order, so memory use stays at a couple of blocks no matter how large the
//! input is.

mod config;
mod error;
mod reverse;
mod source;
mod stdin;
mod stdout;

pub use config::{Access, Options, BLOCK_SIZE, PREFETCH, PREFETCH_BLOCKS};
pub use error::{Error, ErrorKind, Result};
pub use reverse::{mem_rev, reverse_file_to_stream, reverse_source, Blocks};
pub use source::{BlockSource, MappedSource, PositionedSource};
pub use stdin::{regular_len, stdin_file};
pub use stdout::Stdout;
