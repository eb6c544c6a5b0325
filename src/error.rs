use std::io;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// Input is a pipe, socket, device or directory.
    #[error("not a regular file")]
    NotSeekable,

    #[error("mmap failed")]
    MapFailed(#[source] io::Error),

    #[error("short write: {written} of {expected} bytes")]
    ShortWrite {
        written: usize,
        expected: usize,
        #[source]
        source: Option<io::Error>,
    },

    #[error("stat failed")]
    Stat(#[source] io::Error),

    #[error("read failed at offset {offset}")]
    Read {
        offset: u64,
        #[source]
        source: io::Error,
    },

    #[error("invalid options: {0}")]
    InvalidOptions(&'static str),

    #[error(transparent)]
    Io(#[from] io::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotSeekable,
    MapFailed,
    ShortWrite,
    Io,
    InvalidOptions,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::NotSeekable => ErrorKind::NotSeekable,
            Error::MapFailed(_) => ErrorKind::MapFailed,
            Error::ShortWrite { .. } => ErrorKind::ShortWrite,
            Error::Stat(_) | Error::Read { .. } | Error::Io(_) => ErrorKind::Io,
            Error::InvalidOptions(_) => ErrorKind::InvalidOptions,
        }
    }
}
