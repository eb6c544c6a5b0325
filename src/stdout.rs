use std::fs::File;
use std::io::{self, Write};
use std::os::unix::io::{AsFd, AsRawFd, RawFd};

use mio::unix::EventedFd;
use mio::{Events, Poll, PollOpt, Ready, Token};

use crate::error::{Error, Result};

const WRITABLE: Token = Token(0);

/// Byte sink for reversed blocks.
///
/// Every block is written in full: partial writes are continued and, when
/// the descriptor is non-blocking, the sink parks on a `mio` poll until the
/// descriptor becomes writable again.
pub struct Stdout<W> {
    inner: W,
    fd: Option<RawFd>,
    poll: Option<Poll>,
}

impl Stdout<File> {
    /// Unbuffered handle on descriptor 1.
    pub fn new() -> Result<Self> {
        let fd = io::stdout().as_fd().try_clone_to_owned()?;
        Ok(Self::evented(File::from(fd)))
    }
}

impl<W: Write + AsRawFd> Stdout<W> {
    pub fn evented(inner: W) -> Self {
        let fd = inner.as_raw_fd();
        Self {
            inner,
            fd: Some(fd),
            poll: None,
        }
    }
}

impl<W: Write> Stdout<W> {
    /// Sink without a descriptor to poll; `WouldBlock` is fatal.
    pub fn from_writer(inner: W) -> Self {
        Self {
            inner,
            fd: None,
            poll: None,
        }
    }

    pub fn get_ref(&self) -> &W {
        &self.inner
    }

    pub fn into_inner(self) -> W {
        self.inner
    }

    pub fn write_block(&mut self, buf: &[u8]) -> Result<()> {
        let expected = buf.len();
        let mut written = 0;
        while written < expected {
            match self.inner.write(&buf[written..]) {
                Ok(0) => {
                    return Err(Error::ShortWrite {
                        written,
                        expected,
                        source: None,
                    })
                }
                Ok(n) => written += n,
                Err(ref e) if e.kind() == io::ErrorKind::Interrupted => {}
                Err(ref e) if e.kind() == io::ErrorKind::WouldBlock && self.fd.is_some() => {
                    self.wait_writable().map_err(|e| Error::ShortWrite {
                        written,
                        expected,
                        source: Some(e),
                    })?;
                }
                Err(e) => {
                    return Err(Error::ShortWrite {
                        written,
                        expected,
                        source: Some(e),
                    })
                }
            }
        }
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.inner.flush().map_err(|e| Error::ShortWrite {
            written: 0,
            expected: 0,
            source: Some(e),
        })
    }

    fn wait_writable(&mut self) -> io::Result<()> {
        let fd = match self.fd {
            Some(fd) => fd,
            None => return Err(io::ErrorKind::WouldBlock.into()),
        };

        let poll = match self.poll.take() {
            Some(poll) => poll,
            None => {
                let poll = Poll::new()?;
                poll.register(&EventedFd(&fd), WRITABLE, Ready::writable(), PollOpt::level())?;
                poll
            }
        };

        let mut events = Events::with_capacity(1);
        let res = poll.poll(&mut events, None);
        self.poll = Some(poll);
        res.map(|_| ())
    }
}
