use std::fs::File;
use std::io;
use std::os::unix::io::AsFd;

use crate::error::{Error, Result};

/// Duplicates standard input into an owned `File`. Descriptor 0 itself stays open.
pub fn stdin_file() -> Result<File> {
    let fd = io::stdin().as_fd().try_clone_to_owned()?;
    Ok(File::from(fd))
}

/// Length of `file`, provided it is a regular file.
///
/// Pipes, sockets, terminals and directories are rejected with
/// [`Error::NotSeekable`] before anything tries to map them.
pub fn regular_len(file: &File) -> Result<u64> {
    let meta = file.metadata().map_err(Error::Stat)?;
    if !meta.file_type().is_file() {
        return Err(Error::NotSeekable);
    }
    Ok(meta.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::os::unix::net::UnixStream;

    use crate::ErrorKind;

    #[test]
    fn regular_file_reports_its_length() {
        let mut file = tempfile::tempfile().unwrap();
        file.write_all(b"0123456789").unwrap();
        assert_eq!(regular_len(&file).unwrap(), 10);
    }

    #[test]
    fn empty_file_is_regular() {
        let file = tempfile::tempfile().unwrap();
        assert_eq!(regular_len(&file).unwrap(), 0);
    }

    #[test]
    fn directory_is_not_seekable() {
        let dir = tempfile::tempdir().unwrap();
        let file = File::open(dir.path()).unwrap();
        assert_eq!(regular_len(&file).unwrap_err().kind(), ErrorKind::NotSeekable);
    }

    #[test]
    fn socket_is_not_seekable() {
        let (a, _b) = UnixStream::pair().unwrap();
        let file = File::from(a.as_fd().try_clone_to_owned().unwrap());
        assert_eq!(regular_len(&file).unwrap_err().kind(), ErrorKind::NotSeekable);
    }
}
