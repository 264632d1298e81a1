//! Buffered, forward-only byte source used by the segment parsers.

use std::io::{self, BufReader, Read};

/// Default buffer capacity for the underlying `BufReader`
const DEFAULT_CAPACITY: usize = 64 * 1024;

/// Upper bound on up-front allocation for a single read. Declared segment sizes
/// come from the file itself, so a corrupt header must not trigger a huge
/// allocation before a single byte has been read.
const MAX_PREALLOCATION: usize = 1024 * 1024;

/// Sequential byte source supporting "read up to N bytes" and "skip N bytes".
///
/// Short reads are not errors at this level: callers compare the returned
/// length against what they asked for and decide how to report truncation.
pub struct ByteReader<R: Read> {
    inner: BufReader<R>,
    position: u64,
}

impl<R: Read> ByteReader<R> {
    /// Wrap a reader with the default buffer capacity
    pub fn new(reader: R) -> Self {
        Self::with_capacity(DEFAULT_CAPACITY, reader)
    }

    /// Wrap a reader with an explicit buffer capacity
    pub fn with_capacity(capacity: usize, reader: R) -> Self {
        Self {
            inner: BufReader::with_capacity(capacity, reader),
            position: 0,
        }
    }

    /// Read until `len` bytes have been collected or the stream ends.
    ///
    /// The returned buffer is shorter than `len` only at end of stream.
    pub fn read_up_to(&mut self, len: usize) -> io::Result<Vec<u8>> {
        let mut buf = Vec::with_capacity(len.min(MAX_PREALLOCATION));
        (&mut self.inner).take(len as u64).read_to_end(&mut buf)?;
        self.position += buf.len() as u64;
        Ok(buf)
    }

    /// Discard up to `len` bytes, returning how many were actually skipped.
    pub fn skip(&mut self, len: usize) -> io::Result<u64> {
        let skipped = io::copy(&mut (&mut self.inner).take(len as u64), &mut io::sink())?;
        self.position += skipped;
        Ok(skipped)
    }

    /// Number of bytes consumed from the start of the stream
    pub fn position(&self) -> u64 {
        self.position
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    /// Reader that always fails, for exercising error paths
    struct FailingReader;

    impl Read for FailingReader {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"))
        }
    }

    #[test]
    fn test_read_up_to_exact() {
        let mut reader = ByteReader::new(Cursor::new(b"FCS3.1    rest".to_vec()));
        assert_eq!(reader.read_up_to(6).unwrap(), b"FCS3.1");
        assert_eq!(reader.position(), 6);
    }

    #[test]
    fn test_read_up_to_short_stream() {
        let mut reader = ByteReader::new(Cursor::new(b"FCS".to_vec()));
        let bytes = reader.read_up_to(6).unwrap();
        assert_eq!(bytes, b"FCS");
        assert_eq!(reader.position(), 3);
    }

    #[test]
    fn test_skip_then_read() {
        let mut reader = ByteReader::with_capacity(2, Cursor::new(b"0123456789".to_vec()));
        assert_eq!(reader.skip(4).unwrap(), 4);
        assert_eq!(reader.read_up_to(3).unwrap(), b"456");
        assert_eq!(reader.position(), 7);
    }

    #[test]
    fn test_skip_past_end() {
        let mut reader = ByteReader::new(Cursor::new(b"abc".to_vec()));
        assert_eq!(reader.skip(10).unwrap(), 3);
        assert!(reader.read_up_to(1).unwrap().is_empty());
    }

    #[test]
    fn test_io_error_propagates() {
        let mut reader = ByteReader::new(FailingReader);
        let err = reader.read_up_to(6).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
        assert!(reader.skip(4).is_err());
    }
}
