//! The pull-based stream contract shared by every stream in this crate.

use crate::compat::IoReader;
use crate::error::{Error, Result};
use crate::fault::BoundedFailingStream;
use crate::observer::{ObservedStream, StreamEvent};

/// A pull-based source of bytes.
///
/// Purpose: The minimal contract code under test consumes. Every variant in
/// this crate (real sources, fault injectors, observers) implements it, and
/// the trait is object safe so variants can be passed as `Box<dyn InputStream>`.
pub trait InputStream {
    /// Fills up to `buf.len()` bytes and returns how many were written.
    ///
    /// A return of 0 means no more data is available. Implementations must
    /// never report more bytes than `buf.len()`.
    fn read(&mut self, buf: &mut [u8]) -> Result<usize>;

    /// Advances the stream by exactly `amount` bytes without returning them.
    ///
    /// Fails if the source cannot supply that many bytes.
    fn skip(&mut self, amount: u64) -> Result<()>;

    /// Reads until `buf` is completely filled.
    ///
    /// Returns `Error::UnexpectedEof` if the stream reports end of data first.
    /// Bytes read before a failure are left in `buf`.
    fn read_exact(&mut self, buf: &mut [u8]) -> Result<()> {
        let mut filled = 0;
        while filled < buf.len() {
            match self.read(&mut buf[filled..])? {
                0 => return Err(Error::unexpected_eof(buf.len() as u64, filled as u64)),
                n => filled += n,
            }
        }
        Ok(())
    }

    /// Appends everything up to end of data to `out`, returning the number of
    /// bytes appended.
    ///
    /// On error, the bytes consumed before the failure remain in `out`.
    fn read_to_end(&mut self, out: &mut Vec<u8>) -> Result<usize> {
        let mut chunk = [0u8; 4096];
        let start = out.len();
        loop {
            match self.read(&mut chunk)? {
                0 => return Ok(out.len() - start),
                n => out.extend_from_slice(&chunk[..n]),
            }
        }
    }
}

impl<S: InputStream + ?Sized> InputStream for &mut S {
    #[inline]
    fn read(&mut self, buf: &mut [u8]) -> Result<usize> {
        (**self).read(buf)
    }

    #[inline]
    fn skip(&mut self, amount: u64) -> Result<()> {
        (**self).skip(amount)
    }
}

impl<S: InputStream + ?Sized> InputStream for Box<S> {
    #[inline]
    fn read(&mut self, buf: &mut [u8]) -> Result<usize> {
        (**self).read(buf)
    }

    #[inline]
    fn skip(&mut self, amount: u64) -> Result<()> {
        (**self).skip(amount)
    }
}

/// Extension methods for streams to enable fluent composition without importing adapter types.
pub trait InputStreamExt: InputStream + Sized {
    /// Allow `budget` more bytes through, then fail permanently.
    fn fail_after(self, budget: u64) -> BoundedFailingStream<Self> {
        BoundedFailingStream::new(self, budget)
    }

    /// Report every operation to `callback` after it completes.
    fn observed<C: Fn(&StreamEvent)>(self, callback: C) -> ObservedStream<Self, C> {
        ObservedStream::new(self, callback)
    }

    /// Expose this stream as a `std::io::Read`.
    fn into_io_reader(self) -> IoReader<Self> {
        IoReader::new(self)
    }
}

impl<T: InputStream> InputStreamExt for T {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::MemoryStream;

    #[test]
    fn read_exact_spans_short_reads() {
        let mut stream = MemoryStream::new(b"abcdefgh".to_vec()).with_max_read(3);
        let mut buf = [0u8; 7];
        stream.read_exact(&mut buf).unwrap();
        assert_eq!(&buf, b"abcdefg");
        assert_eq!(stream.position(), 7);
    }

    #[test]
    fn read_exact_reports_short_source() {
        let mut stream = MemoryStream::new(b"abc".to_vec());
        let mut buf = [0u8; 5];
        match stream.read_exact(&mut buf) {
            Err(Error::UnexpectedEof {
                requested,
                available,
            }) => {
                assert_eq!(requested, 5);
                assert_eq!(available, 3);
            }
            other => panic!("unexpected result: {other:?}"),
        }
        assert_eq!(&buf[..3], b"abc");
    }

    #[test]
    fn read_to_end_collects_everything() {
        let data: Vec<u8> = (0..10_000u32).map(|i| (i % 251) as u8).collect();
        let mut stream = MemoryStream::new(data.clone());
        let mut out = vec![0xAA];
        let n = stream.read_to_end(&mut out).unwrap();
        assert_eq!(n, data.len());
        assert_eq!(&out[1..], &data[..]);
    }

    #[test]
    fn boxed_dyn_stream_forwards() {
        let mut stream: Box<dyn InputStream> = Box::new(MemoryStream::new(b"hello".to_vec()));
        stream.skip(1).unwrap();
        let mut buf = [0u8; 4];
        assert_eq!(stream.read(&mut buf).unwrap(), 4);
        assert_eq!(&buf, b"ello");
    }

    fn skip_two<S: InputStream>(mut stream: S) -> Result<()> {
        stream.skip(2)
    }

    #[test]
    fn mut_ref_stream_forwards() {
        let mut inner = MemoryStream::new(b"hello".to_vec());
        skip_two(&mut inner).unwrap();
        assert_eq!(inner.position(), 2);
    }
}
