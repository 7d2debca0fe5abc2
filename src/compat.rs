//! Bridges between `InputStream` and `std::io::Read`.

use crate::error::{Error, Result};
use crate::stream::InputStream;
use std::io::{self, Read};

/// An `InputStream` backed by any `std::io::Read`.
///
/// Reads are forwarded as-is. Skips discard bytes by copying them into
/// `io::sink()`, failing with `Error::UnexpectedEof` if the reader ends early.
#[derive(Debug)]
pub struct ReaderStream<R: Read> {
    reader: R,
}

impl<R: Read> ReaderStream<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }

    pub fn get_ref(&self) -> &R {
        &self.reader
    }

    pub fn into_inner(self) -> R {
        self.reader
    }
}

impl<R: Read> InputStream for ReaderStream<R> {
    fn read(&mut self, buf: &mut [u8]) -> Result<usize> {
        Ok(self.reader.read(buf)?)
    }

    fn skip(&mut self, amount: u64) -> Result<()> {
        let copied = io::copy(&mut (&mut self.reader).take(amount), &mut io::sink())?;
        if copied < amount {
            return Err(Error::unexpected_eof(amount, copied));
        }
        Ok(())
    }
}

/// A `std::io::Read` backed by any `InputStream`.
///
/// Lets consumers written against `std::io::Read` be driven by the fault
/// streams. `Error::Injected` surfaces as `io::ErrorKind::Other` with the
/// original error reachable through `io::Error::get_ref`.
#[derive(Debug)]
pub struct IoReader<S: InputStream> {
    stream: S,
}

impl<S: InputStream> IoReader<S> {
    pub fn new(stream: S) -> Self {
        Self { stream }
    }

    pub fn get_ref(&self) -> &S {
        &self.stream
    }

    pub fn into_inner(self) -> S {
        self.stream
    }
}

impl<S: InputStream> Read for IoReader<S> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        Ok(self.stream.read(buf)?)
    }
}
