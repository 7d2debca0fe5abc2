//! In-memory byte source used as the backing data for fault-injecting streams.

use crate::error::{Error, Result};
use crate::stream::InputStream;

/// A stream over an in-memory byte buffer.
///
/// Each read copies as many bytes as fit (optionally capped by `with_max_read`)
/// and returns 0 once the data is exhausted. Skips past the end fail without
/// moving the position.
#[derive(Debug, Clone)]
pub struct MemoryStream<T: AsRef<[u8]>> {
    data: T,
    pos: usize,
    max_read: usize,
}

impl<T: AsRef<[u8]>> MemoryStream<T> {
    pub fn new(data: T) -> Self {
        Self {
            data,
            pos: 0,
            max_read: usize::MAX,
        }
    }

    /// Cap every read at `max_read` bytes to exercise consumers against short reads.
    ///
    /// A cap of 0 is treated as 1 so reads keep making progress.
    pub fn with_max_read(mut self, max_read: usize) -> Self {
        self.max_read = max_read.max(1);
        self
    }

    /// Number of bytes consumed so far.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Number of bytes not yet consumed.
    pub fn remaining_len(&self) -> usize {
        self.data.as_ref().len() - self.pos
    }

    pub fn get_ref(&self) -> &T {
        &self.data
    }

    pub fn into_inner(self) -> T {
        self.data
    }
}

impl<T: AsRef<[u8]>> InputStream for MemoryStream<T> {
    fn read(&mut self, buf: &mut [u8]) -> Result<usize> {
        let left = &self.data.as_ref()[self.pos..];
        let n = buf.len().min(left.len()).min(self.max_read);
        buf[..n].copy_from_slice(&left[..n]);
        self.pos += n;
        Ok(n)
    }

    fn skip(&mut self, amount: u64) -> Result<()> {
        let available = self.remaining_len();
        match usize::try_from(amount) {
            Ok(amount) if amount <= available => {
                self.pos += amount;
                Ok(())
            }
            _ => Err(Error::unexpected_eof(amount, available as u64)),
        }
    }
}
