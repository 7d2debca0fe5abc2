//! Fault-injecting streams.
//!
//! Both streams fail with `Error::Injected` so tests can tell a simulated fault
//! apart from a failure of the data source itself.

use crate::error::{Error, Result};
use crate::stream::InputStream;

/// A stream whose every operation fails immediately.
///
/// When to use: Checking that a consumer propagates an I/O error raised on its
/// very first call.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysFailingStream;

impl InputStream for AlwaysFailingStream {
    fn read(&mut self, buf: &mut [u8]) -> Result<usize> {
        log::trace!("injecting failure for read of {} bytes", buf.len());
        Err(Error::Injected)
    }

    fn skip(&mut self, amount: u64) -> Result<()> {
        log::trace!("injecting failure for skip of {amount} bytes");
        Err(Error::Injected)
    }
}

/// A composable adapter that lets a fixed number of bytes through its inner
/// stream, then fails permanently.
///
/// Failure semantics: Reads are narrowed to the remaining budget, so a read that
/// straddles the boundary returns only the bytes before it. The next attempt to
/// consume anything returns `Error::Injected` without touching the inner stream.
/// Errors from the inner stream pass through unchanged.
///
/// A skip larger than the remaining budget consumes the whole budget and fails
/// without being forwarded.
#[derive(Debug)]
pub struct BoundedFailingStream<S: InputStream> {
    inner: S,
    remaining: u64,
}

impl<S: InputStream> BoundedFailingStream<S> {
    pub fn new(inner: S, budget: u64) -> Self {
        Self {
            inner,
            remaining: budget,
        }
    }

    /// Bytes that may still be consumed before the fault fires.
    pub fn remaining(&self) -> u64 {
        self.remaining
    }

    pub fn is_exhausted(&self) -> bool {
        self.remaining == 0
    }

    pub fn get_ref(&self) -> &S {
        &self.inner
    }

    pub fn get_mut(&mut self) -> &mut S {
        &mut self.inner
    }

    pub fn into_inner(self) -> S {
        self.inner
    }

    fn consume(&mut self, n: u64) {
        // Saturate so a misbehaving inner stream can't wrap the budget around
        self.remaining = self.remaining.saturating_sub(n);
        if self.remaining == 0 {
            log::debug!("fault budget exhausted; further operations will fail");
        }
    }
}

impl<S: InputStream> InputStream for BoundedFailingStream<S> {
    fn read(&mut self, buf: &mut [u8]) -> Result<usize> {
        if self.remaining == 0 {
            log::trace!("injecting failure for read of {} bytes", buf.len());
            return Err(Error::Injected);
        }

        // A budget that doesn't fit in usize is larger than any buffer
        let len = usize::try_from(self.remaining).map_or(buf.len(), |r| r.min(buf.len()));
        let n = self.inner.read(&mut buf[..len])?;
        debug_assert!(n <= len, "inner stream reported {n} bytes for a {len}-byte buffer");
        if n > 0 {
            self.consume(n as u64);
        }
        Ok(n)
    }

    fn skip(&mut self, amount: u64) -> Result<()> {
        if self.remaining < amount || self.remaining == 0 {
            log::trace!(
                "injecting failure for skip of {amount} bytes ({} remaining)",
                self.remaining
            );
            self.remaining = 0;
            return Err(Error::Injected);
        }

        self.inner.skip(amount)?;
        self.consume(amount);
        Ok(())
    }
}
