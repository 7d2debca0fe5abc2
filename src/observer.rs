//! Observer adapter for streams.

use crate::error::Result;
use crate::stream::InputStream;

/// A single completed operation on an observed stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreamEvent {
    /// A read with a buffer of `requested` bytes. `result` is `None` if it failed.
    Read {
        requested: usize,
        result: Option<usize>,
    },
    /// A skip of `amount` bytes.
    Skip { amount: u64, ok: bool },
}

/// An adapter that reports every operation on the inner stream without altering it.
///
/// Callback timing: Invoked exactly once per call, after the inner stream returns.
pub struct ObservedStream<S: InputStream, C: Fn(&StreamEvent)> {
    inner: S,
    callback: C,
}

impl<S: InputStream, C: Fn(&StreamEvent)> ObservedStream<S, C> {
    pub fn new(inner: S, callback: C) -> Self {
        Self { inner, callback }
    }

    pub fn get_ref(&self) -> &S {
        &self.inner
    }

    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl<S: InputStream, C: Fn(&StreamEvent)> InputStream for ObservedStream<S, C> {
    fn read(&mut self, buf: &mut [u8]) -> Result<usize> {
        let requested = buf.len();
        let result = self.inner.read(buf);
        (self.callback)(&StreamEvent::Read {
            requested,
            result: result.as_ref().ok().copied(),
        });
        result
    }

    fn skip(&mut self, amount: u64) -> Result<()> {
        let result = self.inner.skip(amount);
        (self.callback)(&StreamEvent::Skip {
            amount,
            ok: result.is_ok(),
        });
        result
    }
}
