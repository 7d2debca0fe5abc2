//! # FaultStream (v0.1.0)
//!
//! Pull-based byte streams with deterministic fault injection, for testing code that
//! consumes streams under partial-read and mid-stream-failure conditions.
//!
//! ## Overview
//!
//! Code under test consumes an [`InputStream`]: a source that can `read` into a
//! caller-provided buffer and `skip` a number of bytes. This crate provides sources and
//! composable adapters over that contract:
//!
//! * **`AlwaysFailingStream`**: Fails every call. Checks first-call error propagation.
//! * **`BoundedFailingStream`**: Lets a fixed byte budget through an inner stream, then
//!   fails permanently. Reads straddling the boundary are truncated at it.
//! * **`MemoryStream`**: In-memory backing data, optionally returning short reads.
//! * **`ObservedStream`**: Reports every operation, e.g. to prove an inner stream was
//!   never touched.
//! * **`ReaderStream` / `IoReader`**: Bridges to and from `std::io::Read`.
//!
//! Faults raised by the adapters surface as [`Error::Injected`]; failures of the data
//! source pass through unchanged, so tests can tell "the harness cut it off" apart from
//! "the source failed".
//!
//! ## Quick Start
//!
//! ```rust
//! use faultstream::*;
//!
//! let data: Vec<u8> = (0..20).collect();
//! let mut stream = MemoryStream::new(data).fail_after(5);
//!
//! let mut buf = [0u8; 10];
//! assert_eq!(stream.read(&mut buf)?, 5);
//! assert!(stream.is_exhausted());
//! assert!(matches!(stream.read(&mut buf), Err(Error::Injected)));
//! # Ok::<(), Error>(())
//! ```

pub mod compat;
pub mod error;
pub mod fault;
pub mod observer;
pub mod source;
pub mod stream;

// Re-export the main public API for user convenience.
pub use compat::{IoReader, ReaderStream};
pub use error::{Error, Result};
pub use fault::{AlwaysFailingStream, BoundedFailingStream};
pub use observer::{ObservedStream, StreamEvent};
pub use source::MemoryStream;
pub use stream::{InputStream, InputStreamExt};
