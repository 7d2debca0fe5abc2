use thiserror::Error;

/// Error types for the faultstream library.
#[derive(Error, Debug)]
pub enum Error {
    /// The simulated fault fired. Carries no payload.
    #[error("Injected I/O failure")]
    Injected,

    /// Underlying I/O errors from a wrapped `std::io::Read` source.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The source ran out of data before the request could be satisfied.
    #[error("Unexpected end of stream: requested {requested} bytes, {available} available")]
    UnexpectedEof { requested: u64, available: u64 },
}

impl Error {
    /// Create a new `UnexpectedEof` error.
    pub fn unexpected_eof(requested: u64, available: u64) -> Self {
        Self::UnexpectedEof {
            requested,
            available,
        }
    }

    /// Returns true if this error was produced by a fault-injecting stream
    /// rather than by the data source itself.
    pub fn is_injected(&self) -> bool {
        matches!(self, Self::Injected)
    }
}

impl From<Error> for std::io::Error {
    fn from(err: Error) -> Self {
        match err {
            Error::Io(e) => e,
            Error::UnexpectedEof { .. } => {
                std::io::Error::new(std::io::ErrorKind::UnexpectedEof, err)
            }
            Error::Injected => std::io::Error::new(std::io::ErrorKind::Other, err),
        }
    }
}

/// Result type alias for the library operations.
pub type Result<T> = std::result::Result<T, Error>;
