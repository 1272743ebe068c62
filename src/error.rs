//! Unified error type.

use std::fmt;

/// The error type returned by hitch's fallible operations.
///
/// Application-level outcomes (404, 400) are expressed as HTTP
/// [`Response`](crate::Response) values, not as `Error`s. This type surfaces
/// infrastructure failures only.
#[derive(Debug)]
pub enum Error {
    /// The listening socket could not be bound (address in use, no
    /// permission, unresolvable host). Fatal for the process.
    Bind(std::io::Error),
    /// Any other socket-level failure.
    Io(std::io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bind(e) => write!(f, "bind: {e}"),
            Self::Io(e) => write!(f, "io: {e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Bind(e) | Self::Io(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
