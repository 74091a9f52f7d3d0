//! Unified error type.

use std::fmt;
use std::io;

/// The error type returned by [`Server`](crate::Server).
///
/// Application-level errors (404, 405, 422, etc.) are statuses written to a
/// [`ResponseWriter`](crate::ResponseWriter), and a failing handler is
/// answered with `500` on its own connection. This type surfaces
/// infrastructure failures only: binding the listener, reading its address.
#[derive(Debug)]
pub struct Error(io::Error);

impl Error {
    /// The underlying I/O error kind, e.g. `AddrInUse`.
    pub fn kind(&self) -> io::ErrorKind {
        self.0.kind()
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "server io: {}", self.0)
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.0)
    }
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Self(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_io_error() {
        let err = Error::from(io::Error::new(io::ErrorKind::AddrInUse, "port taken"));
        assert_eq!(err.kind(), io::ErrorKind::AddrInUse);
        assert_eq!(err.to_string(), "server io: port taken");
        assert!(std::error::Error::source(&err).is_some());
    }
}
