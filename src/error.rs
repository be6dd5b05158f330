//! Error types for netlink handle operations.

use std::io;

/// Result type for handle operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors reported by the netlink transport.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The transport reported an errno-carrying failure.
    #[error("transport error: {message} (errno {errno})")]
    Transport {
        /// The POSIX errno from the underlying call.
        errno: i32,
        /// OS-rendered error text for the errno.
        message: String,
    },

    /// I/O failure with no errno attached.
    #[error("I/O error: {0}")]
    Io(io::Error),
}

impl Error {
    /// Create a transport error from a raw errno value.
    pub fn from_errno(errno: i32) -> Self {
        Self::Transport {
            errno,
            message: io::Error::from_raw_os_error(errno).to_string(),
        }
    }

    /// Get the errno value if this is a transport error.
    pub fn errno(&self) -> Option<i32> {
        match self {
            Self::Transport { errno, .. } => Some(*errno),
            Self::Io(_) => None,
        }
    }

    /// Check if this is an already-connected error (EISCONN).
    pub fn is_already_connected(&self) -> bool {
        self.errno() == Some(libc::EISCONN)
    }

    /// Check if this reports a socket without a usable descriptor
    /// (EBADF, ENOTCONN).
    pub fn is_not_connected(&self) -> bool {
        matches!(self.errno(), Some(e) if e == libc::EBADF || e == libc::ENOTCONN)
    }

    /// Check if this is a permission error (EPERM, EACCES).
    pub fn is_permission_denied(&self) -> bool {
        matches!(self.errno(), Some(e) if e == libc::EPERM || e == libc::EACCES)
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        match err.raw_os_error() {
            Some(errno) => Self::from_errno(errno),
            None => Self::Io(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_errno() {
        let err = Error::from_errno(libc::EISCONN);
        assert!(err.is_already_connected());
        assert_eq!(err.errno(), Some(libc::EISCONN));
    }

    #[test]
    fn test_from_io_error_with_errno() {
        let err = Error::from(io::Error::from_raw_os_error(libc::EACCES));
        assert!(err.is_permission_denied());
        assert_eq!(err.errno(), Some(libc::EACCES));
        let msg = err.to_string();
        assert!(msg.contains("errno 13"));
    }

    #[test]
    fn test_from_io_error_without_errno() {
        let err = Error::from(io::Error::other("synthetic"));
        assert_eq!(err.errno(), None);
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_is_not_connected() {
        assert!(Error::from_errno(libc::EBADF).is_not_connected());
        assert!(Error::from_errno(libc::ENOTCONN).is_not_connected());
        assert!(!Error::from_errno(libc::EPERM).is_not_connected());
    }
}
