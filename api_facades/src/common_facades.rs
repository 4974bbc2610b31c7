//! Common Facade Types
//!
//! `SocketError`, the error every host-visible function returns, and the
//! conversion from adapter-level OS errors into it.

use adapters_socket::OsError;
use entities_socket::ConstantError;
use frameworks_system_integration::SysError;
use infrastructure_nif_api::ArgumentError;
use thiserror::Error;

/// Hard failure of a host-visible function
///
/// Soft statuses (send's -1, recv's -1, disconnect's -1, an empty
/// resolution list) are never reported through this type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SocketError {
    /// Arguments rejected before any OS call
    #[error(transparent)]
    Argument(#[from] ArgumentError),

    /// OS call failed
    #[error("{operation} failed with error {code} ({message})")]
    Os {
        operation: &'static str,
        code: i32,
        message: String,
    },

    /// Host name did not resolve to an IPv4 address
    #[error("{operation}: unable to resolve host `{host}`")]
    Resolution {
        operation: &'static str,
        host: String,
    },

    /// Constant unknown or not available on this platform
    #[error(transparent)]
    Unsupported(#[from] ConstantError),

    /// Socket subsystem could not be started
    #[error("socket: {0}")]
    Bootstrap(#[from] SysError),

    /// getsockopt reported a value that is not a 4-byte integer
    #[error("getsockopt: currently only int arguments are available for optval (got {width} bytes)")]
    OptionWidth { width: usize },

    /// No function registered under this name
    #[error("unknown socket function `{0}`")]
    UnknownFunction(String),
}

impl SocketError {
    /// Attribute an OS error to the operation that raised it
    pub fn os(operation: &'static str, err: OsError) -> Self {
        match err {
            OsError::Os { code, message } => SocketError::Os {
                operation,
                code,
                message,
            },
            OsError::Resolution(host) => SocketError::Resolution { operation, host },
        }
    }

    /// Whether the failure happened before any OS call was made
    pub fn is_validation(&self) -> bool {
        matches!(self, SocketError::Argument(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_os_error_names_operation() {
        let err = SocketError::os(
            "bind",
            OsError::Os {
                code: 98,
                message: "Address already in use".to_string(),
            },
        );
        assert_eq!(err.to_string(), "bind failed with error 98 (Address already in use)");
        assert!(!err.is_validation());
    }

    #[test]
    fn test_resolution_error() {
        let err = SocketError::os("connect", OsError::Resolution("nowhere.invalid".to_string()));
        assert_eq!(err.to_string(), "connect: unable to resolve host `nowhere.invalid`");
    }

    #[test]
    fn test_argument_error_is_transparent() {
        let err = SocketError::from(ArgumentError::InvalidSocket {
            function: "accept",
            param: "S",
        });
        assert_eq!(err.to_string(), "accept: S must be a valid socket");
        assert!(err.is_validation());
    }

    #[test]
    fn test_unsupported_constant() {
        let err = SocketError::from(ConstantError::Unsupported("AF_UNIX"));
        assert_eq!(
            err.to_string(),
            "AF_UNIX address family not supported on this platform"
        );
    }

    #[test]
    fn test_option_width_message() {
        assert_eq!(
            SocketError::OptionWidth { width: 8 }.to_string(),
            "getsockopt: currently only int arguments are available for optval (got 8 bytes)"
        );
    }

    #[test]
    fn test_bootstrap_message() {
        assert_eq!(
            SocketError::from(SysError::SocketInitFailed(10091)).to_string(),
            "socket: could not initialize winsock library (error 10091)"
        );
    }
}
