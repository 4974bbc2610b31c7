//! OS Seam
//!
//! The `SocketSys` trait lists every primitive the façade needs, one method
//! per OS call. Arguments are already validated native values; results are
//! native values or an `OsError` carrying the platform error code.

use std::io;
use std::net::{Ipv4Addr, SocketAddrV4};

use entities_socket::{PeerAddress, RawOption, SocketHandle};
use thiserror::Error;

/// OS-level failure
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OsError {
    /// A socket call failed with a platform error code
    #[error("error {code} ({message})")]
    Os { code: i32, message: String },

    /// Name lookup produced no IPv4 address
    #[error("unable to resolve host `{0}`")]
    Resolution(String),
}

impl OsError {
    /// Build an error from a platform error code, with its description
    pub fn from_code(code: i32) -> Self {
        OsError::Os {
            code,
            message: describe(code),
        }
    }

    /// Error for the calling thread's last socket failure
    pub fn last() -> Self {
        #[cfg(windows)]
        {
            // SAFETY: reads thread-local error state only.
            let code = unsafe { windows_sys::Win32::Networking::WinSock::WSAGetLastError() };
            OsError::from_code(code)
        }
        #[cfg(not(windows))]
        {
            io::Error::last_os_error().into()
        }
    }

    /// Platform error code, if any
    pub fn code(&self) -> Option<i32> {
        match self {
            OsError::Os { code, .. } => Some(*code),
            OsError::Resolution(_) => None,
        }
    }
}

impl From<io::Error> for OsError {
    fn from(err: io::Error) -> Self {
        match err.raw_os_error() {
            Some(code) => OsError::from_code(code),
            None => OsError::Os {
                code: -1,
                message: err.to_string(),
            },
        }
    }
}

#[cfg(unix)]
fn describe(code: i32) -> String {
    nix::errno::Errno::from_i32(code).desc().to_string()
}

#[cfg(not(unix))]
fn describe(code: i32) -> String {
    io::Error::from_raw_os_error(code).to_string()
}

/// OS socket primitives
///
/// Each method performs exactly one OS call (name lookup aside) on the
/// calling thread. Implementations must not retain handles between calls.
pub trait SocketSys {
    /// `socket(domain, type, protocol)`
    fn socket(&self, domain: i32, socket_type: i32, protocol: i32) -> Result<SocketHandle, OsError>;

    /// Resolve a host name to its IPv4 addresses in resolver order
    fn resolve_ipv4(&self, host: &str) -> Result<Vec<Ipv4Addr>, OsError>;

    /// `connect(handle, addr)`
    fn connect(&self, handle: SocketHandle, addr: SocketAddrV4) -> Result<(), OsError>;

    /// `close(handle)` / `closesocket(handle)`
    fn close(&self, handle: SocketHandle) -> Result<(), OsError>;

    /// `bind(handle, addr)`
    fn bind(&self, handle: SocketHandle, addr: SocketAddrV4) -> Result<(), OsError>;

    /// `listen(handle, backlog)`
    fn listen(&self, handle: SocketHandle, backlog: i32) -> Result<(), OsError>;

    /// `accept(handle)`, returning the new handle and the peer address
    fn accept(&self, handle: SocketHandle) -> Result<(SocketHandle, PeerAddress), OsError>;

    /// `send(handle, data, flags)`, returning the number of bytes sent
    fn send(&self, handle: SocketHandle, data: &[u8], flags: i32) -> Result<usize, OsError>;

    /// `recv(handle, len, flags)`, returning the bytes actually read
    fn recv(&self, handle: SocketHandle, len: usize, flags: i32) -> Result<Vec<u8>, OsError>;

    /// `setsockopt(handle, level, name, &value, 4)`
    fn set_option(&self, handle: SocketHandle, level: i32, name: i32, value: i32) -> Result<(), OsError>;

    /// `getsockopt(handle, level, name, &value, &len)` with `len` starting at 4
    fn get_option(&self, handle: SocketHandle, level: i32, name: i32) -> Result<RawOption, OsError>;
}
