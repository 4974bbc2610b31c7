//! Socket Handle Module
//!
//! Native-side socket types: the integer handle naming an OS socket, the
//! endpoint a connect targets, the peer address an accept reports and the
//! raw value a getsockopt returns.

use std::net::{IpAddr, SocketAddr};

/// Platform representation of a socket handle
#[cfg(windows)]
pub type RawHandle = std::os::windows::io::RawSocket;

/// Platform representation of a socket handle
#[cfg(not(windows))]
pub type RawHandle = std::os::raw::c_int;

/// Integer handle naming an OS-level socket
///
/// The handle is a plain copyable number. Ownership of the underlying
/// resource stays with the OS: dropping a `SocketHandle` never closes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SocketHandle(RawHandle);

impl SocketHandle {
    /// Wrap a raw OS handle
    pub fn from_raw(raw: RawHandle) -> Self {
        Self(raw)
    }

    /// Raw OS handle
    pub fn as_raw(self) -> RawHandle {
        self.0
    }

    /// Convert a host integer into a handle
    ///
    /// Returns `None` for negative values or values the platform handle
    /// type cannot represent.
    pub fn from_i64(value: i64) -> Option<Self> {
        if value < 0 {
            return None;
        }
        RawHandle::try_from(value).ok().map(Self)
    }

    /// Handle as a host integer
    pub fn to_i64(self) -> i64 {
        self.0 as i64
    }
}

impl std::fmt::Display for SocketHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Remote endpoint for an outgoing connection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    /// Hostname or dotted-decimal address; never empty
    pub host: String,
    /// Port in host byte order
    pub port: u16,
}

impl Endpoint {
    /// Create an endpoint
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }
}

/// Address of the remote side of an accepted connection
///
/// `address` is `None` when the peer is not an IP endpoint (e.g. a local
/// domain socket); the family is still reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PeerAddress {
    /// Native address family value
    pub family: i32,
    /// IP address and port, when the family is an IP family
    pub address: Option<SocketAddr>,
}

impl PeerAddress {
    /// Peer port in host byte order, 0 for non-IP peers
    pub fn port(&self) -> u16 {
        self.address.map(|a| a.port()).unwrap_or(0)
    }

    /// Peer IP address, if any
    pub fn ip(&self) -> Option<IpAddr> {
        self.address.map(|a| a.ip())
    }
}

/// Option value as reported by getsockopt
///
/// `width` is the option length the OS wrote back; only 4-byte options
/// are representable as host integers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawOption {
    pub value: i32,
    pub width: usize,
}

/// Width in bytes of every option value exchanged with the host
pub const OPTION_WIDTH: usize = std::mem::size_of::<i32>();
