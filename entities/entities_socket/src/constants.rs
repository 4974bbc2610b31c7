//! Socket Constant Registry
//!
//! Named integer constants (address families, socket types, message flags,
//! option levels and option names) with the values of the platform this
//! crate was built for. The table is fixed at build time.
//!
//! Constants the platform lacks entirely (e.g. `MSG_DONTWAIT` on Windows)
//! are omitted from the table. `AF_UNIX`/`AF_LOCAL` are listed on every
//! platform but report [`ConstantError::Unsupported`] off POSIX, so a
//! portability gap is distinguishable from a misspelt name.

use thiserror::Error;

/// Native values used outside the registry itself
#[cfg(not(windows))]
pub mod native {
    pub const AF_INET: i32 = libc::AF_INET;
    pub const SOCK_STREAM: i32 = libc::SOCK_STREAM;
}

/// Native values used outside the registry itself
#[cfg(windows)]
pub mod native {
    use windows_sys::Win32::Networking::WinSock;

    pub const AF_INET: i32 = WinSock::AF_INET as i32;
    pub const SOCK_STREAM: i32 = WinSock::SOCK_STREAM as i32;
}

/// Whether a listed constant has a value on this platform
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Availability {
    /// Native value
    Native(i32),
    /// Known name without a usable value on this platform
    Unsupported,
}

/// Registry entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocketConstant {
    pub name: &'static str,
    pub availability: Availability,
}

impl SocketConstant {
    /// Look up this entry's value
    pub fn value(&self) -> Result<i32, ConstantError> {
        match self.availability {
            Availability::Native(v) => Ok(v),
            Availability::Unsupported => Err(ConstantError::Unsupported(self.name)),
        }
    }
}

/// Constant registry errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConstantError {
    /// Name not present in the registry
    #[error("unknown socket constant `{0}`")]
    Unknown(String),
    /// Name known but not available on this platform
    #[error("{0} address family not supported on this platform")]
    Unsupported(&'static str),
}

const fn native(name: &'static str, value: i32) -> SocketConstant {
    SocketConstant {
        name,
        availability: Availability::Native(value),
    }
}

#[cfg(windows)]
const fn unsupported(name: &'static str) -> SocketConstant {
    SocketConstant {
        name,
        availability: Availability::Unsupported,
    }
}

#[cfg(not(windows))]
static SOCKET_CONSTANTS: &[SocketConstant] = &[
    native("AF_UNIX", libc::AF_UNIX),
    native("AF_LOCAL", libc::AF_LOCAL),
    native("AF_INET", libc::AF_INET),
    native("AF_APPLETALK", libc::AF_APPLETALK),
    native("SOCK_STREAM", libc::SOCK_STREAM),
    native("SOCK_DGRAM", libc::SOCK_DGRAM),
    native("SOCK_SEQPACKET", libc::SOCK_SEQPACKET),
    native("SOCK_RAW", libc::SOCK_RAW),
    native("SOCK_RDM", libc::SOCK_RDM),
    native("MSG_PEEK", libc::MSG_PEEK),
    native("MSG_DONTWAIT", libc::MSG_DONTWAIT),
    native("MSG_WAITALL", libc::MSG_WAITALL),
    native("SOL_SOCKET", libc::SOL_SOCKET),
    native("SO_DEBUG", libc::SO_DEBUG),
    native("SO_REUSEADDR", libc::SO_REUSEADDR),
];

#[cfg(windows)]
static SOCKET_CONSTANTS: &[SocketConstant] = {
    use windows_sys::Win32::Networking::WinSock as ws;
    &[
        unsupported("AF_UNIX"),
        unsupported("AF_LOCAL"),
        native("AF_INET", ws::AF_INET as i32),
        native("AF_APPLETALK", ws::AF_APPLETALK as i32),
        native("SOCK_STREAM", ws::SOCK_STREAM as i32),
        native("SOCK_DGRAM", ws::SOCK_DGRAM as i32),
        native("SOCK_SEQPACKET", ws::SOCK_SEQPACKET as i32),
        native("SOCK_RAW", ws::SOCK_RAW as i32),
        native("SOCK_RDM", ws::SOCK_RDM as i32),
        native("MSG_PEEK", ws::MSG_PEEK as i32),
        native("MSG_WAITALL", ws::MSG_WAITALL as i32),
        native("SOL_SOCKET", ws::SOL_SOCKET as i32),
        native("SO_DEBUG", ws::SO_DEBUG as i32),
        native("SO_REUSEADDR", ws::SO_REUSEADDR as i32),
    ]
};

/// All constants listed for this platform, in registration order
pub fn constants() -> &'static [SocketConstant] {
    SOCKET_CONSTANTS
}

/// Find a registry entry by exact name
pub fn find(name: &str) -> Option<&'static SocketConstant> {
    SOCKET_CONSTANTS.iter().find(|c| c.name == name)
}

/// Look up a constant's native value by name
///
/// # Returns
///
/// * `Ok(value)` - Native value (which may legitimately be 0)
/// * `Err(ConstantError::Unknown)` - Name not in the registry
/// * `Err(ConstantError::Unsupported)` - Name known, unavailable here
pub fn lookup(name: &str) -> Result<i32, ConstantError> {
    find(name)
        .ok_or_else(|| ConstantError::Unknown(name.to_string()))?
        .value()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_inet() {
        assert_eq!(lookup("AF_INET"), Ok(native::AF_INET));
        assert_eq!(lookup("SOCK_STREAM"), Ok(native::SOCK_STREAM));
    }

    #[test]
    fn test_lookup_unknown() {
        assert_eq!(
            lookup("AF_NOPE"),
            Err(ConstantError::Unknown("AF_NOPE".to_string()))
        );
        // Names are case-sensitive
        assert!(matches!(lookup("af_inet"), Err(ConstantError::Unknown(_))));
    }

    #[test]
    fn test_names_unique() {
        let names: Vec<&str> = constants().iter().map(|c| c.name).collect();
        for (i, name) in names.iter().enumerate() {
            assert!(!names[i + 1..].contains(name), "duplicate {}", name);
        }
    }

    #[test]
    fn test_always_listed() {
        for name in [
            "AF_UNIX", "AF_LOCAL", "AF_INET", "AF_APPLETALK", "SOCK_STREAM", "SOCK_DGRAM",
            "SOCK_SEQPACKET", "SOCK_RAW", "SOCK_RDM", "MSG_PEEK", "MSG_WAITALL", "SOL_SOCKET",
            "SO_DEBUG", "SO_REUSEADDR",
        ] {
            assert!(find(name).is_some(), "{} missing", name);
        }
    }

    #[test]
    #[cfg(unix)]
    fn test_posix_values() {
        assert_eq!(lookup("AF_UNIX"), Ok(libc::AF_UNIX));
        assert_eq!(lookup("AF_LOCAL"), lookup("AF_UNIX"));
        assert_eq!(lookup("MSG_DONTWAIT"), Ok(libc::MSG_DONTWAIT));
        assert_eq!(lookup("SO_REUSEADDR"), Ok(libc::SO_REUSEADDR));
    }

    #[test]
    #[cfg(windows)]
    fn test_windows_unsupported() {
        assert_eq!(lookup("AF_LOCAL"), Err(ConstantError::Unsupported("AF_LOCAL")));
        assert_eq!(
            ConstantError::Unsupported("AF_LOCAL").to_string(),
            "AF_LOCAL address family not supported on this platform"
        );
        assert!(find("MSG_DONTWAIT").is_none());
    }
}
