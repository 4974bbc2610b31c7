//! Socket creation defaults

use crate::constants::native;

/// Values used by socket creation for arguments the caller leaves out
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocketDefaults {
    /// Address family (default `AF_INET`)
    pub domain: i32,
    /// Socket type (default `SOCK_STREAM`)
    pub socket_type: i32,
    /// Protocol (always 0)
    pub protocol: i32,
}

impl Default for SocketDefaults {
    fn default() -> Self {
        Self {
            domain: native::AF_INET,
            socket_type: native::SOCK_STREAM,
            protocol: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::lookup;

    #[test]
    fn test_defaults_match_registry() {
        let defaults = SocketDefaults::default();
        assert_eq!(Ok(defaults.domain), lookup("AF_INET"));
        assert_eq!(Ok(defaults.socket_type), lookup("SOCK_STREAM"));
        assert_eq!(defaults.protocol, 0);
    }
}
