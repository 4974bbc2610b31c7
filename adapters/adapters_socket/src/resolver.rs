//! IPv4 Name Resolution

use std::net::{Ipv4Addr, SocketAddr, ToSocketAddrs};

use log::debug;

use crate::sys::OsError;

/// Resolve `host` to its IPv4 addresses
///
/// Addresses keep the resolver's order with duplicates dropped (the system
/// resolver reports one entry per socket type). IPv6 results are skipped.
/// An empty host name resolves to no addresses.
///
/// # Errors
///
/// `OsError::Resolution` when the lookup itself fails.
pub fn resolve_ipv4(host: &str) -> Result<Vec<Ipv4Addr>, OsError> {
    if host.is_empty() {
        return Ok(Vec::new());
    }

    let resolved = (host, 0).to_socket_addrs().map_err(|e| {
        debug!("lookup of {} failed: {}", host, e);
        OsError::Resolution(host.to_string())
    })?;

    let mut addresses = Vec::new();
    for addr in resolved {
        if let SocketAddr::V4(v4) = addr {
            if !addresses.contains(v4.ip()) {
                addresses.push(*v4.ip());
            }
        }
    }
    Ok(addresses)
}
