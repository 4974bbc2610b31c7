//! Term Creation Functions
//!
//! Build host Terms from the native values socket calls produce.

use entities_data_handling::{Record, Term};
use entities_socket::{PeerAddress, SocketHandle};

/// Create an integer term
pub fn make_int(value: impl Into<i64>) -> Term {
    Term::Int(value.into())
}

/// Create an integer term from a socket handle
pub fn make_handle(handle: SocketHandle) -> Term {
    Term::Int(handle.to_i64())
}

/// Create a uint8 row vector from received bytes
///
/// An empty slice yields an empty uint8 row, never a missing value.
pub fn make_bytes(bytes: &[u8]) -> Term {
    Term::bytes(bytes)
}

/// Create a list of strings
///
/// # Arguments
///
/// * `items` - Strings in the order they should appear
///
/// # Returns
///
/// * `Term::List` of `Term::Str`, empty when `items` is empty
pub fn make_string_list<I, S>(items: I) -> Term
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    Term::List(items.into_iter().map(|s| Term::Str(s.into())).collect())
}

/// Create the peer-info record returned by accept
///
/// Fields:
/// - `sin_family`: native address family value
/// - `sin_port`: port in host byte order
/// - `sin_addr`: textual address, empty for non-IP peers
pub fn make_peer_info(peer: &PeerAddress) -> Term {
    let addr = peer.ip().map(|ip| ip.to_string()).unwrap_or_default();
    Term::Record(
        Record::new()
            .with("sin_family", i64::from(peer.family))
            .with("sin_port", i64::from(peer.port()))
            .with("sin_addr", addr),
    )
}
