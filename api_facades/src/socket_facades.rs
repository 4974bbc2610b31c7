//! Socket Facades
//!
//! One entry point per socket verb. Each entry point checks its arity,
//! decodes every argument, and only then makes a single call through the
//! `SocketSys` seam. Results come back as host Terms.
//!
//! Hard failures are returned as `SocketError`. Soft statuses are returned
//! as values:
//!
//! - `send` returns -1 when the OS call fails
//! - `recv` returns an empty payload and a status of -1 when the OS call fails
//! - `disconnect` returns -1 for an unusable handle and 0 otherwise
//! - `gethostbyname` returns an empty list when the lookup fails

use std::net::{Ipv4Addr, SocketAddrV4};

use adapters_socket::{SocketSys, SystemSockets};
use entities_data_handling::Term;
use entities_socket::{SocketDefaults, OPTION_WIDTH};
use frameworks_system_integration::SysBase;
use infrastructure_nif_api::{
    get_endpoint, get_int, get_length, get_payload, get_port, get_socket, get_string, make_bytes,
    make_handle, make_int, make_peer_info, make_string_list, ArgumentError, NifArgs,
};
use log::{debug, warn};

use crate::common_facades::SocketError;

/// Name, arity range and usage line of a host-visible function
///
/// The façade checks arguments against these and the registry publishes
/// them, so both read the same table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Signature {
    pub name: &'static str,
    pub min_args: usize,
    pub max_args: usize,
    pub usage: &'static str,
}

impl Signature {
    /// Signature of a zero-argument constant query
    pub const fn constant(name: &'static str) -> Self {
        Self {
            name,
            min_args: 0,
            max_args: 0,
            usage: name,
        }
    }

    /// Check the argument count of `call` against this signature
    pub fn check(&self, call: &NifArgs<'_>) -> Result<(), ArgumentError> {
        call.check_arity(self.min_args, self.max_args, self.usage)
    }
}

/// Signatures of the socket operations
pub mod signatures {
    use super::Signature;

    const fn op(name: &'static str, min_args: usize, max_args: usize, usage: &'static str) -> Signature {
        Signature {
            name,
            min_args,
            max_args,
            usage,
        }
    }

    pub const SOCKET: Signature = op("socket", 0, 3, "socket (DOMAIN, TYPE, PROTOCOL)");
    pub const CONNECT: Signature = op("connect", 2, 2, "connect (S, SERVERINFO)");
    pub const DISCONNECT: Signature = op("disconnect", 1, 1, "disconnect (S)");
    pub const GETHOSTBYNAME: Signature = op("gethostbyname", 1, 1, "gethostbyname (HOSTNAME)");
    pub const SEND: Signature = op("send", 2, 3, "send (S, DATA, FLAGS)");
    pub const RECV: Signature = op("recv", 2, 3, "recv (S, LEN, FLAGS)");
    pub const BIND: Signature = op("bind", 2, 2, "bind (S, PORTNUMBER)");
    pub const LISTEN: Signature = op("listen", 2, 2, "listen (S, BACKLOG)");
    pub const ACCEPT: Signature = op("accept", 1, 1, "accept (S)");
    pub const SETSOCKOPT: Signature = op("setsockopt", 4, 4, "setsockopt (S, LEVEL, OPT, VALUE)");
    pub const GETSOCKOPT: Signature = op("getsockopt", 3, 3, "getsockopt (S, LEVEL, OPT)");
}

/// Socket operation façade
///
/// Stateless apart from the creation defaults: handles are plain integers
/// owned by the caller, and nothing is remembered between calls.
///
/// # Examples
///
/// ```rust,no_run
/// use api_facades::SocketFacade;
/// use entities_data_handling::{Record, Term};
///
/// let sockets = SocketFacade::system();
/// let client = sockets.socket(&[]).unwrap();
/// let server = Record::new().with("addr", "127.0.0.1").with("port", 9001i64);
/// sockets.connect(&[client.clone(), Term::Record(server)]).unwrap();
/// sockets.send(&[client.clone(), Term::from("hello")]).unwrap();
/// sockets.disconnect(&[client]).unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct SocketFacade<S = SystemSockets> {
    sys: S,
    defaults: SocketDefaults,
}

impl SocketFacade<SystemSockets> {
    /// Façade over the operating system's sockets
    pub fn system() -> Self {
        Self::new(SystemSockets::new())
    }
}

impl Default for SocketFacade<SystemSockets> {
    fn default() -> Self {
        Self::system()
    }
}

impl<S: SocketSys> SocketFacade<S> {
    /// Create a façade with the standard creation defaults
    pub fn new(sys: S) -> Self {
        Self::with_defaults(sys, SocketDefaults::default())
    }

    /// Create a façade with custom creation defaults
    pub fn with_defaults(sys: S, defaults: SocketDefaults) -> Self {
        Self { sys, defaults }
    }

    /// The OS seam in use
    pub fn sys(&self) -> &S {
        &self.sys
    }

    /// Creation defaults in use
    pub fn defaults(&self) -> &SocketDefaults {
        &self.defaults
    }

    /// `socket (DOMAIN, TYPE, PROTOCOL)`
    ///
    /// Omitted arguments take the façade defaults. A protocol, when given,
    /// must be 0. The socket subsystem is started on first use.
    pub fn socket(&self, args: &[Term]) -> Result<Term, SocketError> {
        let call = NifArgs::new(signatures::SOCKET.name, args);
        signatures::SOCKET.check(&call)?;
        let domain = call.int_or(0, "DOMAIN", self.defaults.domain)?;
        let socket_type = call.int_or(1, "TYPE", self.defaults.socket_type)?;
        let protocol = call.int_or(2, "PROTOCOL", self.defaults.protocol)?;
        if call.get(2).is_some() && protocol != 0 {
            return Err(ArgumentError::ProtocolNotZero {
                function: "socket",
                param: "PROTOCOL",
            }
            .into());
        }

        SysBase::init_sockets()?;

        let handle = self
            .sys
            .socket(domain, socket_type, protocol)
            .map_err(|e| SocketError::os("socket", e))?;
        Ok(make_handle(handle))
    }

    /// `connect (S, SERVERINFO)`
    ///
    /// Resolves `SERVERINFO.addr` and connects to its first IPv4 address.
    pub fn connect(&self, args: &[Term]) -> Result<Term, SocketError> {
        let call = NifArgs::new(signatures::CONNECT.name, args);
        signatures::CONNECT.check(&call)?;
        let handle = get_socket("connect", call.required(0, "S")?)?;
        let endpoint = get_endpoint("connect", "SERVERINFO", call.required(1, "SERVERINFO")?)?;

        let addresses = self
            .sys
            .resolve_ipv4(&endpoint.host)
            .map_err(|e| SocketError::os("connect", e))?;
        let ip = addresses.first().copied().ok_or_else(|| SocketError::Resolution {
            operation: "connect",
            host: endpoint.host.clone(),
        })?;

        self.sys
            .connect(handle, SocketAddrV4::new(ip, endpoint.port))
            .map_err(|e| SocketError::os("connect", e))?;
        Ok(make_int(0))
    }

    /// `disconnect (S)`
    ///
    /// Returns -1 when `S` is not a usable handle and 0 otherwise, even if
    /// the close itself fails.
    pub fn disconnect(&self, args: &[Term]) -> Result<Term, SocketError> {
        let call = NifArgs::new(signatures::DISCONNECT.name, args);
        signatures::DISCONNECT.check(&call)?;
        let handle = match get_socket("disconnect", call.required(0, "S")?) {
            Ok(handle) => handle,
            Err(e) => {
                debug!("{}", e);
                return Ok(make_int(-1));
            }
        };

        if let Err(e) = self.sys.close(handle) {
            warn!("disconnect: closing socket {} failed: {}", handle, e);
        }
        Ok(make_int(0))
    }

    /// `gethostbyname (HOSTNAME)`
    ///
    /// Every IPv4 address of `HOSTNAME` as dotted-decimal text, in resolver
    /// order. A failed lookup yields an empty list.
    pub fn gethostbyname(&self, args: &[Term]) -> Result<Term, SocketError> {
        let call = NifArgs::new(signatures::GETHOSTBYNAME.name, args);
        signatures::GETHOSTBYNAME.check(&call)?;
        let host = get_string("gethostbyname", "HOSTNAME", call.required(0, "HOSTNAME")?)?;

        let addresses = match self.sys.resolve_ipv4(host) {
            Ok(addresses) => addresses,
            Err(e) => {
                debug!("gethostbyname: {}", e);
                Vec::new()
            }
        };
        Ok(make_string_list(addresses.iter().map(Ipv4Addr::to_string)))
    }

    /// `send (S, DATA, FLAGS)`
    ///
    /// Returns the number of bytes sent, or -1 if the OS call failed.
    pub fn send(&self, args: &[Term]) -> Result<Term, SocketError> {
        let call = NifArgs::new(signatures::SEND.name, args);
        signatures::SEND.check(&call)?;
        let handle = get_socket("send", call.required(0, "S")?)?;
        let payload = get_payload("send", "DATA", call.required(1, "DATA")?)?;
        let flags = call.int_or(2, "FLAGS", 0)?;

        match self.sys.send(handle, payload.as_bytes(), flags) {
            Ok(sent) => Ok(make_int(sent as i64)),
            Err(e) => {
                warn!("send {}", e);
                Ok(make_int(-1))
            }
        }
    }

    /// `recv (S, LEN, FLAGS)`
    ///
    /// Returns `(DATA, STATUS)`. `DATA` is a uint8 row holding exactly the
    /// bytes read. `STATUS` is the byte count, 0 when the peer has closed,
    /// or -1 (with empty `DATA`) when the OS call failed.
    pub fn recv(&self, args: &[Term]) -> Result<(Term, Term), SocketError> {
        let call = NifArgs::new(signatures::RECV.name, args);
        signatures::RECV.check(&call)?;
        let handle = get_socket("recv", call.required(0, "S")?)?;
        let len = get_length("recv", "LEN", call.required(1, "LEN")?)?;
        let flags = call.int_or(2, "FLAGS", 0)?;

        match self.sys.recv(handle, len, flags) {
            Ok(data) => {
                let status = make_int(data.len() as i64);
                Ok((make_bytes(&data), status))
            }
            Err(e) => {
                warn!("recv {}", e);
                Ok((make_bytes(&[]), make_int(-1)))
            }
        }
    }

    /// `bind (S, PORTNUMBER)`
    ///
    /// Binds to `PORTNUMBER` on every local IPv4 address.
    pub fn bind(&self, args: &[Term]) -> Result<Term, SocketError> {
        let call = NifArgs::new(signatures::BIND.name, args);
        signatures::BIND.check(&call)?;
        let handle = get_socket("bind", call.required(0, "S")?)?;
        let port = get_port("bind", "PORT", call.required(1, "PORT")?)?;

        self.sys
            .bind(handle, SocketAddrV4::new(Ipv4Addr::UNSPECIFIED, port))
            .map_err(|e| SocketError::os("bind", e))?;
        Ok(make_int(0))
    }

    /// `listen (S, BACKLOG)`
    pub fn listen(&self, args: &[Term]) -> Result<Term, SocketError> {
        let call = NifArgs::new(signatures::LISTEN.name, args);
        signatures::LISTEN.check(&call)?;
        let handle = get_socket("listen", call.required(0, "S")?)?;
        let backlog = get_int("listen", "BACKLOG", call.required(1, "BACKLOG")?)?;

        self.sys
            .listen(handle, backlog)
            .map_err(|e| SocketError::os("listen", e))?;
        Ok(make_int(0))
    }

    /// `accept (S)`
    ///
    /// Returns the new connection's handle and its peer info record.
    pub fn accept(&self, args: &[Term]) -> Result<(Term, Term), SocketError> {
        let call = NifArgs::new(signatures::ACCEPT.name, args);
        signatures::ACCEPT.check(&call)?;
        let handle = get_socket("accept", call.required(0, "S")?)?;

        let (conn, peer) = self
            .sys
            .accept(handle)
            .map_err(|e| SocketError::os("accept", e))?;
        Ok((make_handle(conn), make_peer_info(&peer)))
    }

    /// `setsockopt (S, LEVEL, OPT, VALUE)`
    pub fn setsockopt(&self, args: &[Term]) -> Result<(), SocketError> {
        let call = NifArgs::new(signatures::SETSOCKOPT.name, args);
        signatures::SETSOCKOPT.check(&call)?;
        let handle = get_socket("setsockopt", call.required(0, "S")?)?;
        let level = get_int("setsockopt", "LEVEL", call.required(1, "LEVEL")?)?;
        let name = get_int("setsockopt", "OPT", call.required(2, "OPT")?)?;
        let value = get_int("setsockopt", "VALUE", call.required(3, "VALUE")?)?;

        self.sys
            .set_option(handle, level, name, value)
            .map_err(|e| SocketError::os("setsockopt", e))
    }

    /// `getsockopt (S, LEVEL, OPT)`
    ///
    /// Only 4-byte integer options can be read.
    pub fn getsockopt(&self, args: &[Term]) -> Result<Term, SocketError> {
        let call = NifArgs::new(signatures::GETSOCKOPT.name, args);
        signatures::GETSOCKOPT.check(&call)?;
        let handle = get_socket("getsockopt", call.required(0, "S")?)?;
        let level = get_int("getsockopt", "LEVEL", call.required(1, "LEVEL")?)?;
        let name = get_int("getsockopt", "OPT", call.required(2, "OPT")?)?;

        let option = self
            .sys
            .get_option(handle, level, name)
            .map_err(|e| SocketError::os("getsockopt", e))?;
        if option.width != OPTION_WIDTH {
            return Err(SocketError::OptionWidth { width: option.width });
        }
        Ok(make_int(option.value))
    }
}
