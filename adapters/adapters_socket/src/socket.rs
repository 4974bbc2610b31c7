//! Socket Module
//!
//! `SystemSockets` implements `SocketSys` on the real OS. Socket calls go
//! through `socket2`, which is handed a borrowed raw handle for the length
//! of one call and never closes it.

use std::mem::ManuallyDrop;
use std::net::{Ipv4Addr, SocketAddrV4};

use entities_socket::{PeerAddress, RawHandle, RawOption, SocketHandle};
use log::debug;
use socket2::{Domain, Protocol, SockAddr, Socket, Type};

use crate::resolver;
use crate::sockopt;
use crate::sys::{OsError, SocketSys};

/// OS-backed socket primitives
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemSockets;

impl SystemSockets {
    /// Create the OS-backed implementation
    pub fn new() -> Self {
        Self
    }
}

/// Wrap a raw handle without taking ownership of it
fn borrow(handle: SocketHandle) -> ManuallyDrop<Socket> {
    ManuallyDrop::new(from_raw(handle.as_raw()))
}

#[cfg(unix)]
fn from_raw(raw: RawHandle) -> Socket {
    use std::os::unix::io::FromRawFd;
    // SAFETY: the handle is non-negative and the wrapper is never dropped.
    unsafe { Socket::from_raw_fd(raw) }
}

#[cfg(windows)]
fn from_raw(raw: RawHandle) -> Socket {
    use std::os::windows::io::FromRawSocket;
    // SAFETY: the handle is not INVALID_SOCKET and the wrapper is never dropped.
    unsafe { Socket::from_raw_socket(raw) }
}

#[cfg(unix)]
fn into_handle(socket: Socket) -> SocketHandle {
    use std::os::unix::io::IntoRawFd;
    SocketHandle::from_raw(socket.into_raw_fd())
}

#[cfg(windows)]
fn into_handle(socket: Socket) -> SocketHandle {
    use std::os::windows::io::IntoRawSocket;
    SocketHandle::from_raw(socket.into_raw_socket())
}

#[cfg(unix)]
fn close_raw(raw: RawHandle) -> Result<(), OsError> {
    // SAFETY: closing an fd the caller has handed over; a stale fd yields EBADF.
    if unsafe { libc::close(raw) } == -1 {
        return Err(OsError::last());
    }
    Ok(())
}

#[cfg(windows)]
fn close_raw(raw: RawHandle) -> Result<(), OsError> {
    use windows_sys::Win32::Networking::WinSock::{closesocket, SOCKET, SOCKET_ERROR};
    // SAFETY: closing a socket the caller has handed over; a stale one yields WSAENOTSOCK.
    if unsafe { closesocket(raw as SOCKET) } == SOCKET_ERROR {
        return Err(OsError::last());
    }
    Ok(())
}

impl SocketSys for SystemSockets {
    fn socket(&self, domain: i32, socket_type: i32, protocol: i32) -> Result<SocketHandle, OsError> {
        debug!("socket({}, {}, {})", domain, socket_type, protocol);
        let protocol = (protocol != 0).then(|| Protocol::from(protocol));
        let socket = Socket::new(Domain::from(domain), Type::from(socket_type), protocol)?;
        Ok(into_handle(socket))
    }

    fn resolve_ipv4(&self, host: &str) -> Result<Vec<Ipv4Addr>, OsError> {
        debug!("resolve({})", host);
        resolver::resolve_ipv4(host)
    }

    fn connect(&self, handle: SocketHandle, addr: SocketAddrV4) -> Result<(), OsError> {
        debug!("connect({}, {})", handle, addr);
        borrow(handle).connect(&SockAddr::from(addr))?;
        Ok(())
    }

    fn close(&self, handle: SocketHandle) -> Result<(), OsError> {
        debug!("close({})", handle);
        close_raw(handle.as_raw())
    }

    fn bind(&self, handle: SocketHandle, addr: SocketAddrV4) -> Result<(), OsError> {
        debug!("bind({}, {})", handle, addr);
        borrow(handle).bind(&SockAddr::from(addr))?;
        Ok(())
    }

    fn listen(&self, handle: SocketHandle, backlog: i32) -> Result<(), OsError> {
        debug!("listen({}, {})", handle, backlog);
        borrow(handle).listen(backlog)?;
        Ok(())
    }

    fn accept(&self, handle: SocketHandle) -> Result<(SocketHandle, PeerAddress), OsError> {
        debug!("accept({})", handle);
        let (conn, addr) = borrow(handle).accept()?;
        let peer = PeerAddress {
            family: i32::from(addr.family()),
            address: addr.as_socket(),
        };
        Ok((into_handle(conn), peer))
    }

    fn send(&self, handle: SocketHandle, data: &[u8], flags: i32) -> Result<usize, OsError> {
        debug!("send({}, {} bytes, {})", handle, data.len(), flags);
        Ok(borrow(handle).send_with_flags(data, flags)?)
    }

    fn recv(&self, handle: SocketHandle, len: usize, flags: i32) -> Result<Vec<u8>, OsError> {
        debug!("recv({}, {}, {})", handle, len, flags);
        let mut buf = Vec::with_capacity(len);
        let read = borrow(handle).recv_with_flags(&mut buf.spare_capacity_mut()[..len], flags)?;
        // SAFETY: recv initialized the first `read` bytes of the spare capacity.
        unsafe { buf.set_len(read) };
        Ok(buf)
    }

    fn set_option(&self, handle: SocketHandle, level: i32, name: i32, value: i32) -> Result<(), OsError> {
        debug!("setsockopt({}, {}, {}, {})", handle, level, name, value);
        sockopt::set_int_option(handle.as_raw(), level, name, value)
    }

    fn get_option(&self, handle: SocketHandle, level: i32, name: i32) -> Result<RawOption, OsError> {
        debug!("getsockopt({}, {}, {})", handle, level, name);
        sockopt::get_int_option(handle.as_raw(), level, name)
    }
}
