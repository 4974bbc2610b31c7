//! System Integration Base Module
//!
//! Provides the one-time socket subsystem startup required before any socket
//! can be created.
//!
//! Windows needs `WSAStartup` before the first socket call; POSIX platforms
//! need nothing. The outcome of the first attempt is recorded for the rest of
//! the process: a failed startup is not retried, and every later socket
//! creation reports the same failure.

use std::sync::OnceLock;

use log::{debug, info};
use thiserror::Error;

/// Winsock version requested at startup (MAKEWORD(2, 2))
pub const WINSOCK_VERSION: u16 = 0x0202;

static SOCKET_SUBSYSTEM: OnceLock<Result<(), SysError>> = OnceLock::new();

/// System integration base
pub struct SysBase;

impl SysBase {
    /// Initialize the socket subsystem
    ///
    /// Idempotent. The first call performs the platform startup; every later
    /// call returns the recorded outcome without touching the OS again.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use frameworks_system_integration::SysBase;
    ///
    /// assert!(SysBase::init_sockets().is_ok());
    /// assert!(SysBase::sockets_initialized());
    /// ```
    ///
    /// # Errors
    ///
    /// Returns `SysError::SocketInitFailed` if the platform startup failed,
    /// now or on the first call.
    pub fn init_sockets() -> Result<(), SysError> {
        init_once(&SOCKET_SUBSYSTEM, platform::startup)
    }

    /// Whether the socket subsystem has been started successfully
    pub fn sockets_initialized() -> bool {
        matches!(SOCKET_SUBSYSTEM.get(), Some(Ok(())))
    }
}

fn init_once<F>(cell: &OnceLock<Result<(), SysError>>, startup: F) -> Result<(), SysError>
where
    F: FnOnce() -> Result<(), SysError>,
{
    cell.get_or_init(|| {
        let outcome = startup();
        match &outcome {
            Ok(()) => info!("socket subsystem initialized"),
            Err(e) => info!("socket subsystem startup failed: {}", e),
        }
        outcome
    })
    .clone()
    .inspect_err(|e| debug!("socket subsystem unavailable: {}", e))
}

#[cfg(windows)]
mod platform {
    use super::{SysError, WINSOCK_VERSION};
    use windows_sys::Win32::Networking::WinSock::{WSAStartup, WSADATA};

    pub(super) fn startup() -> Result<(), SysError> {
        // SAFETY: WSADATA is plain data filled in by WSAStartup.
        let mut data: WSADATA = unsafe { std::mem::zeroed() };
        let rc = unsafe { WSAStartup(WINSOCK_VERSION, &mut data) };
        if rc != 0 {
            return Err(SysError::SocketInitFailed(rc));
        }
        Ok(())
    }
}

#[cfg(not(windows))]
mod platform {
    use super::SysError;

    pub(super) fn startup() -> Result<(), SysError> {
        Ok(())
    }
}

/// System integration errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SysError {
    /// Platform socket startup returned a non-zero code
    #[error("could not initialize winsock library (error {0})")]
    SocketInitFailed(i32),
}
