//! Raw Socket Options
//!
//! `socket2` only exposes named options, so integer options with a
//! caller-supplied level and name go straight to the platform call.
//! Values are always exchanged as a 4-byte C int.

use entities_socket::{RawHandle, RawOption, OPTION_WIDTH};

use crate::sys::OsError;

#[cfg(unix)]
mod platform {
    use super::*;
    use libc::{c_int, c_void, socklen_t};

    pub(super) fn set(raw: RawHandle, level: i32, name: i32, value: i32) -> Result<(), OsError> {
        let value: c_int = value;
        // SAFETY: value outlives the call and the length matches its size.
        let rc = unsafe {
            libc::setsockopt(
                raw,
                level,
                name,
                &value as *const c_int as *const c_void,
                OPTION_WIDTH as socklen_t,
            )
        };
        if rc == -1 {
            return Err(OsError::last());
        }
        Ok(())
    }

    pub(super) fn get(raw: RawHandle, level: i32, name: i32) -> Result<RawOption, OsError> {
        let mut value: c_int = 0;
        let mut len = OPTION_WIDTH as socklen_t;
        // SAFETY: the OS writes at most `len` bytes into value.
        let rc = unsafe {
            libc::getsockopt(
                raw,
                level,
                name,
                &mut value as *mut c_int as *mut c_void,
                &mut len,
            )
        };
        if rc == -1 {
            return Err(OsError::last());
        }
        Ok(RawOption {
            value,
            width: len as usize,
        })
    }
}

#[cfg(windows)]
mod platform {
    use super::*;
    use windows_sys::Win32::Networking::WinSock::{getsockopt, setsockopt, SOCKET, SOCKET_ERROR};

    pub(super) fn set(raw: RawHandle, level: i32, name: i32, value: i32) -> Result<(), OsError> {
        // SAFETY: value outlives the call and the length matches its size.
        let rc = unsafe {
            setsockopt(
                raw as SOCKET,
                level,
                name,
                &value as *const i32 as *const u8,
                OPTION_WIDTH as i32,
            )
        };
        if rc == SOCKET_ERROR {
            return Err(OsError::last());
        }
        Ok(())
    }

    pub(super) fn get(raw: RawHandle, level: i32, name: i32) -> Result<RawOption, OsError> {
        let mut value: i32 = 0;
        let mut len = OPTION_WIDTH as i32;
        // SAFETY: the OS writes at most `len` bytes into value.
        let rc = unsafe {
            getsockopt(
                raw as SOCKET,
                level,
                name,
                &mut value as *mut i32 as *mut u8,
                &mut len,
            )
        };
        if rc == SOCKET_ERROR {
            return Err(OsError::last());
        }
        Ok(RawOption {
            value,
            width: len.max(0) as usize,
        })
    }
}

/// Set an integer option
pub fn set_int_option(raw: RawHandle, level: i32, name: i32, value: i32) -> Result<(), OsError> {
    platform::set(raw, level, name, value)
}

/// Read an integer option
///
/// The reported width is passed back untouched; callers decide whether a
/// width other than 4 is acceptable.
pub fn get_int_option(raw: RawHandle, level: i32, name: i32) -> Result<RawOption, OsError> {
    platform::get(raw, level, name)
}
