//! Frameworks Layer: System Integration Base
//!
//! Provides the one-time platform socket subsystem startup (Winsock on Windows,
//! a no-op elsewhere). Socket creation calls [`SysBase::init_sockets`] before
//! asking the OS for a new socket.

pub mod sys_base;

pub use sys_base::{SysBase, SysError, WINSOCK_VERSION};
