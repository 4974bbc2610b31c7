//! Adapters Layer: OS Socket Access
//!
//! The single place this workspace touches the operating system's socket
//! API. Everything above it talks to the [`SocketSys`] trait, so the façade
//! can be driven by a mock in tests and by [`SystemSockets`] in production.
//!
//! ## Overview
//!
//! - **[`sys`](sys/index.html)**: the `SocketSys` seam and `OsError`
//! - **[`socket`](socket/index.html)**: `SystemSockets`, the real implementation, built on
//!   `socket2` over handles the caller owns
//! - **[`sockopt`](sockopt/index.html)**: raw integer `setsockopt`/`getsockopt` with
//!   caller-supplied level and name
//! - **[`resolver`](resolver/index.html)**: IPv4 name lookup
//!
//! Handles are never owned here: every call borrows the raw handle for the
//! duration of one OS call, and only `close` releases it.

pub mod sys;
pub mod socket;
pub mod sockopt;
pub mod resolver;

pub use sys::{OsError, SocketSys};
pub use socket::SystemSockets;
