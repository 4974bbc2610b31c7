//! Entities Layer: Socket
//!
//! Native-side socket vocabulary shared by the marshalling, adapter and facade layers.
//!
//! ## Overview
//!
//! - **[`handle`](handle/index.html)**: `SocketHandle`, `Endpoint`, `PeerAddress` and
//!   `RawOption`, the native values a socket call consumes or produces.
//!
//! - **[`constants`](constants/index.html)**: The constant registry mapping names such
//!   as `AF_INET` or `SO_REUSEADDR` to this platform's values.
//!
//! - **[`config`](config/index.html)**: `SocketDefaults` for socket creation.
//!
//! ## Usage
//!
//! ```rust
//! use entities_socket::{constants, SocketHandle};
//!
//! let stream = constants::lookup("SOCK_STREAM").unwrap();
//! assert!(stream > 0);
//! assert!(SocketHandle::from_i64(-1).is_none());
//! ```

pub mod handle;
pub mod constants;
pub mod config;

pub use handle::{Endpoint, PeerAddress, RawHandle, RawOption, SocketHandle, OPTION_WIDTH};
pub use constants::{Availability, ConstantError, SocketConstant};
pub use config::SocketDefaults;
