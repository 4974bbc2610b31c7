//! Infrastructure NIF API
//!
//! Marshalling between host Terms and the native values socket calls consume
//! and produce.
//!
//! ## Overview
//!
//! - **Term Decoding**: `get_*` functions validating host arguments into
//!   handles, ports, lengths, endpoints and payloads
//! - **Term Creation**: `make_*` functions building host results from
//!   handles, bytes, address lists and peer addresses
//! - **Error Handling**: `ArgumentError`, naming the function and parameter
//!   that failed validation
//! - **Call Environment**: `NifArgs`, positional access and arity checks for
//!   one call
//!
//! Decoding never touches the OS. Every argument of a call is validated
//! before the caller makes a system call.
//!
//! ## See Also
//!
//! - [`entities_data_handling`](../entities_data_handling/index.html): Term type definitions
//! - [`entities_socket`](../entities_socket/index.html): Native socket types

pub mod term_creation;
pub mod term_decoding;
pub mod error_handling;
pub mod nif_env;

pub use term_creation::*;
pub use term_decoding::*;
pub use error_handling::*;
pub use nif_env::*;
