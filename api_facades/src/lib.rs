//! API Facades Layer
//!
//! The host-visible socket functions: one façade method per socket verb,
//! one zero-argument query per named constant, and a registry that routes
//! a function name plus host arguments to the right one.
//!
//! All facades call underlying Rust modules from inner layers:
//! `infrastructure_nif_api` for argument decoding and result building,
//! `adapters_socket` for the OS calls and `frameworks_system_integration`
//! for socket subsystem startup.
//!
//! ## Usage
//!
//! ```rust
//! use api_facades::get_global_registry;
//! use entities_data_handling::Term;
//!
//! let registry = get_global_registry();
//! let addresses = registry.call("gethostbyname", &[Term::from("127.0.0.1")]).unwrap();
//! assert_eq!(addresses, vec![Term::List(vec![Term::from("127.0.0.1")])]);
//! ```

pub mod socket_facades;
pub mod constant_facades;
pub mod common_facades;
pub mod registry;

// Re-export main facade types
pub use socket_facades::{Signature, SocketFacade};
pub use common_facades::SocketError;
pub use registry::{get_global_registry, FunctionEntry, FunctionRegistry, Handler};
