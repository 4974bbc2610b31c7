//! Entities Layer: Data Handling
//!
//! Host value representation for the socket bindings.
//!
//! ## Overview
//!
//! The `entities_data_handling` crate is the innermost layer of the workspace. It
//! describes the values a dynamically-typed host exchanges with the socket functions,
//! without any knowledge of sockets themselves:
//!
//! - **[`term`](term/index.html)**: The `Term` enum (integers, reals, text, numeric
//!   arrays, lists, records) and `NumericArray` with its element class.
//!
//! - **[`map`](map/index.html)**: `Record`, the ordered field/value structure used for
//!   endpoint descriptors and peer info.
//!
//! - **[`binary`](binary/index.html)**: `Payload`, the text-or-bytes sum type accepted
//!   by send.
//!
//! ## Usage
//!
//! ```rust
//! use entities_data_handling::{Record, Term};
//!
//! let server = Record::new()
//!     .with("addr", "127.0.0.1")
//!     .with("port", 9001i64);
//! let arg = Term::Record(server);
//! assert!(arg.as_record().unwrap().has_field("port"));
//! ```
//!
//! ## Architecture
//!
//! No dependencies on other crates in the workspace. Higher layers (marshalling,
//! adapters, facades) build on these types.

pub mod term;
pub mod map;
pub mod binary;

pub use term::{ElementType, NumericArray, Term};
pub use map::Record;
pub use binary::Payload;
