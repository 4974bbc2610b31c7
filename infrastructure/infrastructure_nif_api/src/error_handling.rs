//! Error Handling
//!
//! Argument validation errors raised while converting host values into
//! native socket-call arguments.
//!
//! ## Design Principles
//!
//! - Every error names the function it was raised in and the offending
//!   parameter, so the host can print it verbatim.
//! - Errors are values returned from each conversion. Nothing is recorded
//!   between calls, so one failed conversion can never leak into the next.

use thiserror::Error;

/// Argument validation error
///
/// Raised before any OS call is attempted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArgumentError {
    /// Too few or too many arguments
    #[error("Invalid call to {function}.  Correct usage is: {usage}")]
    WrongArity {
        function: &'static str,
        usage: &'static str,
        given: usize,
    },

    /// Required positional argument absent
    #[error("{function}: missing argument {param}")]
    Missing {
        function: &'static str,
        param: &'static str,
    },

    /// Not a scalar integer
    #[error("{function}: {param} must be a scalar integer")]
    NotAnInteger {
        function: &'static str,
        param: &'static str,
    },

    /// Integer outside the range the native call accepts
    #[error("{function}: {param} must be between {min} and {max}")]
    OutOfRange {
        function: &'static str,
        param: &'static str,
        min: i64,
        max: i64,
    },

    /// Negative or non-integer where a non-negative integer is required
    #[error("{function}: {param} must be a non-negative integer")]
    Negative {
        function: &'static str,
        param: &'static str,
    },

    /// Not a usable socket handle
    #[error("{function}: {param} must be a valid socket")]
    InvalidSocket {
        function: &'static str,
        param: &'static str,
    },

    /// Not a string
    #[error("{function}: {param} must be a string")]
    NotText {
        function: &'static str,
        param: &'static str,
    },

    /// Not a struct
    #[error("{function}: {param} must be a struct")]
    NotARecord {
        function: &'static str,
        param: &'static str,
    },

    /// Endpoint struct without a string `addr` and an integer `port`
    #[error("{function}: {param} must have a string and integer in fields \"addr\" and \"port\"")]
    BadEndpoint {
        function: &'static str,
        param: &'static str,
    },

    /// Endpoint struct with an empty `addr`
    #[error("{function}: {param} addr is an empty string")]
    EmptyAddress {
        function: &'static str,
        param: &'static str,
    },

    /// Payload that is neither text nor a 1-byte element array
    #[error("{function}: invalid {param} to send.  Please format it prior to sending")]
    BadPayload {
        function: &'static str,
        param: &'static str,
    },

    /// Non-zero protocol passed to socket creation
    #[error("{function}: for now, {param} must always be 0 (zero)")]
    ProtocolNotZero {
        function: &'static str,
        param: &'static str,
    },
}

impl ArgumentError {
    /// Name of the function that rejected its arguments
    pub fn function(&self) -> &'static str {
        match self {
            ArgumentError::WrongArity { function, .. }
            | ArgumentError::Missing { function, .. }
            | ArgumentError::NotAnInteger { function, .. }
            | ArgumentError::OutOfRange { function, .. }
            | ArgumentError::Negative { function, .. }
            | ArgumentError::InvalidSocket { function, .. }
            | ArgumentError::NotText { function, .. }
            | ArgumentError::NotARecord { function, .. }
            | ArgumentError::BadEndpoint { function, .. }
            | ArgumentError::EmptyAddress { function, .. }
            | ArgumentError::BadPayload { function, .. }
            | ArgumentError::ProtocolNotZero { function, .. } => *function,
        }
    }

    /// Offending parameter name, if the error concerns a single parameter
    pub fn param(&self) -> Option<&'static str> {
        match self {
            ArgumentError::WrongArity { .. } => None,
            ArgumentError::Missing { param, .. }
            | ArgumentError::NotAnInteger { param, .. }
            | ArgumentError::OutOfRange { param, .. }
            | ArgumentError::Negative { param, .. }
            | ArgumentError::InvalidSocket { param, .. }
            | ArgumentError::NotText { param, .. }
            | ArgumentError::NotARecord { param, .. }
            | ArgumentError::BadEndpoint { param, .. }
            | ArgumentError::EmptyAddress { param, .. }
            | ArgumentError::BadPayload { param, .. }
            | ArgumentError::ProtocolNotZero { param, .. } => Some(*param),
        }
    }
}
