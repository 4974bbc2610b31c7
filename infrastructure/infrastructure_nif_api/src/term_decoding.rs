//! Term Decoding Functions
//!
//! Convert host Terms into the native values socket calls consume. Every
//! function takes the name of the calling function and of the parameter it
//! is decoding so a failure reads e.g. `bind: PORT must be a scalar integer`.

use entities_data_handling::{Payload, Term};
use entities_socket::{Endpoint, SocketHandle};

use crate::error_handling::ArgumentError;

/// Decode a scalar integer term
///
/// Accepts an integer, an integral finite real, or a one-element numeric
/// array. The value must fit a C `int`.
///
/// # Arguments
///
/// * `function` - Name of the calling function
/// * `param` - Name of the parameter being decoded
/// * `term` - Term to decode
///
/// # Returns
///
/// * `Ok(i32)` - Success
/// * `Err(ArgumentError::NotAnInteger)` - Not a scalar integer
/// * `Err(ArgumentError::OutOfRange)` - Integer does not fit 32 bits
pub fn get_int(
    function: &'static str,
    param: &'static str,
    term: &Term,
) -> Result<i32, ArgumentError> {
    let value = scalar_integer(term).ok_or(ArgumentError::NotAnInteger { function, param })?;
    i32::try_from(value).map_err(|_| ArgumentError::OutOfRange {
        function,
        param,
        min: i64::from(i32::MIN),
        max: i64::from(i32::MAX),
    })
}

/// Decode a socket handle
///
/// Any failure (non-scalar, non-integer, negative, too large for the
/// platform handle type) is reported as an invalid socket.
pub fn get_socket(function: &'static str, term: &Term) -> Result<SocketHandle, ArgumentError> {
    scalar_integer(term)
        .and_then(SocketHandle::from_i64)
        .ok_or(ArgumentError::InvalidSocket { function, param: "S" })
}

/// Decode a port number (0..=65535)
pub fn get_port(
    function: &'static str,
    param: &'static str,
    term: &Term,
) -> Result<u16, ArgumentError> {
    let value = scalar_integer(term).ok_or(ArgumentError::NotAnInteger { function, param })?;
    u16::try_from(value).map_err(|_| ArgumentError::OutOfRange {
        function,
        param,
        min: 0,
        max: i64::from(u16::MAX),
    })
}

/// Decode a non-negative length
///
/// Zero is legal; negative and non-integer values are rejected. Lengths
/// above `i32::MAX` are out of range.
pub fn get_length(
    function: &'static str,
    param: &'static str,
    term: &Term,
) -> Result<usize, ArgumentError> {
    let value = scalar_integer(term)
        .filter(|v| *v >= 0)
        .ok_or(ArgumentError::Negative { function, param })?;
    if value > i64::from(i32::MAX) {
        return Err(ArgumentError::OutOfRange {
            function,
            param,
            min: 0,
            max: i64::from(i32::MAX),
        });
    }
    usize::try_from(value).map_err(|_| ArgumentError::Negative { function, param })
}

/// Decode a string term
pub fn get_string<'a>(
    function: &'static str,
    param: &'static str,
    term: &'a Term,
) -> Result<&'a str, ArgumentError> {
    term.as_str().ok_or(ArgumentError::NotText { function, param })
}

/// Decode an endpoint descriptor
///
/// The term must be a record with a string field `addr` and an integer
/// field `port`. Other fields are ignored.
///
/// # Returns
///
/// * `Ok(Endpoint)` - Success
/// * `Err(ArgumentError::NotARecord)` - Not a record
/// * `Err(ArgumentError::BadEndpoint)` - A field is absent or mistyped
/// * `Err(ArgumentError::EmptyAddress)` - `addr` is an empty string
/// * `Err(ArgumentError::OutOfRange)` - `port` outside 0..=65535
pub fn get_endpoint(
    function: &'static str,
    param: &'static str,
    term: &Term,
) -> Result<Endpoint, ArgumentError> {
    let record = term
        .as_record()
        .ok_or(ArgumentError::NotARecord { function, param })?;

    let bad = ArgumentError::BadEndpoint { function, param };
    let addr = record.get("addr").and_then(Term::as_str).ok_or(bad.clone())?;
    let port = record.get("port").and_then(scalar_integer).ok_or(bad)?;

    if addr.is_empty() {
        return Err(ArgumentError::EmptyAddress { function, param });
    }
    let port = u16::try_from(port).map_err(|_| ArgumentError::OutOfRange {
        function,
        param,
        min: 0,
        max: i64::from(u16::MAX),
    })?;

    Ok(Endpoint::new(addr, port))
}

/// Decode a send payload
///
/// Text is taken as is. A numeric array is accepted only when each
/// element is one byte wide and holds an integer within its class range;
/// anything else must be reformatted by the caller.
pub fn get_payload(
    function: &'static str,
    param: &'static str,
    term: &Term,
) -> Result<Payload, ArgumentError> {
    match term {
        Term::Str(s) => Ok(Payload::Text(s.clone())),
        Term::Array(array) => array
            .to_bytes()
            .map(Payload::Bytes)
            .ok_or(ArgumentError::BadPayload { function, param }),
        _ => Err(ArgumentError::BadPayload { function, param }),
    }
}

// ============================================================================
// Internal Helper Functions
// ============================================================================

/// Extract an integral value from a scalar term
fn scalar_integer(term: &Term) -> Option<i64> {
    match term {
        Term::Int(v) => Some(*v),
        Term::Float(f) => integral(*f),
        Term::Array(array) if array.len() == 1 => integral(array.values()[0]),
        _ => None,
    }
}

fn integral(value: f64) -> Option<i64> {
    // i64::MAX as f64 rounds up to 2^63, hence the strict upper bound
    if value.is_finite() && value.fract() == 0.0 && value >= i64::MIN as f64 && value < i64::MAX as f64 {
        Some(value as i64)
    } else {
        None
    }
}
