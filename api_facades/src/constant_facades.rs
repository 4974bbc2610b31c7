//! Constant Facades
//!
//! Zero-argument queries returning the platform value of a named socket
//! constant, e.g. `AF_INET ()` or `SO_REUSEADDR ()`.

use entities_data_handling::Term;
use entities_socket::constants;
use infrastructure_nif_api::{make_int, NifArgs};

use crate::common_facades::SocketError;
use crate::socket_facades::Signature;

/// Query a constant by name
///
/// # Arguments
///
/// * `name` - Constant name, e.g. `"SOCK_STREAM"`
/// * `args` - Host arguments; must be empty
///
/// # Returns
///
/// * `Ok(Term::Int)` - The platform value
/// * `Err(SocketError::Argument)` - Arguments were supplied
/// * `Err(SocketError::Unsupported)` - Unknown name, or not available on this platform
pub fn query(name: &str, args: &[Term]) -> Result<Term, SocketError> {
    let constant = constants::find(name)
        .ok_or_else(|| SocketError::Unsupported(constants::ConstantError::Unknown(name.to_string())))?;
    Signature::constant(constant.name).check(&NifArgs::new(constant.name, args))?;
    Ok(make_int(constant.value()?))
}
