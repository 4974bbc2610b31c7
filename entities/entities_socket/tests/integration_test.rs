//! Integration tests for entities_socket crate

use entities_socket::*;

#[test]
fn test_every_listed_constant_resolves_or_reports_unsupported() {
    for constant in constants::constants() {
        match constants::lookup(constant.name) {
            Ok(value) => assert_eq!(constant.availability, Availability::Native(value)),
            Err(ConstantError::Unsupported(name)) => {
                assert_eq!(name, constant.name);
                assert_eq!(constant.availability, Availability::Unsupported);
            }
            Err(e) => panic!("{} failed: {}", constant.name, e),
        }
    }
}

#[test]
fn test_unknown_distinct_from_zero() {
    // A legitimately zero-valued name and an unknown name must not collapse
    let unknown = constants::lookup("SO_NOT_A_THING");
    assert!(matches!(unknown, Err(ConstantError::Unknown(_))));
    assert_eq!(
        unknown.unwrap_err().to_string(),
        "unknown socket constant `SO_NOT_A_THING`"
    );
}

#[test]
fn test_socket_types_distinct() {
    let stream = constants::lookup("SOCK_STREAM").unwrap();
    let dgram = constants::lookup("SOCK_DGRAM").unwrap();
    let raw = constants::lookup("SOCK_RAW").unwrap();
    assert_ne!(stream, dgram);
    assert_ne!(dgram, raw);
    assert_eq!(SocketDefaults::default().socket_type, stream);
}

#[test]
fn test_endpoint_construction() {
    let endpoint = Endpoint::new("localhost", 9001);
    assert_eq!(endpoint.host, "localhost");
    assert_eq!(endpoint.port, 9001);
}
