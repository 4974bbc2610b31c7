//! Integration tests for api_facades crate
//!
//! End-to-end socket sessions over loopback, driven through the function
//! registry the way a host binding calls it.

use api_facades::{FunctionRegistry, SocketError, SocketFacade};
use entities_data_handling::{ElementType, NumericArray, Record, Term};

fn registry() -> FunctionRegistry {
    FunctionRegistry::new(SocketFacade::system())
}

fn call1(registry: &FunctionRegistry, name: &str, args: &[Term]) -> Term {
    let mut out = registry.call(name, args).unwrap();
    assert_eq!(out.len(), 1, "{} returned {} values", name, out.len());
    out.remove(0)
}

fn constant(registry: &FunctionRegistry, name: &str) -> Term {
    call1(registry, name, &[])
}

fn server_info(port: i64) -> Term {
    Term::Record(Record::new().with("addr", "127.0.0.1").with("port", port))
}

fn reuse_address(registry: &FunctionRegistry, s: &Term) {
    let args = [
        s.clone(),
        constant(registry, "SOL_SOCKET"),
        constant(registry, "SO_REUSEADDR"),
        Term::Int(1),
    ];
    assert_eq!(registry.call("setsockopt", &args), Ok(vec![]));
}

/// Listening server socket on `port` plus a connected client and the
/// accepted connection: `(server, client, server_data)`
fn session(registry: &FunctionRegistry, port: i64) -> (Term, Term, Term) {
    let server = call1(registry, "socket", &[
        constant(registry, "AF_INET"),
        constant(registry, "SOCK_STREAM"),
        Term::Int(0),
    ]);
    reuse_address(registry, &server);
    assert_eq!(call1(registry, "bind", &[server.clone(), Term::Int(port)]), Term::Int(0));
    assert_eq!(call1(registry, "listen", &[server.clone(), Term::Int(1)]), Term::Int(0));

    let client = call1(registry, "socket", &[]);
    assert_eq!(call1(registry, "connect", &[client.clone(), server_info(port)]), Term::Int(0));

    let accepted = registry.call("accept", &[server.clone()]).unwrap();
    assert_eq!(accepted.len(), 2);
    (server, client, accepted[0].clone())
}

fn recv(registry: &FunctionRegistry, s: &Term, len: i64) -> (Term, Term) {
    let out = registry.call("recv", &[s.clone(), Term::Int(len)]).unwrap();
    assert_eq!(out.len(), 2);
    (out[0].clone(), out[1].clone())
}

#[test]
fn test_echo_session() {
    let registry = registry();
    let (server, client, server_data) = session(&registry, 9001);
    for handle in [&server, &client, &server_data] {
        assert!(matches!(handle, Term::Int(v) if *v >= 0));
    }
    assert_ne!(server_data, server);
    assert_ne!(server_data, client);

    let msg = "Hello socket-land!";
    let sent = call1(&registry, "send", &[client.clone(), Term::from(msg)]);
    assert_eq!(sent, Term::Int(msg.len() as i64));

    let (msg_s, len_s) = recv(&registry, &server_data, 100);
    assert_eq!(len_s, Term::Int(msg.len() as i64));

    // Echo the received uint8 data back unchanged
    let sent = call1(&registry, "send", &[server_data.clone(), msg_s.clone()]);
    assert_eq!(sent, Term::Int(msg.len() as i64));

    let (msg_c, len_c) = recv(&registry, &client, 100);
    assert_eq!(len_c, Term::Int(msg.len() as i64));
    assert_eq!(msg_c, Term::bytes(msg.as_bytes()));

    for handle in [client, server_data, server] {
        assert_eq!(call1(&registry, "disconnect", &[handle]), Term::Int(0));
    }
}

#[test]
fn test_reuse_address_rebind() {
    let registry = registry();
    let (server, client, server_data) = session(&registry, 9002);

    let args = [server.clone(), constant(&registry, "SOL_SOCKET"), constant(&registry, "SO_REUSEADDR")];
    assert_ne!(call1(&registry, "getsockopt", &args), Term::Int(0));

    // Closing the server side first leaves the port in TIME_WAIT
    call1(&registry, "disconnect", &[server_data]);
    call1(&registry, "disconnect", &[server]);

    let server2 = call1(&registry, "socket", &[
        constant(&registry, "AF_INET"),
        constant(&registry, "SOCK_STREAM"),
        Term::Int(0),
    ]);
    reuse_address(&registry, &server2);
    assert_eq!(call1(&registry, "bind", &[server2.clone(), Term::Int(9002)]), Term::Int(0));
    assert_eq!(call1(&registry, "listen", &[server2.clone(), Term::Int(1)]), Term::Int(0));

    call1(&registry, "disconnect", &[server2]);
    call1(&registry, "disconnect", &[client]);
}

#[test]
fn test_text_and_bytes_arrive_identically() {
    let registry = registry();
    let (server, client, server_data) = session(&registry, 9003);

    let text = call1(&registry, "send", &[client.clone(), Term::from("abc")]);
    let (from_text, _) = recv(&registry, &server_data, 3);

    let bytes = Term::Array(NumericArray::new(ElementType::UInt8, vec![97.0, 98.0, 99.0]));
    let raw = call1(&registry, "send", &[client.clone(), bytes]);
    let (from_bytes, _) = recv(&registry, &server_data, 3);

    assert_eq!(text, raw);
    assert_eq!(from_text, from_bytes);
    assert_eq!(from_text, Term::bytes(b"abc"));

    for handle in [client, server_data, server] {
        call1(&registry, "disconnect", &[handle]);
    }
}

#[test]
fn test_accept_reports_client_address() {
    let registry = registry();
    let (server, client, _) = session(&registry, 9004);

    let client2 = call1(&registry, "socket", &[]);
    call1(&registry, "connect", &[client2.clone(), server_info(9004)]);
    let accepted = registry.call("accept", &[server.clone()]).unwrap();
    let info = accepted[1].as_record().unwrap();

    assert_eq!(info.get("sin_family"), Some(&constant(&registry, "AF_INET")));
    assert_eq!(info.get("sin_addr"), Some(&Term::from("127.0.0.1")));
    assert!(matches!(info.get("sin_port"), Some(Term::Int(p)) if *p > 0 && *p <= 65535));

    for handle in [accepted[0].clone(), client2, client, server] {
        call1(&registry, "disconnect", &[handle]);
    }
}

#[test]
fn test_recv_after_peer_disconnect() {
    let registry = registry();
    let (server, client, server_data) = session(&registry, 9005);

    call1(&registry, "disconnect", &[client]);
    let (data, status) = recv(&registry, &server_data, 10);
    assert_eq!(status, Term::Int(0));
    assert_eq!(data, Term::bytes(&[]));

    call1(&registry, "disconnect", &[server_data]);
    call1(&registry, "disconnect", &[server]);
}

#[test]
#[cfg(unix)]
fn test_recv_would_block_is_soft() {
    let registry = registry();
    let (server, client, server_data) = session(&registry, 9006);

    let flags = constant(&registry, "MSG_DONTWAIT");
    let out = registry.call("recv", &[server_data.clone(), Term::Int(10), flags]).unwrap();
    assert_eq!(out, vec![Term::bytes(&[]), Term::Int(-1)]);

    for handle in [client, server_data, server] {
        assert_eq!(call1(&registry, "disconnect", &[handle]), Term::Int(0));
    }
}

#[test]
fn test_gethostbyname_loopback() {
    let registry = registry();
    assert_eq!(
        call1(&registry, "gethostbyname", &[Term::from("127.0.0.1")]),
        Term::List(vec![Term::from("127.0.0.1")])
    );
    assert_eq!(
        call1(&registry, "gethostbyname", &[Term::from("no-such-host.invalid")]),
        Term::List(vec![])
    );
}

#[test]
fn test_connect_to_unresolvable_host() {
    let registry = registry();
    let client = call1(&registry, "socket", &[]);
    let info = Term::Record(Record::new().with("addr", "no-such-host.invalid").with("port", 80i64));
    assert!(matches!(
        registry.call("connect", &[client.clone(), info]),
        Err(SocketError::Resolution { operation: "connect", .. })
    ));
    call1(&registry, "disconnect", &[client]);
}

#[test]
#[cfg(unix)]
fn test_unknown_handle_is_reported_by_the_os() {
    let registry = registry();
    // Well-formed but never opened
    let unknown = Term::Int(i64::from(i32::MAX) - 1);

    let err = registry.call("listen", &[unknown.clone(), Term::Int(1)]).unwrap_err();
    assert!(!err.is_validation());
    assert!(matches!(err, SocketError::Os { operation: "listen", code, .. } if code == libc::EBADF));

    assert_eq!(call1(&registry, "send", &[unknown.clone(), Term::from("x")]), Term::Int(-1));
    let out = registry.call("recv", &[unknown, Term::Int(4)]).unwrap();
    assert_eq!(out, vec![Term::bytes(&[]), Term::Int(-1)]);
}

#[test]
fn test_validation_errors_name_the_parameter() {
    let registry = registry();
    assert_eq!(
        registry.call("bind", &[Term::Int(3), Term::from("9001")]).unwrap_err().to_string(),
        "bind: PORT must be a scalar integer"
    );
    assert_eq!(
        registry.call("listen", &[Term::Float(1.5), Term::Int(1)]).unwrap_err().to_string(),
        "listen: S must be a valid socket"
    );
    assert_eq!(
        registry.call("socket", &[Term::Int(2), Term::Int(1), Term::Int(17)]).unwrap_err().to_string(),
        "socket: for now, PROTOCOL must always be 0 (zero)"
    );
}
