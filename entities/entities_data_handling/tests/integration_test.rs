//! Integration tests for entities_data_handling crate
//!
//! These tests verify that terms, records and payloads compose the way
//! the socket layers use them.

use entities_data_handling::*;

#[test]
fn test_endpoint_shaped_record() {
    let server = Record::new()
        .with("addr", "127.0.0.1")
        .with("port", 9001i64);
    let term = Term::from(server);

    let record = term.as_record().expect("record term");
    assert_eq!(record.get("addr").and_then(Term::as_str), Some("127.0.0.1"));
    assert_eq!(record.get("port"), Some(&Term::Int(9001)));
}

#[test]
fn test_nested_record_in_list() {
    let info = Record::new().with("sin_addr", "10.0.0.1");
    let list = Term::List(vec![Term::Int(4), Term::Record(info.clone())]);

    match list {
        Term::List(items) => {
            assert_eq!(items.len(), 2);
            assert_eq!(items[1], Term::Record(info));
        }
        other => panic!("Expected list, got {:?}", other),
    }
}

#[test]
fn test_byte_array_to_payload() {
    let term = Term::bytes(b"Hello socket-land!");
    let bytes = match &term {
        Term::Array(array) => array.to_bytes().expect("1-byte elements"),
        other => panic!("Expected array, got {:?}", other),
    };

    let from_bytes = Payload::Bytes(bytes);
    let from_text = Payload::Text("Hello socket-land!".to_string());
    assert_eq!(from_bytes, Payload::Bytes(from_text.as_bytes().to_vec()));
    assert_eq!(from_bytes.len(), 18);
}

#[test]
fn test_wide_array_has_no_byte_view() {
    let array = NumericArray::new(ElementType::UInt16, vec![1.0, 2.0, 3.0]);
    assert_eq!(array.byte_size(), 6);
    assert!(array.to_bytes().is_none());
}
