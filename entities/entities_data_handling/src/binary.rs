//! Payload Module
//!
//! Provides the outgoing data buffer for send operations.

/// Data to be written to a socket
///
/// The host may hand over either text or a byte sequence; both collapse to
/// the same contiguous bytes on the wire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Payload {
    /// Character data, sent as its UTF-8 bytes
    Text(String),
    /// Raw byte sequence
    Bytes(Vec<u8>),
}

impl Payload {
    /// Borrow the payload as bytes
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            Payload::Text(s) => s.as_bytes(),
            Payload::Bytes(b) => b,
        }
    }

    /// Consume the payload into bytes
    pub fn into_bytes(self) -> Vec<u8> {
        match self {
            Payload::Text(s) => s.into_bytes(),
            Payload::Bytes(b) => b,
        }
    }

    /// Payload size in bytes
    pub fn len(&self) -> usize {
        self.as_bytes().len()
    }

    /// Check if the payload is empty
    pub fn is_empty(&self) -> bool {
        self.as_bytes().is_empty()
    }
}
