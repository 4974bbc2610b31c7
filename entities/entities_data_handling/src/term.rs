//! Term Module
//!
//! Defines the host value representation exchanged with the socket functions.
//! A `Term` is whatever the dynamically-typed host hands over as an argument
//! or expects back as a result: scalars, text, numeric arrays, lists and
//! key/value records.

use crate::map::Record;

/// Element class of a numeric array
///
/// The class determines the byte width of each element. Only 1-byte classes
/// can be sent as raw payloads without reformatting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementType {
    Int8,
    UInt8,
    Int16,
    UInt16,
    Int32,
    UInt32,
    Int64,
    UInt64,
    Single,
    Double,
}

impl ElementType {
    /// Size in bytes of one element of this class
    pub fn byte_width(self) -> usize {
        match self {
            ElementType::Int8 | ElementType::UInt8 => 1,
            ElementType::Int16 | ElementType::UInt16 => 2,
            ElementType::Int32 | ElementType::UInt32 | ElementType::Single => 4,
            ElementType::Int64 | ElementType::UInt64 | ElementType::Double => 8,
        }
    }
}

/// Numeric array value
///
/// Values are held as `f64` regardless of class, the way the host stores
/// them; `class` records what the host declared. A `UInt8` array is the
/// canonical byte sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct NumericArray {
    class: ElementType,
    values: Vec<f64>,
}

impl NumericArray {
    /// Create a numeric array of the given class
    pub fn new(class: ElementType, values: Vec<f64>) -> Self {
        Self { class, values }
    }

    /// Create a `UInt8` row vector from raw bytes
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self {
            class: ElementType::UInt8,
            values: bytes.iter().map(|&b| f64::from(b)).collect(),
        }
    }

    /// Element class
    pub fn class(&self) -> ElementType {
        self.class
    }

    /// Element values
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Number of elements
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if the array has no elements
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Total storage size in bytes (`len * byte_width`)
    pub fn byte_size(&self) -> usize {
        self.values.len() * self.class.byte_width()
    }

    /// Convert to bytes when every element is a 1-byte value
    ///
    /// Returns `None` for wider classes, and for any element that is not an
    /// integer within its class range (`UInt8` 0..=255, `Int8` -128..=127).
    /// `Int8` elements are reinterpreted as their unsigned two's-complement
    /// byte.
    pub fn to_bytes(&self) -> Option<Vec<u8>> {
        let (min, max) = match self.class {
            ElementType::UInt8 => (f64::from(u8::MIN), f64::from(u8::MAX)),
            ElementType::Int8 => (f64::from(i8::MIN), f64::from(i8::MAX)),
            _ if self.values.is_empty() => return Some(Vec::new()),
            _ => return None,
        };
        self.values
            .iter()
            .map(|&v| {
                if v.fract() != 0.0 || !(min..=max).contains(&v) {
                    return None;
                }
                // Exact in i16; the cast to u8 keeps the two's-complement byte
                Some(v as i16 as u8)
            })
            .collect()
    }
}

/// Host value
#[derive(Debug, Clone, PartialEq)]
pub enum Term {
    /// Scalar integer
    Int(i64),
    /// Scalar real
    Float(f64),
    /// Character string
    Str(String),
    /// Numeric array (row vector)
    Array(NumericArray),
    /// Ordered sequence of values (cell array / list)
    List(Vec<Term>),
    /// Key/value record (struct)
    Record(Record),
}

impl Term {
    /// Build a `UInt8` array term from bytes
    pub fn bytes(bytes: &[u8]) -> Self {
        Term::Array(NumericArray::from_bytes(bytes))
    }

    /// Borrow the text of a string term
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Term::Str(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Borrow the record of a struct term
    pub fn as_record(&self) -> Option<&Record> {
        match self {
            Term::Record(r) => Some(r),
            _ => None,
        }
    }
}

impl From<i64> for Term {
    fn from(value: i64) -> Self {
        Term::Int(value)
    }
}

impl From<i32> for Term {
    fn from(value: i32) -> Self {
        Term::Int(i64::from(value))
    }
}

impl From<&str> for Term {
    fn from(value: &str) -> Self {
        Term::Str(value.to_string())
    }
}

impl From<String> for Term {
    fn from(value: String) -> Self {
        Term::Str(value)
    }
}

impl From<Record> for Term {
    fn from(value: Record) -> Self {
        Term::Record(value)
    }
}
