//! Record Module
//!
//! Provides the key/value record used for structured host arguments and
//! results (the host's scalar struct).
//!
//! Records map field names to Terms. Field order is insertion order, which
//! is also the order fields are presented back to the host.

use crate::term::Term;

/// Key/value record
///
/// Stores field/value pairs as a vector. Records crossing the socket
/// boundary hold two or three fields, so lookup is a linear scan.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Record {
    /// Field/value pairs in insertion order; field names are unique
    fields: Vec<(String, Term)>,
}

impl Record {
    /// Create a new empty record
    pub fn new() -> Self {
        Self { fields: Vec::new() }
    }

    /// Number of fields
    pub fn size(&self) -> usize {
        self.fields.len()
    }

    /// Check if the record has no fields
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Check if a field exists
    pub fn has_field(&self, name: &str) -> bool {
        self.find_index(name).is_some()
    }

    /// Get a field value, returning None if the field doesn't exist
    pub fn get(&self, name: &str) -> Option<&Term> {
        self.find_index(name).map(|idx| &self.fields[idx].1)
    }

    /// Set a field
    ///
    /// If the field already exists, its value is replaced in place.
    /// Returns the previous value if the field existed, None otherwise.
    pub fn put(&mut self, name: &str, value: Term) -> Option<Term> {
        if let Some(idx) = self.find_index(name) {
            Some(std::mem::replace(&mut self.fields[idx].1, value))
        } else {
            self.fields.push((name.to_string(), value));
            None
        }
    }

    /// Builder-style `put`
    pub fn with(mut self, name: &str, value: impl Into<Term>) -> Self {
        self.put(name, value.into());
        self
    }

    /// Field names in insertion order
    pub fn field_names(&self) -> Vec<&str> {
        self.fields.iter().map(|(k, _)| k.as_str()).collect()
    }

    /// Iterate over (name, value) pairs in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Term)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Create a record from (name, value) pairs
    ///
    /// If duplicate names exist, the last value for each name is kept.
    pub fn from_fields<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, Term)>,
        S: AsRef<str>,
    {
        let mut record = Self::new();
        for (name, value) in pairs {
            record.put(name.as_ref(), value);
        }
        record
    }

    fn find_index(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|(k, _)| k == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_creation() {
        let record = Record::new();
        assert!(record.is_empty());
        assert_eq!(record.size(), 0);
    }

    #[test]
    fn test_record_put_and_get() {
        let mut record = Record::new();

        assert_eq!(record.put("port", Term::Int(9001)), None);
        assert_eq!(record.size(), 1);
        assert!(record.has_field("port"));
        assert_eq!(record.get("port"), Some(&Term::Int(9001)));

        // Replacing keeps a single field
        assert_eq!(record.put("port", Term::Int(80)), Some(Term::Int(9001)));
        assert_eq!(record.size(), 1);
        assert_eq!(record.get("port"), Some(&Term::Int(80)));
    }

    #[test]
    fn test_record_field_names_are_case_sensitive() {
        let record = Record::new().with("addr", "127.0.0.1");
        assert!(record.has_field("addr"));
        assert!(!record.has_field("ADDR"));
    }

    #[test]
    fn test_record_insertion_order() {
        let record = Record::new()
            .with("sin_family", 2i64)
            .with("sin_port", 9001i64)
            .with("sin_addr", "127.0.0.1");
        assert_eq!(record.field_names(), vec!["sin_family", "sin_port", "sin_addr"]);

        let values: Vec<&Term> = record.iter().map(|(_, v)| v).collect();
        assert_eq!(values[2], &Term::from("127.0.0.1"));
    }

    #[test]
    fn test_record_from_fields_duplicates() {
        let record = Record::from_fields(vec![
            ("port", Term::Int(1)),
            ("port", Term::Int(2)),
        ]);
        assert_eq!(record.size(), 1);
        assert_eq!(record.get("port"), Some(&Term::Int(2)));
    }
}
