// Copyright 2026 the Camembert Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Loosely-typed records.

extern crate alloc;

use alloc::borrow::Cow;
use alloc::string::{String, ToString};
use alloc::vec::Vec;

use hashbrown::HashMap;

/// A single field value.
///
/// Records carry strings and numbers only. The string `"Empty"` is a reserved
/// sentinel used by data producers to mark a present-but-blank dimension; the
/// color layer gives it a fixed color regardless of any scale or mapping.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    /// A string value.
    Str(String),
    /// A numeric value.
    Num(f64),
}

impl Value {
    /// The reserved sentinel marking a present-but-blank value.
    pub const EMPTY: &'static str = "Empty";

    /// Returns the value as a finite number, if it is one.
    ///
    /// Non-finite numbers are treated as absent, matching the filtering rules
    /// of the aggregation layer.
    pub fn num(&self) -> Option<f64> {
        match self {
            Self::Num(v) if v.is_finite() => Some(*v),
            _ => None,
        }
    }

    /// Renders the value as a scale/legend key.
    ///
    /// Numbers use their shortest display form (`10.0` keys as `"10"`), so a
    /// numeric dimension keys identically across records.
    pub fn key(&self) -> Cow<'_, str> {
        match self {
            Self::Str(s) => Cow::Borrowed(s),
            Self::Num(v) => Cow::Owned(v.to_string()),
        }
    }

    /// Whether this value is the reserved [`Value::EMPTY`] sentinel.
    pub fn is_empty_sentinel(&self) -> bool {
        matches!(self, Self::Str(s) if s == Self::EMPTY)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Str(String::from(value))
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Num(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Self::Num(f64::from(value))
    }
}

/// An opaque field-name → value mapping with no fixed schema.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Record {
    fields: HashMap<String, Value>,
}

impl Record {
    /// Creates an empty record.
    pub fn new() -> Self {
        Self {
            fields: HashMap::new(),
        }
    }

    /// Builder-style field insertion.
    pub fn with(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(field.into(), value.into());
        self
    }

    /// Inserts or replaces a field.
    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<Value>) {
        self.fields.insert(field.into(), value.into());
    }

    /// Returns a field value, if present.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    /// Returns a field as a finite number, if present and numeric.
    pub fn num(&self, field: &str) -> Option<f64> {
        self.get(field).and_then(Value::num)
    }

    /// Whether the record carries the given field at all.
    pub fn contains(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    /// Number of fields on this record.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the record has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// An owned record list with a version used as record-set identity.
///
/// The version increases on every mutation, so caches keyed by
/// `(version, field)` are invalidated whenever the backing data changes
/// (see [`crate::DistinctCache`]).
#[derive(Clone, Debug, Default)]
pub struct RecordSet {
    version: u64,
    records: Vec<Record>,
}

impl RecordSet {
    /// Creates an empty record set.
    pub fn new() -> Self {
        Self {
            version: 0,
            records: Vec::new(),
        }
    }

    /// Creates a record set from an owned record list.
    pub fn from_records(records: Vec<Record>) -> Self {
        Self {
            version: 1,
            records,
        }
    }

    /// The records, in insertion order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// The current record-set identity.
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Replaces the backing records, bumping the version.
    pub fn replace(&mut self, records: Vec<Record>) {
        self.records = records;
        self.version += 1;
    }

    /// Appends a record, bumping the version.
    pub fn push(&mut self, record: Record) {
        self.records.push(record);
        self.version += 1;
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the set holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn numeric_values_key_in_shortest_form() {
        assert_eq!(Value::Num(10.0).key(), "10");
        assert_eq!(Value::Num(1.5).key(), "1.5");
        assert_eq!(Value::Str(String::from("A")).key(), "A");
    }

    #[test]
    fn non_finite_numbers_read_as_absent() {
        let r = Record::new().with("v", f64::NAN);
        assert!(r.contains("v"));
        assert_eq!(r.num("v"), None);
    }

    #[test]
    fn empty_sentinel_is_recognized() {
        assert!(Value::from("Empty").is_empty_sentinel());
        assert!(!Value::from("empty").is_empty_sentinel());
        assert!(!Value::Num(0.0).is_empty_sentinel());
    }

    #[test]
    fn mutation_bumps_the_version() {
        let mut set = RecordSet::from_records(alloc::vec![Record::new().with("v", 1.0)]);
        let v0 = set.version();
        set.push(Record::new().with("v", 2.0));
        assert!(set.version() > v0);
        let v1 = set.version();
        set.replace(Vec::new());
        assert!(set.version() > v1);
    }
}
