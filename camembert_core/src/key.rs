// Copyright 2026 the Camembert Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Key extraction policy.
//!
//! Color scales and legends need one key per record, but the field carrying
//! that key depends on configuration: a dedicated legend field, a color
//! field, the label field, or a generic `"key"` field, in that priority
//! order. This module models the fallback chain as an explicit ordered field
//! list rather than ad hoc branching, so the policy itself is testable.

extern crate alloc;

use alloc::borrow::Cow;
use alloc::string::String;

use smallvec::SmallVec;

use crate::record::Record;

/// An ordered list of fields tried in priority order; the first field present
/// on a record provides its key.
#[derive(Clone, Debug, PartialEq)]
pub struct KeyPolicy {
    fields: SmallVec<[String; 4]>,
}

impl KeyPolicy {
    /// The generic trailing fallback field.
    pub const FALLBACK_FIELD: &'static str = "key";

    /// Builds the standard chart policy: `legend → color → label → "key"`.
    ///
    /// `legend` and `color` are optional configuration fields; `label` is
    /// always configured. The generic `"key"` field is appended last.
    pub fn for_columns(legend: Option<&str>, color: Option<&str>, label: &str) -> Self {
        let mut fields = SmallVec::new();
        if let Some(f) = legend {
            fields.push(String::from(f));
        }
        if let Some(f) = color {
            fields.push(String::from(f));
        }
        fields.push(String::from(label));
        fields.push(String::from(Self::FALLBACK_FIELD));
        Self { fields }
    }

    /// Builds a policy from an explicit field list, highest priority first.
    pub fn from_fields(fields: impl IntoIterator<Item = String>) -> Self {
        Self {
            fields: fields.into_iter().collect(),
        }
    }

    /// The fields in priority order.
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(String::as_str)
    }

    /// Extracts a record's key: the value of the first present field.
    ///
    /// Presence is what matters, not type; a numeric key renders through
    /// [`crate::Value::key`]. Returns `None` when no policy field is present,
    /// which downstream color resolution treats as "no determinable key".
    pub fn extract<'a>(&self, record: &'a Record) -> Option<Cow<'a, str>> {
        self.fields
            .iter()
            .find_map(|field| record.get(field))
            .map(|value| value.key())
    }
}
