// Copyright 2026 the Camembert Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Record model for the camembert pie-chart engine.
//!
//! Charts consume arbitrary tabular data: each record is an opaque mapping
//! from field name to value, and the fields used for slicing, labeling, and
//! coloring arrive via configuration rather than a schema. This crate holds:
//! - the [`Value`]/[`Record`] model and the versioned [`RecordSet`] container,
//! - [`KeyPolicy`], the ordered field-fallback policy for key extraction, and
//! - [`DistinctCache`], a per-instance memo of distinct values seen per field.
//!
//! Everything downstream (aggregation, color scales, legends) is recomputed
//! from the full record set on every render pass; the only state that outlives
//! a pass is the distinct-value cache, which is invalidated by record-set
//! version.

#![no_std]

extern crate alloc;

mod cache;
mod key;
mod record;

pub use cache::{DistinctCache, distinct_keys};
pub use key::KeyPolicy;
pub use record::{Record, RecordSet, Value};
