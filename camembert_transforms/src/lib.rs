// Copyright 2026 the Camembert Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Record aggregation for camembert charts.
//!
//! This crate provides the data-side half of a pie render pass: given raw
//! records, it filters out rows without a usable metric and optionally
//! collapses the long tail of the ranked metric into one synthetic "Other"
//! record. The executor is full-recompute and order-preserving; grouping
//! never increases the number of visible slices.

#![no_std]

extern crate alloc;

mod aggregate;

pub use aggregate::{AggregateSpec, OtherBucket};
