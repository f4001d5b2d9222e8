// Copyright 2026 the Camembert Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Filtering and long-tail grouping.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use camembert_core::Record;

/// Long-tail grouping options: everything beyond the top `limit - 1` records
/// is summed into one synthetic record labeled `label`.
#[derive(Clone, Debug, PartialEq)]
pub struct OtherBucket {
    /// Dimension value given to the synthetic record.
    pub label: String,
    /// Upper bound on the number of output records, bucket included.
    pub limit: usize,
}

impl OtherBucket {
    /// Creates grouping options.
    pub fn new(label: impl Into<String>, limit: usize) -> Self {
        Self {
            label: label.into(),
            limit,
        }
    }

    /// Whether these options actually enable grouping.
    ///
    /// A zero limit or an empty label disables grouping rather than erroring;
    /// the caller renders all records unchanged.
    pub fn is_enabled(&self) -> bool {
        self.limit > 0 && !self.label.is_empty()
    }
}

/// An aggregation pass over raw records: filter, then group-and-limit.
#[derive(Clone, Debug, PartialEq)]
pub struct AggregateSpec {
    /// Field providing the slice metric.
    pub metric: String,
    /// Field providing the slice dimension (label), written on the synthetic
    /// "Other" record.
    pub dimension: String,
    /// Whether zero-valued records are dropped alongside missing ones.
    pub exclude_zero: bool,
    /// Optional long-tail grouping.
    pub other: Option<OtherBucket>,
}

impl AggregateSpec {
    /// Creates an aggregation spec with zero exclusion on and grouping off.
    pub fn new(metric: impl Into<String>, dimension: impl Into<String>) -> Self {
        Self {
            metric: metric.into(),
            dimension: dimension.into(),
            exclude_zero: true,
            other: None,
        }
    }

    /// Sets whether zero-valued records are dropped.
    pub fn with_exclude_zero(mut self, exclude_zero: bool) -> Self {
        self.exclude_zero = exclude_zero;
        self
    }

    /// Enables long-tail grouping.
    pub fn with_other(mut self, other: OtherBucket) -> Self {
        self.other = Some(other);
        self
    }

    /// Disables long-tail grouping.
    pub fn without_other(mut self) -> Self {
        self.other = None;
        self
    }

    /// Runs the pass: filter out unusable records, then group the tail.
    ///
    /// Filtering drops records whose metric is missing or non-numeric, and —
    /// when `exclude_zero` is set — records whose metric is zero. Grouping
    /// sorts the survivors descending by metric, keeps the top `limit - 1`
    /// verbatim, and appends one synthetic record summing the rest. When the
    /// limit covers every record the survivors are returned in their given
    /// order, un-sorted.
    ///
    /// An empty result means "nothing to render", not an error.
    pub fn apply(&self, records: &[Record]) -> Vec<Record> {
        let mut kept: Vec<Record> = records
            .iter()
            .filter(|record| match record.num(&self.metric) {
                Some(value) => value != 0.0 || !self.exclude_zero,
                None => false,
            })
            .cloned()
            .collect();

        let Some(other) = self.other.as_ref().filter(|o| o.is_enabled()) else {
            return kept;
        };
        if other.limit >= kept.len() {
            return kept;
        }

        // Stable sort keeps input order among equal metrics.
        kept.sort_by(|a, b| {
            let va = a.num(&self.metric).unwrap_or(0.0);
            let vb = b.num(&self.metric).unwrap_or(0.0);
            vb.total_cmp(&va)
        });

        let tail = kept.split_off(other.limit - 1);
        if !tail.is_empty() {
            let sum: f64 = tail.iter().filter_map(|r| r.num(&self.metric)).sum();
            kept.push(
                Record::new()
                    .with(self.dimension.as_str(), other.label.as_str())
                    .with(self.metric.as_str(), sum),
            );
        }
        kept
    }
}
