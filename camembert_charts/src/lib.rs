// Copyright 2026 the Camembert Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pie-chart building blocks for loosely-typed records.
//!
//! This crate composes a full pie render pass from small, testable stages:
//! - **Aggregation** (`camembert_transforms`) bounds the slice count,
//!   collapsing the long tail into an "Other" bucket.
//! - **Color resolution** maps records to deterministic colors via a
//!   categorical scale or an explicit mapping.
//! - **Sector geometry** partitions the circle and places label anchors,
//!   flipping alignment for labels outside the ring.
//! - **Legend layout** sizes the legend from the longest label and carves
//!   its footprint out of the chart area before geometry runs.
//!
//! The output is a render model (slice list + legend description) for a
//! generic 2D drawing surface; arc/path serialization and text shaping stay
//! downstream. Everything is recomputed per pass from the full input.

#![no_std]

extern crate alloc;

mod chart;
mod color;
mod config;
#[cfg(not(feature = "std"))]
mod float;
mod format;
mod layout;
mod legend;
mod measure;
pub mod palette;
mod sector;

pub use chart::{ChartRenderer, PieChartSpec, PieModel, PieRender, SliceLabel, SliceModel};
pub use color::{ColorResolver, ScaleOrdinal};
pub use config::{PieConfig, StrokeStyle};
pub use format::PercentFormat;
pub use layout::{Margin, Size};
pub use legend::{Legend, LegendEntry, LegendMetrics, LegendOrient, LegendSpec};
pub use measure::{HeuristicTextMeasurer, TextAnchor, TextMeasurer};
pub use sector::{PieRadii, Slice, label_anchor, label_offset, pie_slices};
