// Copyright 2026 the Camembert Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pie chart configuration.
//!
//! A flat set of recognized options with defaults, fixed at construction.
//! Field names used for slicing/labeling/coloring are data-dependent and
//! arrive here rather than through a record schema.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use hashbrown::HashMap;
use peniko::Color;
use peniko::color::palette::css;

use camembert_core::KeyPolicy;
use camembert_transforms::{AggregateSpec, OtherBucket};

use crate::format::PercentFormat;
use crate::layout::Margin;
use crate::legend::LegendSpec;
use crate::palette;

/// An optional paint + width pair for slice outlines.
///
/// The stroke color doubles as the color fallback when no scale or mapping
/// can resolve a record's key.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StrokeStyle {
    /// Outline paint; `None` leaves slices unstroked.
    pub color: Option<Color>,
    /// Outline width in chart coordinates.
    pub width: f64,
}

impl StrokeStyle {
    /// Convenience for a solid stroke.
    pub fn solid(color: Color, width: f64) -> Self {
        Self {
            color: Some(color),
            width,
        }
    }
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self {
            color: None,
            width: 1.0,
        }
    }
}

/// All recognized pie options. Construct with [`PieConfig::new`], refine with
/// the `with_*` builders, and treat as immutable afterwards.
#[derive(Clone, Debug, PartialEq)]
pub struct PieConfig {
    /// Field used as the metric value.
    pub slice_column: String,
    /// Field used as the slice label and default key.
    pub label_column: String,
    /// Alternate key field, below `legend_column` in priority.
    pub color_column: Option<String>,
    /// Highest-priority key field.
    pub legend_column: Option<String>,
    /// Long-tail grouping options.
    pub other: Option<OtherBucket>,
    /// Whether zero-valued records keep their (zero-width) slice.
    pub show_zero: bool,
    /// Inner radius as a fraction of the max radius.
    pub pie_inner_radius: f64,
    /// Outer radius as a fraction of the max radius.
    pub pie_outer_radius: f64,
    /// Label radius as a fraction of the max radius; above
    /// `pie_outer_radius` places labels outside the ring.
    pub pie_label_radius: f64,
    /// Angular padding between adjacent slices, in radians.
    pub pad_angle: f64,
    /// Whether labels show each slice's share of the total.
    pub percentages: bool,
    /// Formatter for percentage labels.
    pub percent_format: PercentFormat,
    /// Labels render only when the slice count stays within this bound;
    /// otherwise no slice is labeled.
    pub label_count: usize,
    /// Legend options.
    pub legend: LegendSpec,
    /// Explicit key → color mapping; `None` builds a categorical scale from
    /// the data instead.
    pub mapped_colors: Option<HashMap<String, Color>>,
    /// Color range for the categorical scale.
    pub palette: Vec<Color>,
    /// Fixed color for the reserved `"Empty"` key.
    pub empty_box_color: Color,
    /// Slice outline style; its color is also the key-resolution fallback.
    pub stroke: StrokeStyle,
    /// Label text color.
    pub font_color: Color,
    /// Outer margins.
    pub margin: Margin,
}

impl PieConfig {
    /// Creates a configuration for the given metric and label fields, with
    /// defaults everywhere else.
    pub fn new(slice_column: impl Into<String>, label_column: impl Into<String>) -> Self {
        Self {
            slice_column: slice_column.into(),
            label_column: label_column.into(),
            color_column: None,
            legend_column: None,
            other: None,
            show_zero: false,
            pie_inner_radius: 0.0,
            pie_outer_radius: 0.8,
            pie_label_radius: 0.9,
            pad_angle: 0.0,
            percentages: false,
            percent_format: PercentFormat::default(),
            label_count: usize::MAX,
            legend: LegendSpec::default(),
            mapped_colors: None,
            palette: palette::default_palette(),
            empty_box_color: palette::EMPTY_BOX,
            stroke: StrokeStyle::default(),
            font_color: css::DIM_GRAY,
            margin: Margin::default(),
        }
    }

    /// Sets the alternate color key field.
    pub fn with_color_column(mut self, field: impl Into<String>) -> Self {
        self.color_column = Some(field.into());
        self
    }

    /// Sets the highest-priority key field.
    pub fn with_legend_column(mut self, field: impl Into<String>) -> Self {
        self.legend_column = Some(field.into());
        self
    }

    /// Enables long-tail grouping.
    pub fn with_other(mut self, other: OtherBucket) -> Self {
        self.other = Some(other);
        self
    }

    /// Keeps zero-valued records as zero-width slices.
    pub fn with_show_zero(mut self, show_zero: bool) -> Self {
        self.show_zero = show_zero;
        self
    }

    /// Sets the inner/outer/label radius fractions.
    pub fn with_radii(mut self, inner: f64, outer: f64, label: f64) -> Self {
        self.pie_inner_radius = inner;
        self.pie_outer_radius = outer;
        self.pie_label_radius = label;
        self
    }

    /// Switches labels to percentage-of-total form.
    pub fn with_percentages(mut self, percentages: bool) -> Self {
        self.percentages = percentages;
        self
    }

    /// Sets the percentage formatter.
    pub fn with_percent_format(mut self, format: PercentFormat) -> Self {
        self.percent_format = format;
        self
    }

    /// Sets the all-or-nothing label cutoff.
    pub fn with_label_count(mut self, label_count: usize) -> Self {
        self.label_count = label_count;
        self
    }

    /// Sets the legend options.
    pub fn with_legend(mut self, legend: LegendSpec) -> Self {
        self.legend = legend;
        self
    }

    /// Uses an explicit key → color mapping instead of a data-driven scale.
    pub fn with_mapped_colors(mut self, colors: HashMap<String, Color>) -> Self {
        self.mapped_colors = Some(colors);
        self
    }

    /// Sets the categorical color range.
    pub fn with_palette(mut self, palette: Vec<Color>) -> Self {
        self.palette = palette;
        self
    }

    /// Sets the slice outline style.
    pub fn with_stroke(mut self, stroke: StrokeStyle) -> Self {
        self.stroke = stroke;
        self
    }

    /// Sets the label text color.
    pub fn with_font_color(mut self, font_color: Color) -> Self {
        self.font_color = font_color;
        self
    }

    /// Sets the color for the reserved `"Empty"` key.
    pub fn with_empty_box_color(mut self, color: Color) -> Self {
        self.empty_box_color = color;
        self
    }

    /// Sets the outer margins.
    pub fn with_margin(mut self, margin: Margin) -> Self {
        self.margin = margin;
        self
    }

    /// Sets the inter-slice pad angle, in radians.
    pub fn with_pad_angle(mut self, pad_angle: f64) -> Self {
        self.pad_angle = pad_angle;
        self
    }

    /// The key-extraction policy implied by the configured columns.
    pub fn key_policy(&self) -> KeyPolicy {
        KeyPolicy::for_columns(
            self.legend_column.as_deref(),
            self.color_column.as_deref(),
            &self.label_column,
        )
    }

    /// The color used when no key or no scale/mapping entry resolves.
    pub fn fallback_color(&self) -> Color {
        self.stroke
            .color
            .or_else(|| self.palette.first().copied())
            .unwrap_or(palette::CATEGORICAL[0])
    }

    /// The aggregation pass implied by this configuration.
    pub fn aggregate_spec(&self) -> AggregateSpec {
        let mut spec = AggregateSpec::new(self.slice_column.as_str(), self.label_column.as_str())
            .with_exclude_zero(!self.show_zero);
        if let Some(other) = &self.other {
            spec = spec.with_other(other.clone());
        }
        spec
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn fallback_prefers_stroke_then_palette() {
        let config = PieConfig::new("v", "k");
        assert_eq!(config.fallback_color(), palette::CATEGORICAL[0]);

        let config = config.with_stroke(StrokeStyle::solid(css::REBECCA_PURPLE, 1.0));
        assert_eq!(config.fallback_color(), css::REBECCA_PURPLE);
    }

    #[test]
    fn key_policy_orders_legend_color_label() {
        let config = PieConfig::new("v", "lb")
            .with_color_column("co")
            .with_legend_column("lg");
        let key_policy = config.key_policy();
        let fields: alloc::vec::Vec<&str> = key_policy.fields().collect();
        assert_eq!(fields, ["lg", "co", "lb", "key"]);
    }

    #[test]
    fn aggregate_spec_reflects_zero_handling() {
        let config = PieConfig::new("v", "k").with_show_zero(true);
        assert!(!config.aggregate_spec().exclude_zero);
        assert!(PieConfig::new("v", "k").aggregate_spec().exclude_zero);
    }
}
