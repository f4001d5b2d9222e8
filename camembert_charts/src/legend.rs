// Copyright 2026 the Camembert Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Legend sizing and footprint.
//!
//! The legend is a guide: it does not draw itself here, it reserves space.
//! Sizing depends on the longest label (via a [`TextMeasurer`]) and the
//! orientation; when the legend shares the chart area, its footprint is
//! subtracted from the available space before sector geometry runs.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use peniko::Color;

use crate::layout::Size;
use crate::measure::TextMeasurer;

/// Legend orientation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LegendOrient {
    /// One entry per row, beside the chart.
    Vertical,
    /// Entries flowing in a row, below the chart.
    Horizontal,
}

/// Legend configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LegendSpec {
    /// Whether the legend renders at all.
    pub show: bool,
    /// Orientation of the entry list.
    pub orient: LegendOrient,
    /// Whether the legend is a separate panel placed by the host instead of
    /// being carved out of the chart area.
    pub separate: bool,
    /// Swatch size in legend units.
    pub swatch_size: f64,
    /// Label font size.
    pub font_size: f64,
    /// Pixels of row height per swatch unit.
    pub row_scale: f64,
}

impl LegendSpec {
    /// Sets the orientation.
    pub fn with_orient(mut self, orient: LegendOrient) -> Self {
        self.orient = orient;
        self
    }

    /// Enables or disables the legend.
    pub fn with_show(mut self, show: bool) -> Self {
        self.show = show;
        self
    }

    /// Renders the legend as a separate panel placed by the host.
    pub fn with_separate(mut self, separate: bool) -> Self {
        self.separate = separate;
        self
    }

    /// Sets the swatch size.
    pub fn with_swatch_size(mut self, swatch_size: f64) -> Self {
        self.swatch_size = swatch_size;
        self
    }

    /// Whether a legend applies to a chart with this many slices.
    ///
    /// A one-slice pie carries no information worth a legend.
    pub fn applies(&self, slice_count: usize) -> bool {
        self.show && slice_count > 1
    }

    /// The height of one legend row.
    pub fn row_height(&self) -> f64 {
        self.swatch_size * self.row_scale
    }

    /// Measures the legend footprint for the given entries within `area`.
    pub fn measure(
        &self,
        entries: &[LegendEntry],
        measurer: &dyn TextMeasurer,
        area: Size,
    ) -> LegendMetrics {
        let longest = entries
            .iter()
            .map(|e| measurer.measure(&e.label, self.font_size).0)
            .fold(0.0_f64, f64::max);

        let (width, height) = match self.orient {
            LegendOrient::Vertical => (longest, entries.len() as f64 * self.row_height()),
            LegendOrient::Horizontal => (area.width, self.row_height()),
        };
        LegendMetrics {
            width,
            height,
            orient: self.orient,
            swatch_size: self.swatch_size,
        }
    }

    /// Returns the chart area left after this legend takes its share.
    ///
    /// Separate legends take nothing; vertical legends eat width; horizontal
    /// legends eat one row of height per entry beyond the first.
    pub fn carve(&self, metrics: &LegendMetrics, entry_count: usize, area: Size) -> Size {
        if self.separate {
            return area;
        }
        match self.orient {
            LegendOrient::Vertical => Size {
                width: (area.width - metrics.width).max(0.0),
                height: area.height,
            },
            LegendOrient::Horizontal => Size {
                width: area.width,
                height: (area.height
                    - entry_count.saturating_sub(1) as f64 * self.row_height())
                .max(0.0),
            },
        }
    }
}

impl Default for LegendSpec {
    fn default() -> Self {
        Self {
            show: true,
            orient: LegendOrient::Vertical,
            separate: false,
            swatch_size: 4.0,
            font_size: 10.0,
            row_scale: 3.0,
        }
    }
}

/// Computed legend sizing for one render pass.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LegendMetrics {
    /// Footprint width.
    pub width: f64,
    /// Footprint height.
    pub height: f64,
    /// Orientation the metrics were computed for.
    pub orient: LegendOrient,
    /// Swatch size, carried for the renderer.
    pub swatch_size: f64,
}

/// One legend row: a swatch color and its label.
#[derive(Clone, Debug, PartialEq)]
pub struct LegendEntry {
    /// Label text.
    pub label: String,
    /// Swatch fill.
    pub color: Color,
}

/// The legend portion of a render: metrics plus entries in slice order.
#[derive(Clone, Debug, PartialEq)]
pub struct Legend {
    /// Computed sizing.
    pub metrics: LegendMetrics,
    /// Entries, one per slice, in slice order.
    pub entries: Vec<LegendEntry>,
    /// Whether the footprint was subtracted from the chart area (as opposed
    /// to a separate panel placed by the host).
    pub consumes_chart_space: bool,
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::string::ToString;

    use peniko::color::palette::css;

    use crate::measure::HeuristicTextMeasurer;

    use super::*;

    fn entries(labels: &[&str]) -> Vec<LegendEntry> {
        labels
            .iter()
            .map(|l| LegendEntry {
                label: l.to_string(),
                color: css::BLACK,
            })
            .collect()
    }

    #[test]
    fn vertical_width_tracks_the_longest_label() {
        let spec = LegendSpec::default();
        let measurer = HeuristicTextMeasurer::default();
        let area = Size::new(400.0, 300.0);

        let short = spec.measure(&entries(&["ab", "c"]), &measurer, area);
        let long = spec.measure(&entries(&["ab", "cdefgh"]), &measurer, area);
        assert!(long.width > short.width);
        assert_eq!(long.width, measurer.measure("cdefgh", spec.font_size).0);
        assert_eq!(long.height, 2.0 * spec.row_height());
    }

    #[test]
    fn vertical_carve_eats_width_only() {
        let spec = LegendSpec::default();
        let measurer = HeuristicTextMeasurer::default();
        let area = Size::new(400.0, 300.0);

        let items = entries(&["aaaa", "bb"]);
        let metrics = spec.measure(&items, &measurer, area);
        let carved = spec.carve(&metrics, items.len(), area);
        assert_eq!(carved.width, area.width - metrics.width);
        assert_eq!(carved.height, area.height);
    }

    #[test]
    fn horizontal_carve_eats_height_per_extra_entry() {
        let spec = LegendSpec::default().with_orient(LegendOrient::Horizontal);
        let measurer = HeuristicTextMeasurer::default();
        let area = Size::new(400.0, 300.0);

        let items = entries(&["a", "b", "c"]);
        let metrics = spec.measure(&items, &measurer, area);
        let carved = spec.carve(&metrics, items.len(), area);
        assert_eq!(carved.width, area.width);
        assert_eq!(carved.height, area.height - 2.0 * spec.row_height());
    }

    #[test]
    fn separate_legends_take_no_chart_space() {
        let spec = LegendSpec::default().with_separate(true);
        let measurer = HeuristicTextMeasurer::default();
        let area = Size::new(400.0, 300.0);

        let items = entries(&["aaaa", "bb"]);
        let metrics = spec.measure(&items, &measurer, area);
        assert_eq!(spec.carve(&metrics, items.len(), area), area);
    }

    #[test]
    fn single_slice_or_hidden_legends_do_not_apply() {
        assert!(!LegendSpec::default().applies(1));
        assert!(!LegendSpec::default().with_show(false).applies(3));
        assert!(LegendSpec::default().applies(2));
    }
}
