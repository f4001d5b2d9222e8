// Copyright 2026 the Camembert Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The composed pie render pipeline.
//!
//! One render pass is: aggregate → resolve color mode → size the legend →
//! settle the remaining chart area → lay out sectors → emit the final model.
//! Legend sizing strictly precedes geometry because a shared-area legend
//! shrinks the space the pie may occupy. The pass is pure: same records,
//! configuration, and dimensions produce an identical model.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::Point;
use peniko::Color;

use camembert_core::Record;

use crate::color::ColorResolver;
use crate::config::{PieConfig, StrokeStyle};
use crate::layout::Size;
use crate::legend::{Legend, LegendEntry};
use crate::measure::{TextAnchor, TextMeasurer};
use crate::sector::{PieRadii, label_anchor, label_offset, pie_slices};

/// The capabilities a chart variant contributes to a render pass.
///
/// Chart variants are plain structs composed by delegation: the pipeline
/// calls these hooks in a fixed order (dimensions, then colors, then legend)
/// and owns everything between them. There is no shared base behavior to
/// inherit.
pub trait ChartRenderer {
    /// The chart area remaining inside `view` before guides take their share.
    fn chart_area(&self, view: Size) -> Size;

    /// Builds the per-record color resolver for a processed record set.
    fn color_resolver(&self, records: &[Record]) -> ColorResolver;

    /// Sizes the legend for a processed record set within `area`, or `None`
    /// when no legend applies.
    fn legend(
        &self,
        records: &[Record],
        colors: &ColorResolver,
        measurer: &dyn TextMeasurer,
        area: Size,
    ) -> Option<Legend>;
}

/// A pie chart: configuration plus the render entry point.
#[derive(Clone, Debug)]
pub struct PieChartSpec {
    /// The chart configuration.
    pub config: PieConfig,
}

impl ChartRenderer for PieChartSpec {
    fn chart_area(&self, view: Size) -> Size {
        self.config.margin.inset(view)
    }

    fn color_resolver(&self, records: &[Record]) -> ColorResolver {
        let cfg = &self.config;
        match &cfg.mapped_colors {
            Some(colors) => ColorResolver::mapped(
                colors.clone(),
                cfg.key_policy(),
                cfg.empty_box_color,
                cfg.fallback_color(),
            ),
            None => ColorResolver::categorical(
                records,
                cfg.key_policy(),
                cfg.palette.clone(),
                cfg.empty_box_color,
                cfg.fallback_color(),
            ),
        }
    }

    fn legend(
        &self,
        records: &[Record],
        colors: &ColorResolver,
        measurer: &dyn TextMeasurer,
        area: Size,
    ) -> Option<Legend> {
        let cfg = &self.config;
        if !cfg.legend.applies(records.len()) {
            return None;
        }
        let entries: Vec<LegendEntry> = records
            .iter()
            .map(|record| LegendEntry {
                label: label_text(record, &cfg.label_column),
                color: colors.resolve(record),
            })
            .collect();
        let metrics = cfg.legend.measure(&entries, measurer, area);
        Some(Legend {
            metrics,
            entries,
            consumes_chart_space: !cfg.legend.separate,
        })
    }
}

/// The outcome of a render pass.
#[derive(Clone, Debug)]
pub enum PieRender {
    /// No records survived aggregation; there is nothing to visualize.
    NoData,
    /// A renderable chart model.
    Chart(PieModel),
}

impl PieRender {
    /// The chart model, unless the pass produced the no-data state.
    pub fn model(&self) -> Option<&PieModel> {
        match self {
            Self::NoData => None,
            Self::Chart(model) => Some(model),
        }
    }
}

/// A finalized render model for a generic 2D drawing surface.
///
/// Angles and radii describe arcs abstractly; turning them into path
/// descriptors is the surface's business.
#[derive(Clone, Debug)]
pub struct PieModel {
    /// Chart center in the supplied coordinate space.
    pub center: Point,
    /// Derived radii.
    pub radii: PieRadii,
    /// Slice outline style.
    pub stroke: StrokeStyle,
    /// Label text color.
    pub font_color: Color,
    /// The aggregated records backing the slices.
    pub records: Vec<Record>,
    /// Slices in draw order.
    pub slices: Vec<SliceModel>,
    /// Legend sizing and entries, when a legend applies.
    pub legend: Option<Legend>,
}

impl PieModel {
    /// The record behind a slice, for click notification.
    ///
    /// Returns `None` for out-of-range indices and for non-interactive
    /// slices (the synthetic "Other" bucket).
    pub fn click_payload(&self, slice: usize) -> Option<&Record> {
        let slice = self.slices.get(slice)?;
        if !slice.interactive {
            return None;
        }
        self.records.get(slice.index)
    }
}

/// One renderable slice.
#[derive(Clone, Debug)]
pub struct SliceModel {
    /// Index of the source record in [`PieModel::records`].
    pub index: usize,
    /// The metric value.
    pub value: f64,
    /// Start angle in radians (0 at 12 o'clock, clockwise).
    pub start_angle: f64,
    /// End angle in radians.
    pub end_angle: f64,
    /// Angular padding after this slice.
    pub pad_angle: f64,
    /// Fill color.
    pub fill: Color,
    /// Label, when labels are enabled for this pass.
    pub label: Option<SliceLabel>,
    /// Whether clicks on this slice notify the host.
    pub interactive: bool,
}

/// A positioned slice label.
#[derive(Clone, Debug, PartialEq)]
pub struct SliceLabel {
    /// Label text: the raw label field, or a formatted share.
    pub text: String,
    /// Anchor position in the supplied coordinate space.
    pub position: Point,
    /// Text alignment relative to the position.
    pub anchor: TextAnchor,
}

impl PieChartSpec {
    /// Creates a pie chart from its configuration.
    pub fn new(config: PieConfig) -> Self {
        Self { config }
    }

    /// Runs one render pass over `records` within `view`.
    pub fn render(
        &self,
        records: &[Record],
        view: Size,
        measurer: &dyn TextMeasurer,
    ) -> PieRender {
        let cfg = &self.config;

        let data = cfg.aggregate_spec().apply(records);
        if data.is_empty() {
            return PieRender::NoData;
        }

        let resolver = self.color_resolver(&data);

        // Legend before geometry: a shared-area legend shrinks the pie.
        let mut area = self.chart_area(view);
        let legend = self.legend(&data, &resolver, measurer, area);
        if let Some(legend) = &legend
            && legend.consumes_chart_space
        {
            area = cfg.legend.carve(&legend.metrics, legend.entries.len(), area);
        }

        let radii = PieRadii::for_area(
            area,
            cfg.pie_inner_radius,
            cfg.pie_outer_radius,
            cfg.pie_label_radius,
        );
        let center = Point::new(view.width / 2.0, view.height / 2.0);

        let values: Vec<f64> = data
            .iter()
            .map(|record| record.num(&cfg.slice_column).unwrap_or(0.0))
            .collect();
        let total: f64 = values.iter().sum();
        let slices = pie_slices(&values, cfg.pad_angle);

        // All-or-nothing: either every slice is labeled or none is.
        let show_labels = cfg.label_count >= slices.len();

        let slices = slices
            .iter()
            .map(|slice| {
                let record = &data[slice.index];
                let label = show_labels.then(|| {
                    let text = if cfg.percentages {
                        let share = if total > 0.0 { slice.value / total } else { 0.0 };
                        cfg.percent_format.format(share)
                    } else {
                        label_text(record, &cfg.label_column)
                    };
                    SliceLabel {
                        text,
                        position: center + label_offset(slice, radii.label),
                        anchor: label_anchor(
                            slice,
                            cfg.pie_label_radius,
                            cfg.pie_outer_radius,
                        ),
                    }
                });
                SliceModel {
                    index: slice.index,
                    value: slice.value,
                    start_angle: slice.start_angle,
                    end_angle: slice.end_angle,
                    pad_angle: slice.pad_angle,
                    fill: resolver.resolve(record),
                    label,
                    interactive: self.is_interactive(record),
                }
            })
            .collect();

        PieRender::Chart(PieModel {
            center,
            radii,
            stroke: cfg.stroke,
            font_color: cfg.font_color,
            records: data,
            slices,
            legend,
        })
    }

    /// Whether clicking a slice for this record should notify the host.
    ///
    /// With grouping configured, any record labeled like the "Other" bucket
    /// is non-interactive; the synthetic record has no single source row to
    /// report.
    fn is_interactive(&self, record: &Record) -> bool {
        let cfg = &self.config;
        match cfg.other.as_ref().filter(|o| o.is_enabled()) {
            Some(other) => record
                .get(&cfg.label_column)
                .is_none_or(|value| value.key() != other.label.as_str()),
            None => true,
        }
    }
}

fn label_text(record: &Record, field: &str) -> String {
    record
        .get(field)
        .map(|value| value.key().into_owned())
        .unwrap_or_default()
}
