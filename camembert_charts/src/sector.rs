// Copyright 2026 the Camembert Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sector (pie slice) geometry.
//!
//! Angles follow the d3 pie convention: radians, 0 at 12 o'clock, growing
//! clockwise. Slice order is the aggregation output order; value-ranking, if
//! any, already happened upstream, so no re-sorting happens here.

extern crate alloc;

use alloc::vec::Vec;

use core::f64::consts::{PI, TAU};

use kurbo::Vec2;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

use crate::layout::Size;
use crate::measure::TextAnchor;

/// One wedge of the pie, referencing its source record by index.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Slice {
    /// Index of the source record in the aggregated record list.
    pub index: usize,
    /// The metric value driving this slice.
    pub value: f64,
    /// Start angle in radians.
    pub start_angle: f64,
    /// End angle in radians.
    pub end_angle: f64,
    /// Angular padding reserved after this slice.
    pub pad_angle: f64,
}

impl Slice {
    /// The angular width of the slice.
    pub fn sweep(&self) -> f64 {
        self.end_angle - self.start_angle
    }

    /// The angular midpoint, used for label placement and anchoring.
    pub fn midpoint_angle(&self) -> f64 {
        0.5 * (self.start_angle + self.end_angle)
    }
}

/// Partitions the full circle proportionally to `values`, in order.
///
/// Zero (and negative) values produce zero-width slices that are still
/// present in the output; exclusion is the aggregation layer's business. A
/// zero total degenerates to all-zero-width slices. The configured pad angle
/// is carved out of the circle before proportioning, so slice sweeps sum to
/// `TAU - n * pad_angle` for positive totals.
pub fn pie_slices(values: &[f64], pad_angle: f64) -> Vec<Slice> {
    let pad = pad_angle.max(0.0);
    let usable = (TAU - pad * values.len() as f64).max(0.0);
    let total: f64 = values.iter().filter(|v| v.is_finite() && **v > 0.0).sum();
    let per_unit = if total > 0.0 { usable / total } else { 0.0 };

    let mut angle = 0.0;
    values
        .iter()
        .enumerate()
        .map(|(index, &value)| {
            let sweep = if value.is_finite() && value > 0.0 {
                value * per_unit
            } else {
                0.0
            };
            let slice = Slice {
                index,
                value,
                start_angle: angle,
                end_angle: angle + sweep,
                pad_angle: pad,
            };
            angle += sweep + pad;
            slice
        })
        .collect()
}

/// Inner/outer/label radii derived from the available chart area.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PieRadii {
    /// Half the smaller area dimension.
    pub max: f64,
    /// Inner radius (0 for a full pie, positive for a donut).
    pub inner: f64,
    /// Outer radius of the ring.
    pub outer: f64,
    /// Radius at which label anchors are placed; may exceed `outer` to place
    /// labels outside the pie.
    pub label: f64,
}

impl PieRadii {
    /// Computes radii for an area from configuration fractions.
    pub fn for_area(area: Size, inner_frac: f64, outer_frac: f64, label_frac: f64) -> Self {
        let max = (area.width.min(area.height) / 2.0).max(0.0);
        Self {
            max,
            inner: inner_frac.max(0.0) * max,
            outer: outer_frac.max(0.0) * max,
            label: label_frac.max(0.0) * max,
        }
    }
}

/// The label anchor position as an offset from the chart center.
///
/// This is the arc centroid with inner radius = outer radius = the label
/// radius: the slice's midpoint angle projected onto that circle.
pub fn label_offset(slice: &Slice, radius: f64) -> Vec2 {
    let mid = slice.midpoint_angle();
    Vec2::new(mid.sin() * radius, -mid.cos() * radius)
}

/// Text alignment for a slice label.
///
/// Labels drawn outside the ring (`label_frac > outer_frac`) anchor away
/// from the pie: `Start` on the right half of the circle (midpoint below π),
/// `End` on the left half. Labels inside or on the ring center on the anchor.
pub fn label_anchor(slice: &Slice, label_frac: f64, outer_frac: f64) -> TextAnchor {
    if label_frac > outer_frac {
        if slice.midpoint_angle() < PI {
            TextAnchor::Start
        } else {
            TextAnchor::End
        }
    } else {
        TextAnchor::Middle
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec::Vec;

    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn sweeps_are_proportional_and_sum_to_a_full_turn() {
        let slices = pie_slices(&[10.0, 5.0, 1.0], 0.0);
        assert_eq!(slices.len(), 3);

        let sum: f64 = slices.iter().map(Slice::sweep).sum();
        assert!((sum - TAU).abs() < EPS, "sweep sum {sum} != TAU");

        assert!((slices[0].sweep() - 2.0 * slices[1].sweep()).abs() < EPS);
        assert!((slices[1].sweep() - 5.0 * slices[2].sweep()).abs() < EPS);

        // Contiguous, in input order.
        assert_eq!(slices[0].start_angle, 0.0);
        assert!((slices[0].end_angle - slices[1].start_angle).abs() < EPS);
        assert!((slices[1].end_angle - slices[2].start_angle).abs() < EPS);
    }

    #[test]
    fn zero_values_keep_their_slot_with_zero_width() {
        let slices = pie_slices(&[2.0, 0.0, 2.0], 0.0);
        assert_eq!(slices[1].sweep(), 0.0);
        assert!((slices[0].sweep() - PI).abs() < EPS);
        assert!((slices[2].sweep() - PI).abs() < EPS);
    }

    #[test]
    fn zero_total_degenerates_to_zero_width_slices() {
        let slices = pie_slices(&[0.0, 0.0], 0.0);
        assert!(slices.iter().all(|s| s.sweep() == 0.0));
    }

    #[test]
    fn pad_angle_is_excluded_from_the_proportioned_turn() {
        let pad = 0.01;
        let slices = pie_slices(&[1.0, 1.0, 1.0, 1.0], pad);
        let sum: f64 = slices.iter().map(Slice::sweep).sum();
        assert!((sum - (TAU - 4.0 * pad)).abs() < EPS);
    }

    #[test]
    fn layout_is_idempotent() {
        let values = [3.0, 1.0, 2.0];
        let a: Vec<(f64, f64)> = pie_slices(&values, 0.0)
            .iter()
            .map(|s| (s.start_angle, s.end_angle))
            .collect();
        let b: Vec<(f64, f64)> = pie_slices(&values, 0.0)
            .iter()
            .map(|s| (s.start_angle, s.end_angle))
            .collect();
        assert_eq!(a, b);
    }

    #[test]
    fn radii_scale_with_the_smaller_dimension() {
        let radii = PieRadii::for_area(Size::new(200.0, 100.0), 0.5, 0.8, 1.2);
        assert_eq!(radii.max, 50.0);
        assert_eq!(radii.inner, 25.0);
        assert_eq!(radii.outer, 40.0);
        assert_eq!(radii.label, 60.0);
    }

    #[test]
    fn outside_labels_flip_anchors_across_the_vertical_axis() {
        // A slice spanning 0..90° has its midpoint at π/4, on the right half.
        let slices = pie_slices(&[1.0, 3.0], 0.0);
        assert_eq!(label_anchor(&slices[0], 1.2, 0.9), TextAnchor::Start);
        // The remaining slice's midpoint sits past π, on the left half.
        assert_eq!(label_anchor(&slices[1], 1.2, 0.9), TextAnchor::End);
        // Labels on or inside the ring stay centered.
        assert_eq!(label_anchor(&slices[0], 0.6, 0.9), TextAnchor::Middle);
        assert_eq!(label_anchor(&slices[1], 0.9, 0.9), TextAnchor::Middle);
    }

    #[test]
    fn label_offsets_follow_the_clock_face() {
        let slices = pie_slices(&[1.0, 1.0], 0.0);
        // First midpoint at π/2: 3 o'clock.
        let right = label_offset(&slices[0], 10.0);
        assert!((right.x - 10.0).abs() < EPS);
        assert!(right.y.abs() < EPS);
        // Second midpoint at 3π/2: 9 o'clock.
        let left = label_offset(&slices[1], 10.0);
        assert!((left.x + 10.0).abs() < EPS);
        assert!(left.y.abs() < EPS);
    }
}
