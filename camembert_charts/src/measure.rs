// Copyright 2026 the Camembert Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Text measurement hooks and anchoring.
//!
//! Legend sizing is driven by renderer text metrics, but shaping and layout
//! live downstream of this crate, so guides accept a measurer callback for
//! rough bounds estimation.

/// A minimal text measurement interface used by legend sizing.
///
/// Callers can plug in a real text measurement backend (e.g. based on
/// shaping), or use [`HeuristicTextMeasurer`].
pub trait TextMeasurer {
    /// Returns `(width, height)` in the same coordinate system as the chart.
    fn measure(&self, text: &str, font_size: f64) -> (f64, f64);
}

/// A tiny heuristic text measurer: a fixed average glyph width per character.
///
/// The default glyph width of ~0.6em is the usual stand-in for proportional
/// UI fonts; widen it for monospace-heavy labels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeuristicTextMeasurer {
    /// Average glyph width as a fraction of the font size.
    pub glyph_em: f64,
}

impl HeuristicTextMeasurer {
    /// Creates a measurer with the given average glyph width.
    pub fn new(glyph_em: f64) -> Self {
        Self { glyph_em }
    }
}

impl Default for HeuristicTextMeasurer {
    fn default() -> Self {
        Self { glyph_em: 0.6 }
    }
}

impl TextMeasurer for HeuristicTextMeasurer {
    fn measure(&self, text: &str, font_size: f64) -> (f64, f64) {
        let width = self.glyph_em * font_size * text.chars().count() as f64;
        (width, font_size)
    }
}

/// Horizontal text anchoring relative to a label's position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextAnchor {
    /// The position is the left edge of the text.
    Start,
    /// The position is the center of the text.
    Middle,
    /// The position is the right edge of the text.
    End,
}
