// Copyright 2026 the Camembert Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Default color constants.

extern crate alloc;

use alloc::vec::Vec;

use peniko::Color;
use peniko::color::palette::css;

/// The default categorical palette, taken from named CSS colors.
///
/// Scales cycle through it when a domain has more than eight keys.
pub const CATEGORICAL: [Color; 8] = [
    css::CORNFLOWER_BLUE,
    css::ORANGE,
    css::MEDIUM_SEA_GREEN,
    css::CRIMSON,
    css::GOLDENROD,
    css::SLATE_BLUE,
    css::DARK_CYAN,
    css::HOT_PINK,
];

/// The fixed color for the reserved `"Empty"` sentinel.
pub const EMPTY_BOX: Color = css::LIGHT_GRAY;

/// Returns the default categorical palette as an owned range.
pub fn default_palette() -> Vec<Color> {
    CATEGORICAL.to_vec()
}
