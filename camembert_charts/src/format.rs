// Copyright 2026 the Camembert Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Percentage label formatting.

extern crate alloc;

use alloc::format;
use alloc::string::String;

/// How a slice's share of the total is rendered as a percentage label.
///
/// The built-in form covers the common `12.34%` shape; anything richer
/// (locale separators, custom suffixes) plugs in as a function.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PercentFormat {
    /// Fixed decimal places, e.g. `Decimals(2)` renders `0.5` as `50.00%`.
    Decimals(usize),
    /// A caller-supplied formatter over the share in `[0, 1]`.
    Custom(fn(f64) -> String),
}

impl PercentFormat {
    /// Formats a share in `[0, 1]` as a percentage label.
    pub fn format(&self, share: f64) -> String {
        match self {
            Self::Decimals(places) => format!("{:.*}%", *places, share * 100.0),
            Self::Custom(f) => f(share),
        }
    }
}

impl Default for PercentFormat {
    fn default() -> Self {
        Self::Decimals(2)
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn default_format_uses_two_decimals() {
        assert_eq!(PercentFormat::default().format(0.5), "50.00%");
        assert_eq!(PercentFormat::default().format(1.0), "100.00%");
        assert_eq!(PercentFormat::Decimals(0).format(0.25), "25%");
    }

    #[test]
    fn custom_formatter_is_used_verbatim() {
        fn halves(share: f64) -> String {
            std::format!("{:.1} of 2", share * 2.0)
        }
        assert_eq!(PercentFormat::Custom(halves).format(0.5), "1.0 of 2");
    }
}
