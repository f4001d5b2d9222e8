// Copyright 2026 the Camembert Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-slice color resolution.
//!
//! Colors come from one of two sources: a categorical scale whose domain is
//! the distinct keys of the processed record set (first-seen order, like
//! d3's `scaleOrdinal`), or an explicit user mapping from key to color. The
//! reserved `"Empty"` key bypasses both and always resolves to the configured
//! empty-box color.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use hashbrown::{HashMap, HashSet};
use peniko::Color;

use camembert_core::{KeyPolicy, Record, Value};

/// A deterministic mapping from a finite set of keys to colors.
///
/// The domain is fixed at construction; keys map to the range by domain
/// position, cycling when the domain outgrows the range. Unseen keys return
/// `None` so the caller can fall back.
#[derive(Clone, Debug, PartialEq)]
pub struct ScaleOrdinal {
    domain: Vec<String>,
    range: Vec<Color>,
}

impl ScaleOrdinal {
    /// Creates a scale from an explicit domain and range.
    pub fn new(domain: Vec<String>, range: Vec<Color>) -> Self {
        Self { domain, range }
    }

    /// Builds a scale over the distinct keys of `records`, extracted via
    /// `policy`, in first-seen order.
    pub fn from_records(records: &[Record], policy: &KeyPolicy, range: Vec<Color>) -> Self {
        let mut seen = HashSet::new();
        let mut domain = Vec::new();
        for record in records {
            let Some(key) = policy.extract(record) else {
                continue;
            };
            let key = key.into_owned();
            if seen.insert(key.clone()) {
                domain.push(key);
            }
        }
        Self { domain, range }
    }

    /// Maps a key to its color, or `None` for keys outside the domain.
    pub fn get(&self, key: &str) -> Option<Color> {
        if self.range.is_empty() {
            return None;
        }
        let index = self.domain.iter().position(|k| k == key)?;
        Some(self.range[index % self.range.len()])
    }

    /// The domain keys, in first-seen order.
    pub fn domain(&self) -> &[String] {
        &self.domain
    }
}

#[derive(Clone, Debug)]
enum ColorMode {
    Categorical(ScaleOrdinal),
    Mapped(HashMap<String, Color>),
}

/// Resolves one color per record for the lifetime of a render pass.
///
/// Key extraction follows the configured [`KeyPolicy`]; the `"Empty"`
/// sentinel overrides everything; records with no determinable key (or keys
/// with no scale/mapping entry) take the fallback color.
#[derive(Clone, Debug)]
pub struct ColorResolver {
    mode: ColorMode,
    policy: KeyPolicy,
    empty_box: Color,
    fallback: Color,
}

impl ColorResolver {
    /// Builds a categorical resolver over the processed record set.
    pub fn categorical(
        records: &[Record],
        policy: KeyPolicy,
        range: Vec<Color>,
        empty_box: Color,
        fallback: Color,
    ) -> Self {
        Self {
            mode: ColorMode::Categorical(ScaleOrdinal::from_records(records, &policy, range)),
            policy,
            empty_box,
            fallback,
        }
    }

    /// Builds a resolver backed by an explicit key → color mapping.
    pub fn mapped(
        colors: HashMap<String, Color>,
        policy: KeyPolicy,
        empty_box: Color,
        fallback: Color,
    ) -> Self {
        Self {
            mode: ColorMode::Mapped(colors),
            policy,
            empty_box,
            fallback,
        }
    }

    /// Resolves the display color for a record.
    pub fn resolve(&self, record: &Record) -> Color {
        let Some(key) = self.policy.extract(record) else {
            return self.fallback;
        };
        if key == Value::EMPTY {
            return self.empty_box;
        }
        let resolved = match &self.mode {
            ColorMode::Categorical(scale) => scale.get(&key),
            ColorMode::Mapped(colors) => colors.get(key.as_ref()).copied(),
        };
        resolved.unwrap_or(self.fallback)
    }

    /// The categorical scale, when this resolver was built from data.
    pub fn scale(&self) -> Option<&ScaleOrdinal> {
        match &self.mode {
            ColorMode::Categorical(scale) => Some(scale),
            ColorMode::Mapped(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec;
    use peniko::color::palette::css;

    use super::*;

    fn policy() -> KeyPolicy {
        KeyPolicy::for_columns(None, None, "k")
    }

    fn records() -> Vec<Record> {
        vec![
            Record::new().with("k", "A"),
            Record::new().with("k", "B"),
            Record::new().with("k", "A"),
        ]
    }

    #[test]
    fn scale_domain_is_first_seen_and_fixed() {
        let scale = ScaleOrdinal::from_records(
            &records(),
            &policy(),
            vec![css::RED, css::BLUE],
        );
        assert_eq!(scale.domain(), ["A", "B"]);
        assert_eq!(scale.get("A"), Some(css::RED));
        assert_eq!(scale.get("B"), Some(css::BLUE));
        assert_eq!(scale.get("C"), None);
    }

    #[test]
    fn range_cycles_when_domain_is_larger() {
        let scale = ScaleOrdinal::new(
            vec!["a".into(), "b".into(), "c".into()],
            vec![css::RED, css::BLUE],
        );
        assert_eq!(scale.get("c"), Some(css::RED));
    }

    #[test]
    fn same_key_resolves_to_the_same_color() {
        let data = records();
        let resolver =
            ColorResolver::categorical(&data, policy(), vec![css::RED, css::BLUE], css::GRAY, css::BLACK);
        assert_eq!(resolver.resolve(&data[0]), resolver.resolve(&data[2]));
    }

    #[test]
    fn empty_sentinel_bypasses_scale_and_mapping() {
        let data = vec![Record::new().with("k", "Empty")];
        let resolver =
            ColorResolver::categorical(&data, policy(), vec![css::RED], css::GRAY, css::BLACK);
        assert_eq!(resolver.resolve(&data[0]), css::GRAY);

        let mut colors = HashMap::new();
        colors.insert(String::from("Empty"), css::RED);
        let resolver = ColorResolver::mapped(colors, policy(), css::GRAY, css::BLACK);
        assert_eq!(resolver.resolve(&data[0]), css::GRAY);
    }

    #[test]
    fn missing_key_falls_back() {
        let data = vec![Record::new().with("unrelated", 1.0)];
        let resolver =
            ColorResolver::categorical(&data, policy(), vec![css::RED], css::GRAY, css::BLACK);
        assert_eq!(resolver.resolve(&data[0]), css::BLACK);
    }

    #[test]
    fn mapped_mode_uses_the_mapping_and_falls_back_on_misses() {
        let mut colors = HashMap::new();
        colors.insert(String::from("A"), css::RED);
        let resolver = ColorResolver::mapped(colors, policy(), css::GRAY, css::BLACK);

        assert_eq!(resolver.resolve(&Record::new().with("k", "A")), css::RED);
        assert_eq!(resolver.resolve(&Record::new().with("k", "B")), css::BLACK);
    }
}
