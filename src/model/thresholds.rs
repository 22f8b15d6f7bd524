use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::model::metric::Metric;

/// Inclusive bounds on one metric; `None` leaves that side open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Bounds {
    #[serde(default)]
    pub lower: Option<f64>,
    #[serde(default)]
    pub upper: Option<f64>,
}

impl Bounds {
    pub fn new(lower: Option<f64>, upper: Option<f64>) -> Self {
        Self { lower, upper }
    }

    pub fn at_least(lower: f64) -> Self {
        Self {
            lower: Some(lower),
            upper: None,
        }
    }

    pub fn unbounded() -> Self {
        Self::default()
    }

    pub fn is_unbounded(&self) -> bool {
        self.lower.is_none() && self.upper.is_none()
    }

    pub fn contains(&self, value: f64) -> bool {
        if self.is_unbounded() {
            return true;
        }
        let above = self.lower.is_none_or(|lo| value >= lo);
        let below = self.upper.is_none_or(|hi| value <= hi);
        above && below
    }
}

/// Per-metric bounds. Metrics without an entry are not filtered.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Thresholds {
    bounds: BTreeMap<Metric, Bounds>,
}

impl Thresholds {
    pub fn new() -> Self {
        Self::default()
    }

    /// support >= 0.05, confidence >= 0.5, lift >= 1, conviction >= 1, leverage open.
    pub fn standard() -> Self {
        Self::new()
            .with(Metric::Support, Bounds::at_least(0.05))
            .with(Metric::Confidence, Bounds::at_least(0.5))
            .with(Metric::Lift, Bounds::at_least(1.0))
            .with(Metric::Leverage, Bounds::unbounded())
            .with(Metric::Conviction, Bounds::at_least(1.0))
    }

    pub fn with(mut self, metric: Metric, bounds: Bounds) -> Self {
        self.set(metric, bounds);
        self
    }

    pub fn set(&mut self, metric: Metric, bounds: Bounds) {
        self.bounds.insert(metric, bounds);
    }

    pub fn get(&self, metric: Metric) -> Option<&Bounds> {
        self.bounds.get(&metric)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Metric, &Bounds)> {
        self.bounds.iter().map(|(m, b)| (*m, b))
    }

    pub fn is_identity(&self) -> bool {
        self.bounds.values().all(Bounds::is_unbounded)
    }

    /// True when `value_of` satisfies every configured metric's bounds.
    pub fn accepts(&self, value_of: impl Fn(Metric) -> f64) -> bool {
        self.iter()
            .filter(|(_, b)| !b.is_unbounded())
            .all(|(metric, bounds)| bounds.contains(value_of(metric)))
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/thresholds.rs"]
mod tests;
