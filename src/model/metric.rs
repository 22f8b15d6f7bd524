use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Association-rule quality measures carried by every AR metrics table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Metric {
    Support,
    Confidence,
    Lift,
    Leverage,
    Conviction,
}

impl Metric {
    pub fn as_str(&self) -> &'static str {
        match self {
            Metric::Support => "support",
            Metric::Confidence => "confidence",
            Metric::Lift => "lift",
            Metric::Leverage => "leverage",
            Metric::Conviction => "conviction",
        }
    }

    pub fn ordered() -> &'static [Metric] {
        &[
            Metric::Support,
            Metric::Confidence,
            Metric::Lift,
            Metric::Leverage,
            Metric::Conviction,
        ]
    }

    pub fn position(&self) -> usize {
        match self {
            Metric::Support => 0,
            Metric::Confidence => 1,
            Metric::Lift => 2,
            Metric::Leverage => 3,
            Metric::Conviction => 4,
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Metric {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Metric::ordered()
            .iter()
            .copied()
            .find(|m| m.as_str() == s)
            .ok_or_else(|| format!("unknown metric: {s}"))
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/metric.rs"]
mod tests;
