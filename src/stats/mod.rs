//! Two-sample tests behind a single dispatch point.

pub mod rank_sum;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum StatsError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("distribution error: {0}")]
    Distribution(String),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TestMethod {
    /// Student's t-test, pooled variance. Kept for legacy comparisons.
    TwoSampleT,
    #[default]
    RankSum,
}

impl TestMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            TestMethod::TwoSampleT => "two_sample_t",
            TestMethod::RankSum => "rank_sum",
        }
    }
}

impl fmt::Display for TestMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TestMethod {
    type Err = StatsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "two_sample_t" | "t_test" => Ok(TestMethod::TwoSampleT),
            "rank_sum" | "ranksum_test" => Ok(TestMethod::RankSum),
            other => Err(StatsError::InvalidArgument(format!(
                "unknown test method '{other}', expected two_sample_t or rank_sum"
            ))),
        }
    }
}

/// Two-sided p-value comparing `group1` against `group2`.
pub fn compare(group1: &[f64], group2: &[f64], method: TestMethod) -> Result<f64, StatsError> {
    if group1.is_empty() || group2.is_empty() {
        return Err(StatsError::InvalidArgument(format!(
            "both groups must be non-empty (got {} and {})",
            group1.len(),
            group2.len()
        )));
    }
    match method {
        TestMethod::TwoSampleT => t_test::student_t_test(group1, group2),
        TestMethod::RankSum => rank_sum::rank_sum_test(group1, group2),
    }
}

/// Same as [`compare`] with the method given by name.
pub fn compare_named(group1: &[f64], group2: &[f64], method: &str) -> Result<f64, StatsError> {
    compare(group1, group2, method.parse()?)
}

#[cfg(test)]
#[path = "../../tests/src_inline/stats/mod.rs"]
mod tests;
