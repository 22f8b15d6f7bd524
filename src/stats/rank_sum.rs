use std::cmp::Ordering;

use statrs::distribution::{ContinuousCDF, Normal};

use crate::stats::StatsError;

/// Wilcoxon rank-sum statistic of `x` under the normal approximation.
///
/// Ties get their average rank. No tie or continuity correction is applied to
/// the variance, so results line up with the classic `ranksums` formulation.
pub fn rank_sum_z(x: &[f64], y: &[f64]) -> f64 {
    let n1 = x.len() as f64;
    let n2 = y.len() as f64;

    let ranks = average_ranks(x, y);
    let rank_sum_x: f64 = ranks[..x.len()].iter().sum();

    let expected = n1 * (n1 + n2 + 1.0) / 2.0;
    let sd = (n1 * n2 * (n1 + n2 + 1.0) / 12.0).sqrt();
    (rank_sum_x - expected) / sd
}

pub fn rank_sum_test(x: &[f64], y: &[f64]) -> Result<f64, StatsError> {
    let z = rank_sum_z(x, y);
    if z.is_nan() {
        return Ok(f64::NAN);
    }
    let normal = Normal::new(0.0, 1.0).map_err(|e| StatsError::Distribution(e.to_string()))?;
    Ok((2.0 * normal.sf(z.abs())).min(1.0))
}

/// Ranks of the pooled sample, `x` first then `y`, in input order.
fn average_ranks(x: &[f64], y: &[f64]) -> Vec<f64> {
    let n = x.len() + y.len();
    let mut order: Vec<(f64, usize)> = x
        .iter()
        .chain(y.iter())
        .copied()
        .enumerate()
        .map(|(i, v)| (v, i))
        .collect();
    order.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(Ordering::Equal));

    let mut ranks = vec![0.0; n];
    let mut i = 0;
    while i < n {
        let mut j = i + 1;
        while j < n && order[j].0 == order[i].0 {
            j += 1;
        }
        // positions i..j share the mean of ranks i+1..=j
        let rank = (i + j + 1) as f64 / 2.0;
        for item in &order[i..j] {
            ranks[item.1] = rank;
        }
        i = j;
    }
    ranks
}

#[cfg(test)]
#[path = "../../tests/src_inline/stats/rank_sum.rs"]
mod tests;
