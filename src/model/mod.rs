pub mod metric;
pub mod pair;
pub mod thresholds;
