//! Comparison of enrichment results produced from AR communities against the
//! DEG-based enrichment of the same cell type.

pub mod overlap;

pub use overlap::{OverlapSummary, TermOverlap, collect_overlaps, write_statistics};
