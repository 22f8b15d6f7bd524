pub mod stage1_metrics;
pub mod stage2_networks;
pub mod stage3_analyze;
pub mod stage4_report;

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/fixtures.rs"]
pub(crate) mod fixtures;
