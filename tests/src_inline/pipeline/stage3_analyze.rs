use super::*;
use crate::model::metric::Metric;
use crate::model::thresholds::Bounds;
use crate::pipeline::fixtures::write_inputs;
use crate::pipeline::stage1_metrics::run_stage1_metrics;
use crate::pipeline::stage2_networks::run_stage2_networks;
use tempfile::tempdir;

#[test]
fn every_section_is_tested() {
    let dir = tempdir().expect("tempdir");
    let config = write_inputs(dir.path());
    let metrics = run_stage1_metrics(&config, false).expect("stage1");
    let networks = run_stage2_networks(&config, false).expect("stage2");

    let ctx = run_stage3_analyze(
        &metrics.filtered,
        &networks,
        &config.thresholds,
        TestMethod::RankSum,
    )
    .expect("stage3");
    assert_eq!(ctx.populations, 1);
    assert!(ctx.results.skipped.is_empty());
    let counts = ctx.results.records_per_section();
    assert_eq!(counts["reactome"], 10);
    assert_eq!(counts["tf_up_down"], 10);
    assert_eq!(counts["tf_type"], 10);
    assert_eq!(ctx.results.nested_len(), 30);
    assert!(ctx.results.section("Bcell", "reactome").is_some());
}

#[test]
fn thresholds_are_reapplied() {
    let dir = tempdir().expect("tempdir");
    let config = write_inputs(dir.path());
    let metrics = run_stage1_metrics(&config, false).expect("stage1");
    let networks = run_stage2_networks(&config, false).expect("stage2");

    // Only T1->G2 survives, so no section has two label groups.
    let strict = Thresholds::new().with(Metric::Lift, Bounds::at_least(2.5));
    let ctx = run_stage3_analyze(&metrics.filtered, &networks, &strict, TestMethod::RankSum)
        .expect("stage3");
    assert!(ctx.results.records.is_empty());
    assert_eq!(ctx.results.nested[0].sections.len(), 3);
}

#[test]
fn empty_input_is_an_error() {
    let dir = tempdir().expect("tempdir");
    let config = write_inputs(dir.path());
    let networks = run_stage2_networks(&config, false).expect("stage2");
    assert!(matches!(
        run_stage3_analyze(
            &PopulationTables::new(),
            &networks,
            &config.thresholds,
            TestMethod::RankSum
        ),
        Err(Stage3Error::NoPopulations)
    ));
}
