use super::*;
use approx::assert_relative_eq;
use tempfile::tempdir;

fn terms(items: &[&str]) -> BTreeSet<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn write_terms(dir: &Path, name: &str, items: &[&str]) {
    let mut body = String::from("Term\tAdjusted P-value\n");
    for item in items {
        body.push_str(item);
        body.push_str("\t0.01\n");
    }
    fs::write(dir.join(name), body).expect("write file");
}

#[test]
fn classify_reads_name_tokens() {
    let file = EnrichmentFile::classify(Path::new("Bcell_gsea_go_deg.tsv")).expect("tsv");
    assert_eq!(file.cell_type, "Bcell");
    assert_eq!(file.enrich_type, EnrichType::Go);
    assert_eq!(file.source, EnrichSource::Deg);

    let file = EnrichmentFile::classify(Path::new("Bcell_reactome_enrich_community_id_12.tsv"))
        .expect("tsv");
    assert_eq!(file.enrich_type, EnrichType::Reactome);
    assert_eq!(file.source, EnrichSource::Ar);
    assert_eq!(file.prefix(), "reactome_community_id_12");

    let file = EnrichmentFile::classify(Path::new("Bcell_go_enrich.tsv")).expect("tsv");
    assert_eq!(file.prefix(), "go_all");
    assert!(EnrichmentFile::classify(Path::new("Bcell_go_enrich.csv")).is_none());
}

#[test]
fn overlap_counts_and_rates() {
    let overlap = TermOverlap::between(&terms(&["a", "b", "c"]), &terms(&["b", "c", "d", "e"]));
    assert_eq!(overlap.ar, 3);
    assert_eq!(overlap.deg, 4);
    assert_eq!(overlap.intersection, 2);
    assert_eq!(overlap.union, 5);
    assert_eq!(overlap.ar_specific, 1);
    assert_eq!(overlap.deg_specific, 2);
    assert_relative_eq!(overlap.ar_in_deg_rate, 2.0 / 3.0);
    assert_relative_eq!(overlap.deg_in_ar_rate, 0.5);
}

#[test]
fn empty_sets_have_zero_rates() {
    let overlap = TermOverlap::between(&BTreeSet::new(), &terms(&["a"]));
    assert_eq!(overlap.ar_in_deg_rate, 0.0);
    assert_eq!(overlap.deg_in_ar_rate, 0.0);
    assert_eq!(overlap.deg_specific, 1);
}

#[test]
fn collects_one_block_per_cell_type() {
    let dir = tempdir().expect("tempdir");
    write_terms(dir.path(), "Bcell_gsea_go_deg.tsv", &["t1", "t2"]);
    write_terms(dir.path(), "Bcell_go_enrich_community_id_1.tsv", &["t1"]);
    write_terms(dir.path(), "Bcell_go_enrich_community_id_2.tsv", &["t3"]);
    write_terms(dir.path(), "Tcell_gsea_reactome_deg.tsv", &["r1"]);
    write_terms(dir.path(), "Tcell_reactome_enrich.tsv", &["r1", "r2"]);

    let summaries = collect_overlaps(dir.path(), "statistics.tsv").expect("overlaps");
    assert_eq!(summaries.len(), 2);

    let bcell = &summaries[0];
    assert_eq!(bcell.cell_type, "Bcell");
    assert_eq!(bcell.columns.len(), 17);
    assert_eq!(bcell.columns[0], ("go_community_id_1_AR".to_string(), "1".to_string()));
    assert_eq!(bcell.columns[2].0, "go_community_id_1_Intersection");
    assert_eq!(bcell.columns[10], ("go_community_id_2_Intersection".to_string(), "0".to_string()));
    assert_eq!(bcell.columns[16], ("cell_type".to_string(), "Bcell".to_string()));

    let tcell = &summaries[1];
    assert_eq!(tcell.columns[0].0, "reactome_all_AR");
    assert_eq!(tcell.columns[6], ("reactome_all_AR_in_DEG_Rate".to_string(), "0.5".to_string()));

    let out = dir.path().join("statistics.tsv");
    write_statistics(&summaries, &out).expect("write");
    let text = fs::read_to_string(&out).expect("read");
    let blocks: Vec<&str> = text.split("\n\n").collect();
    assert_eq!(blocks.len(), 2);
    assert!(blocks[1].starts_with("reactome_all_AR\treactome_all_DEG"));
    assert!(blocks[1].trim_end().ends_with("Tcell"));
}

#[test]
fn two_deg_results_are_rejected() {
    let dir = tempdir().expect("tempdir");
    write_terms(dir.path(), "Bcell_gsea_go_deg.tsv", &["t1"]);
    write_terms(dir.path(), "Bcell_other_go_deg.tsv", &["t1"]);
    write_terms(dir.path(), "Bcell_go_enrich.tsv", &["t1"]);
    assert!(matches!(
        collect_overlaps(dir.path(), "statistics.tsv"),
        Err(InputError::DataFormat { .. })
    ));
}

#[test]
fn group_without_ar_results_is_skipped() {
    let dir = tempdir().expect("tempdir");
    write_terms(dir.path(), "Bcell_gsea_go_deg.tsv", &["t1"]);
    write_terms(dir.path(), "Bcell_gsea_reactome_deg.tsv", &["r1"]);
    write_terms(dir.path(), "Bcell_reactome_enrich.tsv", &["r1"]);

    let summaries = collect_overlaps(dir.path(), "statistics.tsv").expect("overlaps");
    assert_eq!(summaries.len(), 1);
    assert_eq!(summaries[0].columns.len(), 9);
    assert_eq!(summaries[0].columns[0].0, "reactome_all_AR");
}

#[test]
fn rerun_ignores_previous_statistics() {
    let dir = tempdir().expect("tempdir");
    write_terms(dir.path(), "Bcell_gsea_go_deg.tsv", &["t1", "t2"]);
    write_terms(dir.path(), "Bcell_go_enrich.tsv", &["t1"]);
    let out = dir.path().join("statistics.tsv");

    let first = collect_overlaps(dir.path(), "statistics.tsv").expect("first run");
    write_statistics(&first, &out).expect("write");
    let second = collect_overlaps(dir.path(), "statistics.tsv").expect("second run");
    assert_eq!(second, first);
    write_statistics(&second, &out).expect("rewrite");
    assert_eq!(
        fs::read_to_string(&out).expect("read"),
        "go_all_AR\tgo_all_DEG\tgo_all_Intersection\tgo_all_Union\tgo_all_AR_Specific\t\
go_all_DEG_Specific\tgo_all_AR_in_DEG_Rate\tgo_all_DEG_in_AR_Rate\tcell_type\n\
1\t2\t1\t2\t0\t1\t1\t0.5\tBcell\n"
    );
}
