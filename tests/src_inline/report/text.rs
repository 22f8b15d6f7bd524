use super::*;
use crate::analysis::results::ResultRecord;
use crate::model::metric::Metric;

#[test]
fn report_layout_is_exact() {
    let mut results = AnalysisResults::new();
    results.push_section(
        "Bcell",
        "reactome",
        vec![
            ResultRecord {
                population: "Bcell".to_string(),
                network: "reactome".to_string(),
                metric: Metric::Support,
                label: "->".to_string(),
                p_value: 0.25,
            },
            ResultRecord {
                population: "Bcell".to_string(),
                network: "reactome".to_string(),
                metric: Metric::Support,
                label: "-|".to_string(),
                p_value: 1.0,
            },
        ],
    );
    results.push_section("Bcell", "tf_type", Vec::new());

    let pct = "%".repeat(90);
    let eq = "=".repeat(90);
    let expected = format!(
        "Bcell\n{pct}\n{pct}\nreactome\n{eq}\nsupport_->\n0.25\nsupport_-|\n1.0\n\n\
         tf_type\n{eq}\n\n\n"
    );
    assert_eq!(render_report(&results), expected);
}

#[test]
fn empty_results_render_empty() {
    assert_eq!(render_report(&AnalysisResults::new()), "");
}

#[test]
fn p_values_round_trip_through_text() {
    for p in [0.049_534_613_435_626_74, 1.0, 1e-300, f64::MIN_POSITIVE] {
        assert_eq!(format_p_value(p).parse::<f64>().expect("parse"), p);
    }
    assert_eq!(format_p_value(f64::NAN), "NaN");
}
