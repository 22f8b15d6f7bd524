use crate::analysis::results::AnalysisResults;

const BANNER_WIDTH: usize = 90;

/// Per population: name, two `%` banners; per section: name, one `=` banner,
/// then key and p-value on alternating lines and a blank line.
pub fn render_report(results: &AnalysisResults) -> String {
    let percent = "%".repeat(BANNER_WIDTH);
    let equals = "=".repeat(BANNER_WIDTH);

    let mut out = String::new();
    for population in &results.nested {
        out.push_str(&population.population);
        out.push('\n');
        out.push_str(&percent);
        out.push('\n');
        out.push_str(&percent);
        out.push('\n');
        for section in &population.sections {
            out.push_str(&section.name);
            out.push('\n');
            out.push_str(&equals);
            out.push('\n');
            for (key, p_value) in &section.entries {
                out.push_str(key);
                out.push('\n');
                out.push_str(&format_p_value(*p_value));
                out.push('\n');
            }
            out.push('\n');
        }
        out.push('\n');
    }
    out
}

/// Shortest representation that reads back to the same value.
pub fn format_p_value(p: f64) -> String {
    format!("{p:?}")
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/text.rs"]
mod tests;
