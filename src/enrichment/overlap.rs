use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::input::{InputError, column_index, open_table, path_display};

pub const TERM: &str = "Term";
pub const CELL_TYPE: &str = "cell_type";

const OVERLAP_COLUMNS: [&str; 8] = [
    "AR",
    "DEG",
    "Intersection",
    "Union",
    "AR_Specific",
    "DEG_Specific",
    "AR_in_DEG_Rate",
    "DEG_in_AR_Rate",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum EnrichType {
    Go,
    Reactome,
}

impl EnrichType {
    pub fn as_str(&self) -> &'static str {
        match self {
            EnrichType::Go => "go",
            EnrichType::Reactome => "reactome",
        }
    }
}

impl fmt::Display for EnrichType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnrichSource {
    Ar,
    Deg,
}

/// What a result file name says about its content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnrichmentFile {
    pub path: PathBuf,
    pub cell_type: String,
    pub enrich_type: EnrichType,
    pub source: EnrichSource,
}

impl EnrichmentFile {
    /// `<cell_type>_<token>_..._.tsv`; `None` for anything that is not a `.tsv`.
    pub fn classify(path: &Path) -> Option<Self> {
        let name = path.file_name()?.to_str()?;
        let stem = name.strip_suffix(".tsv")?;
        let tokens: Vec<&str> = stem.split('_').collect();
        let cell_type = tokens.first().filter(|t| !t.is_empty())?;
        let enrich_type = if tokens.contains(&"go") {
            EnrichType::Go
        } else {
            EnrichType::Reactome
        };
        let source = if tokens.contains(&"deg") {
            EnrichSource::Deg
        } else {
            EnrichSource::Ar
        };
        Some(Self {
            path: path.to_path_buf(),
            cell_type: cell_type.to_string(),
            enrich_type,
            source,
        })
    }

    /// `<enrich>_community_id_<n>` or `<enrich>_all`.
    pub fn prefix(&self) -> String {
        let community = self
            .path
            .file_name()
            .and_then(|n| n.to_str())
            .and_then(community_id);
        match community {
            Some(id) => format!("{}_community_id_{id}", self.enrich_type),
            None => format!("{}_all", self.enrich_type),
        }
    }
}

fn community_id(name: &str) -> Option<&str> {
    let stem = name.strip_suffix(".tsv")?;
    let (_, tail) = stem.rsplit_once("community_id_")?;
    (!tail.is_empty() && tail.bytes().all(|b| b.is_ascii_digit())).then_some(tail)
}

/// Term set sizes for one AR result against the DEG result.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TermOverlap {
    pub ar: usize,
    pub deg: usize,
    pub intersection: usize,
    pub union: usize,
    pub ar_specific: usize,
    pub deg_specific: usize,
    pub ar_in_deg_rate: f64,
    pub deg_in_ar_rate: f64,
}

impl TermOverlap {
    pub fn between(ar: &BTreeSet<String>, deg: &BTreeSet<String>) -> Self {
        let intersection = ar.intersection(deg).count();
        let rate = |n: usize| {
            if n > 0 {
                intersection as f64 / n as f64
            } else {
                0.0
            }
        };
        Self {
            ar: ar.len(),
            deg: deg.len(),
            intersection,
            union: ar.union(deg).count(),
            ar_specific: ar.len() - intersection,
            deg_specific: deg.len() - intersection,
            ar_in_deg_rate: rate(ar.len()),
            deg_in_ar_rate: rate(deg.len()),
        }
    }

    fn values(&self) -> [String; 8] {
        [
            self.ar.to_string(),
            self.deg.to_string(),
            self.intersection.to_string(),
            self.union.to_string(),
            self.ar_specific.to_string(),
            self.deg_specific.to_string(),
            self.ar_in_deg_rate.to_string(),
            self.deg_in_ar_rate.to_string(),
        ]
    }
}

/// One output block: prefixed overlap columns for every comparison of a cell type.
#[derive(Debug, Clone, PartialEq)]
pub struct OverlapSummary {
    pub cell_type: String,
    pub columns: Vec<(String, String)>,
}

impl OverlapSummary {
    fn push(&mut self, prefix: &str, overlap: &TermOverlap) {
        for (name, value) in OVERLAP_COLUMNS.iter().zip(overlap.values()) {
            self.columns.push((format!("{prefix}_{name}"), value));
        }
    }
}

#[derive(Debug, Default)]
struct SourceFiles {
    ar: Vec<EnrichmentFile>,
    deg: Vec<EnrichmentFile>,
}

/// Distinct values of the `Term` column.
pub fn read_terms(path: &Path) -> Result<BTreeSet<String>, InputError> {
    let mut reader = open_table(path)?;
    let headers = reader.headers()?.clone();
    let idx = column_index(&headers, TERM, path)?;
    let mut terms = BTreeSet::new();
    for record in reader.records() {
        let record = record?;
        if let Some(term) = record.get(idx) {
            terms.insert(term.to_string());
        }
    }
    Ok(terms)
}

/// Compares every AR result in `dir` with the single DEG result of the same
/// cell type and enrichment type. `output_name` is the statistics file a
/// previous run wrote into `dir`; it is never read as a result.
pub fn collect_overlaps(
    dir: &Path,
    output_name: &str,
) -> Result<Vec<OverlapSummary>, InputError> {
    if !dir.is_dir() {
        return Err(InputError::MissingFile(path_display(dir).to_string()));
    }
    let mut paths = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() && path.file_name().is_none_or(|name| name != output_name) {
            paths.push(path);
        }
    }
    paths.sort();

    let mut grouped: BTreeMap<String, BTreeMap<EnrichType, SourceFiles>> = BTreeMap::new();
    for path in &paths {
        let Some(file) = EnrichmentFile::classify(path) else {
            continue;
        };
        let sources = grouped
            .entry(file.cell_type.clone())
            .or_default()
            .entry(file.enrich_type)
            .or_default();
        match file.source {
            EnrichSource::Ar => sources.ar.push(file),
            EnrichSource::Deg => sources.deg.push(file),
        }
    }

    let mut summaries = Vec::new();
    for (cell_type, by_type) in grouped {
        let mut summary = OverlapSummary {
            cell_type: cell_type.clone(),
            columns: Vec::new(),
        };
        for (enrich_type, sources) in by_type {
            let [deg_file] = sources.deg.as_slice() else {
                return Err(InputError::DataFormat {
                    path: path_display(dir).to_string(),
                    line: 0,
                    reason: format!(
                        "{cell_type}/{enrich_type}: expected exactly one deg result, found {}",
                        sources.deg.len()
                    ),
                });
            };
            if sources.ar.is_empty() {
                warn!(
                    cell_type = cell_type.as_str(),
                    enrich_type = enrich_type.as_str(),
                    "no ar enrichment results, skipping"
                );
                continue;
            }
            let deg_terms = read_terms(&deg_file.path)?;
            for ar_file in &sources.ar {
                let ar_terms = read_terms(&ar_file.path)?;
                let overlap = TermOverlap::between(&ar_terms, &deg_terms);
                let prefix = ar_file.prefix();
                debug!(
                    cell_type = cell_type.as_str(),
                    prefix = prefix.as_str(),
                    intersection = overlap.intersection,
                    "terms compared"
                );
                summary.push(&prefix, &overlap);
            }
        }
        if !summary.columns.is_empty() {
            summary.columns.push((CELL_TYPE.to_string(), cell_type));
            summaries.push(summary);
        }
    }
    Ok(summaries)
}

/// Tab-separated header and value row per cell type, blocks separated by a blank line.
pub fn write_statistics(summaries: &[OverlapSummary], path: &Path) -> Result<(), InputError> {
    let mut blocks = Vec::with_capacity(summaries.len());
    for summary in summaries {
        let mut writer = csv::WriterBuilder::new()
            .delimiter(b'\t')
            .from_writer(Vec::new());
        writer.write_record(summary.columns.iter().map(|(name, _)| name.as_str()))?;
        writer.write_record(summary.columns.iter().map(|(_, value)| value.as_str()))?;
        let block = writer
            .into_inner()
            .map_err(|e| InputError::Io(e.into_error()))?;
        blocks.push(block);
    }
    fs::write(path, blocks.join(&b"\n"[..]))?;
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/src_inline/enrichment/overlap.rs"]
mod tests;
