use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::model::thresholds::Thresholds;
use crate::networks::integration::NetworkSources;
use crate::stats::TestMethod;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("io error reading {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("toml parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default = "Thresholds::standard")]
    pub thresholds: Thresholds,
    pub inputs: InputsConfig,
    #[serde(default)]
    pub cache: CacheConfig,
    pub output: OutputConfig,
    #[serde(default)]
    pub analysis: AnalysisConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InputsConfig {
    /// Directory of per-population AR metrics tables (unfiltered edge style).
    pub ar_metrics: PathBuf,
    pub tf_list: PathBuf,
    pub regnetwork: PathBuf,
    pub gmt: PathBuf,
    pub reactome: PathBuf,
    #[serde(default)]
    pub ppi: Option<PathBuf>,
    #[serde(default)]
    pub ppi_mapping: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CacheConfig {
    #[serde(default)]
    pub edge_style: Option<PathBuf>,
    #[serde(default)]
    pub edge_style_filtered: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    pub dir: PathBuf,
    #[serde(default = "default_report_name")]
    pub report_name: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AnalysisConfig {
    #[serde(default)]
    pub method: TestMethod,
    #[serde(default)]
    pub include_ppi: bool,
}

fn default_report_name() -> String {
    "interaction_type_statistics.txt".to_string()
}

impl Config {
    /// Reads a TOML config; relative paths resolve against the file's directory.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_string_lossy().to_string(),
            source,
        })?;
        let mut config = Self::from_toml(&text)?;
        if let Some(base) = path.parent() {
            config.resolve_paths(base);
        }
        Ok(config)
    }

    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for (metric, bounds) in self.thresholds.iter() {
            if let (Some(lo), Some(hi)) = (bounds.lower, bounds.upper)
                && lo > hi
            {
                return Err(ConfigError::Invalid(format!(
                    "thresholds.{metric}: lower {lo} exceeds upper {hi}"
                )));
            }
        }
        if self.inputs.ppi.is_some() != self.inputs.ppi_mapping.is_some() {
            return Err(ConfigError::Invalid(
                "inputs.ppi and inputs.ppi_mapping must be set together".to_string(),
            ));
        }
        if self.analysis.include_ppi && self.inputs.ppi.is_none() {
            return Err(ConfigError::Invalid(
                "analysis.include_ppi requires inputs.ppi".to_string(),
            ));
        }
        if self.output.report_name.is_empty() {
            return Err(ConfigError::Invalid(
                "output.report_name is empty".to_string(),
            ));
        }
        Ok(())
    }

    pub fn network_sources(&self) -> NetworkSources {
        NetworkSources {
            tf_list: self.inputs.tf_list.clone(),
            regnetwork: self.inputs.regnetwork.clone(),
            gmt: self.inputs.gmt.clone(),
            reactome: self.inputs.reactome.clone(),
            ppi: self.inputs.ppi.clone(),
            ppi_mapping: self.inputs.ppi_mapping.clone(),
        }
    }

    pub fn edge_style_cache(&self) -> PathBuf {
        match &self.cache.edge_style {
            Some(dir) => dir.clone(),
            None => self.default_cache("result_edge_style"),
        }
    }

    pub fn edge_style_filtered_cache(&self) -> PathBuf {
        match &self.cache.edge_style_filtered {
            Some(dir) => dir.clone(),
            None => self.default_cache("result_edge_style_filtered"),
        }
    }

    pub fn report_path(&self) -> PathBuf {
        self.output.dir.join(&self.output.report_name)
    }

    /// Report path with its extension replaced by `.tsv`.
    pub fn table_path(&self) -> PathBuf {
        self.report_path().with_extension("tsv")
    }

    fn default_cache(&self, name: &str) -> PathBuf {
        self.output.dir.join("cache").join(name)
    }

    fn resolve_paths(&mut self, base: &Path) {
        let resolve = |p: &mut PathBuf| {
            if p.is_relative() {
                *p = base.join(&*p);
            }
        };
        resolve(&mut self.inputs.ar_metrics);
        resolve(&mut self.inputs.tf_list);
        resolve(&mut self.inputs.regnetwork);
        resolve(&mut self.inputs.gmt);
        resolve(&mut self.inputs.reactome);
        for p in [
            self.inputs.ppi.as_mut(),
            self.inputs.ppi_mapping.as_mut(),
            self.cache.edge_style.as_mut(),
            self.cache.edge_style_filtered.as_mut(),
        ]
        .into_iter()
        .flatten()
        {
            resolve(p);
        }
        resolve(&mut self.output.dir);
    }
}

#[cfg(test)]
#[path = "../tests/src_inline/config.rs"]
mod tests;
