use std::path::PathBuf;

use tracing::info;

use crate::input::InputError;
use crate::networks::ppi::read_ppi_network;
use crate::networks::reactome::read_reactome_network;
use crate::networks::regulation::read_regulation_network;
use crate::networks::{NetworkMap, NetworkTable};

#[derive(Debug, Clone, PartialEq)]
pub struct NetworkSources {
    pub tf_list: PathBuf,
    pub regnetwork: PathBuf,
    pub gmt: PathBuf,
    pub reactome: PathBuf,
    pub ppi: Option<PathBuf>,
    pub ppi_mapping: Option<PathBuf>,
}

/// Reads the reference networks from their configured files. Each network is
/// read at most once per instance.
#[derive(Debug)]
pub struct NetworkIntegration {
    sources: NetworkSources,
    include_ppi: bool,
    tf: Option<NetworkTable>,
    reactome: Option<NetworkTable>,
    ppi: Option<NetworkTable>,
}

impl NetworkIntegration {
    pub fn new(sources: NetworkSources) -> Self {
        Self {
            sources,
            include_ppi: false,
            tf: None,
            reactome: None,
            ppi: None,
        }
    }

    pub fn with_ppi(mut self, include_ppi: bool) -> Self {
        self.include_ppi = include_ppi;
        self
    }

    pub fn regulation(&mut self) -> Result<&NetworkTable, InputError> {
        let table = match self.tf.take() {
            Some(table) => table,
            None => read_regulation_network(&self.sources.tf_list, &self.sources.regnetwork)?,
        };
        let table: &NetworkTable = self.tf.insert(table);
        Ok(table)
    }

    pub fn reactome(&mut self) -> Result<&NetworkTable, InputError> {
        let table = match self.reactome.take() {
            Some(table) => table,
            None => read_reactome_network(&self.sources.gmt, &self.sources.reactome)?,
        };
        let table: &NetworkTable = self.reactome.insert(table);
        Ok(table)
    }

    pub fn ppi(&mut self) -> Result<&NetworkTable, InputError> {
        let table = match self.ppi.take() {
            Some(table) => table,
            None => {
                let (Some(ppi), Some(mapping)) =
                    (self.sources.ppi.as_deref(), self.sources.ppi_mapping.as_deref())
                else {
                    return Err(InputError::MissingFile(
                        "ppi and ppi_mapping must both be configured".to_string(),
                    ));
                };
                read_ppi_network(ppi, mapping)?
            }
        };
        let table: &NetworkTable = self.ppi.insert(table);
        Ok(table)
    }

    /// `{"tf", "reactome"}` plus `"ppi"` when enabled.
    pub fn read_all_networks(&mut self) -> Result<NetworkMap, InputError> {
        let mut networks = NetworkMap::new();

        let tf = self.regulation()?.clone();
        info!(network = "tf", rows = tf.len(), pairs = tf.distinct_pairs(), "network ready");
        networks.insert("tf".to_string(), tf);

        let reactome = self.reactome()?.clone();
        info!(
            network = "reactome",
            rows = reactome.len(),
            pairs = reactome.distinct_pairs(),
            "network ready"
        );
        networks.insert("reactome".to_string(), reactome);

        if self.include_ppi {
            let ppi = self.ppi()?.clone();
            info!(network = "ppi", rows = ppi.len(), pairs = ppi.distinct_pairs(), "network ready");
            networks.insert("ppi".to_string(), ppi);
        }

        Ok(networks)
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/networks/integration.rs"]
mod tests;
