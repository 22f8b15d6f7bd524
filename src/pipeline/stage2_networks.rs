use thiserror::Error;

use crate::config::Config;
use crate::input::InputError;
use crate::networks::NetworkMap;
use crate::networks::integration::NetworkIntegration;

#[derive(Debug, Error)]
pub enum Stage2Error {
    #[error("network error: {0}")]
    Input(#[from] InputError),
}

#[derive(Debug, Clone)]
pub struct NetworksCtx {
    pub networks: NetworkMap,
}

/// Reads every configured network. Any read failure aborts the run.
pub fn run_stage2_networks(config: &Config, include_ppi: bool) -> Result<NetworksCtx, Stage2Error> {
    let mut integration = NetworkIntegration::new(config.network_sources())
        .with_ppi(include_ppi);
    let networks = integration.read_all_networks()?;
    Ok(NetworksCtx { networks })
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage2_networks.rs"]
mod tests;
