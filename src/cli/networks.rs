use std::path::PathBuf;

use clap::Args;

use crate::config::Config;
use crate::networks::integration::NetworkIntegration;

#[derive(Args, Debug)]
pub struct NetworksArgs {
    /// TOML configuration file
    #[arg(long)]
    pub(crate) config: PathBuf,

    /// Also load the PPI network
    #[arg(long)]
    pub(crate) ppi: bool,
}

pub fn handle(args: NetworksArgs) -> anyhow::Result<()> {
    let config = Config::load(&args.config)?;
    let include_ppi = args.ppi || config.analysis.include_ppi;
    let mut integration = NetworkIntegration::new(config.network_sources())
        .with_ppi(include_ppi);
    let networks = integration.read_all_networks()?;

    println!("network\trows\tpairs\tlabel_columns");
    for (name, table) in &networks {
        println!(
            "{}\t{}\t{}\t{}",
            name,
            table.len(),
            table.distinct_pairs(),
            table.label_columns().join(",")
        );
    }
    Ok(())
}
