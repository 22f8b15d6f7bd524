use std::path::PathBuf;

use clap::Args;
use tracing::info;

use crate::enrichment::{collect_overlaps, write_statistics};

#[derive(Args, Debug)]
pub struct OverlapArgs {
    /// Directory of enrichment result TSVs
    #[arg(long)]
    pub(crate) input: PathBuf,

    /// Output file name, written inside the input directory
    #[arg(long, default_value = "statistics.tsv")]
    pub(crate) out_name: String,
}

pub fn handle(args: OverlapArgs) -> anyhow::Result<()> {
    let summaries = collect_overlaps(&args.input, &args.out_name)?;
    if summaries.is_empty() {
        anyhow::bail!("no enrichment comparisons found in {}", args.input.display());
    }
    let path = args.input.join(&args.out_name);
    write_statistics(&summaries, &path)?;
    info!(
        cell_types = summaries.len(),
        out = %path.display(),
        "wrote enrichment overlap statistics"
    );
    Ok(())
}
