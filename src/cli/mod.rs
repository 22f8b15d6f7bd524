use clap::{Parser, Subcommand};

mod networks;
mod overlap;
mod run;

#[derive(Parser, Debug)]
#[command(
    name = "kira-arnet",
    version,
    about = "Interaction-type statistics for association-rule gene networks"
)]
pub struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    Run(run::RunArgs),
    Networks(networks::NetworksArgs),
    Overlap(overlap::OverlapArgs),
}

impl Cli {
    pub fn dispatch(self) -> anyhow::Result<()> {
        match self.command {
            Command::Run(args) => run::handle(args),
            Command::Networks(args) => networks::handle(args),
            Command::Overlap(args) => overlap::handle(args),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/cli/mod.rs"]
mod tests;
