use crate::commands::Commands;

use clap::Parser;

#[derive(Parser)]
#[command(name = "gate")]
#[command(about = "Classify images against the classification gate's model endpoint")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,
}
