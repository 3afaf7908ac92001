//! Parses command-line arguments for the bridge dev CLI.

use std::path::PathBuf;

use clap::{crate_version, Parser};

#[derive(Debug, Parser)]
#[clap(
    name = "opbridge",
    about = "Dev driver for the ETH bridge orchestrator",
    version = crate_version!()
)]
pub(crate) struct Cli {
    #[clap(
        long,
        short = 'c',
        help = "The file containing the bridge configuration",
        default_value = "config.toml"
    )]
    pub config: PathBuf,

    #[clap(long, help = "The amount to bridge, in wei")]
    pub amount: u128,

    #[clap(
        long,
        help = "The chain id of the connected network; selects deposit or withdraw"
    )]
    pub chain_id: u64,

    #[clap(long, help = "The address of the connected signer")]
    pub address: String,
}
