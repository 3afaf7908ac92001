//! Configuration for the bridge dev CLI.

use std::{fs, path::Path};

use anyhow::Context;
use opbridge_primitives::network::NetworkConfig;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// The configuration values that dictate the behavior of a bridge run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct Config {
    /// The chain pair to bridge between.
    pub network: NetworkConfig,

    /// Whether the rollup runs the bedrock protocol version.
    pub bedrock: bool,

    /// Bound on the origin-chain confirmation wait, in seconds.
    pub confirmation_timeout_secs: u64,

    /// Bound on each message-status wait, in seconds.
    pub relay_timeout_secs: u64,

    /// Delay per simulated messenger step, in milliseconds.
    pub step_delay_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            network: NetworkConfig::testnet(
                "https://ethereum-goerli.publicnode.com",
                "https://optimism-goerli.publicnode.com",
            ),
            bedrock: true,
            confirmation_timeout_secs: 120,
            relay_timeout_secs: 300,
            step_delay_ms: 250,
        }
    }
}

impl Config {
    /// Reads the configuration from the given TOML file, falling back to the testnet
    /// defaults when the file does not exist.
    pub(crate) fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            warn!(?path, "config file not found, using testnet defaults");
            return Ok(Config::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("could not read config file {}", path.display()))?;
        let config: Config = toml::from_str(&contents)
            .with_context(|| format!("could not parse config file {}", path.display()))?;
        debug!(?config, "parsed config file");
        Ok(config)
    }
}
