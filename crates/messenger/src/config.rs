//! Construction parameters for a cross-chain messenger.

use opbridge_primitives::network::{ChainConfig, NetworkConfig};
use serde::{Deserialize, Serialize};

/// Everything needed to construct a cross-chain messenger client.
///
/// Mirrors the construction surface of the upstream messenger SDK: a chain id and a
/// signer-or-provider endpoint for each side, plus a protocol-version flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessengerConfig {
    /// The L1 endpoint.
    pub l1: ChainConfig,

    /// The L2 endpoint.
    pub l2: ChainConfig,

    /// Whether the rollup runs the bedrock protocol version.
    pub bedrock: bool,
}

impl MessengerConfig {
    /// Builds a messenger config from the session's network configuration.
    pub fn new(network: &NetworkConfig, bedrock: bool) -> Self {
        MessengerConfig {
            l1: network.l1.clone(),
            l2: network.l2.clone(),
            bedrock,
        }
    }
}
