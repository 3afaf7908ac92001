//! Network configuration and the direction/network resolver.
//!
//! The chain-id-to-role mapping is explicit configuration. An id that matches neither
//! configured endpoint is an error, never a fallback, so there is no silent
//! "invalid network selected" code path.

use serde::{Deserialize, Serialize};

use crate::{errors::RouteError, request::BridgeDirection, types::ChainId};

/// Chain id of Ethereum mainnet.
pub const ETHEREUM_MAINNET: ChainId = ChainId::new(1);

/// Chain id of Optimism mainnet.
pub const OPTIMISM_MAINNET: ChainId = ChainId::new(10);

/// Chain id of the Goerli Ethereum testnet.
pub const ETHEREUM_GOERLI: ChainId = ChainId::new(5);

/// Chain id of the Goerli Optimism testnet.
pub const OPTIMISM_GOERLI: ChainId = ChainId::new(420);

/// RPC endpoint configuration for one side of the bridge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainConfig {
    /// The chain id of this endpoint.
    pub chain_id: ChainId,

    /// The JSON-RPC endpoint URL for this chain.
    pub rpc_url: String,
}

/// The pair of chains this bridge session operates between.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkConfig {
    /// The L1 (origin) endpoint.
    pub l1: ChainConfig,

    /// The L2 (rollup) endpoint.
    pub l2: ChainConfig,
}

/// The outcome of resolving a connected chain id against a [`NetworkConfig`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedRoute {
    /// The direction implied by the connected chain.
    pub direction: BridgeDirection,

    /// The endpoint the bridge transaction is submitted on.
    pub origin: ChainConfig,

    /// The endpoint the message is relayed to.
    pub destination: ChainConfig,
}

impl NetworkConfig {
    /// The production mapping: Ethereum mainnet (1) and Optimism mainnet (10).
    pub fn mainnet(l1_rpc_url: impl Into<String>, l2_rpc_url: impl Into<String>) -> Self {
        NetworkConfig {
            l1: ChainConfig {
                chain_id: ETHEREUM_MAINNET,
                rpc_url: l1_rpc_url.into(),
            },
            l2: ChainConfig {
                chain_id: OPTIMISM_MAINNET,
                rpc_url: l2_rpc_url.into(),
            },
        }
    }

    /// The Goerli testnet mapping: Ethereum Goerli (5) and Optimism Goerli (420).
    pub fn testnet(l1_rpc_url: impl Into<String>, l2_rpc_url: impl Into<String>) -> Self {
        NetworkConfig {
            l1: ChainConfig {
                chain_id: ETHEREUM_GOERLI,
                rpc_url: l1_rpc_url.into(),
            },
            l2: ChainConfig {
                chain_id: OPTIMISM_GOERLI,
                rpc_url: l2_rpc_url.into(),
            },
        }
    }

    /// Resolves the connected chain id to a bridge route.
    ///
    /// Connecting from the L1 means depositing to the L2; connecting from the L2 means
    /// withdrawing back to the L1. Any other chain id fails with
    /// [`RouteError::UnsupportedNetwork`].
    pub fn resolve(&self, chain_id: ChainId) -> Result<ResolvedRoute, RouteError> {
        if chain_id == self.l1.chain_id {
            Ok(ResolvedRoute {
                direction: BridgeDirection::Deposit,
                origin: self.l1.clone(),
                destination: self.l2.clone(),
            })
        } else if chain_id == self.l2.chain_id {
            Ok(ResolvedRoute {
                direction: BridgeDirection::Withdraw,
                origin: self.l2.clone(),
                destination: self.l1.clone(),
            })
        } else {
            Err(RouteError::UnsupportedNetwork(chain_id))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn testnet() -> NetworkConfig {
        NetworkConfig::testnet("http://localhost:8545", "http://localhost:9545")
    }

    #[test]
    fn l1_chain_resolves_to_deposit() {
        let route = testnet().resolve(ETHEREUM_GOERLI).unwrap();
        assert_eq!(route.direction, BridgeDirection::Deposit);
        assert_eq!(route.origin.chain_id, ETHEREUM_GOERLI);
        assert_eq!(route.destination.chain_id, OPTIMISM_GOERLI);
    }

    #[test]
    fn l2_chain_resolves_to_withdraw() {
        let route = testnet().resolve(OPTIMISM_GOERLI).unwrap();
        assert_eq!(route.direction, BridgeDirection::Withdraw);
        assert_eq!(route.origin.chain_id, OPTIMISM_GOERLI);
        assert_eq!(route.destination.chain_id, ETHEREUM_GOERLI);
    }

    #[test]
    fn mainnet_preset_resolves_both_roles() {
        let network = NetworkConfig::mainnet("http://localhost:8545", "http://localhost:9545");
        assert_eq!(
            network.resolve(ETHEREUM_MAINNET).unwrap().direction,
            BridgeDirection::Deposit
        );
        assert_eq!(
            network.resolve(OPTIMISM_MAINNET).unwrap().direction,
            BridgeDirection::Withdraw
        );
    }

    #[test]
    fn unknown_chain_id_never_defaults() {
        let unknown = ChainId::new(1337);
        assert_eq!(
            testnet().resolve(unknown),
            Err(RouteError::UnsupportedNetwork(unknown))
        );
    }
}
