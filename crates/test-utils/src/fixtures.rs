//! Shared fixtures for bridge tests.

use opbridge_primitives::{
    network::NetworkConfig,
    request::SignerContext,
    types::{EvmAddress, WeiAmount, ADDRESS_SIZE, WEI_PER_ETH},
};

/// A testnet network config with local RPC endpoints.
pub fn testnet_network() -> NetworkConfig {
    NetworkConfig::testnet("http://localhost:8545", "http://localhost:9545")
}

/// The canonical test amount: 0.1 ETH in wei.
pub fn test_amount() -> WeiAmount {
    WeiAmount::from_wei(WEI_PER_ETH / 10).expect("non-zero")
}

/// A deterministic signer context.
pub fn test_signer() -> SignerContext {
    SignerContext::new(EvmAddress::new([0x42; ADDRESS_SIZE]))
}
