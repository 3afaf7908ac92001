//! Re-exports of the most commonly used primitives.

pub use crate::{
    errors::{AmountError, ParseError, RouteError},
    network::{ChainConfig, NetworkConfig, ResolvedRoute},
    request::{BridgeDirection, BridgeRequest, SignerContext},
    types::{ChainId, EvmAddress, TxHash, WeiAmount},
};
