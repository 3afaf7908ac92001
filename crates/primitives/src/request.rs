//! The bridge request value object and its direction.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::types::{EvmAddress, WeiAmount};

/// The direction of a bridge transfer, derived from the chain the user is connected to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BridgeDirection {
    /// Value transfer from the L1 (origin, higher-security chain) to the L2 rollup.
    Deposit,

    /// Value transfer from the L2 rollup back to the L1.
    ///
    /// Requires the additional prove/challenge-period/finalize sequence before the funds are
    /// released on the L1.
    Withdraw,
}

impl fmt::Display for BridgeDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BridgeDirection::Deposit => write!(f, "deposit"),
            BridgeDirection::Withdraw => write!(f, "withdraw"),
        }
    }
}

/// An immutable description of one user-triggered bridge attempt.
///
/// Created once per attempt and never persisted beyond the in-memory session.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BridgeRequest {
    amount: WeiAmount,
    direction: BridgeDirection,
    initiator: EvmAddress,
}

impl BridgeRequest {
    /// Creates a new bridge request.
    pub const fn new(amount: WeiAmount, direction: BridgeDirection, initiator: EvmAddress) -> Self {
        BridgeRequest {
            amount,
            direction,
            initiator,
        }
    }

    /// The amount to bridge, in wei.
    pub const fn amount(&self) -> WeiAmount {
        self.amount
    }

    /// The direction of the transfer.
    pub const fn direction(&self) -> BridgeDirection {
        self.direction
    }

    /// The address initiating the transfer.
    pub const fn initiator(&self) -> EvmAddress {
        self.initiator
    }
}

/// The externally supplied signing context for a bridge attempt.
///
/// The orchestrator only needs to know that a signer is bound and which address it controls;
/// transaction authorization itself happens inside the messenger client.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SignerContext {
    /// The address of the connected account.
    pub address: EvmAddress,
}

impl SignerContext {
    /// Creates a signer context for the given address.
    pub const fn new(address: EvmAddress) -> Self {
        SignerContext { address }
    }
}
