//! The cross-chain messenger trait.

use async_trait::async_trait;
use opbridge_primitives::types::{TxHash, WeiAmount};

use crate::{errors::MessengerError, status::MessageStatus};

/// A bridge transaction that has been accepted by the origin chain's mempool.
///
/// The hash is available immediately on submission, before any confirmation, so callers can
/// surface it for external tracking even if the rest of the sequence fails.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct PendingBridgeTx {
    /// The hash of the submitted transaction.
    pub tx_hash: TxHash,
}

/// The cross-chain messaging operations the bridge orchestrator depends on.
///
/// Implementations are expected to be cheap to share behind an [`Arc`](std::sync::Arc): the
/// underlying RPC connections are read-shared across attempts and never mutated.
#[async_trait]
pub trait CrossChainMessenger: Send + Sync {
    /// Submits an L1 to L2 ETH transfer on the origin chain.
    async fn deposit_eth(&self, amount: WeiAmount) -> Result<PendingBridgeTx, MessengerError>;

    /// Submits an L2 to L1 ETH transfer on the origin chain.
    async fn withdraw_eth(&self, amount: WeiAmount) -> Result<PendingBridgeTx, MessengerError>;

    /// Suspends until the given transaction is confirmed on its origin chain.
    async fn wait_for_confirmation(&self, tx_hash: TxHash) -> Result<(), MessengerError>;

    /// Proves the withdrawal message on the destination chain.
    ///
    /// Only meaningful on the withdraw path, after the message is ready to prove.
    async fn prove_message(&self, tx_hash: TxHash) -> Result<(), MessengerError>;

    /// Finalizes the withdrawal message on the destination chain after the challenge period.
    ///
    /// Only meaningful on the withdraw path, after the message is ready for relay.
    async fn finalize_message(&self, tx_hash: TxHash) -> Result<(), MessengerError>;

    /// Suspends until the message reaches the target status, or fails.
    ///
    /// Implementations may block indefinitely; callers are responsible for bounding the wait.
    async fn wait_for_message_status(
        &self,
        tx_hash: TxHash,
        target: MessageStatus,
    ) -> Result<(), MessengerError>;
}
