//! Errors surfaced by messenger implementations.

use opbridge_primitives::types::TxHash;
use thiserror::Error;

/// Error from a cross-chain messenger call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MessengerError {
    /// The wallet or RPC provider rejected the request (declined signature, insufficient
    /// funds, malformed call).
    #[error("provider rejected the request: {0}")]
    Provider(String),

    /// The transaction was dropped from the mempool or reverted before inclusion.
    #[error("transaction {0} was dropped or reverted")]
    TransactionDropped(TxHash),

    /// The messenger could not query or advance the message status.
    #[error("message status query for {tx_hash} failed: {cause}")]
    StatusQuery {
        /// The bridge transaction whose message was being tracked.
        tx_hash: TxHash,
        /// The underlying failure.
        cause: String,
    },
}
