//! The states of one bridge attempt.

use std::fmt;

use opbridge_primitives::types::TxHash;
use serde::{Deserialize, Serialize};

/// The step an in-progress bridge attempt is currently suspended on.
///
/// The deposit path only visits `Submitting`, `AwaitingConfirmation` and `AwaitingRelay`;
/// the withdraw path visits every stage in declaration order.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BridgeStage {
    /// The bridge transaction is being submitted on the origin chain.
    Submitting,

    /// Waiting for the bridge transaction to confirm on the origin chain.
    AwaitingConfirmation,

    /// Waiting for the withdrawal message to become provable (withdraw only).
    AwaitingProvable,

    /// The withdrawal proof is being submitted on the destination chain (withdraw only).
    Proving,

    /// In the challenge period, waiting for the message to become relayable (withdraw only).
    AwaitingRelayable,

    /// The withdrawal message is being finalized on the destination chain (withdraw only).
    Finalizing,

    /// Waiting for the message to be relayed on the destination chain.
    AwaitingRelay,
}

impl fmt::Display for BridgeStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let stage = match self {
            BridgeStage::Submitting => "submitting",
            BridgeStage::AwaitingConfirmation => "awaiting-confirmation",
            BridgeStage::AwaitingProvable => "awaiting-provable",
            BridgeStage::Proving => "proving",
            BridgeStage::AwaitingRelayable => "awaiting-relayable",
            BridgeStage::Finalizing => "finalizing",
            BridgeStage::AwaitingRelay => "awaiting-relay",
        };
        write!(f, "{stage}")
    }
}

/// The state of one bridge attempt.
///
/// Transitions are strictly forward: `Idle -> InProgress{stage} -> {Succeeded | Failed}`.
/// There is no pause or resume; losing the machine loses in-flight tracking while the
/// underlying transaction keeps progressing on-chain.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttemptState {
    /// No attempt has started yet.
    Idle,

    /// An attempt is running.
    InProgress {
        /// The step currently awaited.
        stage: BridgeStage,
        /// Progress reached so far, monotonically non-decreasing.
        percent: u8,
        /// The transaction hash, present from the moment of submission.
        tx_hash: Option<TxHash>,
    },

    /// The message was relayed on the destination chain.
    Succeeded {
        /// The bridge transaction hash.
        tx_hash: TxHash,
    },

    /// The attempt aborted before relay.
    Failed {
        /// A human-readable description of what went wrong.
        reason: String,
        /// Progress frozen at its last value before the failure.
        percent: u8,
        /// The transaction hash, if submission had already happened.
        tx_hash: Option<TxHash>,
    },
}

impl AttemptState {
    /// Creates a new attempt state in `Idle`.
    pub const fn new() -> Self {
        AttemptState::Idle
    }

    /// The transaction hash captured so far, if any.
    pub const fn tx_hash(&self) -> Option<TxHash> {
        match self {
            AttemptState::Idle => None,
            AttemptState::InProgress { tx_hash, .. } => *tx_hash,
            AttemptState::Succeeded { tx_hash } => Some(*tx_hash),
            AttemptState::Failed { tx_hash, .. } => *tx_hash,
        }
    }

    /// Whether the attempt has reached a terminal state.
    pub const fn is_terminal(&self) -> bool {
        matches!(
            self,
            AttemptState::Succeeded { .. } | AttemptState::Failed { .. }
        )
    }
}

impl Default for AttemptState {
    fn default() -> Self {
        AttemptState::new()
    }
}

impl fmt::Display for AttemptState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttemptState::Idle => write!(f, "Idle"),
            AttemptState::InProgress { stage, .. } => write!(f, "InProgress({stage})"),
            AttemptState::Succeeded { .. } => write!(f, "Succeeded"),
            AttemptState::Failed { .. } => write!(f, "Failed"),
        }
    }
}
