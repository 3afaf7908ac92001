//! The terminal record of one bridge attempt.

use std::time::Duration;

use opbridge_primitives::types::TxHash;
use serde::{Deserialize, Serialize};

/// How a bridge attempt terminated.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TerminalStatus {
    /// The message was relayed on the destination chain.
    Success,

    /// The attempt aborted before relay.
    Failed {
        /// A human-readable description of the failure.
        reason: String,
    },
}

/// The terminal record of one bridge attempt.
///
/// The hash is preserved whenever submission happened, even if a later step failed, so the
/// user can keep tracking the transaction externally. The orchestrator guarantees truthful
/// reporting of the stage reached, not eventual relay completion.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BridgeOutcome {
    /// The bridge transaction hash, if submission happened.
    pub tx_hash: Option<TxHash>,

    /// Wall-clock time from submission start to the terminal state.
    pub elapsed: Duration,

    /// How the attempt terminated.
    pub status: TerminalStatus,
}

impl BridgeOutcome {
    /// Whether the attempt completed with the message relayed.
    pub const fn is_success(&self) -> bool {
        matches!(self.status, TerminalStatus::Success)
    }
}
