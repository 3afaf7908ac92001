//! The events observed while driving one bridge attempt.

use std::fmt;

use opbridge_primitives::types::TxHash;
use serde::{Deserialize, Serialize};

/// Events fed into the bridge attempt machine by the orchestrator.
///
/// Each event corresponds to the completion of one asynchronous step against the messenger.
/// The prove/finalize events only apply to the withdraw path; feeding them to a deposit
/// attempt is a transition error.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttemptEvent {
    /// The orchestrator is about to submit the bridge transaction.
    SubmissionStarted,

    /// The origin chain accepted the bridge transaction.
    Submitted {
        /// The transaction hash, available before any confirmation.
        tx_hash: TxHash,
    },

    /// The bridge transaction confirmed on the origin chain.
    ConfirmedLocal,

    /// The withdrawal message became provable (withdraw only).
    ReadyToProve,

    /// The withdrawal proof was accepted (withdraw only).
    Proven,

    /// The challenge period elapsed; the message is relayable (withdraw only).
    ReadyForRelay,

    /// The withdrawal message was finalized (withdraw only).
    Finalized,

    /// The message was relayed on the destination chain.
    Relayed,

    /// A step failed; the attempt aborts with this reason.
    Failed {
        /// A human-readable description of the failure.
        reason: String,
    },
}

impl fmt::Display for AttemptEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let event = match self {
            AttemptEvent::SubmissionStarted => "SubmissionStarted",
            AttemptEvent::Submitted { .. } => "Submitted",
            AttemptEvent::ConfirmedLocal => "ConfirmedLocal",
            AttemptEvent::ReadyToProve => "ReadyToProve",
            AttemptEvent::Proven => "Proven",
            AttemptEvent::ReadyForRelay => "ReadyForRelay",
            AttemptEvent::Finalized => "Finalized",
            AttemptEvent::Relayed => "Relayed",
            AttemptEvent::Failed { .. } => "Failed",
        };
        write!(f, "{event}")
    }
}
