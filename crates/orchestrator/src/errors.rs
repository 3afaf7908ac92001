//! Error types for the bridge orchestrator.

use std::time::Duration;

use opbridge_messenger::MessageStatus;
use opbridge_primitives::errors::RouteError;
use opbridge_sm::{BridgeStage, TransitionErr};
use thiserror::Error;

/// Unified error type for everything that can happen while executing a bridge attempt.
///
/// The first three variants fail fast, before any transaction is submitted; the rest abort
/// an attempt that is already in flight and are reported through the terminal outcome.
#[derive(Debug, Error)]
pub enum BridgeError {
    /// The connected chain id maps to neither side of the configured bridge.
    #[error(transparent)]
    UnsupportedNetwork(#[from] RouteError),

    /// No wallet signer is bound for the connected chain.
    #[error("no signer available for the connected chain")]
    SignerUnavailable,

    /// Another attempt on this orchestrator is still in flight.
    #[error("a bridge attempt is already in flight for this session")]
    AttemptInFlight,

    /// The wallet or provider rejected the bridge transaction submission.
    #[error("bridge submission failed: {0}")]
    SubmissionFailed(String),

    /// The bridge transaction reverted or was dropped before inclusion.
    #[error("bridge transaction was not confirmed: {0}")]
    ConfirmationFailed(String),

    /// A message-status wait exceeded the configured bound.
    #[error("timed out after {bound:?} waiting for message status {target}")]
    RelayTimeout {
        /// The status that was being waited for.
        target: MessageStatus,
        /// The configured wait bound that was exceeded.
        bound: Duration,
    },

    /// A prove, finalize or status-wait step failed.
    #[error("bridge stage {stage} failed: {cause}")]
    StageFailed {
        /// The stage that was executing when the failure happened.
        stage: BridgeStage,
        /// The underlying failure.
        cause: String,
    },

    /// The attempt machine rejected an event.
    ///
    /// This indicates a sequencing bug in the orchestrator itself, not a chain failure.
    #[error("attempt state machine rejected an event: {0}")]
    Transition(#[from] TransitionErr),
}
