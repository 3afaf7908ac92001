//! Progress duties emitted by the bridge attempt machine.
//!
//! A duty here is an instruction to the presentation layer: render this status line and
//! progress value. The machine emits one at every stage transition so a stalled bridge is
//! diagnosable by the last-seen status.

use opbridge_primitives::types::TxHash;
use serde::{Deserialize, Serialize};

/// Status line while a deposit is being submitted on the L1.
pub const STATUS_DEPOSITING: &str = "Depositing asset on origin chain";

/// Status line while a withdrawal is being submitted on the L2.
pub const STATUS_WITHDRAWING: &str = "Withdrawing asset";

/// Status line while waiting for the origin-chain confirmation.
pub const STATUS_AWAITING_CONFIRMATION: &str = "Waiting for confirmation";

/// Status line while a withdrawal message is being proven.
pub const STATUS_PROVING: &str = "Proving message on destination chain";

/// Status line during the withdrawal challenge period.
pub const STATUS_CHALLENGE_PERIOD: &str = "In the challenge period, waiting for relay readiness";

/// Status line while a withdrawal message is being finalized.
pub const STATUS_FINALIZING: &str = "Finalizing message";

/// Status line while waiting for the destination-chain relay.
pub const STATUS_AWAITING_RELAY: &str = "Waiting for relay";

/// Status line on successful completion.
pub const STATUS_SUCCESS: &str = "Bridging successful";

/// A snapshot of observable attempt progress for the presentation layer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressUpdate {
    /// The human-readable status line. On failure this carries the error message, replacing
    /// (not clearing) the last status.
    pub status: String,

    /// Progress in percent, non-decreasing within an attempt, exactly 100 on success.
    pub percent: u8,

    /// Whether the attempt is still running.
    pub in_progress: bool,

    /// Whether the attempt has terminated successfully.
    pub success: bool,

    /// The bridge transaction hash, surfaced as soon as submission succeeds.
    pub tx_hash: Option<TxHash>,
}
