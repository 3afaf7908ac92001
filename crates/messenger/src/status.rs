//! The cross-chain message status progression.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The status of a cross-chain message as reported by the messenger.
///
/// A message progresses monotonically through these statuses. The deposit path skips the
/// prove-side statuses entirely; the withdraw path visits all of them.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MessageStatus {
    /// The bridge transaction has been submitted on the origin chain.
    Submitted,

    /// The bridge transaction is confirmed on the origin chain.
    ConfirmedLocal,

    /// The withdrawal can now be proven on the destination chain (withdraw only).
    ReadyToProve,

    /// The withdrawal proof has been accepted on the destination chain (withdraw only).
    Proven,

    /// The challenge period has elapsed and the message can be finalized (withdraw only).
    ReadyForRelay,

    /// The message has been delivered and accepted on the destination chain.
    Relayed,
}

impl fmt::Display for MessageStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = match self {
            MessageStatus::Submitted => "submitted",
            MessageStatus::ConfirmedLocal => "confirmed-local",
            MessageStatus::ReadyToProve => "ready-to-prove",
            MessageStatus::Proven => "proven",
            MessageStatus::ReadyForRelay => "ready-for-relay",
            MessageStatus::Relayed => "relayed",
        };
        write!(f, "{status}")
    }
}
