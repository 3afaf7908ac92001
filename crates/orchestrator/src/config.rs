//! Orchestrator behavior configuration.

use std::time::Duration;

/// Default bound on the origin-chain confirmation wait.
pub const DEFAULT_CONFIRMATION_TIMEOUT: Duration = Duration::from_secs(120);

/// Default bound on each message-status wait.
pub const DEFAULT_RELAY_TIMEOUT: Duration = Duration::from_secs(300);

/// Default capacity of the progress event channel.
pub const DEFAULT_EVENT_CAPACITY: usize = 64;

/// The configuration values that dictate the behavior of one orchestrator instance.
///
/// The underlying messenger's status waits have no intrinsic upper bound; these timeouts
/// ensure a stalled bridge surfaces an error instead of suspending forever.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrchestratorConfig {
    /// How long to wait for the bridge transaction to confirm on its origin chain.
    pub confirmation_timeout: Duration,

    /// How long to wait for each message status transition on the destination chain.
    pub relay_timeout: Duration,

    /// Capacity of the progress event channel handed to subscribers.
    ///
    /// One attempt emits fewer than ten events, so the default never drops updates unless a
    /// subscriber stops polling entirely.
    pub event_capacity: usize,
}

impl Default for OrchestratorConfig {
    fn default() -> Self {
        OrchestratorConfig {
            confirmation_timeout: DEFAULT_CONFIRMATION_TIMEOUT,
            relay_timeout: DEFAULT_RELAY_TIMEOUT,
            event_capacity: DEFAULT_EVENT_CAPACITY,
        }
    }
}
