//! The bridge orchestrator.
//!
//! Drives one bridge attempt at a time against the cross-chain messenger: submits the
//! deposit or withdrawal, sequences the confirmation/prove/finalize/relay waits with bounded
//! timeouts, publishes ordered progress events for the presentation layer, and reports a
//! truthful terminal outcome. Each user session owns its own orchestrator instance; progress
//! state is never shared across sessions.

pub mod config;
pub mod errors;
pub mod orchestrator;
pub mod outcome;

pub use config::OrchestratorConfig;
pub use errors::BridgeError;
pub use orchestrator::BridgeOrchestrator;
pub use outcome::{BridgeOutcome, TerminalStatus};
