//! Interface to the external cross-chain messenger.
//!
//! The bridge orchestrator is a consumer of a cross-chain messaging primitive; this crate
//! defines the seam. The trait mirrors the operations the orchestrator needs (submit a
//! deposit or withdrawal, wait for confirmations and message statuses, prove and finalize a
//! withdrawal) without binding to any particular SDK. A simulated implementation drives the
//! full status progression in-process for dev runs and tests.

pub mod config;
pub mod errors;
pub mod simulated;
pub mod status;
pub mod traits;

pub use config::MessengerConfig;
pub use errors::MessengerError;
pub use status::MessageStatus;
pub use traits::{CrossChainMessenger, PendingBridgeTx};
