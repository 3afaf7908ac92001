//! The per-attempt bridge state machine.
//!
//! This crate holds the pure, synchronous core of the bridge orchestrator: given the events
//! observed while driving a deposit or withdrawal, it tracks the attempt's stage, enforces
//! the strictly-forward status progression, and emits the progress duties (status text plus
//! a 0-100 percentage) that a presentation layer renders. All I/O lives in the orchestrator;
//! this crate never suspends.

pub mod duties;
pub mod errors;
pub mod events;
pub mod machine;
pub mod state;
pub mod state_machine;

pub use duties::ProgressUpdate;
pub use errors::TransitionErr;
pub use events::AttemptEvent;
pub use machine::{AttemptCfg, BridgeSM};
pub use state::{AttemptState, BridgeStage};
pub use state_machine::StateMachine;
