//! Test utilities for the bridge workspace.
//!
//! Provides a scriptable mock messenger with call recording, plus the fixtures
//! (networks, amounts, signers) that the orchestrator tests share.

pub mod fixtures;
pub mod messenger;
pub mod prelude;
