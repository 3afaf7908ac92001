//! Functionality shared across the bridge workspace that is not domain-specific.

pub mod logging;
