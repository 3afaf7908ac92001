//! Core types shared across the bridge workspace: chain identifiers, amounts, transaction
//! hashes, bridge requests and the direction/network resolver.

pub mod errors;
pub mod network;
pub mod prelude;
pub mod request;
pub mod types;
