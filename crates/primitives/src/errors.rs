//! Errors for the bridge primitives.

use thiserror::Error;

use crate::types::ChainId;

/// Error while resolving a chain id to a bridge route.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    /// The chain id is neither the configured L1 nor the configured L2.
    ///
    /// This is a fail-fast error: no transaction is attempted on an unrecognized network.
    #[error("unsupported network: chain id {0} is not a configured bridge endpoint")]
    UnsupportedNetwork(ChainId),
}

/// Error while constructing a bridge amount.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AmountError {
    /// Bridge amounts must be strictly positive.
    #[error("bridge amount must be greater than zero")]
    ZeroAmount,
}

/// Error while parsing a hex-encoded value such as an address or a transaction hash.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The value is not valid hex.
    #[error("invalid hex string: {0}")]
    InvalidHex(String),

    /// The decoded value has the wrong length.
    #[error("expected {expected} bytes, got {got}")]
    InvalidLength {
        /// The required byte length.
        expected: usize,
        /// The byte length that was actually decoded.
        got: usize,
    },
}
