//! Re-exports of the most commonly used test utilities.

pub use crate::{
    fixtures::{test_amount, test_signer, testnet_network},
    messenger::{mock_tx_hash, MessengerCall, MockMessenger},
};
