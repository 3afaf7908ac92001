//! A scriptable mock messenger with call recording.

use std::future;

use async_trait::async_trait;
use opbridge_messenger::{
    CrossChainMessenger, MessageStatus, MessengerError, PendingBridgeTx,
};
use opbridge_primitives::types::{TxHash, WeiAmount, TX_HASH_SIZE};
use parking_lot::Mutex;

/// The transaction hash every mock submission returns.
pub const MOCK_TX_HASH_BYTE: u8 = 0xab;

/// The hash returned by every mock submission.
pub fn mock_tx_hash() -> TxHash {
    TxHash::new([MOCK_TX_HASH_BYTE; TX_HASH_SIZE])
}

/// One recorded call against the mock messenger, in invocation order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MessengerCall {
    /// `deposit_eth` with the given amount.
    DepositEth(WeiAmount),
    /// `withdraw_eth` with the given amount.
    WithdrawEth(WeiAmount),
    /// `wait_for_confirmation` for the given hash.
    WaitForConfirmation(TxHash),
    /// `prove_message` for the given hash.
    ProveMessage(TxHash),
    /// `finalize_message` for the given hash.
    FinalizeMessage(TxHash),
    /// `wait_for_message_status` for the given hash and target.
    WaitForMessageStatus(TxHash, MessageStatus),
}

/// A messenger whose behavior is scripted per step.
///
/// By default every call succeeds immediately. Builder methods inject a submission error, a
/// prove/finalize error, or make a specific wait hang forever (to exercise timeout bounds).
/// Every call is recorded so tests can assert exact call sequences, including "no calls at
/// all" for fail-fast paths.
#[derive(Debug, Default)]
pub struct MockMessenger {
    calls: Mutex<Vec<MessengerCall>>,
    submit_error: Option<String>,
    prove_error: Option<String>,
    finalize_error: Option<String>,
    confirmation_hangs: bool,
    hang_on_status: Option<MessageStatus>,
    status_error: Option<(MessageStatus, String)>,
}

impl MockMessenger {
    /// A messenger where every step succeeds immediately.
    pub fn working() -> Self {
        Self::default()
    }

    /// Makes both submission calls fail with the given provider message.
    pub fn with_submit_error(mut self, message: impl Into<String>) -> Self {
        self.submit_error = Some(message.into());
        self
    }

    /// Makes `prove_message` fail with the given message.
    pub fn with_prove_error(mut self, message: impl Into<String>) -> Self {
        self.prove_error = Some(message.into());
        self
    }

    /// Makes `finalize_message` fail with the given message.
    pub fn with_finalize_error(mut self, message: impl Into<String>) -> Self {
        self.finalize_error = Some(message.into());
        self
    }

    /// Makes the origin-chain confirmation wait never resolve.
    pub fn with_confirmation_hang(mut self) -> Self {
        self.confirmation_hangs = true;
        self
    }

    /// Makes the wait for the given status never resolve.
    pub fn with_status_hang(mut self, target: MessageStatus) -> Self {
        self.hang_on_status = Some(target);
        self
    }

    /// Makes the wait for the given status fail with the given message.
    pub fn with_status_error(mut self, target: MessageStatus, message: impl Into<String>) -> Self {
        self.status_error = Some((target, message.into()));
        self
    }

    /// The calls made so far, in invocation order.
    pub fn calls(&self) -> Vec<MessengerCall> {
        self.calls.lock().clone()
    }

    fn record(&self, call: MessengerCall) {
        self.calls.lock().push(call);
    }
}

#[async_trait]
impl CrossChainMessenger for MockMessenger {
    async fn deposit_eth(&self, amount: WeiAmount) -> Result<PendingBridgeTx, MessengerError> {
        self.record(MessengerCall::DepositEth(amount));
        match &self.submit_error {
            Some(message) => Err(MessengerError::Provider(message.clone())),
            None => Ok(PendingBridgeTx {
                tx_hash: mock_tx_hash(),
            }),
        }
    }

    async fn withdraw_eth(&self, amount: WeiAmount) -> Result<PendingBridgeTx, MessengerError> {
        self.record(MessengerCall::WithdrawEth(amount));
        match &self.submit_error {
            Some(message) => Err(MessengerError::Provider(message.clone())),
            None => Ok(PendingBridgeTx {
                tx_hash: mock_tx_hash(),
            }),
        }
    }

    async fn wait_for_confirmation(&self, tx_hash: TxHash) -> Result<(), MessengerError> {
        self.record(MessengerCall::WaitForConfirmation(tx_hash));
        if self.confirmation_hangs {
            future::pending::<()>().await;
        }
        Ok(())
    }

    async fn prove_message(&self, tx_hash: TxHash) -> Result<(), MessengerError> {
        self.record(MessengerCall::ProveMessage(tx_hash));
        match &self.prove_error {
            Some(message) => Err(MessengerError::StatusQuery {
                tx_hash,
                cause: message.clone(),
            }),
            None => Ok(()),
        }
    }

    async fn finalize_message(&self, tx_hash: TxHash) -> Result<(), MessengerError> {
        self.record(MessengerCall::FinalizeMessage(tx_hash));
        match &self.finalize_error {
            Some(message) => Err(MessengerError::StatusQuery {
                tx_hash,
                cause: message.clone(),
            }),
            None => Ok(()),
        }
    }

    async fn wait_for_message_status(
        &self,
        tx_hash: TxHash,
        target: MessageStatus,
    ) -> Result<(), MessengerError> {
        self.record(MessengerCall::WaitForMessageStatus(tx_hash, target));
        if self.hang_on_status == Some(target) {
            future::pending::<()>().await;
        }
        if let Some((failing_target, message)) = &self.status_error {
            if *failing_target == target {
                return Err(MessengerError::StatusQuery {
                    tx_hash,
                    cause: message.clone(),
                });
            }
        }
        Ok(())
    }
}
