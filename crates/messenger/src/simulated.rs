//! An in-process messenger that simulates the full status progression.
//!
//! Used by the dev binary to exercise the orchestrator end-to-end without live chains.
//! Each messenger call sleeps for a configurable step delay before completing; status waits
//! for the slow withdrawal statuses take proportionally longer so the simulated timeline
//! resembles a real bridge (confirmation, then proving, then the challenge period).

use std::{
    sync::atomic::{AtomicU64, Ordering},
    time::Duration,
};

use async_trait::async_trait;
use opbridge_primitives::types::{TxHash, WeiAmount, TX_HASH_SIZE};
use tokio::time::sleep;
use tracing::{debug, info};

use crate::{
    config::MessengerConfig,
    errors::MessengerError,
    status::MessageStatus,
    traits::{CrossChainMessenger, PendingBridgeTx},
};

/// Marker byte for simulated deposit transaction hashes.
const DEPOSIT_HASH_MARKER: u8 = 0xd1;

/// Marker byte for simulated withdrawal transaction hashes.
const WITHDRAW_HASH_MARKER: u8 = 0xd2;

/// A messenger that completes every operation locally after a configurable delay.
#[derive(Debug)]
pub struct SimulatedMessenger {
    config: MessengerConfig,
    step_delay: Duration,
    next_nonce: AtomicU64,
}

impl SimulatedMessenger {
    /// Creates a simulated messenger for the configured chain pair.
    pub fn new(config: MessengerConfig, step_delay: Duration) -> Self {
        info!(
            l1_chain_id = %config.l1.chain_id,
            l2_chain_id = %config.l2.chain_id,
            bedrock = config.bedrock,
            ?step_delay,
            "constructed simulated messenger"
        );

        SimulatedMessenger {
            config,
            step_delay,
            next_nonce: AtomicU64::new(0),
        }
    }

    /// The config this messenger was constructed with.
    pub const fn config(&self) -> &MessengerConfig {
        &self.config
    }

    fn synth_tx_hash(&self, marker: u8) -> TxHash {
        let nonce = self.next_nonce.fetch_add(1, Ordering::Relaxed);
        let mut bytes = [marker; TX_HASH_SIZE];
        bytes[TX_HASH_SIZE - 8..].copy_from_slice(&nonce.to_be_bytes());
        TxHash::new(bytes)
    }

    /// How many step delays a wait for the given status takes.
    const fn wait_factor(target: MessageStatus) -> u32 {
        match target {
            MessageStatus::Submitted | MessageStatus::ConfirmedLocal => 1,
            MessageStatus::ReadyToProve | MessageStatus::Proven => 2,
            // the challenge period and the final relay are the long waits on a real bridge
            MessageStatus::ReadyForRelay | MessageStatus::Relayed => 3,
        }
    }
}

#[async_trait]
impl CrossChainMessenger for SimulatedMessenger {
    async fn deposit_eth(&self, amount: WeiAmount) -> Result<PendingBridgeTx, MessengerError> {
        sleep(self.step_delay).await;
        let tx_hash = self.synth_tx_hash(DEPOSIT_HASH_MARKER);
        debug!(%amount, %tx_hash, "simulated deposit submitted");
        Ok(PendingBridgeTx { tx_hash })
    }

    async fn withdraw_eth(&self, amount: WeiAmount) -> Result<PendingBridgeTx, MessengerError> {
        sleep(self.step_delay).await;
        let tx_hash = self.synth_tx_hash(WITHDRAW_HASH_MARKER);
        debug!(%amount, %tx_hash, "simulated withdrawal submitted");
        Ok(PendingBridgeTx { tx_hash })
    }

    async fn wait_for_confirmation(&self, tx_hash: TxHash) -> Result<(), MessengerError> {
        sleep(self.step_delay).await;
        debug!(%tx_hash, "simulated confirmation reached");
        Ok(())
    }

    async fn prove_message(&self, tx_hash: TxHash) -> Result<(), MessengerError> {
        sleep(self.step_delay).await;
        debug!(%tx_hash, "simulated message proven");
        Ok(())
    }

    async fn finalize_message(&self, tx_hash: TxHash) -> Result<(), MessengerError> {
        sleep(self.step_delay).await;
        debug!(%tx_hash, "simulated message finalized");
        Ok(())
    }

    async fn wait_for_message_status(
        &self,
        tx_hash: TxHash,
        target: MessageStatus,
    ) -> Result<(), MessengerError> {
        sleep(self.step_delay * Self::wait_factor(target)).await;
        debug!(%tx_hash, %target, "simulated message status reached");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use opbridge_primitives::network::NetworkConfig;

    use super::*;

    fn simulated() -> SimulatedMessenger {
        let network = NetworkConfig::testnet("http://localhost:8545", "http://localhost:9545");
        SimulatedMessenger::new(
            MessengerConfig::new(&network, true),
            Duration::from_millis(10),
        )
    }

    #[tokio::test(start_paused = true)]
    async fn submissions_yield_distinct_hashes() {
        let messenger = simulated();
        let amount = WeiAmount::from_wei(1_000).unwrap();

        let first = messenger.deposit_eth(amount).await.unwrap();
        let second = messenger.deposit_eth(amount).await.unwrap();
        let third = messenger.withdraw_eth(amount).await.unwrap();

        assert_ne!(first.tx_hash, second.tx_hash);
        assert_ne!(second.tx_hash, third.tx_hash);
    }

    #[tokio::test(start_paused = true)]
    async fn status_waits_complete() {
        let messenger = simulated();
        let tx_hash = TxHash::new([0u8; TX_HASH_SIZE]);

        messenger
            .wait_for_message_status(tx_hash, MessageStatus::Relayed)
            .await
            .unwrap();
    }
}
