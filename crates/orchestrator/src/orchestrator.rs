//! The session-scoped bridge orchestrator.

use std::sync::Arc;

use opbridge_messenger::{CrossChainMessenger, MessageStatus};
use opbridge_primitives::{
    network::NetworkConfig,
    request::{BridgeDirection, BridgeRequest, SignerContext},
    types::{ChainId, TxHash, WeiAmount},
};
use opbridge_sm::{
    AttemptCfg, AttemptEvent, BridgeSM, BridgeStage, ProgressUpdate, StateMachine,
};
use tokio::{
    sync::{broadcast, Mutex},
    time::{timeout, Instant},
};
use tracing::{debug, info, warn};

use crate::{
    config::OrchestratorConfig,
    errors::BridgeError,
    outcome::{BridgeOutcome, TerminalStatus},
};

/// Drives bridge attempts for one user session.
///
/// The orchestrator owns the mutable progress state of at most one in-flight attempt;
/// concurrent sessions each construct their own instance. The messenger handle is
/// read-shared and never mutated, so it can be shared freely across instances.
#[derive(Debug)]
pub struct BridgeOrchestrator<M> {
    network: NetworkConfig,
    messenger: Arc<M>,
    cfg: OrchestratorConfig,
    events: broadcast::Sender<ProgressUpdate>,
    attempt_lock: Mutex<()>,
}

impl<M> BridgeOrchestrator<M>
where
    M: CrossChainMessenger,
{
    /// Creates an orchestrator for one session over the given chain pair.
    pub fn new(network: NetworkConfig, messenger: Arc<M>, cfg: OrchestratorConfig) -> Self {
        let (events, _) = broadcast::channel(cfg.event_capacity);
        BridgeOrchestrator {
            network,
            messenger,
            cfg,
            events,
            attempt_lock: Mutex::new(()),
        }
    }

    /// Subscribes to the ordered stream of progress updates.
    ///
    /// Dropping the receiver detaches the observer without affecting the attempt; the
    /// underlying transactions keep progressing on-chain regardless of who is watching.
    pub fn subscribe(&self) -> broadcast::Receiver<ProgressUpdate> {
        self.events.subscribe()
    }

    /// Executes one bridge attempt end to end.
    ///
    /// Fails fast with [`BridgeError::UnsupportedNetwork`], [`BridgeError::SignerUnavailable`]
    /// or [`BridgeError::AttemptInFlight`] before anything is submitted. Once submission has
    /// started, failures are reported through the returned [`BridgeOutcome`] instead, with
    /// the transaction hash preserved if one was captured.
    pub async fn execute_bridge(
        &self,
        amount: WeiAmount,
        chain_id: ChainId,
        signer: Option<SignerContext>,
    ) -> Result<BridgeOutcome, BridgeError> {
        // reject re-entrant calls instead of interleaving state updates
        let _guard = self
            .attempt_lock
            .try_lock()
            .map_err(|_| BridgeError::AttemptInFlight)?;

        let route = self.network.resolve(chain_id)?;
        let signer = signer.ok_or(BridgeError::SignerUnavailable)?;
        let request = BridgeRequest::new(amount, route.direction, signer.address);

        info!(
            %chain_id,
            direction = %request.direction(),
            amount = %request.amount(),
            initiator = %request.initiator(),
            "starting bridge attempt"
        );

        let started = Instant::now();
        let mut sm = BridgeSM::new(AttemptCfg::new(request.direction()));

        let result = match request.direction() {
            BridgeDirection::Deposit => self.run_deposit(&mut sm, &request).await,
            BridgeDirection::Withdraw => self.run_withdraw(&mut sm, &request).await,
        };

        match result {
            Ok(tx_hash) => {
                let elapsed = started.elapsed();
                info!(%tx_hash, ?elapsed, "bridge attempt succeeded");
                Ok(BridgeOutcome {
                    tx_hash: Some(tx_hash),
                    elapsed,
                    status: TerminalStatus::Success,
                })
            }
            Err(err) => {
                let reason = err.to_string();
                let tx_hash = sm.tx_hash();
                warn!(%reason, ?tx_hash, "bridge attempt failed");
                self.advance(&mut sm, AttemptEvent::Failed {
                    reason: reason.clone(),
                })?;
                Ok(BridgeOutcome {
                    tx_hash,
                    elapsed: started.elapsed(),
                    status: TerminalStatus::Failed { reason },
                })
            }
        }
    }

    /// The deposit sequence: submit on the L1, wait for the local confirmation, then wait
    /// for the message to be relayed on the L2.
    async fn run_deposit(
        &self,
        sm: &mut BridgeSM,
        request: &BridgeRequest,
    ) -> Result<TxHash, BridgeError> {
        self.advance(sm, AttemptEvent::SubmissionStarted)?;
        let pending = self
            .messenger
            .deposit_eth(request.amount())
            .await
            .map_err(|e| BridgeError::SubmissionFailed(e.to_string()))?;
        let tx_hash = pending.tx_hash;
        self.advance(sm, AttemptEvent::Submitted { tx_hash })?;

        self.await_confirmation(tx_hash).await?;
        self.advance(sm, AttemptEvent::ConfirmedLocal)?;

        self.await_status(tx_hash, MessageStatus::Relayed, BridgeStage::AwaitingRelay)
            .await?;
        self.advance(sm, AttemptEvent::Relayed)?;

        Ok(tx_hash)
    }

    /// The withdraw sequence: submit on the L2, wait for the local confirmation, then prove,
    /// sit out the challenge period, finalize, and wait for the relay on the L1.
    async fn run_withdraw(
        &self,
        sm: &mut BridgeSM,
        request: &BridgeRequest,
    ) -> Result<TxHash, BridgeError> {
        self.advance(sm, AttemptEvent::SubmissionStarted)?;
        let pending = self
            .messenger
            .withdraw_eth(request.amount())
            .await
            .map_err(|e| BridgeError::SubmissionFailed(e.to_string()))?;
        let tx_hash = pending.tx_hash;
        self.advance(sm, AttemptEvent::Submitted { tx_hash })?;

        self.await_confirmation(tx_hash).await?;
        self.advance(sm, AttemptEvent::ConfirmedLocal)?;

        self.await_status(
            tx_hash,
            MessageStatus::ReadyToProve,
            BridgeStage::AwaitingProvable,
        )
        .await?;
        self.advance(sm, AttemptEvent::ReadyToProve)?;

        self.messenger
            .prove_message(tx_hash)
            .await
            .map_err(|e| BridgeError::StageFailed {
                stage: BridgeStage::Proving,
                cause: e.to_string(),
            })?;
        self.advance(sm, AttemptEvent::Proven)?;

        self.await_status(
            tx_hash,
            MessageStatus::ReadyForRelay,
            BridgeStage::AwaitingRelayable,
        )
        .await?;
        self.advance(sm, AttemptEvent::ReadyForRelay)?;

        self.messenger
            .finalize_message(tx_hash)
            .await
            .map_err(|e| BridgeError::StageFailed {
                stage: BridgeStage::Finalizing,
                cause: e.to_string(),
            })?;
        self.advance(sm, AttemptEvent::Finalized)?;

        self.await_status(tx_hash, MessageStatus::Relayed, BridgeStage::AwaitingRelay)
            .await?;
        self.advance(sm, AttemptEvent::Relayed)?;

        Ok(tx_hash)
    }

    /// Waits for the origin-chain confirmation, bounded by the configured timeout.
    async fn await_confirmation(&self, tx_hash: TxHash) -> Result<(), BridgeError> {
        match timeout(
            self.cfg.confirmation_timeout,
            self.messenger.wait_for_confirmation(tx_hash),
        )
        .await
        {
            Err(_) => Err(BridgeError::ConfirmationFailed(format!(
                "no confirmation within {:?}",
                self.cfg.confirmation_timeout
            ))),
            Ok(Err(err)) => Err(BridgeError::ConfirmationFailed(err.to_string())),
            Ok(Ok(())) => Ok(()),
        }
    }

    /// Waits for a message status, bounded by the configured relay timeout.
    async fn await_status(
        &self,
        tx_hash: TxHash,
        target: MessageStatus,
        stage: BridgeStage,
    ) -> Result<(), BridgeError> {
        debug!(%tx_hash, %target, "waiting for message status");
        match timeout(
            self.cfg.relay_timeout,
            self.messenger.wait_for_message_status(tx_hash, target),
        )
        .await
        {
            Err(_) => Err(BridgeError::RelayTimeout {
                target,
                bound: self.cfg.relay_timeout,
            }),
            Ok(Err(err)) => Err(BridgeError::StageFailed {
                stage,
                cause: err.to_string(),
            }),
            Ok(Ok(())) => Ok(()),
        }
    }

    /// Applies an event to the attempt machine and publishes the resulting updates.
    fn advance(&self, sm: &mut BridgeSM, event: AttemptEvent) -> Result<(), BridgeError> {
        let updates = sm.process_event(event)?;
        for update in updates {
            debug!(percent = update.percent, status = %update.status, "bridge progress");
            // a send error only means nobody is subscribed right now
            let _ = self.events.send(update);
        }
        Ok(())
    }
}
