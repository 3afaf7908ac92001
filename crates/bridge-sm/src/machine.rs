//! The Bridge Attempt State Machine.

use opbridge_primitives::{request::BridgeDirection, types::TxHash};
use serde::{Deserialize, Serialize};

use crate::{
    duties::{
        ProgressUpdate, STATUS_AWAITING_CONFIRMATION, STATUS_AWAITING_RELAY,
        STATUS_CHALLENGE_PERIOD, STATUS_DEPOSITING, STATUS_FINALIZING, STATUS_PROVING,
        STATUS_SUCCESS, STATUS_WITHDRAWING,
    },
    errors::{TransitionErr, TransitionResult},
    events::AttemptEvent,
    state::{AttemptState, BridgeStage},
    state_machine::StateMachine,
};

/// Progress reached once the bridge transaction submission starts.
pub const PERCENT_SUBMITTING: u8 = 20;

/// Progress reached once the origin chain accepted the transaction.
pub const PERCENT_CONFIRMING: u8 = 50;

/// Progress reached once a deposit only awaits the destination-chain relay.
pub const PERCENT_DEPOSIT_RELAY: u8 = 80;

/// Progress reached once a withdrawal enters finalization.
pub const PERCENT_FINALIZING: u8 = 90;

/// Progress on successful completion.
pub const PERCENT_DONE: u8 = 100;

/// The static configuration for a bridge attempt.
///
/// Set at the creation of the machine and unchanged by any transition.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AttemptCfg {
    direction: BridgeDirection,
}

impl AttemptCfg {
    /// Creates the configuration for an attempt in the given direction.
    pub const fn new(direction: BridgeDirection) -> Self {
        AttemptCfg { direction }
    }

    /// The direction of this attempt.
    pub const fn direction(&self) -> BridgeDirection {
        self.direction
    }
}

/// The state machine tracking one bridge attempt from submission to its terminal state.
///
/// The machine owns the attempt's mutable progress exclusively; a fresh machine is created
/// per attempt, so prior outcomes are never reused or mutated.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BridgeSM {
    /// The static configuration for this attempt.
    cfg: AttemptCfg,
    /// The current state of the attempt.
    state: AttemptState,
}

impl StateMachine for BridgeSM {
    type Duty = ProgressUpdate;
    type Event = AttemptEvent;
    type Error = TransitionErr;

    fn process_event(&mut self, event: Self::Event) -> Result<Vec<Self::Duty>, Self::Error> {
        match event {
            AttemptEvent::SubmissionStarted => self.process_submission_started(),
            AttemptEvent::Submitted { tx_hash } => self.process_submitted(tx_hash),
            AttemptEvent::ConfirmedLocal => self.process_confirmed_local(),
            AttemptEvent::ReadyToProve => self.process_ready_to_prove(),
            AttemptEvent::Proven => self.process_proven(),
            AttemptEvent::ReadyForRelay => self.process_ready_for_relay(),
            AttemptEvent::Finalized => self.process_finalized(),
            AttemptEvent::Relayed => self.process_relayed(),
            AttemptEvent::Failed { reason } => self.process_failed(reason),
        }
    }
}

impl BridgeSM {
    /// Creates a new attempt machine in the `Idle` state.
    pub const fn new(cfg: AttemptCfg) -> Self {
        BridgeSM {
            cfg,
            state: AttemptState::new(),
        }
    }

    /// Returns a reference to the configuration of this attempt.
    pub const fn cfg(&self) -> &AttemptCfg {
        &self.cfg
    }

    /// Returns a reference to the current state of this attempt.
    pub const fn state(&self) -> &AttemptState {
        &self.state
    }

    /// The transaction hash captured so far, if submission has happened.
    pub const fn tx_hash(&self) -> Option<TxHash> {
        self.state.tx_hash()
    }

    fn progress(
        &self,
        status: impl Into<String>,
        percent: u8,
        tx_hash: Option<TxHash>,
    ) -> ProgressUpdate {
        ProgressUpdate {
            status: status.into(),
            percent,
            in_progress: true,
            success: false,
            tx_hash,
        }
    }

    fn process_submission_started(&mut self) -> TransitionResult<Vec<ProgressUpdate>> {
        match self.state {
            AttemptState::Idle => {
                let status = match self.cfg.direction() {
                    BridgeDirection::Deposit => STATUS_DEPOSITING,
                    BridgeDirection::Withdraw => STATUS_WITHDRAWING,
                };
                self.state = AttemptState::InProgress {
                    stage: BridgeStage::Submitting,
                    percent: PERCENT_SUBMITTING,
                    tx_hash: None,
                };
                Ok(vec![self.progress(status, PERCENT_SUBMITTING, None)])
            }
            ref state => Err(TransitionErr::invalid_event(
                state.clone(),
                AttemptEvent::SubmissionStarted,
                Some("an attempt can only be started from Idle".to_string()),
            )),
        }
    }

    fn process_submitted(&mut self, tx_hash: TxHash) -> TransitionResult<Vec<ProgressUpdate>> {
        match self.state {
            AttemptState::InProgress {
                stage: BridgeStage::Submitting,
                ..
            } => {
                self.state = AttemptState::InProgress {
                    stage: BridgeStage::AwaitingConfirmation,
                    percent: PERCENT_CONFIRMING,
                    tx_hash: Some(tx_hash),
                };
                Ok(vec![self.progress(
                    STATUS_AWAITING_CONFIRMATION,
                    PERCENT_CONFIRMING,
                    Some(tx_hash),
                )])
            }
            AttemptState::InProgress {
                stage: BridgeStage::AwaitingConfirmation,
                tx_hash: Some(prior),
                ..
            } if prior == tx_hash => Err(TransitionErr::duplicate(
                self.state.clone(),
                AttemptEvent::Submitted { tx_hash },
            )),
            ref state => Err(TransitionErr::invalid_event(
                state.clone(),
                AttemptEvent::Submitted { tx_hash },
                None,
            )),
        }
    }

    fn process_confirmed_local(&mut self) -> TransitionResult<Vec<ProgressUpdate>> {
        match self.state {
            AttemptState::InProgress {
                stage: BridgeStage::AwaitingConfirmation,
                tx_hash: Some(tx_hash),
                ..
            } => match self.cfg.direction() {
                BridgeDirection::Deposit => {
                    self.state = AttemptState::InProgress {
                        stage: BridgeStage::AwaitingRelay,
                        percent: PERCENT_DEPOSIT_RELAY,
                        tx_hash: Some(tx_hash),
                    };
                    Ok(vec![self.progress(
                        STATUS_AWAITING_RELAY,
                        PERCENT_DEPOSIT_RELAY,
                        Some(tx_hash),
                    )])
                }
                BridgeDirection::Withdraw => {
                    self.state = AttemptState::InProgress {
                        stage: BridgeStage::AwaitingProvable,
                        percent: PERCENT_CONFIRMING,
                        tx_hash: Some(tx_hash),
                    };
                    // the prove sequence begins here but carries no intrinsic progress advance
                    Ok(vec![self.progress(
                        STATUS_PROVING,
                        PERCENT_CONFIRMING,
                        Some(tx_hash),
                    )])
                }
            },
            ref state => Err(TransitionErr::invalid_event(
                state.clone(),
                AttemptEvent::ConfirmedLocal,
                None,
            )),
        }
    }

    fn process_ready_to_prove(&mut self) -> TransitionResult<Vec<ProgressUpdate>> {
        self.check_withdraw_only(AttemptEvent::ReadyToProve)?;
        match self.state {
            AttemptState::InProgress {
                stage: BridgeStage::AwaitingProvable,
                percent,
                tx_hash,
            } => {
                self.state = AttemptState::InProgress {
                    stage: BridgeStage::Proving,
                    percent,
                    tx_hash,
                };
                // the status line already reads "proving"; nothing new to render
                Ok(vec![])
            }
            ref state => Err(TransitionErr::invalid_event(
                state.clone(),
                AttemptEvent::ReadyToProve,
                None,
            )),
        }
    }

    fn process_proven(&mut self) -> TransitionResult<Vec<ProgressUpdate>> {
        self.check_withdraw_only(AttemptEvent::Proven)?;
        match self.state {
            AttemptState::InProgress {
                stage: BridgeStage::Proving,
                percent,
                tx_hash,
            } => {
                self.state = AttemptState::InProgress {
                    stage: BridgeStage::AwaitingRelayable,
                    percent,
                    tx_hash,
                };
                Ok(vec![self.progress(STATUS_CHALLENGE_PERIOD, percent, tx_hash)])
            }
            ref state => Err(TransitionErr::invalid_event(
                state.clone(),
                AttemptEvent::Proven,
                None,
            )),
        }
    }

    fn process_ready_for_relay(&mut self) -> TransitionResult<Vec<ProgressUpdate>> {
        self.check_withdraw_only(AttemptEvent::ReadyForRelay)?;
        match self.state {
            AttemptState::InProgress {
                stage: BridgeStage::AwaitingRelayable,
                tx_hash,
                ..
            } => {
                self.state = AttemptState::InProgress {
                    stage: BridgeStage::Finalizing,
                    percent: PERCENT_FINALIZING,
                    tx_hash,
                };
                Ok(vec![self.progress(
                    STATUS_FINALIZING,
                    PERCENT_FINALIZING,
                    tx_hash,
                )])
            }
            ref state => Err(TransitionErr::invalid_event(
                state.clone(),
                AttemptEvent::ReadyForRelay,
                None,
            )),
        }
    }

    fn process_finalized(&mut self) -> TransitionResult<Vec<ProgressUpdate>> {
        self.check_withdraw_only(AttemptEvent::Finalized)?;
        match self.state {
            AttemptState::InProgress {
                stage: BridgeStage::Finalizing,
                tx_hash,
                ..
            } => {
                self.state = AttemptState::InProgress {
                    stage: BridgeStage::AwaitingRelay,
                    percent: PERCENT_FINALIZING,
                    tx_hash,
                };
                Ok(vec![self.progress(
                    STATUS_AWAITING_RELAY,
                    PERCENT_FINALIZING,
                    tx_hash,
                )])
            }
            ref state => Err(TransitionErr::invalid_event(
                state.clone(),
                AttemptEvent::Finalized,
                None,
            )),
        }
    }

    fn process_relayed(&mut self) -> TransitionResult<Vec<ProgressUpdate>> {
        match self.state {
            AttemptState::InProgress {
                stage: BridgeStage::AwaitingRelay,
                tx_hash: Some(tx_hash),
                ..
            } => {
                self.state = AttemptState::Succeeded { tx_hash };
                Ok(vec![ProgressUpdate {
                    status: STATUS_SUCCESS.to_string(),
                    percent: PERCENT_DONE,
                    in_progress: false,
                    success: true,
                    tx_hash: Some(tx_hash),
                }])
            }
            AttemptState::InProgress { tx_hash: None, .. } => Err(TransitionErr::rejected(
                self.state.clone(),
                AttemptEvent::Relayed,
                "no transaction hash captured for this attempt",
            )),
            ref state => Err(TransitionErr::invalid_event(
                state.clone(),
                AttemptEvent::Relayed,
                None,
            )),
        }
    }

    fn process_failed(&mut self, reason: String) -> TransitionResult<Vec<ProgressUpdate>> {
        match self.state {
            AttemptState::InProgress {
                percent, tx_hash, ..
            } => {
                self.state = AttemptState::Failed {
                    reason: reason.clone(),
                    percent,
                    tx_hash,
                };
                // the error message replaces the last status line; percent stays frozen
                Ok(vec![ProgressUpdate {
                    status: reason,
                    percent,
                    in_progress: false,
                    success: false,
                    tx_hash,
                }])
            }
            ref state => Err(TransitionErr::invalid_event(
                state.clone(),
                AttemptEvent::Failed { reason },
                Some("only an in-progress attempt can fail".to_string()),
            )),
        }
    }

    /// Rejects prove-side events on the deposit path.
    fn check_withdraw_only(&self, event: AttemptEvent) -> TransitionResult<()> {
        match self.cfg.direction() {
            BridgeDirection::Withdraw => Ok(()),
            BridgeDirection::Deposit => Err(TransitionErr::rejected(
                self.state.clone(),
                event,
                "event is not part of the deposit path",
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use opbridge_primitives::types::TX_HASH_SIZE;

    use super::*;

    fn deposit_sm() -> BridgeSM {
        BridgeSM::new(AttemptCfg::new(BridgeDirection::Deposit))
    }

    fn withdraw_sm() -> BridgeSM {
        BridgeSM::new(AttemptCfg::new(BridgeDirection::Withdraw))
    }

    fn tx_hash() -> TxHash {
        TxHash::new([0x11; TX_HASH_SIZE])
    }

    fn drive(sm: &mut BridgeSM, events: Vec<AttemptEvent>) -> Vec<ProgressUpdate> {
        events
            .into_iter()
            .flat_map(|event| sm.process_event(event).unwrap())
            .collect()
    }

    #[test]
    fn deposit_happy_path_emits_waypoints_in_order() {
        let mut sm = deposit_sm();
        let updates = drive(
            &mut sm,
            vec![
                AttemptEvent::SubmissionStarted,
                AttemptEvent::Submitted { tx_hash: tx_hash() },
                AttemptEvent::ConfirmedLocal,
                AttemptEvent::Relayed,
            ],
        );

        let percents: Vec<u8> = updates.iter().map(|u| u.percent).collect();
        assert_eq!(percents, vec![20, 50, 80, 100]);
        assert_eq!(updates[0].status, STATUS_DEPOSITING);
        assert_eq!(updates[1].status, STATUS_AWAITING_CONFIRMATION);
        assert_eq!(updates[2].status, STATUS_AWAITING_RELAY);
        assert_eq!(updates[3].status, STATUS_SUCCESS);

        // the hash is surfaced with the submission update, before any confirmation
        assert_eq!(updates[0].tx_hash, None);
        assert_eq!(updates[1].tx_hash, Some(tx_hash()));

        assert!(updates[3].success);
        assert!(!updates[3].in_progress);
        assert_eq!(*sm.state(), AttemptState::Succeeded { tx_hash: tx_hash() });
    }

    #[test]
    fn withdraw_happy_path_visits_every_stage() {
        let mut sm = withdraw_sm();
        let updates = drive(
            &mut sm,
            vec![
                AttemptEvent::SubmissionStarted,
                AttemptEvent::Submitted { tx_hash: tx_hash() },
                AttemptEvent::ConfirmedLocal,
                AttemptEvent::ReadyToProve,
                AttemptEvent::Proven,
                AttemptEvent::ReadyForRelay,
                AttemptEvent::Finalized,
                AttemptEvent::Relayed,
            ],
        );

        let percents: Vec<u8> = updates.iter().map(|u| u.percent).collect();
        assert_eq!(percents, vec![20, 50, 50, 50, 90, 90, 100]);
        assert!(percents.windows(2).all(|pair| pair[0] <= pair[1]));

        assert_eq!(updates[0].status, STATUS_WITHDRAWING);
        assert_eq!(updates[2].status, STATUS_PROVING);
        assert_eq!(updates[3].status, STATUS_CHALLENGE_PERIOD);
        assert_eq!(updates[4].status, STATUS_FINALIZING);
        assert_eq!(updates[6].status, STATUS_SUCCESS);
        assert_eq!(*sm.state(), AttemptState::Succeeded { tx_hash: tx_hash() });
    }

    #[test]
    fn ready_to_prove_advances_stage_without_rendering() {
        let mut sm = withdraw_sm();
        drive(
            &mut sm,
            vec![
                AttemptEvent::SubmissionStarted,
                AttemptEvent::Submitted { tx_hash: tx_hash() },
                AttemptEvent::ConfirmedLocal,
            ],
        );

        let updates = sm.process_event(AttemptEvent::ReadyToProve).unwrap();
        assert!(updates.is_empty());
        assert_eq!(
            *sm.state(),
            AttemptState::InProgress {
                stage: BridgeStage::Proving,
                percent: 50,
                tx_hash: Some(tx_hash()),
            }
        );
    }

    #[test]
    fn deposit_rejects_prove_side_events() {
        let mut sm = deposit_sm();
        drive(
            &mut sm,
            vec![
                AttemptEvent::SubmissionStarted,
                AttemptEvent::Submitted { tx_hash: tx_hash() },
            ],
        );

        for event in [
            AttemptEvent::ReadyToProve,
            AttemptEvent::Proven,
            AttemptEvent::ReadyForRelay,
            AttemptEvent::Finalized,
        ] {
            let err = sm.process_event(event).unwrap_err();
            assert!(matches!(err, TransitionErr::Rejected { .. }), "{err}");
        }
    }

    #[test]
    fn duplicate_submission_is_flagged() {
        let mut sm = deposit_sm();
        drive(
            &mut sm,
            vec![
                AttemptEvent::SubmissionStarted,
                AttemptEvent::Submitted { tx_hash: tx_hash() },
            ],
        );

        let err = sm
            .process_event(AttemptEvent::Submitted { tx_hash: tx_hash() })
            .unwrap_err();
        assert!(matches!(err, TransitionErr::Duplicate { .. }), "{err}");
    }

    #[test]
    fn failure_freezes_percent_and_keeps_hash() {
        let mut sm = withdraw_sm();
        drive(
            &mut sm,
            vec![
                AttemptEvent::SubmissionStarted,
                AttemptEvent::Submitted { tx_hash: tx_hash() },
            ],
        );

        let updates = sm
            .process_event(AttemptEvent::Failed {
                reason: "provider went away".to_string(),
            })
            .unwrap();

        assert_eq!(updates.len(), 1);
        assert_eq!(updates[0].status, "provider went away");
        assert_eq!(updates[0].percent, 50);
        assert!(!updates[0].in_progress);
        assert!(!updates[0].success);
        assert_eq!(updates[0].tx_hash, Some(tx_hash()));

        assert_eq!(
            *sm.state(),
            AttemptState::Failed {
                reason: "provider went away".to_string(),
                percent: 50,
                tx_hash: Some(tx_hash()),
            }
        );
    }

    #[test]
    fn terminal_states_reject_further_events() {
        let mut succeeded = deposit_sm();
        drive(
            &mut succeeded,
            vec![
                AttemptEvent::SubmissionStarted,
                AttemptEvent::Submitted { tx_hash: tx_hash() },
                AttemptEvent::ConfirmedLocal,
                AttemptEvent::Relayed,
            ],
        );
        assert!(succeeded.state().is_terminal());
        assert!(succeeded.process_event(AttemptEvent::ConfirmedLocal).is_err());

        let mut failed = deposit_sm();
        drive(&mut failed, vec![AttemptEvent::SubmissionStarted]);
        failed
            .process_event(AttemptEvent::Failed {
                reason: "boom".to_string(),
            })
            .unwrap();
        assert!(failed.state().is_terminal());
        assert!(failed.process_event(AttemptEvent::Relayed).is_err());
    }

    #[test]
    fn idle_only_accepts_submission_start() {
        let mut sm = deposit_sm();
        let err = sm.process_event(AttemptEvent::ConfirmedLocal).unwrap_err();
        assert!(matches!(err, TransitionErr::InvalidEvent { .. }), "{err}");
        assert_eq!(*sm.state(), AttemptState::Idle);
    }
}
