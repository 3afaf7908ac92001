//! End-to-end orchestrator tests over the mock messenger.

use std::sync::Arc;

use opbridge_messenger::MessageStatus;
use opbridge_orchestrator::{BridgeError, BridgeOrchestrator, OrchestratorConfig, TerminalStatus};
use opbridge_primitives::{
    errors::RouteError,
    network::{ETHEREUM_GOERLI, OPTIMISM_GOERLI},
    types::ChainId,
};
use opbridge_sm::duties::{
    ProgressUpdate, STATUS_CHALLENGE_PERIOD, STATUS_DEPOSITING, STATUS_FINALIZING,
    STATUS_PROVING, STATUS_SUCCESS, STATUS_WITHDRAWING,
};
use opbridge_test_utils::prelude::*;
use tokio::sync::broadcast;

fn orchestrator(messenger: Arc<MockMessenger>) -> BridgeOrchestrator<MockMessenger> {
    BridgeOrchestrator::new(testnet_network(), messenger, OrchestratorConfig::default())
}

fn drain(events: &mut broadcast::Receiver<ProgressUpdate>) -> Vec<ProgressUpdate> {
    let mut updates = Vec::new();
    while let Ok(update) = events.try_recv() {
        updates.push(update);
    }
    updates
}

#[tokio::test]
async fn deposit_emits_monotonic_progress_and_succeeds() {
    let messenger = Arc::new(MockMessenger::working());
    let orchestrator = orchestrator(messenger.clone());
    let mut events = orchestrator.subscribe();

    let outcome = orchestrator
        .execute_bridge(test_amount(), ETHEREUM_GOERLI, Some(test_signer()))
        .await
        .unwrap();

    assert!(outcome.is_success());
    assert_eq!(outcome.tx_hash, Some(mock_tx_hash()));

    let updates = drain(&mut events);
    let percents: Vec<u8> = updates.iter().map(|u| u.percent).collect();
    assert_eq!(percents, vec![20, 50, 80, 100]);
    assert!(percents.windows(2).all(|pair| pair[0] <= pair[1]));

    assert_eq!(updates[0].status, STATUS_DEPOSITING);
    assert_eq!(updates.last().unwrap().status, STATUS_SUCCESS);
    assert!(updates.last().unwrap().success);

    // the hash is surfaced with the submission update, before the confirmation wait resolves
    assert_eq!(updates[1].tx_hash, Some(mock_tx_hash()));

    assert_eq!(
        messenger.calls(),
        vec![
            MessengerCall::DepositEth(test_amount()),
            MessengerCall::WaitForConfirmation(mock_tx_hash()),
            MessengerCall::WaitForMessageStatus(mock_tx_hash(), MessageStatus::Relayed),
        ]
    );
}

#[tokio::test]
async fn withdraw_visits_every_stage_in_order() {
    let messenger = Arc::new(MockMessenger::working());
    let orchestrator = orchestrator(messenger.clone());
    let mut events = orchestrator.subscribe();

    let outcome = orchestrator
        .execute_bridge(test_amount(), OPTIMISM_GOERLI, Some(test_signer()))
        .await
        .unwrap();

    assert!(outcome.is_success());

    // Submitted -> ConfirmedLocal -> ReadyToProve -> Proven -> ReadyForRelay -> Relayed,
    // with no stage skipped
    assert_eq!(
        messenger.calls(),
        vec![
            MessengerCall::WithdrawEth(test_amount()),
            MessengerCall::WaitForConfirmation(mock_tx_hash()),
            MessengerCall::WaitForMessageStatus(mock_tx_hash(), MessageStatus::ReadyToProve),
            MessengerCall::ProveMessage(mock_tx_hash()),
            MessengerCall::WaitForMessageStatus(mock_tx_hash(), MessageStatus::ReadyForRelay),
            MessengerCall::FinalizeMessage(mock_tx_hash()),
            MessengerCall::WaitForMessageStatus(mock_tx_hash(), MessageStatus::Relayed),
        ]
    );

    let updates = drain(&mut events);
    let percents: Vec<u8> = updates.iter().map(|u| u.percent).collect();
    assert_eq!(percents, vec![20, 50, 50, 50, 90, 90, 100]);

    assert_eq!(updates[0].status, STATUS_WITHDRAWING);
    assert_eq!(updates[2].status, STATUS_PROVING);
    assert_eq!(updates[3].status, STATUS_CHALLENGE_PERIOD);
    assert_eq!(updates[4].status, STATUS_FINALIZING);
    assert_eq!(updates[6].status, STATUS_SUCCESS);
}

#[tokio::test]
async fn unsupported_chain_fails_before_any_messenger_call() {
    let messenger = Arc::new(MockMessenger::working());
    let orchestrator = orchestrator(messenger.clone());

    let unknown = ChainId::new(1337);
    let err = orchestrator
        .execute_bridge(test_amount(), unknown, Some(test_signer()))
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        BridgeError::UnsupportedNetwork(RouteError::UnsupportedNetwork(id)) if id == unknown
    ));
    assert!(messenger.calls().is_empty());
}

#[tokio::test]
async fn missing_signer_fails_before_any_messenger_call() {
    let messenger = Arc::new(MockMessenger::working());
    let orchestrator = orchestrator(messenger.clone());

    let err = orchestrator
        .execute_bridge(test_amount(), ETHEREUM_GOERLI, None)
        .await
        .unwrap_err();

    assert!(matches!(err, BridgeError::SignerUnavailable));
    assert!(messenger.calls().is_empty());
}

#[tokio::test]
async fn rejected_submission_freezes_progress_with_no_hash() {
    let messenger = Arc::new(MockMessenger::working().with_submit_error("user declined signature"));
    let orchestrator = orchestrator(messenger);
    let mut events = orchestrator.subscribe();

    let outcome = orchestrator
        .execute_bridge(test_amount(), ETHEREUM_GOERLI, Some(test_signer()))
        .await
        .unwrap();

    assert_eq!(outcome.tx_hash, None);
    match &outcome.status {
        TerminalStatus::Failed { reason } => assert!(
            reason.contains("user declined signature"),
            "unexpected reason: {reason}"
        ),
        TerminalStatus::Success => panic!("submission failure must not succeed"),
    }

    let updates = drain(&mut events);
    assert_eq!(updates.len(), 2);
    // the error message replaces the last status line; percent stays frozen at 20
    assert_eq!(updates[1].percent, updates[0].percent);
    assert!(updates[1].status.contains("user declined signature"));
    assert!(!updates[1].in_progress);
    assert_eq!(updates[1].tx_hash, None);
}

#[tokio::test]
async fn failed_prove_reports_the_failing_stage() {
    let messenger = Arc::new(MockMessenger::working().with_prove_error("proof rejected"));
    let orchestrator = orchestrator(messenger);

    let outcome = orchestrator
        .execute_bridge(test_amount(), OPTIMISM_GOERLI, Some(test_signer()))
        .await
        .unwrap();

    match &outcome.status {
        TerminalStatus::Failed { reason } => {
            assert!(reason.contains("proving"), "unexpected reason: {reason}");
            assert!(reason.contains("proof rejected"), "unexpected reason: {reason}");
        }
        TerminalStatus::Success => panic!("prove failure must not succeed"),
    }
    // the hash was captured before the failure and must survive into the outcome
    assert_eq!(outcome.tx_hash, Some(mock_tx_hash()));
}

#[tokio::test(start_paused = true)]
async fn hung_relay_wait_surfaces_a_timeout() {
    let messenger = Arc::new(MockMessenger::working().with_status_hang(MessageStatus::Relayed));
    let orchestrator = orchestrator(messenger);

    let outcome = orchestrator
        .execute_bridge(test_amount(), ETHEREUM_GOERLI, Some(test_signer()))
        .await
        .unwrap();

    match &outcome.status {
        TerminalStatus::Failed { reason } => {
            assert!(reason.contains("timed out"), "unexpected reason: {reason}")
        }
        TerminalStatus::Success => panic!("a hung relay wait must not succeed"),
    }
    assert_eq!(outcome.tx_hash, Some(mock_tx_hash()));
}

#[tokio::test(start_paused = true)]
async fn second_attempt_is_rejected_while_first_is_in_flight() {
    let messenger = Arc::new(MockMessenger::working().with_confirmation_hang());
    let orchestrator = Arc::new(orchestrator(messenger));

    let first = {
        let orchestrator = orchestrator.clone();
        tokio::spawn(async move {
            orchestrator
                .execute_bridge(test_amount(), ETHEREUM_GOERLI, Some(test_signer()))
                .await
        })
    };

    // let the first attempt acquire the session lock and reach its confirmation wait
    tokio::task::yield_now().await;
    tokio::task::yield_now().await;

    let second = orchestrator
        .execute_bridge(test_amount(), ETHEREUM_GOERLI, Some(test_signer()))
        .await;
    assert!(matches!(second, Err(BridgeError::AttemptInFlight)));

    // the hung confirmation eventually trips the configured timeout
    let outcome = first.await.unwrap().unwrap();
    assert!(!outcome.is_success());
}

#[tokio::test]
async fn rerun_after_success_starts_a_fresh_attempt() {
    let messenger = Arc::new(MockMessenger::working());
    let orchestrator = orchestrator(messenger);

    let first = orchestrator
        .execute_bridge(test_amount(), ETHEREUM_GOERLI, Some(test_signer()))
        .await
        .unwrap();
    assert!(first.is_success());

    let mut events = orchestrator.subscribe();
    let second = orchestrator
        .execute_bridge(test_amount(), ETHEREUM_GOERLI, Some(test_signer()))
        .await
        .unwrap();
    assert!(second.is_success());

    // the second attempt resets progress instead of resuming the prior outcome
    let updates = drain(&mut events);
    assert_eq!(updates.first().map(|u| u.percent), Some(20));
    assert_eq!(updates.last().map(|u| u.percent), Some(100));

    // the first outcome is an independent value, untouched by the rerun
    assert_eq!(first.status, TerminalStatus::Success);
}
