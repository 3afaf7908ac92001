//! Dev driver for the bridge orchestrator.
//!
//! Runs one bridge attempt against the simulated messenger, rendering the progress stream
//! through the logging subsystem. The real messenger SDK is an external collaborator; this
//! binary exists to exercise the orchestration sequence end to end.

use std::{sync::Arc, time::Duration};

use anyhow::Context;
use args::Cli;
use clap::Parser;
use config::Config;
use opbridge_common::logging::{self, LoggerConfig};
use opbridge_messenger::{simulated::SimulatedMessenger, MessengerConfig};
use opbridge_orchestrator::{BridgeOrchestrator, OrchestratorConfig, TerminalStatus};
use opbridge_primitives::{
    request::SignerContext,
    types::{ChainId, EvmAddress, WeiAmount},
};
use tokio::runtime;
use tracing::{error, info};

mod args;
mod config;

fn main() -> anyhow::Result<()> {
    let mut logger_config = LoggerConfig::with_base_name("opbridge");
    if let Some(otlp_url) = logging::get_otlp_url_from_env() {
        logger_config.set_otlp_url(otlp_url);
    }
    logging::init(logger_config);

    let cli = Cli::parse();
    let config = Config::load(&cli.config)?;

    let runtime = runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("must be able to create runtime")?;

    runtime.block_on(run(cli, config))
}

async fn run(cli: Cli, config: Config) -> anyhow::Result<()> {
    let amount = WeiAmount::from_wei(cli.amount).context("invalid bridge amount")?;
    let chain_id = ChainId::new(cli.chain_id);
    let address: EvmAddress = cli.address.parse().context("invalid signer address")?;

    let messenger = Arc::new(SimulatedMessenger::new(
        MessengerConfig::new(&config.network, config.bedrock),
        Duration::from_millis(config.step_delay_ms),
    ));
    let orchestrator = BridgeOrchestrator::new(
        config.network.clone(),
        messenger,
        OrchestratorConfig {
            confirmation_timeout: Duration::from_secs(config.confirmation_timeout_secs),
            relay_timeout: Duration::from_secs(config.relay_timeout_secs),
            ..OrchestratorConfig::default()
        },
    );

    let mut events = orchestrator.subscribe();
    let renderer = tokio::spawn(async move {
        while let Ok(update) = events.recv().await {
            info!(
                percent = update.percent,
                status = %update.status,
                tx_hash = ?update.tx_hash,
                "bridge progress"
            );
        }
    });

    let outcome = orchestrator
        .execute_bridge(amount, chain_id, Some(SignerContext::new(address)))
        .await?;
    renderer.abort();

    match outcome.status {
        TerminalStatus::Success => {
            info!(
                tx_hash = ?outcome.tx_hash,
                elapsed = ?outcome.elapsed,
                "bridge complete"
            );
            Ok(())
        }
        TerminalStatus::Failed { reason } => {
            error!(
                %reason,
                tx_hash = ?outcome.tx_hash,
                elapsed = ?outcome.elapsed,
                "bridge failed"
            );
            anyhow::bail!("bridge failed: {reason}")
        }
    }
}
