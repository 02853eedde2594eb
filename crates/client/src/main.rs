//! Mugloar client binary.
//!
//! Composition root: loads configuration from the environment, installs
//! tracing, wires the HTTP transport into the session orchestrator, starts
//! one game run, and reports the resulting state. All control-flow logic
//! lives in the `runtime` crate; this binary is a thin pass-through.
mod config;

use std::sync::Arc;

use anyhow::Result;

use config::ClientConfig;
use game_api::HttpTransport;
use runtime::SessionOrchestrator;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = ClientConfig::from_env();
    tracing::info!(api_url = %config.api_url, "starting Mugloar client");

    let transport = Arc::new(HttpTransport::new(config.api_url.clone()));
    let mut orchestrator = SessionOrchestrator::builder()
        .transport(transport)
        .config(config.orchestrator.clone())
        .build()?;

    orchestrator.start_new_game().await;

    let snapshot = orchestrator.snapshot();
    if let Some(error) = &snapshot.error {
        tracing::warn!(operation = %error.operation, "{}", error.message);
    }

    if let Some(game) = &snapshot.game {
        tracing::info!(
            game_id = %game.game_id,
            lives = game.lives,
            gold = game.gold,
            score = game.score,
            turn = game.turn,
            "session started"
        );
    }

    if let Some(reputation) = &snapshot.reputation {
        tracing::info!(
            people = reputation.people,
            state = reputation.state,
            underworld = reputation.underworld,
            "reputation standings"
        );
    }

    for ad in snapshot.ads.iter().flatten() {
        tracing::info!(
            ad_id = %ad.ad_id,
            probability = %ad.probability,
            reward = ad.reward,
            expires_in = ad.expires_in,
            "{}",
            ad.message
        );
    }

    for item in snapshot.items.iter().flatten() {
        tracing::info!(id = %item.id, cost = item.cost, "{}", item.name);
    }

    Ok(())
}
