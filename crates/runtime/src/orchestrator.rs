//! The session orchestrator and its derivation rules.
//!
//! Design: the orchestrator owns [`SessionState`] and the four adapters, and
//! every operation takes `&mut self`, so an operation and the rules it
//! triggers run to completion before the next operation starts. Cross-cutting
//! state is re-derived by explicit handlers invoked at the end of the
//! operation that changed the triggering field, which keeps rule ordering
//! reproducible.
use std::sync::Arc;

use thiserror::Error;
use tokio::sync::broadcast;

use game_api::{AdService, ApiError, GameService, InvestigationService, ShopService, Transport};
use game_core::{Ad, AdOutcome, GameId, PurchaseOutcome, Reputation, ShopItem};

use crate::events::SessionEvent;
use crate::state::{ErrorState, Operation, SessionSnapshot, SessionState};

/// Orchestrator configuration.
#[derive(Clone, Debug)]
pub struct OrchestratorConfig {
    /// Broadcast buffer for [`SessionEvent`] receivers.
    pub event_capacity: usize,
}

impl Default for OrchestratorConfig {
    fn default() -> Self {
        Self { event_capacity: 64 }
    }
}

/// Errors raised while assembling an orchestrator.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("orchestrator requires a transport before building")]
    MissingTransport,
}

/// Owns the mutable session and the rules that keep it canonical.
///
/// Adapter failures never escape an operation: they are folded into the
/// shared [`ErrorState`] and surfaced as [`SessionEvent::OperationFailed`].
/// Callers observe results through [`SessionOrchestrator::snapshot`] and the
/// event bus only.
pub struct SessionOrchestrator {
    state: SessionState,
    games: GameService,
    investigations: InvestigationService,
    ads: AdService,
    shop: ShopService,
    events: broadcast::Sender<SessionEvent>,
}

impl SessionOrchestrator {
    /// Create a new orchestrator builder.
    pub fn builder() -> SessionOrchestratorBuilder {
        SessionOrchestratorBuilder::new()
    }

    /// Owned copy of the current session state.
    pub fn snapshot(&self) -> SessionSnapshot {
        self.state.snapshot()
    }

    /// Subscribe to session events.
    pub fn subscribe(&self) -> broadcast::Receiver<SessionEvent> {
        self.events.subscribe()
    }

    /// Start a new game run, superseding any previous session identity.
    ///
    /// On success the session is replaced wholesale, the game-over flag is
    /// cleared, reputation is fetched as part of this operation, and the
    /// game-id rule fires afterwards to refresh ads and shop inventory. On
    /// failure the previous session (if any) is left untouched.
    pub async fn start_new_game(&mut self) {
        self.begin();
        let result = self.games.start().await;

        let started = match result {
            Ok(session) => {
                let previous_id = self.state.game.as_ref().map(|game| game.game_id.clone());
                let game_id = session.game_id.clone();

                self.state.game = Some(session);
                self.state.epoch += 1;
                self.state.game_over = false;

                tracing::info!(%game_id, "new game started");
                self.emit(SessionEvent::GameStarted {
                    game_id: game_id.clone(),
                });

                self.fetch_investigation().await;
                Some((previous_id, game_id))
            }
            Err(err) => {
                self.fail(Operation::StartGame, err);
                None
            }
        };
        self.finish();

        // Game-id rule: only a genuinely new identity refreshes the boards.
        if let Some((previous_id, game_id)) = started
            && previous_id.as_ref() != Some(&game_id)
        {
            self.fetch_ads().await;
            self.fetch_items().await;
        }
    }

    /// Replace the session's reputation standings. No-op without a session.
    pub async fn fetch_investigation(&mut self) {
        let Some(game_id) = self.current_game_id() else {
            return;
        };

        let stamp = self.begin();
        let result = self.investigations.reputation(&game_id).await;
        self.finish();

        match result {
            Ok(reputation) => self.apply_reputation(stamp, reputation),
            Err(err) => self.fail(Operation::FetchReputation, err),
        }
    }

    /// Replace the ad board wholesale. No-op without a session.
    pub async fn fetch_ads(&mut self) {
        let Some(game_id) = self.current_game_id() else {
            return;
        };

        let stamp = self.begin();
        let result = self.ads.list(&game_id).await;
        self.finish();

        match result {
            Ok(ads) => self.apply_ads(stamp, ads),
            Err(err) => self.fail(Operation::FetchMessages, err),
        }
    }

    /// Replace the shop inventory wholesale. No-op without a session.
    pub async fn fetch_items(&mut self) {
        let Some(game_id) = self.current_game_id() else {
            return;
        };

        let stamp = self.begin();
        let result = self.shop.list(&game_id).await;
        self.finish();

        match result {
            Ok(items) => self.apply_items(stamp, items),
            Err(err) => self.fail(Operation::FetchItems, err),
        }
    }

    /// Accept one ad and fold the outcome back into the session.
    ///
    /// Never retried: the call consumes a turn on the server even when it
    /// reports failure. The ad-outcome rule runs after this operation's own
    /// in-flight accounting completes.
    pub async fn accept_ad(&mut self, ad_id: &str) {
        let Some(game_id) = self.current_game_id() else {
            return;
        };

        let stamp = self.begin();
        let result = self.ads.accept(&game_id, ad_id).await;
        self.finish();

        match result {
            Ok(outcome) => {
                if !self.stamp_is_current(stamp) {
                    tracing::debug!(ad_id, "discarding ad outcome from superseded session");
                    return;
                }
                self.state.ad_outcome = Some(outcome.clone());
                self.on_ad_outcome(outcome).await;
            }
            Err(err) => self.fail(Operation::AcceptAd, err),
        }
    }

    /// Buy one shop item and merge the authoritative counters.
    pub async fn buy_item(&mut self, item_id: &str) {
        let Some(game_id) = self.current_game_id() else {
            return;
        };

        let stamp = self.begin();
        let result = self.shop.buy(&game_id, item_id).await;
        self.finish();

        match result {
            Ok(outcome) => self.apply_purchase(stamp, outcome),
            Err(err) => self.fail(Operation::BuyItem, err),
        }
    }

    /// Ad-outcome rule.
    ///
    /// Survivable outcome: merge the counters, then refresh the shop and
    /// reputation. Fatal outcome: transition to game-over and discard the
    /// stored outcome so the rule cannot re-fire on the same value. A failure
    /// in a triggered fetch never rolls back the merge that preceded it.
    async fn on_ad_outcome(&mut self, outcome: AdOutcome) {
        if outcome.survived() {
            if let Some(game) = self.state.game.as_mut() {
                game.apply_ad_outcome(&outcome);
            }
            self.emit(SessionEvent::AdResolved {
                success: outcome.success,
                message: outcome.message,
            });

            self.fetch_items().await;
            self.fetch_investigation().await;
        } else {
            self.state.game_over = true;
            self.state.ad_outcome = None;

            tracing::info!(
                score = outcome.score,
                high_score = outcome.high_score,
                "game over"
            );
            self.emit(SessionEvent::GameOver {
                score: outcome.score,
                high_score: outcome.high_score,
            });
        }
    }

    fn apply_reputation(&mut self, stamp: u64, reputation: Reputation) {
        if !self.stamp_is_current(stamp) {
            tracing::debug!("discarding reputation from superseded session");
            return;
        }
        self.state.reputation = Some(reputation);
    }

    fn apply_ads(&mut self, stamp: u64, ads: Vec<Ad>) {
        if !self.stamp_is_current(stamp) {
            tracing::debug!("discarding ad list from superseded session");
            return;
        }
        self.state.ads = Some(ads);
    }

    fn apply_items(&mut self, stamp: u64, items: Vec<ShopItem>) {
        if !self.stamp_is_current(stamp) {
            tracing::debug!("discarding shop inventory from superseded session");
            return;
        }
        self.state.items = Some(items);
    }

    fn apply_purchase(&mut self, stamp: u64, outcome: PurchaseOutcome) {
        if !self.stamp_is_current(stamp) {
            tracing::debug!("discarding purchase outcome from superseded session");
            return;
        }
        if let Some(game) = self.state.game.as_mut() {
            game.apply_purchase(&outcome);
        }
        self.emit(SessionEvent::ItemPurchased {
            success: outcome.shopping_success,
        });
        self.state.purchase_outcome = Some(outcome);
    }

    fn current_game_id(&self) -> Option<GameId> {
        self.state.game.as_ref().map(|game| game.game_id.clone())
    }

    /// Enter an operation: clear the shared error, bump the in-flight
    /// counter, and stamp the current epoch for the stale-response check.
    fn begin(&mut self) -> u64 {
        self.state.error = None;
        self.state.in_flight += 1;
        self.state.epoch
    }

    fn finish(&mut self) {
        self.state.in_flight -= 1;
    }

    fn stamp_is_current(&self, stamp: u64) -> bool {
        self.state.epoch == stamp
    }

    fn fail(&mut self, operation: Operation, err: ApiError) {
        tracing::warn!(%operation, error = %err, "operation failed");
        self.state.error = Some(ErrorState::for_operation(operation));
        self.emit(SessionEvent::OperationFailed { operation });
    }

    fn emit(&self, event: SessionEvent) {
        // Delivery is best-effort; an empty bus is not an error.
        let _ = self.events.send(event);
    }
}

/// Builder for [`SessionOrchestrator`].
pub struct SessionOrchestratorBuilder {
    config: OrchestratorConfig,
    transport: Option<Arc<dyn Transport>>,
}

impl SessionOrchestratorBuilder {
    fn new() -> Self {
        Self {
            config: OrchestratorConfig::default(),
            transport: None,
        }
    }

    /// Set the transport shared by all four adapters.
    pub fn transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Override the orchestrator configuration.
    pub fn config(mut self, config: OrchestratorConfig) -> Self {
        self.config = config;
        self
    }

    pub fn build(self) -> Result<SessionOrchestrator, BuildError> {
        let transport = self.transport.ok_or(BuildError::MissingTransport)?;
        let (events, _) = broadcast::channel(self.config.event_capacity.max(1));

        Ok(SessionOrchestrator {
            state: SessionState::default(),
            games: GameService::new(transport.clone()),
            investigations: InvestigationService::new(transport.clone()),
            ads: AdService::new(transport.clone()),
            shop: ShopService::new(transport),
            events,
        })
    }
}
