//! Shop endpoints.
use std::sync::Arc;

use game_core::{GameId, PurchaseOutcome, ShopItem};

use crate::error::Result;
use crate::transport::{Method, Transport};

/// Lists inventory and executes purchases for an active run.
#[derive(Clone)]
pub struct ShopService {
    transport: Arc<dyn Transport>,
}

impl ShopService {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// `GET /{gameId}/shop` — current inventory, replaced wholesale.
    pub async fn list(&self, game_id: &GameId) -> Result<Vec<ShopItem>> {
        let path = format!("/{}/shop", game_id);
        let payload = self.transport.call(Method::Get, &path).await?;
        super::decode(payload)
    }

    /// `POST /{gameId}/shop/buy/{itemId}` — buy one item.
    ///
    /// Not idempotent: the server debits gold per call, so failures are
    /// surfaced, never retried.
    pub async fn buy(&self, game_id: &GameId, item_id: &str) -> Result<PurchaseOutcome> {
        let path = format!("/{}/shop/buy/{}", game_id, item_id);
        let payload = self.transport.call(Method::Post, &path).await?;
        super::decode(payload)
    }
}
