//! Ad board endpoints.
use std::sync::Arc;

use game_core::{Ad, AdOutcome, GameId};

use crate::error::Result;
use crate::transport::{Method, Transport};

/// Lists and resolves ads for an active run.
#[derive(Clone)]
pub struct AdService {
    transport: Arc<dyn Transport>,
}

impl AdService {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// `GET /{gameId}/messages` — the current ad board, replaced wholesale.
    pub async fn list(&self, game_id: &GameId) -> Result<Vec<Ad>> {
        let path = format!("/{}/messages", game_id);
        let payload = self.transport.call(Method::Get, &path).await?;
        super::decode(payload)
    }

    /// `POST /{gameId}/solve/{adId}` — attempt one ad.
    ///
    /// Not idempotent: each call spends a turn on the server, so a failed
    /// call must never be replayed automatically.
    pub async fn accept(&self, game_id: &GameId, ad_id: &str) -> Result<AdOutcome> {
        let path = format!("/{}/solve/{}", game_id, ad_id);
        let payload = self.transport.call(Method::Post, &path).await?;
        super::decode(payload)
    }
}
