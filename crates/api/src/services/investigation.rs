//! Reputation investigation endpoint.
use std::sync::Arc;

use game_core::{GameId, Reputation};

use crate::error::Result;
use crate::transport::{Method, Transport};

/// Runs reputation investigations for an active run.
#[derive(Clone)]
pub struct InvestigationService {
    transport: Arc<dyn Transport>,
}

impl InvestigationService {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// `POST /{gameId}/investigate/reputation` — fetch the current standings.
    ///
    /// The payload replaces any previously fetched reputation wholesale.
    pub async fn reputation(&self, game_id: &GameId) -> Result<Reputation> {
        let path = format!("/{}/investigate/reputation", game_id);
        let payload = self.transport.call(Method::Post, &path).await?;
        super::decode(payload)
    }
}
