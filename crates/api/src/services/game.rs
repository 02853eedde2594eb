//! Game lifecycle endpoint.
use std::sync::Arc;

use game_core::Session;

use crate::error::Result;
use crate::transport::{Method, Transport};

/// Starts new game runs.
#[derive(Clone)]
pub struct GameService {
    transport: Arc<dyn Transport>,
}

impl GameService {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// `POST /game/start` — begin a new run and return its initial session.
    pub async fn start(&self) -> Result<Session> {
        let payload = self.transport.call(Method::Post, "/game/start").await?;
        super::decode(payload)
    }
}
