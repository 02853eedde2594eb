//! Adapter tests against a scripted transport; no network involved.
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::{Value, json};

use game_api::{
    AdService, ApiError, GameService, InvestigationService, Method, ShopService, Transport,
};
use game_core::{GameId, Probability};

/// Transport that replays canned payloads and records every call it sees.
struct ScriptedTransport {
    responses: Mutex<HashMap<String, Value>>,
    calls: Mutex<Vec<(Method, String)>>,
    failure: Option<u16>,
}

impl ScriptedTransport {
    fn new() -> Self {
        Self {
            responses: Mutex::new(HashMap::new()),
            calls: Mutex::new(Vec::new()),
            failure: None,
        }
    }

    fn failing(status: u16) -> Self {
        Self {
            failure: Some(status),
            ..Self::new()
        }
    }

    fn respond(self, path: &str, payload: Value) -> Self {
        self.responses
            .lock()
            .unwrap()
            .insert(path.to_string(), payload);
        self
    }

    fn calls(&self) -> Vec<(Method, String)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transport for ScriptedTransport {
    async fn call(&self, method: Method, path: &str) -> game_api::Result<Value> {
        self.calls.lock().unwrap().push((method, path.to_string()));

        if let Some(status) = self.failure {
            return Err(ApiError::Http { status });
        }

        self.responses
            .lock()
            .unwrap()
            .get(path)
            .cloned()
            .ok_or_else(|| ApiError::Network(format!("no script for {path}")))
    }
}

#[tokio::test]
async fn game_start_posts_and_decodes_session() {
    let transport = Arc::new(ScriptedTransport::new().respond(
        "/game/start",
        json!({
            "gameId": "run-1", "lives": 3, "gold": 100,
            "level": 0, "score": 0, "highScore": 0, "turn": 0
        }),
    ));

    let session = GameService::new(transport.clone()).start().await.unwrap();

    assert_eq!(session.game_id, GameId::new("run-1"));
    assert_eq!(session.lives, 3);
    assert_eq!(
        transport.calls(),
        vec![(Method::Post, "/game/start".to_string())]
    );
}

#[tokio::test]
async fn investigation_posts_to_reputation_endpoint() {
    let transport = Arc::new(ScriptedTransport::new().respond(
        "/run-1/investigate/reputation",
        json!({ "people": 4, "state": -2, "underworld": 0 }),
    ));

    let reputation = InvestigationService::new(transport.clone())
        .reputation(&GameId::new("run-1"))
        .await
        .unwrap();

    assert_eq!(reputation.people, 4);
    assert_eq!(reputation.state, -2);
    assert_eq!(
        transport.calls(),
        vec![(Method::Post, "/run-1/investigate/reputation".to_string())]
    );
}

#[tokio::test]
async fn ad_list_gets_messages_and_tolerates_unknown_labels() {
    let transport = Arc::new(ScriptedTransport::new().respond(
        "/run-1/messages",
        json!([{
            "adId": "ad-1", "message": "Help the king",
            "probability": "Utterly unheard of", "reward": 25,
            "expiresIn": 7, "encrypted": null
        }]),
    ));

    let ads = AdService::new(transport.clone())
        .list(&GameId::new("run-1"))
        .await
        .unwrap();

    assert_eq!(ads.len(), 1);
    assert_eq!(
        ads[0].probability,
        Probability::Other("Utterly unheard of".to_string())
    );
    assert_eq!(
        transport.calls(),
        vec![(Method::Get, "/run-1/messages".to_string())]
    );
}

#[tokio::test]
async fn ad_accept_posts_to_solve_endpoint() {
    let transport = Arc::new(ScriptedTransport::new().respond(
        "/run-1/solve/ad-1",
        json!({
            "success": true, "lives": 3, "gold": 135, "score": 25,
            "highScore": 25, "turn": 1, "message": "You did it"
        }),
    ));

    let outcome = AdService::new(transport.clone())
        .accept(&GameId::new("run-1"), "ad-1")
        .await
        .unwrap();

    assert!(outcome.survived());
    assert_eq!(outcome.gold, 135);
    assert_eq!(
        transport.calls(),
        vec![(Method::Post, "/run-1/solve/ad-1".to_string())]
    );
}

#[tokio::test]
async fn shop_buy_posts_to_buy_endpoint() {
    let transport = Arc::new(ScriptedTransport::new().respond(
        "/run-1/shop/buy/hpot",
        json!({
            "shoppingSuccess": true, "gold": 50, "lives": 4,
            "level": 0, "turn": 2
        }),
    ));

    let outcome = ShopService::new(transport.clone())
        .buy(&GameId::new("run-1"), "hpot")
        .await
        .unwrap();

    assert!(outcome.shopping_success);
    assert_eq!(outcome.lives, 4);
    assert_eq!(
        transport.calls(),
        vec![(Method::Post, "/run-1/shop/buy/hpot".to_string())]
    );
}

#[tokio::test]
async fn http_failures_pass_through_untouched() {
    let transport = Arc::new(ScriptedTransport::failing(500));

    let err = GameService::new(transport).start().await.unwrap_err();

    match err {
        ApiError::Http { status } => assert_eq!(status, 500),
        other => panic!("expected Http error, got {other:?}"),
    }
}
