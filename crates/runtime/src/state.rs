//! Session state container and its consumer-facing snapshot.
use std::fmt;

use game_core::{Ad, AdOutcome, PurchaseOutcome, Reputation, Session, ShopItem};

/// Identifies which orchestrator operation produced an error or event.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operation {
    StartGame,
    FetchReputation,
    FetchMessages,
    FetchItems,
    AcceptAd,
    BuyItem,
}

impl Operation {
    /// Human-readable context string, phrased to slot into error messages.
    pub fn context(&self) -> &'static str {
        match self {
            Operation::StartGame => "start game",
            Operation::FetchReputation => "fetch reputation",
            Operation::FetchMessages => "fetch messages",
            Operation::FetchItems => "fetch items",
            Operation::AcceptAd => "accept ad",
            Operation::BuyItem => "buy item",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.context())
    }
}

/// The one optional error slot shared by all operations.
///
/// Cleared at the start of every operation, set only when that operation's
/// adapter call fails. Recovery is user-initiated; nothing retries.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ErrorState {
    pub message: String,
    pub operation: Operation,
}

impl ErrorState {
    pub fn for_operation(operation: Operation) -> Self {
        Self {
            message: format!(
                "Failed to {}. Please try to start a new game.",
                operation.context()
            ),
            operation,
        }
    }
}

/// Mutable session state owned by the orchestrator.
///
/// `epoch` counts successful game starts; in-flight responses are stamped
/// with it and discarded on mismatch so a stale fetch can never write data
/// from a superseded session.
#[derive(Debug, Default)]
pub(crate) struct SessionState {
    pub epoch: u64,
    pub in_flight: usize,
    pub error: Option<ErrorState>,
    pub game_over: bool,
    pub game: Option<Session>,
    pub reputation: Option<Reputation>,
    pub ads: Option<Vec<Ad>>,
    pub ad_outcome: Option<AdOutcome>,
    pub items: Option<Vec<ShopItem>>,
    pub purchase_outcome: Option<PurchaseOutcome>,
}

impl SessionState {
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            loading: self.in_flight > 0,
            error: self.error.clone(),
            game_over: self.game_over,
            game: self.game.clone(),
            reputation: self.reputation,
            ads: self.ads.clone(),
            ad_outcome: self.ad_outcome.clone(),
            items: self.items.clone(),
            purchase_outcome: self.purchase_outcome.clone(),
        }
    }
}

/// Owned, immutable view of the session for presentation layers.
///
/// `loading` reflects an in-flight counter across concurrent operations; it
/// is advisory UI feedback, not a correctness mechanism.
#[derive(Clone, Debug, PartialEq)]
pub struct SessionSnapshot {
    pub loading: bool,
    pub error: Option<ErrorState>,
    pub game_over: bool,
    pub game: Option<Session>,
    pub reputation: Option<Reputation>,
    pub ads: Option<Vec<Ad>>,
    pub ad_outcome: Option<AdOutcome>,
    pub items: Option<Vec<ShopItem>>,
    pub purchase_outcome: Option<PurchaseOutcome>,
}
