//! Events emitted by the orchestrator for front-ends to observe.
//!
//! Delivered over a tokio broadcast channel; lagging receivers lose the
//! oldest events and the orchestrator never blocks on delivery.
use game_core::GameId;

use crate::state::Operation;

/// Notifications derived from session state changes.
#[derive(Clone, Debug)]
pub enum SessionEvent {
    /// A new session replaced the previous one.
    GameStarted { game_id: GameId },
    /// An accepted ad resolved and its counters were merged.
    AdResolved { success: bool, message: String },
    /// A shop purchase resolved and its counters were merged.
    ItemPurchased { success: bool },
    /// The most recent outcome reported non-positive lives.
    GameOver { score: u32, high_score: u32 },
    /// An adapter call failed; details are in the snapshot's error state.
    OperationFailed { operation: Operation },
}
