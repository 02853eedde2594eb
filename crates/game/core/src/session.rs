//! Session aggregate and the merge rules that keep it authoritative.
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::offer::AdOutcome;
use crate::shop::PurchaseOutcome;

/// Opaque server-issued identifier for one game run.
///
/// Set once when the session starts and immutable thereafter; a new game
/// means a new `GameId`, never a reused one.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GameId(pub String);

impl GameId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The in-memory aggregate for one game run, as reported by `/game/start`.
///
/// Every counter is server-authoritative. Nothing here is computed locally;
/// the only mutations are wholesale overwrites from an [`AdOutcome`] or
/// [`PurchaseOutcome`] via the `apply_*` methods.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub game_id: GameId,
    /// Signed so a terminal outcome (`lives <= 0`) compares cleanly.
    pub lives: i32,
    pub gold: u32,
    pub level: u32,
    pub score: u32,
    pub high_score: u32,
    pub turn: u32,
}

impl Session {
    /// Fold a resolved ad back into the session.
    ///
    /// Overwrites `gold`, `high_score`, `lives`, `score`, and `turn` with the
    /// server's values; `level` is not part of an ad outcome and stays put.
    /// Callers are expected to check [`AdOutcome::survived`] first — a fatal
    /// outcome transitions to game-over instead of merging.
    pub fn apply_ad_outcome(&mut self, outcome: &AdOutcome) {
        self.gold = outcome.gold;
        self.high_score = outcome.high_score;
        self.lives = outcome.lives;
        self.score = outcome.score;
        self.turn = outcome.turn;
    }

    /// Fold a shop purchase back into the session.
    ///
    /// Overwrites `gold`, `lives`, `level`, and `turn`; a purchase never
    /// changes `score` or `high_score`.
    pub fn apply_purchase(&mut self, outcome: &PurchaseOutcome) {
        self.gold = outcome.gold;
        self.lives = outcome.lives;
        self.level = outcome.level;
        self.turn = outcome.turn;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> Session {
        Session {
            game_id: GameId::new("g-1"),
            lives: 3,
            gold: 100,
            level: 1,
            score: 0,
            high_score: 0,
            turn: 1,
        }
    }

    #[test]
    fn ad_outcome_overwrites_counters_but_not_level() {
        let mut session = session();
        let outcome = AdOutcome {
            success: true,
            lives: 2,
            gold: 150,
            score: 10,
            high_score: 10,
            turn: 2,
            message: String::new(),
        };

        session.apply_ad_outcome(&outcome);

        assert_eq!(session.gold, 150);
        assert_eq!(session.lives, 2);
        assert_eq!(session.score, 10);
        assert_eq!(session.high_score, 10);
        assert_eq!(session.turn, 2);
        assert_eq!(session.level, 1);
    }

    #[test]
    fn purchase_overwrites_counters_but_not_score() {
        let mut session = session();
        let outcome = PurchaseOutcome {
            shopping_success: true,
            gold: 50,
            lives: 4,
            level: 2,
            turn: 2,
        };

        session.apply_purchase(&outcome);

        assert_eq!(session.gold, 50);
        assert_eq!(session.lives, 4);
        assert_eq!(session.level, 2);
        assert_eq!(session.turn, 2);
        assert_eq!(session.score, 0);
        assert_eq!(session.high_score, 0);
    }

    #[test]
    fn session_decodes_camel_case_payload() {
        let session: Session = serde_json::from_str(
            r#"{"gameId":"abc","lives":3,"gold":100,"level":0,"score":0,"highScore":42,"turn":1}"#,
        )
        .unwrap();

        assert_eq!(session.game_id, GameId::new("abc"));
        assert_eq!(session.high_score, 42);
    }
}
