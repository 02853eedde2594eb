//! Reputation standings reported by the investigation endpoint.
use serde::{Deserialize, Serialize};

/// Three independent standing counters.
///
/// Replaced wholesale on every fetch; the counters are never merged
/// field-by-field and may move in either direction between fetches.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reputation {
    pub people: i64,
    pub state: i64,
    pub underworld: i64,
}
