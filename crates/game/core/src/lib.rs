//! Canonical session data model shared across clients.
//!
//! `game-core` defines the wire types returned by the Mugloar API (session,
//! reputation, offers, shop inventory, turn outcomes) and the merge rules
//! that fold a server outcome back into the session aggregate. All types are
//! pure data: no I/O, no async, no hidden state. The orchestrator in the
//! `runtime` crate is the only consumer that mutates a [`Session`], and it
//! does so exclusively through the `apply_*` methods exported here.
pub mod offer;
pub mod reputation;
pub mod session;
pub mod shop;

pub use offer::{Ad, AdOutcome, Probability};
pub use reputation::Reputation;
pub use session::{GameId, Session};
pub use shop::{PurchaseOutcome, ShopItem};
