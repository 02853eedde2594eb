//! Remote service adapters for the Mugloar API.
//!
//! This crate is the only place that knows about HTTP. It exposes:
//! - [`Transport`], the object-safe async boundary the orchestrator and the
//!   tests program against,
//! - [`HttpTransport`], the reqwest implementation of that boundary,
//! - four stateless services ([`GameService`], [`InvestigationService`],
//!   [`AdService`], [`ShopService`]) that map one or two endpoints each onto
//!   the typed payloads from `game-core`.
//!
//! The services hold no session state and never retry: `list`-style reads are
//! idempotent, but accepting an ad or buying an item consumes server-side
//! state, so retrying is a policy decision that belongs to a human.
pub mod error;
pub mod services;
pub mod transport;

pub use error::{ApiError, Result};
pub use services::{AdService, GameService, InvestigationService, ShopService};
pub use transport::{HttpTransport, Method, Transport};
