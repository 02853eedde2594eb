//! Session orchestration for the Mugloar client.
//!
//! This crate is the single source of truth for session state. It wires the
//! stateless adapters from `game-api` into one [`SessionOrchestrator`] that
//! owns the mutable session, applies the merge rules from `game-core` after
//! each response, and derives cross-cutting state (game-over, follow-up
//! fetches) through explicit rules rather than ambient observation.
//!
//! Modules are organized by responsibility:
//! - [`orchestrator`] hosts the orchestrator, its builder, and the rules
//! - [`state`] holds the session container and its read-only snapshot
//! - [`events`] defines the broadcast event surface for front-ends
pub mod events;
pub mod orchestrator;
pub mod state;

pub use events::SessionEvent;
pub use orchestrator::{
    BuildError, OrchestratorConfig, SessionOrchestrator, SessionOrchestratorBuilder,
};
pub use state::{ErrorState, Operation, SessionSnapshot};
