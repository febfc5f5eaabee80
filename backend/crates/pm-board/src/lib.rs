//! Client-side board state and the optimistic mutation coordinator.
//!
//! [`BoardCoordinator`] owns a [`BoardState`] and talks to the server only
//! through [`RemoteOperations`]. Every change to the project collection is a
//! wholesale replacement followed by a rebuild of the derived lists.

pub mod coordinator;
pub mod error;
pub mod mutation;
pub mod remote;
pub mod state;
pub mod views;

pub use coordinator::{BoardCoordinator, MoveOutcome, TaskField};
pub use error::{BoardError, Result};
pub use mutation::{MutationKey, MutationPhase, MutationTracker};
pub use remote::{RemoteError, RemoteOperations, RemoteResult};
pub use state::{AddCardDraft, BoardState};
pub use views::{BoardView, ProjectListView, TaskDetailView};

#[cfg(test)]
mod tests;
