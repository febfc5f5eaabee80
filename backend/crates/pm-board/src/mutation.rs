use std::collections::HashMap;
use std::fmt;

use uuid::Uuid;

/// What a pending mutation is attached to.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum MutationKey {
    /// A status move of one task
    Task(Uuid),
    /// Task creation into one list
    List(String),
    /// The create-project form
    ProjectForm,
}

impl fmt::Display for MutationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Task(id) => write!(f, "task {}", id),
            Self::List(id) => write!(f, "list {}", id),
            Self::ProjectForm => write!(f, "project form"),
        }
    }
}

/// Lifecycle of a keyed mutation: `Idle -> Mutating -> {Succeeded, Failed}`.
///
/// A settled key may start again; only `Mutating` blocks a new start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MutationPhase {
    #[default]
    Idle,
    Mutating,
    Succeeded,
    Failed,
}

impl MutationPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Mutating => "mutating",
            Self::Succeeded => "succeeded",
            Self::Failed => "failed",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MutationTracker {
    phases: HashMap<MutationKey, MutationPhase>,
}

impl MutationTracker {
    pub fn phase(&self, key: &MutationKey) -> MutationPhase {
        self.phases.get(key).copied().unwrap_or_default()
    }

    pub fn is_mutating(&self, key: &MutationKey) -> bool {
        self.phase(key) == MutationPhase::Mutating
    }

    /// Moves `key` to `Mutating`. Returns `false`, leaving the tracker
    /// untouched, when the key is already mutating.
    pub fn try_begin(&mut self, key: &MutationKey) -> bool {
        if self.is_mutating(key) {
            return false;
        }
        self.phases.insert(key.clone(), MutationPhase::Mutating);
        true
    }

    /// Settles a mutating key. Keys that are not mutating are left alone.
    pub fn settle(&mut self, key: &MutationKey, succeeded: bool) {
        if let Some(phase) = self.phases.get_mut(key)
            && *phase == MutationPhase::Mutating
        {
            *phase = if succeeded {
                MutationPhase::Succeeded
            } else {
                MutationPhase::Failed
            };
        }
    }

    pub fn in_flight(&self) -> impl Iterator<Item = &MutationKey> {
        self.phases
            .iter()
            .filter(|(_, phase)| **phase == MutationPhase::Mutating)
            .map(|(key, _)| key)
    }
}
