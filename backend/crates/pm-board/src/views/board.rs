use crate::views::card_line;
use crate::{AddCardDraft, MutationKey, MutationTracker};

use pm_core::ProjectBoard;

use std::fmt;

/// One project's three lists side by side, rendered top to bottom.
///
/// Cards with a move in flight are marked with `*`, and a list with a task
/// being created shows `(saving)`.
pub struct BoardView<'a> {
    board: &'a ProjectBoard,
    mutations: Option<&'a MutationTracker>,
    draft: Option<&'a AddCardDraft>,
}

impl<'a> BoardView<'a> {
    pub fn new(board: &'a ProjectBoard) -> Self {
        Self {
            board,
            mutations: None,
            draft: None,
        }
    }

    pub fn with_mutations(mut self, mutations: &'a MutationTracker) -> Self {
        self.mutations = Some(mutations);
        self
    }

    pub fn with_draft(mut self, draft: Option<&'a AddCardDraft>) -> Self {
        self.draft = draft;
        self
    }

    fn is_mutating(&self, key: &MutationKey) -> bool {
        self.mutations.is_some_and(|m| m.is_mutating(key))
    }
}

impl fmt::Display for BoardView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.board.project.name)?;

        for list in &self.board.lists {
            let saving = if self.is_mutating(&MutationKey::List(list.id.clone())) {
                " (saving)"
            } else {
                ""
            };
            writeln!(f)?;
            writeln!(f, "== {} ({}){} ==", list.title, list.len(), saving)?;

            for card in &list.cards {
                let marker = if self.is_mutating(&MutationKey::Task(card.id)) {
                    '*'
                } else {
                    '-'
                };
                writeln!(f, "  {} {}", marker, card_line(card))?;
            }

            if self.draft.is_some_and(|d| d.list_id == list.id) {
                writeln!(f, "  + (new card)")?;
            }
        }

        Ok(())
    }
}
