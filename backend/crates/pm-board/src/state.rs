use crate::MutationTracker;

use pm_core::{Project, ProjectBoard, Task, TaskStatus};

use uuid::Uuid;

/// The list a new card is being typed into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddCardDraft {
    pub list_id: String,
    pub status: TaskStatus,
}

/// Everything the board UI renders from.
///
/// `projects` is only ever replaced as a whole, and each entry's lists are
/// derived from its task collection.
#[derive(Debug, Clone, Default)]
pub struct BoardState {
    pub projects: Vec<ProjectBoard>,
    pub selected_project: Option<Uuid>,
    /// Single user-visible error slot
    pub error: Option<String>,
    pub add_card: Option<AddCardDraft>,
    pub project_form_open: bool,
    pub open_task: Option<Uuid>,
    pub mutations: MutationTracker,
    pub(crate) applied_generation: u64,
}

impl BoardState {
    pub fn board(&self, project_id: Uuid) -> Option<&ProjectBoard> {
        self.projects.iter().find(|board| board.id() == project_id)
    }

    pub fn selected_board(&self) -> Option<&ProjectBoard> {
        self.selected_project.and_then(|id| self.board(id))
    }

    pub fn find_task(&self, task_id: Uuid) -> Option<&Task> {
        self.projects
            .iter()
            .find_map(|board| board.find_task(task_id))
    }

    pub fn open_task(&self) -> Option<&Task> {
        self.open_task.and_then(|id| self.find_task(id))
    }

    /// Generation of the last applied project fetch. Zero until the first one.
    pub fn generation(&self) -> u64 {
        self.applied_generation
    }

    pub(crate) fn replace_projects(&mut self, projects: Vec<Project>) {
        self.projects = projects.into_iter().map(ProjectBoard::from_project).collect();
    }

    pub(crate) fn board_index_of_task(&self, task_id: Uuid) -> Option<usize> {
        self.projects
            .iter()
            .position(|board| board.find_task(task_id).is_some())
    }
}
