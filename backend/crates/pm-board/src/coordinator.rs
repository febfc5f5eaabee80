//! Optimistic mutation coordinator.
//!
//! State sits behind a `std::sync::Mutex` that is only ever held for
//! synchronous reads and writes, never across a remote call. Every remote
//! call is bounded by the configured request timeout.

use crate::{
    AddCardDraft, BoardError, BoardState, MutationKey, RemoteError, RemoteOperations,
    RemoteResult, Result as BoardErrorResult,
};

use pm_config::ClientConfig;
use pm_core::{
    NewProject, NewTask, Project, Task, TaskChanges, TaskPriority, TaskStatus, parse_list_id,
    project_list_status, trimmed_non_empty,
};

use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use log::{debug, error, info, warn};
use uuid::Uuid;

pub const MOVE_FAILED_MESSAGE: &str = "Failed to update task status. Please try again.";
pub const CREATE_TASK_FAILED_MESSAGE: &str = "Failed to create task. Please try again.";
pub const CREATE_PROJECT_FAILED_MESSAGE: &str = "Failed to create project. Please try again.";
pub const UPDATE_TASK_FAILED_MESSAGE: &str = "Failed to update task. Please try again.";
pub const DELETE_TASK_FAILED_MESSAGE: &str = "Failed to delete task. Please try again.";
pub const REFRESH_FAILED_MESSAGE: &str = "Failed to load projects. Please try again.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Source and target status were equal; nothing happened.
    Unchanged,
    /// The server accepted the move.
    Moved(Task),
}

/// One editable task field, as sent by `update_task_field`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskField {
    Title(String),
    Description(String),
    Priority(TaskPriority),
    Assignee(Uuid),
    Status(TaskStatus),
}

impl TaskField {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Title(_) => "title",
            Self::Description(_) => "description",
            Self::Priority(_) => "priority",
            Self::Assignee(_) => "assignee",
            Self::Status(_) => "status",
        }
    }

    fn into_changes(self) -> BoardErrorResult<TaskChanges> {
        let mut changes = TaskChanges::default();
        match self {
            Self::Title(title) => changes.title = Some(trimmed_non_empty("title", &title)?),
            Self::Description(description) => {
                changes.description = Some(description.trim().to_string())
            }
            Self::Priority(priority) => changes.priority = Some(priority),
            Self::Assignee(user_id) => changes.assigned_to_id = Some(user_id),
            Self::Status(status) => changes.status = Some(status),
        }
        Ok(changes)
    }
}

pub struct BoardCoordinator<R: RemoteOperations> {
    remote: Arc<R>,
    state: Arc<Mutex<BoardState>>,
    request_timeout: Duration,
    next_generation: AtomicU64,
}

impl<R: RemoteOperations> BoardCoordinator<R> {
    pub fn new(remote: Arc<R>, request_timeout: Duration) -> Self {
        Self {
            remote,
            state: Arc::new(Mutex::new(BoardState::default())),
            request_timeout,
            next_generation: AtomicU64::new(0),
        }
    }

    pub fn from_config(remote: Arc<R>, config: &ClientConfig) -> Self {
        Self::new(remote, config.request_timeout())
    }

    /// Copy of the current state for rendering.
    pub fn snapshot(&self) -> BoardState {
        self.lock().clone()
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Drag-and-drop a task to another list.
    ///
    /// The local board shows the new status before the server is asked. On
    /// success the collection is refetched; on failure the error slot is set
    /// and the collection is refetched once, which also undoes the local move.
    pub async fn move_task(
        &self,
        task_id: Uuid,
        from: TaskStatus,
        to: TaskStatus,
    ) -> BoardErrorResult<MoveOutcome> {
        if from == to {
            debug!("Move of task {} within {} ignored", task_id, from);
            return Ok(MoveOutcome::Unchanged);
        }

        let key = MutationKey::Task(task_id);
        let ticket = {
            let mut state = self.lock();

            let index = state
                .board_index_of_task(task_id)
                .ok_or_else(|| BoardError::unknown_task(task_id))?;

            if !state.mutations.try_begin(&key) {
                warn!("Move of task {} rejected: previous move in flight", task_id);
                return Err(BoardError::in_flight(key));
            }

            if let Some(moved) = state.projects[index].with_task_status(task_id, to) {
                state.projects[index] = moved;
            }

            MutationTicket::new(Arc::clone(&self.state), key)
        };

        info!("Moving task {} from {} to {}", task_id, from, to);

        let result = self
            .call(self.remote.update_task(task_id, TaskChanges::status(to)))
            .await;

        match result {
            Ok(task) => {
                // A failed refresh is already recorded in the error slot
                let _ = self.refresh().await;
                ticket.settle(true);
                Ok(MoveOutcome::Moved(task))
            }
            Err(e) => {
                error!("Failed to move task {}: {}", task_id, e);
                self.reconcile_after_failure(MOVE_FAILED_MESSAGE).await;
                ticket.settle(false);
                Err(e.into())
            }
        }
    }

    /// Create a task in the list `list_id` of `project_id`.
    ///
    /// The new task's status comes from the list id; an unknown list suffix
    /// is reported and nothing is sent.
    pub async fn create_task(
        &self,
        project_id: Uuid,
        list_id: &str,
        title: &str,
        description: Option<&str>,
    ) -> BoardErrorResult<Task> {
        let title = trimmed_non_empty("title", title)?;

        let status = project_list_status(project_id, list_id)?;

        let key = MutationKey::List(list_id.to_string());
        let ticket = self.begin(key)?;

        let input = NewTask {
            project_id,
            title,
            description: description.map(|d| d.trim().to_string()),
            status: Some(status),
            priority: None,
        };

        info!("Creating task '{}' in {}", input.title, list_id);

        match self.call(self.remote.create_task(input)).await {
            Ok(task) => {
                {
                    let mut state = self.lock();
                    if state
                        .add_card
                        .as_ref()
                        .is_some_and(|draft| draft.list_id == list_id)
                    {
                        state.add_card = None;
                    }
                }
                ticket.settle(true);
                let _ = self.refresh().await;
                Ok(task)
            }
            Err(e) => {
                error!("Failed to create task in {}: {}", list_id, e);
                self.record_error(CREATE_TASK_FAILED_MESSAGE);
                ticket.settle(false);
                Err(e.into())
            }
        }
    }

    /// Submit the create-project form.
    ///
    /// The form closes only when the server accepts the project.
    pub async fn create_project(
        &self,
        name: &str,
        description: Option<&str>,
    ) -> BoardErrorResult<Project> {
        let name = trimmed_non_empty("name", name)?;

        let ticket = self.begin(MutationKey::ProjectForm)?;

        let input = NewProject {
            name,
            description: description.map(|d| d.trim().to_string()),
        };

        info!("Creating project '{}'", input.name);

        match self.call(self.remote.create_project(input)).await {
            Ok(project) => {
                self.lock().project_form_open = false;
                ticket.settle(true);
                let _ = self.refresh().await;
                Ok(project)
            }
            Err(e) => {
                error!("Failed to create project: {}", e);
                self.record_error(CREATE_PROJECT_FAILED_MESSAGE);
                ticket.settle(false);
                Err(e.into())
            }
        }
    }

    /// Change one field of a task. No optimistic write; edits of different
    /// fields are not ordered against each other.
    pub async fn update_task_field(
        &self,
        task_id: Uuid,
        field: TaskField,
    ) -> BoardErrorResult<Task> {
        let name = field.name();
        let changes = field.into_changes()?;

        info!("Updating {} of task {}", name, task_id);

        match self.call(self.remote.update_task(task_id, changes)).await {
            Ok(task) => {
                let _ = self.refresh().await;
                Ok(task)
            }
            Err(e) => {
                error!("Failed to update {} of task {}: {}", name, task_id, e);
                self.reconcile_after_failure(UPDATE_TASK_FAILED_MESSAGE).await;
                Err(e.into())
            }
        }
    }

    pub async fn delete_task(&self, task_id: Uuid) -> BoardErrorResult<Task> {
        info!("Deleting task {}", task_id);

        match self.call(self.remote.delete_task(task_id)).await {
            Ok(task) => {
                {
                    let mut state = self.lock();
                    if state.open_task == Some(task_id) {
                        state.open_task = None;
                    }
                }
                let _ = self.refresh().await;
                Ok(task)
            }
            Err(e) => {
                error!("Failed to delete task {}: {}", task_id, e);
                self.reconcile_after_failure(DELETE_TASK_FAILED_MESSAGE).await;
                Err(e.into())
            }
        }
    }

    /// Refetch every visible project and rebuild all lists.
    ///
    /// Responses are applied in issue order: a fetch that completes after a
    /// newer one has already been applied is dropped.
    pub async fn refresh(&self) -> BoardErrorResult<()> {
        let generation = self.next_generation.fetch_add(1, Ordering::SeqCst) + 1;

        debug!("Refreshing projects (generation {})", generation);

        match self.call(self.remote.fetch_projects()).await {
            Ok(projects) => {
                let mut state = self.lock();
                if generation <= state.applied_generation {
                    debug!(
                        "Discarding stale fetch {} (applied {})",
                        generation, state.applied_generation
                    );
                    return Ok(());
                }

                state.applied_generation = generation;
                state.replace_projects(projects);

                if let Some(selected) = state.selected_project
                    && state.board(selected).is_none()
                {
                    state.selected_project = None;
                }
                if let Some(open) = state.open_task
                    && state.find_task(open).is_none()
                {
                    state.open_task = None;
                }

                Ok(())
            }
            Err(e) => {
                error!("Failed to fetch projects: {}", e);
                self.record_error(REFRESH_FAILED_MESSAGE);
                Err(e.into())
            }
        }
    }

    // =========================================================================
    // UI state
    // =========================================================================

    pub fn select_project(&self, project_id: Uuid) -> BoardErrorResult<()> {
        let mut state = self.lock();
        if state.board(project_id).is_none() {
            return Err(BoardError::unknown_project(project_id));
        }
        state.selected_project = Some(project_id);
        Ok(())
    }

    pub fn back_to_projects(&self) {
        let mut state = self.lock();
        state.selected_project = None;
        state.add_card = None;
        state.open_task = None;
    }

    pub fn open_project_form(&self) {
        self.lock().project_form_open = true;
    }

    pub fn close_project_form(&self) {
        self.lock().project_form_open = false;
    }

    /// Open the add-card draft on one list, replacing any other open draft.
    pub fn start_add_card(&self, list_id: &str) -> BoardErrorResult<()> {
        let (_, status) = parse_list_id(list_id)?;
        self.lock().add_card = Some(AddCardDraft {
            list_id: list_id.to_string(),
            status,
        });
        Ok(())
    }

    pub fn cancel_add_card(&self) {
        self.lock().add_card = None;
    }

    pub fn open_task(&self, task_id: Uuid) -> BoardErrorResult<()> {
        let mut state = self.lock();
        if state.find_task(task_id).is_none() {
            return Err(BoardError::unknown_task(task_id));
        }
        state.open_task = Some(task_id);
        Ok(())
    }

    pub fn close_task(&self) {
        self.lock().open_task = None;
    }

    pub fn dismiss_error(&self) {
        self.lock().error = None;
    }

    // =========================================================================
    // Internals
    // =========================================================================

    fn lock(&self) -> MutexGuard<'_, BoardState> {
        lock_state(&self.state)
    }

    fn record_error(&self, message: &str) {
        self.lock().error = Some(message.to_string());
    }

    /// Record a failed mutation and refetch once. The mutation's message
    /// stays in the error slot even when the refetch fails too.
    async fn reconcile_after_failure(&self, message: &str) {
        self.record_error(message);
        if self.refresh().await.is_err() {
            self.record_error(message);
        }
    }

    fn begin(&self, key: MutationKey) -> BoardErrorResult<MutationTicket> {
        if !self.lock().mutations.try_begin(&key) {
            warn!("Rejected: {} already has a mutation in flight", key);
            return Err(BoardError::in_flight(key));
        }
        Ok(MutationTicket::new(Arc::clone(&self.state), key))
    }

    async fn call<T>(&self, future: impl Future<Output = RemoteResult<T>>) -> RemoteResult<T> {
        match tokio::time::timeout(self.request_timeout, future).await {
            Ok(result) => result,
            Err(_elapsed) => {
                warn!("Remote call timed out after {:?}", self.request_timeout);
                Err(RemoteError::timeout(self.request_timeout))
            }
        }
    }
}

fn lock_state(state: &Mutex<BoardState>) -> MutexGuard<'_, BoardState> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Marks a key `Mutating` for its lifetime. Dropping an unsettled ticket
/// (an early return or a cancelled future) settles the key as failed.
struct MutationTicket {
    state: Arc<Mutex<BoardState>>,
    key: MutationKey,
    settled: bool,
}

impl MutationTicket {
    fn new(state: Arc<Mutex<BoardState>>, key: MutationKey) -> Self {
        Self {
            state,
            key,
            settled: false,
        }
    }

    fn settle(mut self, succeeded: bool) {
        self.finish(succeeded);
    }

    fn finish(&mut self, succeeded: bool) {
        if !self.settled {
            self.settled = true;
            lock_state(&self.state)
                .mutations
                .settle(&self.key, succeeded);
        }
    }
}

impl Drop for MutationTicket {
    fn drop(&mut self) {
        self.finish(false);
    }
}
