
use crate::{BoardCoordinator, RemoteError, RemoteOperations, RemoteResult};

use pm_core::{NewProject, NewTask, Project, Task, TaskChanges, TaskPriority, TaskStatus};

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::Notify;
use uuid::Uuid;

/// In-memory server double with call counters and failure switches.
///
/// With `hold_updates` set, `update_task` signals `update_entered` and then
/// waits for `release_update` before answering. `hold_next_fetch` does the
/// same for one `fetch_projects`, which answers with the projects as they
/// were when it was entered.
#[derive(Default)]
pub(crate) struct MockRemote {
    pub projects: Mutex<Vec<Project>>,
    pub user_id: Uuid,

    pub create_project_calls: AtomicUsize,
    pub create_task_calls: AtomicUsize,
    pub update_calls: AtomicUsize,
    pub delete_calls: AtomicUsize,
    pub fetch_calls: AtomicUsize,

    pub fail_mutations: AtomicBool,
    pub fail_fetch: AtomicBool,
    pub hold_updates: AtomicBool,
    pub hold_next_fetch: AtomicBool,

    pub update_entered: Notify,
    pub release_update: Notify,
    pub fetch_entered: Notify,
    pub release_fetch: Notify,

    pub last_changes: Mutex<Option<TaskChanges>>,
}

impl MockRemote {
    pub fn with_projects(projects: Vec<Project>) -> Self {
        Self {
            projects: Mutex::new(projects),
            user_id: Uuid::new_v4(),
            ..Self::default()
        }
    }

    pub fn calls(counter: &AtomicUsize) -> usize {
        counter.load(Ordering::SeqCst)
    }

    fn rejected() -> RemoteError {
        RemoteError::rejected(500, "INTERNAL_ERROR", "store unavailable")
    }
}

#[async_trait]
impl RemoteOperations for MockRemote {
    async fn create_project(&self, input: NewProject) -> RemoteResult<Project> {
        self.create_project_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_mutations.load(Ordering::SeqCst) {
            return Err(Self::rejected());
        }

        let project = Project::new(input.name, input.description, self.user_id);
        self.projects.lock().unwrap().push(project.clone());
        Ok(project)
    }

    async fn create_task(&self, input: NewTask) -> RemoteResult<Task> {
        self.create_task_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_mutations.load(Ordering::SeqCst) {
            return Err(Self::rejected());
        }

        let mut projects = self.projects.lock().unwrap();
        let project = projects
            .iter_mut()
            .find(|p| p.id == input.project_id)
            .ok_or_else(|| RemoteError::rejected(404, "NOT_FOUND", "project not found"))?;

        let mut task = Task::new(project.id, input.title, self.user_id);
        task.description = input.description;
        task.status = input.status.unwrap_or_default();
        task.priority = Some(input.priority.unwrap_or_default());
        project.tasks.push(task.clone());
        Ok(task)
    }

    async fn update_task(&self, task_id: Uuid, changes: TaskChanges) -> RemoteResult<Task> {
        self.update_calls.fetch_add(1, Ordering::SeqCst);
        *self.last_changes.lock().unwrap() = Some(changes.clone());

        if self.hold_updates.load(Ordering::SeqCst) {
            self.update_entered.notify_one();
            self.release_update.notified().await;
        }

        if self.fail_mutations.load(Ordering::SeqCst) {
            return Err(Self::rejected());
        }

        let mut projects = self.projects.lock().unwrap();
        let task = projects
            .iter_mut()
            .flat_map(|p| p.tasks.iter_mut())
            .find(|t| t.id == task_id)
            .ok_or_else(|| RemoteError::rejected(404, "NOT_FOUND", "task not found"))?;

        if let Some(title) = changes.title {
            task.title = title;
        }
        if let Some(description) = changes.description {
            task.description = Some(description);
        }
        if let Some(assignee) = changes.assigned_to_id {
            task.assigned_to_id = Some(assignee);
        }
        if let Some(status) = changes.status {
            task.status = status;
        }
        if let Some(priority) = changes.priority {
            task.priority = Some(priority);
        }
        task.updated_at = Utc::now();

        Ok(task.clone())
    }

    async fn delete_task(&self, task_id: Uuid) -> RemoteResult<Task> {
        self.delete_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_mutations.load(Ordering::SeqCst) {
            return Err(Self::rejected());
        }

        let mut projects = self.projects.lock().unwrap();
        for project in projects.iter_mut() {
            if let Some(index) = project.tasks.iter().position(|t| t.id == task_id) {
                return Ok(project.tasks.remove(index));
            }
        }
        Err(RemoteError::rejected(404, "NOT_FOUND", "task not found"))
    }

    async fn fetch_projects(&self) -> RemoteResult<Vec<Project>> {
        self.fetch_calls.fetch_add(1, Ordering::SeqCst);

        if self.fail_fetch.load(Ordering::SeqCst) {
            return Err(RemoteError::unavailable("connection refused"));
        }

        let projects = self.projects.lock().unwrap().clone();
        if self.hold_next_fetch.swap(false, Ordering::SeqCst) {
            self.fetch_entered.notify_one();
            self.release_fetch.notified().await;
        }
        Ok(projects)
    }
}

/// A project holding one task per given status, in order.
pub(crate) fn project_with_tasks(statuses: &[TaskStatus]) -> Project {
    let owner = Uuid::new_v4();
    let mut project = Project::new("Launch".to_string(), None, owner);
    for (i, status) in statuses.iter().enumerate() {
        let mut task = Task::new(project.id, format!("task {}", i), owner);
        task.status = *status;
        task.priority = Some(TaskPriority::Medium);
        project.tasks.push(task);
    }
    project
}

/// A coordinator over `remote` that has already loaded the board once.
pub(crate) async fn loaded_coordinator(
    remote: Arc<MockRemote>,
) -> BoardCoordinator<MockRemote> {
    let coordinator = BoardCoordinator::new(remote, Duration::from_secs(5));
    coordinator.refresh().await.unwrap();
    coordinator
}
