use crate::Client;

use pm_board::{RemoteOperations, RemoteResult};
use pm_core::{NewProject, NewTask, Project, Task, TaskChanges};

use async_trait::async_trait;
use uuid::Uuid;

#[async_trait]
impl RemoteOperations for Client {
    async fn create_project(&self, input: NewProject) -> RemoteResult<Project> {
        Ok(Client::create_project(self, &input).await?)
    }

    async fn create_task(&self, input: NewTask) -> RemoteResult<Task> {
        Ok(Client::create_task(self, &input).await?)
    }

    async fn update_task(&self, task_id: Uuid, changes: TaskChanges) -> RemoteResult<Task> {
        Ok(Client::update_task(self, task_id, &changes).await?)
    }

    async fn delete_task(&self, task_id: Uuid) -> RemoteResult<Task> {
        Ok(Client::delete_task(self, task_id).await?)
    }

    async fn fetch_projects(&self) -> RemoteResult<Vec<Project>> {
        Ok(self.list_projects().await?)
    }
}
