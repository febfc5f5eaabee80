use crate::client::responses::{
    ErrorResponse, ProjectListResponse, ProjectResponse, TaskResponse, UserListResponse,
    UserResponse,
};
use crate::{CliClientResult, ClientError, Session};

use pm_core::{NewProject, NewTask, Project, Task, TaskChanges, User};

use std::time::Duration;

use log::debug;
use reqwest::{Client as ReqwestClient, Method};
use serde::Serialize;
use serde::de::DeserializeOwned;
use uuid::Uuid;

/// How requests identify the session user.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Identity {
    #[default]
    Anonymous,
    /// `Authorization: Bearer <token>`, used when the server has auth enabled
    Token(String),
    /// `X-User-Id: <uuid>`, development mode
    UserId(String),
}

/// HTTP client for the pm-server REST API
pub struct Client {
    pub base_url: String,
    pub identity: Identity,
    timeout: Option<Duration>,
    client: ReqwestClient,
}

impl Client {
    /// Create a new client
    ///
    /// # Arguments
    /// * `base_url` - Server URL (e.g., "http://127.0.0.1:8000")
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            identity: Identity::Anonymous,
            timeout: None,
            client: ReqwestClient::new(),
        }
    }

    pub fn with_identity(mut self, identity: Identity) -> Self {
        self.identity = identity;
        self
    }

    /// Per-request timeout applied by reqwest
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Build a request carrying the session identity
    fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        let mut req = self.client.request(method, &url);

        match &self.identity {
            Identity::Anonymous => {}
            Identity::Token(token) => req = req.bearer_auth(token),
            Identity::UserId(user_id) => req = req.header("X-User-Id", user_id),
        }

        if let Some(timeout) = self.timeout {
            req = req.timeout(timeout);
        }

        req
    }

    /// Execute request, turning the error envelope into `ClientError::Api`
    async fn execute<T: DeserializeOwned>(
        &self,
        req: reqwest::RequestBuilder,
    ) -> CliClientResult<T> {
        let response = req.send().await?;
        let status = response.status();
        let body = response.bytes().await?;

        debug!("Response {} ({} bytes)", status, body.len());

        if !status.is_success() {
            return Err(match serde_json::from_slice::<ErrorResponse>(&body) {
                Ok(envelope) => ClientError::api_error(
                    status.as_u16(),
                    envelope.error.code,
                    envelope.error.message,
                    envelope.error.field,
                ),
                Err(_) => ClientError::api_error(
                    status.as_u16(),
                    "UNKNOWN",
                    String::from_utf8_lossy(&body).into_owned(),
                    None,
                ),
            });
        }

        Ok(serde_json::from_slice(&body)?)
    }

    // =========================================================================
    // Auth Operations
    // =========================================================================

    /// Register a new user
    pub async fn sign_up(&self, name: &str, email: &str, password: &str) -> CliClientResult<User> {
        #[derive(Serialize)]
        struct SignUpRequest<'a> {
            name: &'a str,
            email: &'a str,
            password: &'a str,
        }

        let body = SignUpRequest {
            name,
            email,
            password,
        };
        let req = self
            .request(Method::POST, "/api/v1/auth/sign-up")
            .json(&body);
        let response: UserResponse = self.execute(req).await?;
        Ok(response.user)
    }

    /// Check credentials; the session token is only present when the server
    /// has auth enabled
    pub async fn sign_in(&self, email: &str, password: &str) -> CliClientResult<Session> {
        #[derive(Serialize)]
        struct SignInRequest<'a> {
            email: &'a str,
            password: &'a str,
        }

        let body = SignInRequest { email, password };
        let req = self
            .request(Method::POST, "/api/v1/auth/sign-in")
            .json(&body);
        self.execute(req).await
    }

    /// List users (assignee picker)
    pub async fn list_users(&self) -> CliClientResult<Vec<User>> {
        let req = self.request(Method::GET, "/api/v1/users");
        let response: UserListResponse = self.execute(req).await?;
        Ok(response.users)
    }

    // =========================================================================
    // Project Operations
    // =========================================================================

    /// List projects visible to the session user, each with its tasks
    pub async fn list_projects(&self) -> CliClientResult<Vec<Project>> {
        let req = self.request(Method::GET, "/api/v1/projects");
        let response: ProjectListResponse = self.execute(req).await?;
        Ok(response.projects)
    }

    pub async fn create_project(&self, input: &NewProject) -> CliClientResult<Project> {
        let req = self.request(Method::POST, "/api/v1/projects").json(input);
        let response: ProjectResponse = self.execute(req).await?;
        Ok(response.project)
    }

    // =========================================================================
    // Task Operations
    // =========================================================================

    pub async fn create_task(&self, input: &NewTask) -> CliClientResult<Task> {
        let req = self.request(Method::POST, "/api/v1/tasks").json(input);
        let response: TaskResponse = self.execute(req).await?;
        Ok(response.task)
    }

    /// Patch a task; only fields present in `changes` are sent
    pub async fn update_task(&self, id: Uuid, changes: &TaskChanges) -> CliClientResult<Task> {
        let req = self
            .request(Method::PATCH, &format!("/api/v1/tasks/{}", id))
            .json(changes);
        let response: TaskResponse = self.execute(req).await?;
        Ok(response.task)
    }

    /// Delete a task, returning it as it was
    pub async fn delete_task(&self, id: Uuid) -> CliClientResult<Task> {
        let req = self.request(Method::DELETE, &format!("/api/v1/tasks/{}", id));
        let response: TaskResponse = self.execute(req).await?;
        Ok(response.task)
    }
}
