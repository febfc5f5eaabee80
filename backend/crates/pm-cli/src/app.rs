//! Command dispatch. Board commands go through a [`BoardCoordinator`] so the
//! CLI follows the same mutation rules as any other board client.

use crate::{
    CliError, CliResult, Client, Identity, auth_commands::AuthCommands,
    board_commands::BoardCommands, cli::Cli, commands::Commands,
    project_commands::ProjectCommands, task_commands::TaskCommands,
};

use pm_board::{
    BoardCoordinator, BoardError, BoardView, MoveOutcome, ProjectListView, TaskDetailView,
    TaskField,
};
use pm_config::ClientConfig;
use pm_core::{Project, Task, User, list_id_for};

use std::sync::Arc;

use log::warn;
use serde::Serialize;

/// Run one parsed command line and return what should be printed.
pub async fn run(cli: Cli, config: &ClientConfig) -> CliResult<String> {
    let server_url = cli.server.unwrap_or_else(|| config.server_url.clone());

    let identity = match (cli.token, cli.user_id) {
        (Some(token), _) => Identity::Token(token),
        (None, Some(user_id)) => Identity::UserId(user_id),
        (None, None) => Identity::Anonymous,
    };

    let client = Arc::new(
        Client::new(&server_url)
            .with_identity(identity)
            .with_timeout(config.request_timeout()),
    );

    let app = App {
        coordinator: BoardCoordinator::from_config(Arc::clone(&client), config),
        client,
        json: cli.json,
    };

    match cli.command {
        Commands::Auth { action } => app.auth(action).await,
        Commands::Project { action } => app.project(action).await,
        Commands::Board { action } => app.board(action).await,
        Commands::Task { action } => app.task(action).await,
    }
}

struct App {
    client: Arc<Client>,
    coordinator: BoardCoordinator<Client>,
    json: bool,
}

impl App {
    async fn auth(&self, action: AuthCommands) -> CliResult<String> {
        match action {
            AuthCommands::SignUp {
                name,
                email,
                password,
            } => {
                let user = self.client.sign_up(&name, &email, &password).await?;
                self.render(&user, || {
                    format!("Signed up {} ({})", display_name(&user), user.id)
                })
            }
            AuthCommands::SignIn { email, password } => {
                let session = self.client.sign_in(&email, &password).await?;
                self.render(&session, || match session.token.as_deref() {
                    Some(token) => format!(
                        "Signed in as {} ({})\nexport PM_TOKEN={}",
                        display_name(&session.user),
                        session.user.id,
                        token
                    ),
                    None => format!(
                        "Signed in as {} (server has auth disabled)\nexport PM_USER_ID={}",
                        display_name(&session.user),
                        session.user.id
                    ),
                })
            }
            AuthCommands::Users => {
                let users = self.client.list_users().await?;
                self.render(&users, || {
                    users
                        .iter()
                        .map(|u| format!("{:<3} {}  {}", u.initials(), display_name(u), u.id))
                        .collect::<Vec<_>>()
                        .join("\n")
                })
            }
        }
    }

    async fn project(&self, action: ProjectCommands) -> CliResult<String> {
        match action {
            ProjectCommands::List => {
                self.refresh().await?;
                let state = self.coordinator.snapshot();
                let projects: Vec<&Project> = state.projects.iter().map(|b| &b.project).collect();
                self.render(&projects, || {
                    ProjectListView::new(&state.projects).to_string()
                })
            }
            ProjectCommands::Create { name, description } => {
                self.coordinator.open_project_form();
                let project = self
                    .coordinator
                    .create_project(&name, description.as_deref())
                    .await
                    .map_err(|e| self.failure(e))?;
                self.render(&project, || {
                    format!("Created project {} ({})", project.name, project.id)
                })
            }
        }
    }

    async fn board(&self, action: BoardCommands) -> CliResult<String> {
        match action {
            BoardCommands::Show { project_id } => {
                self.refresh().await?;
                self.coordinator
                    .select_project(project_id)
                    .map_err(|e| self.failure(e))?;

                let state = self.coordinator.snapshot();
                let board = state
                    .selected_board()
                    .ok_or_else(|| CliError::usage(format!("Project {} not found", project_id)))?;
                self.render(board, || {
                    BoardView::new(board)
                        .with_mutations(&state.mutations)
                        .with_draft(state.add_card.as_ref())
                        .to_string()
                })
            }
        }
    }

    async fn task(&self, action: TaskCommands) -> CliResult<String> {
        match action {
            TaskCommands::Create {
                project_id,
                list,
                title,
                description,
            } => {
                let list_id = list_id_for(project_id, list);
                self.coordinator
                    .start_add_card(&list_id)
                    .map_err(|e| self.failure(e))?;
                let task = self
                    .coordinator
                    .create_task(project_id, &list_id, &title, description.as_deref())
                    .await
                    .map_err(|e| self.failure(e))?;
                self.render(&task, || {
                    format!(
                        "Created {} in {} ({})",
                        task.title,
                        task.status.title(),
                        task.id
                    )
                })
            }
            TaskCommands::Move { id, to } => {
                self.refresh().await?;
                let from = self
                    .coordinator
                    .snapshot()
                    .find_task(id)
                    .map(|task| task.status)
                    .ok_or_else(|| CliError::usage(format!("Task {} not found", id)))?;

                let outcome = self
                    .coordinator
                    .move_task(id, from, to)
                    .await
                    .map_err(|e| self.failure(e))?;

                match outcome {
                    MoveOutcome::Unchanged => self.render(&None::<Task>, || {
                        format!("Task {} is already in {}", id, to.title())
                    }),
                    MoveOutcome::Moved(task) => self.render(&task, || {
                        format!("Moved {} to {}", task.title, task.status.title())
                    }),
                }
            }
            TaskCommands::Update {
                id,
                title,
                description,
                priority,
                assignee,
            } => {
                let fields: Vec<TaskField> = [
                    title.map(TaskField::Title),
                    description.map(TaskField::Description),
                    priority.map(TaskField::Priority),
                    assignee.map(TaskField::Assignee),
                ]
                .into_iter()
                .flatten()
                .collect();

                if fields.is_empty() {
                    return Err(CliError::usage(
                        "Nothing to update: pass --title, --description, --priority or --assignee",
                    ));
                }

                let mut updated = None;
                for field in fields {
                    let task = self
                        .coordinator
                        .update_task_field(id, field)
                        .await
                        .map_err(|e| self.failure(e))?;
                    updated = Some(task);
                }

                match updated {
                    Some(task) => {
                        let users = self.users().await;
                        self.render(&task, || TaskDetailView::new(&task, &users).to_string())
                    }
                    None => Err(CliError::usage("Nothing to update")),
                }
            }
            TaskCommands::Delete { id } => {
                let task = self
                    .coordinator
                    .delete_task(id)
                    .await
                    .map_err(|e| self.failure(e))?;
                self.render(&task, || format!("Deleted {} ({})", task.title, task.id))
            }
            TaskCommands::Show { id } => {
                self.refresh().await?;
                self.coordinator.open_task(id).map_err(|e| self.failure(e))?;

                let state = self.coordinator.snapshot();
                let task = state
                    .open_task()
                    .ok_or_else(|| CliError::usage(format!("Task {} not found", id)))?;
                let users = self.users().await;
                self.render(task, || TaskDetailView::new(task, &users).to_string())
            }
        }
    }

    async fn refresh(&self) -> CliResult<()> {
        self.coordinator.refresh().await.map_err(|e| self.failure(e))
    }

    /// Users are only needed for names; a failed lookup falls back to ids.
    async fn users(&self) -> Vec<User> {
        match self.client.list_users().await {
            Ok(users) => users,
            Err(e) => {
                warn!("Could not load users: {}", e);
                Vec::new()
            }
        }
    }

    fn failure(&self, source: BoardError) -> CliError {
        CliError::board(self.coordinator.snapshot().error, source)
    }

    fn render<T: Serialize + ?Sized>(
        &self,
        value: &T,
        text: impl FnOnce() -> String,
    ) -> CliResult<String> {
        if self.json {
            Ok(serde_json::to_string_pretty(value)?)
        } else {
            Ok(text())
        }
    }
}

fn display_name(user: &User) -> &str {
    user.name
        .as_deref()
        .or(user.email.as_deref())
        .unwrap_or("unnamed user")
}
