use pm_core::{ProjectBoard, TaskStatus, User};

use std::fmt;

/// Project selection screen.
pub struct ProjectListView<'a> {
    projects: &'a [ProjectBoard],
    user: Option<&'a User>,
}

impl<'a> ProjectListView<'a> {
    pub fn new(projects: &'a [ProjectBoard]) -> Self {
        Self {
            projects,
            user: None,
        }
    }

    /// Show the signed-in user's initials in the header.
    pub fn with_user(mut self, user: &'a User) -> Self {
        self.user = Some(user);
        self
    }
}

impl fmt::Display for ProjectListView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.user {
            Some(user) => writeln!(f, "Projects [{}]", user.initials())?,
            None => writeln!(f, "Projects")?,
        }

        if self.projects.is_empty() {
            return writeln!(f, "  (no projects yet)");
        }

        for board in self.projects {
            let counts: Vec<String> = TaskStatus::ALL
                .iter()
                .map(|status| format!("{} {}", board.list(*status).len(), status.title()))
                .collect();

            writeln!(f, "  {}  {}", board.project.name, board.id())?;
            if let Some(description) = board
                .project
                .description
                .as_deref()
                .filter(|d| !d.is_empty())
            {
                writeln!(f, "      {}", description)?;
            }
            writeln!(f, "      {}", counts.join(" / "))?;
        }

        Ok(())
    }
}
