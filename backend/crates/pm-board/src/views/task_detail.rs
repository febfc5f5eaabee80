use pm_core::{Task, User};

use std::fmt;

use uuid::Uuid;

/// Full task view. Users are only used to resolve creator and assignee names.
pub struct TaskDetailView<'a> {
    task: &'a Task,
    users: &'a [User],
}

impl<'a> TaskDetailView<'a> {
    pub fn new(task: &'a Task, users: &'a [User]) -> Self {
        Self { task, users }
    }

    fn user_label(&self, user_id: Uuid) -> String {
        match self.users.iter().find(|u| u.id == user_id) {
            Some(user) => match (user.name.as_deref(), user.email.as_deref()) {
                (Some(name), _) => format!("{} ({})", name, user.initials()),
                (None, Some(email)) => email.to_string(),
                (None, None) => user_id.to_string(),
            },
            None => user_id.to_string(),
        }
    }
}

impl fmt::Display for TaskDetailView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let task = self.task;

        writeln!(f, "{}", task.title)?;
        writeln!(f, "  id:        {}", task.id)?;
        writeln!(f, "  status:    {}", task.status.title())?;
        writeln!(
            f,
            "  priority:  {}",
            task.priority.map_or("-", |p| p.as_str())
        )?;
        writeln!(
            f,
            "  assignee:  {}",
            task.assigned_to_id
                .map_or_else(|| "unassigned".to_string(), |id| self.user_label(id))
        )?;
        writeln!(f, "  creator:   {}", self.user_label(task.created_by_id))?;
        if !task.tags.is_empty() {
            writeln!(f, "  tags:      {}", task.tags.join(", "))?;
        }
        if let Some(deadline) = task.deadline {
            writeln!(f, "  deadline:  {}", deadline.format("%Y-%m-%d"))?;
        }
        writeln!(f, "  created:   {}", task.created_at.format("%Y-%m-%d %H:%M"))?;
        writeln!(f, "  updated:   {}", task.updated_at.format("%Y-%m-%d %H:%M"))?;

        match task.description.as_deref().filter(|d| !d.is_empty()) {
            Some(description) => {
                writeln!(f)?;
                writeln!(f, "{}", description)
            }
            None => Ok(()),
        }
    }
}
