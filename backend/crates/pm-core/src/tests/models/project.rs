use crate::{Project, Task};

use uuid::Uuid;

#[test]
fn test_project_new() {
    let user_id = Uuid::new_v4();
    let project = Project::new(
        "My Project".to_string(),
        Some("Things to do".to_string()),
        user_id,
    );

    assert_eq!(project.name, "My Project");
    assert_eq!(project.description.as_deref(), Some("Things to do"));
    assert_eq!(project.created_by_id, user_id);
    assert_eq!(project.created_at, project.updated_at);
    assert!(project.tasks.is_empty());
}

#[test]
fn test_project_visible_to_creator() {
    let creator = Uuid::new_v4();
    let project = Project::new("Test".to_string(), None, creator);

    assert!(project.is_visible_to(creator));
    assert!(!project.is_visible_to(Uuid::new_v4()));
}

#[test]
fn test_project_visible_to_assignee() {
    let creator = Uuid::new_v4();
    let assignee = Uuid::new_v4();
    let mut project = Project::new("Test".to_string(), None, creator);

    let mut task = Task::new(project.id, "Assigned".to_string(), creator);
    task.assigned_to_id = Some(assignee);
    project.tasks.push(task);

    assert!(project.is_visible_to(assignee));
}

#[test]
fn test_project_deserializes_without_tasks() {
    let project = Project::new("Test".to_string(), None, Uuid::new_v4());
    let mut json = serde_json::to_value(&project).unwrap();
    json.as_object_mut().unwrap().remove("tasks");

    let parsed: Project = serde_json::from_value(json).unwrap();
    assert!(parsed.tasks.is_empty());
    assert_eq!(parsed.id, project.id);
}
