use crate::tests::board::task_with_status;
use crate::{Project, ProjectBoard, TaskStatus};

use uuid::Uuid;

fn board_with_tasks() -> ProjectBoard {
    let mut project = Project::new("Board".to_string(), None, Uuid::new_v4());
    project.tasks = vec![
        task_with_status(project.id, "first", TaskStatus::Todo),
        task_with_status(project.id, "second", TaskStatus::Todo),
        task_with_status(project.id, "third", TaskStatus::Done),
    ];
    ProjectBoard::from_project(project)
}

#[test]
fn test_from_project_derives_lists() {
    let board = board_with_tasks();

    assert_eq!(board.list(TaskStatus::Todo).len(), 2);
    assert!(board.list(TaskStatus::InProgress).is_empty());
    assert_eq!(board.list(TaskStatus::Done).len(), 1);
}

#[test]
fn test_with_task_status_rebuilds_all_lists() {
    let board = board_with_tasks();
    let moved_id = board.project.tasks[0].id;

    let moved = board.with_task_status(moved_id, TaskStatus::Done).unwrap();

    assert_eq!(moved.list(TaskStatus::Todo).len(), 1);
    assert_eq!(moved.list(TaskStatus::Done).len(), 2);
    assert_eq!(
        moved.find_task(moved_id).map(|t| t.status),
        Some(TaskStatus::Done)
    );
    // The original value is untouched
    assert_eq!(board.list(TaskStatus::Todo).len(), 2);
}

#[test]
fn test_with_task_status_unknown_task() {
    let board = board_with_tasks();
    assert!(board.with_task_status(Uuid::new_v4(), TaskStatus::Done).is_none());
}
