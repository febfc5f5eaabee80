use crate::{CoreError, TaskStatus};

use std::str::FromStr;

#[test]
fn test_task_status_as_str() {
    assert_eq!(TaskStatus::Todo.as_str(), "TODO");
    assert_eq!(TaskStatus::InProgress.as_str(), "IN_PROGRESS");
    assert_eq!(TaskStatus::Done.as_str(), "DONE");
}

#[test]
fn test_task_status_from_str() {
    assert_eq!(TaskStatus::from_str("TODO").unwrap(), TaskStatus::Todo);
    assert_eq!(
        TaskStatus::from_str("IN_PROGRESS").unwrap(),
        TaskStatus::InProgress
    );
    assert_eq!(TaskStatus::from_str("DONE").unwrap(), TaskStatus::Done);
}

#[test]
fn test_task_status_from_str_rejects_unknown_values() {
    for value in ["", "todo", "ARCHIVED", "In Progress"] {
        let err = TaskStatus::from_str(value).unwrap_err();
        assert!(matches!(err, CoreError::InvalidTaskStatus { .. }), "{value}");
    }
}

#[test]
fn test_task_status_from_slug_is_case_insensitive() {
    assert_eq!(TaskStatus::from_slug("todo").unwrap(), TaskStatus::Todo);
    assert_eq!(TaskStatus::from_slug("TODO").unwrap(), TaskStatus::Todo);
    assert_eq!(
        TaskStatus::from_slug("inprogress").unwrap(),
        TaskStatus::InProgress
    );
    assert_eq!(
        TaskStatus::from_slug("in_progress").unwrap(),
        TaskStatus::InProgress
    );
    assert_eq!(
        TaskStatus::from_slug("IN_PROGRESS").unwrap(),
        TaskStatus::InProgress
    );
    assert_eq!(TaskStatus::from_slug("Done").unwrap(), TaskStatus::Done);
}

#[test]
fn test_task_status_from_slug_has_no_fallback() {
    assert!(TaskStatus::from_slug("archived").is_err());
    assert!(TaskStatus::from_slug("in-progress").is_err());
    assert!(TaskStatus::from_slug("").is_err());
}

#[test]
fn test_task_status_default_is_todo() {
    assert_eq!(TaskStatus::default(), TaskStatus::Todo);
}

#[test]
fn test_task_status_board_order() {
    for (index, status) in TaskStatus::ALL.iter().enumerate() {
        assert_eq!(status.position(), index);
    }
}

#[test]
fn test_task_status_serde_uses_constants() {
    let json = serde_json::to_string(&TaskStatus::InProgress).unwrap();
    assert_eq!(json, "\"IN_PROGRESS\"");

    let parsed: TaskStatus = serde_json::from_str("\"DONE\"").unwrap();
    assert_eq!(parsed, TaskStatus::Done);

    assert!(serde_json::from_str::<TaskStatus>("\"ARCHIVED\"").is_err());
}
