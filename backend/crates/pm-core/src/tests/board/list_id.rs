use crate::{
    BoardList, CoreError, TaskStatus, list_id_for, parse_list_id, project_list_status,
    status_from_list_id,
};

use uuid::Uuid;

#[test]
fn test_list_id_uses_status_slug() {
    let project_id = Uuid::new_v4();
    assert_eq!(
        list_id_for(project_id, TaskStatus::InProgress),
        format!("{}-inprogress", project_id)
    );
}

#[test]
fn test_status_from_list_id_known_suffixes() {
    assert_eq!(
        status_from_list_id("proj123-todo").unwrap(),
        TaskStatus::Todo
    );
    assert_eq!(
        status_from_list_id("proj123-inprogress").unwrap(),
        TaskStatus::InProgress
    );
    assert_eq!(
        status_from_list_id("proj123-in_progress").unwrap(),
        TaskStatus::InProgress
    );
    assert_eq!(
        status_from_list_id("proj123-done").unwrap(),
        TaskStatus::Done
    );
}

#[test]
fn test_status_from_list_id_unknown_suffix_is_a_defect() {
    let err = status_from_list_id("proj123-archived").unwrap_err();
    assert!(matches!(err, CoreError::InvalidListId { ref value, .. } if value == "proj123-archived"));
}

#[test]
fn test_status_from_list_id_without_separator_is_a_defect() {
    assert!(status_from_list_id("done").is_err());
    assert!(status_from_list_id("-done").is_err());
    assert!(status_from_list_id("").is_err());
}

#[test]
fn test_status_from_list_id_with_uuid_project() {
    let project_id = Uuid::new_v4();
    for status in TaskStatus::ALL {
        let list_id = list_id_for(project_id, status);
        assert_eq!(status_from_list_id(&list_id).unwrap(), status);
    }
}

#[test]
fn test_parse_list_id_returns_project_prefix() {
    let project_id = Uuid::new_v4();
    let list_id = BoardList::id_for(project_id, TaskStatus::Done);

    let (prefix, status) = parse_list_id(&list_id).unwrap();

    assert_eq!(prefix, project_id.to_string());
    assert_eq!(status, TaskStatus::Done);
}

#[test]
fn test_project_list_status_rejects_other_projects_list() {
    let own = Uuid::new_v4();
    let other = Uuid::new_v4();

    assert_eq!(
        project_list_status(own, &list_id_for(own, TaskStatus::Todo)).unwrap(),
        TaskStatus::Todo
    );
    assert!(matches!(
        project_list_status(own, &list_id_for(other, TaskStatus::Todo)),
        Err(CoreError::InvalidListId { .. })
    ));
}
