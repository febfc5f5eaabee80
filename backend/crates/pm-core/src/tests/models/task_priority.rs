use crate::TaskPriority;

use std::str::FromStr;

#[test]
fn test_task_priority_round_trips_through_str() {
    for priority in [TaskPriority::Low, TaskPriority::Medium, TaskPriority::High] {
        assert_eq!(TaskPriority::from_str(priority.as_str()).unwrap(), priority);
    }
}

#[test]
fn test_task_priority_rejects_unknown() {
    assert!(TaskPriority::from_str("URGENT").is_err());
    assert!(TaskPriority::from_str("low").is_err());
}

#[test]
fn test_task_priority_default_is_medium() {
    assert_eq!(TaskPriority::default(), TaskPriority::Medium);
}
