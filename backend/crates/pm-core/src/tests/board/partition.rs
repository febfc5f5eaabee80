use crate::tests::board::task_with_status;
use crate::{Task, TaskStatus, partition};

use googletest::assert_that;
use googletest::prelude::eq;
use proptest::prelude::*;
use uuid::Uuid;

#[test]
fn given_no_tasks_when_partitioned_then_three_empty_lists() {
    // Given
    let project_id = Uuid::new_v4();

    // When
    let lists = partition(project_id, &[]);

    // Then
    assert_that!(lists.len(), eq(3));
    assert_that!(lists[0].title, eq("To Do"));
    assert_that!(lists[1].title, eq("In Progress"));
    assert_that!(lists[2].title, eq("Done"));
    for list in &lists {
        assert!(list.cards.is_empty());
    }
}

#[test]
fn given_mixed_tasks_when_partitioned_then_each_list_keeps_input_order() {
    // Given
    let project_id = Uuid::new_v4();
    let tasks = vec![
        task_with_status(project_id, "a", TaskStatus::Done),
        task_with_status(project_id, "b", TaskStatus::Todo),
        task_with_status(project_id, "c", TaskStatus::InProgress),
        task_with_status(project_id, "d", TaskStatus::Todo),
        task_with_status(project_id, "e", TaskStatus::Done),
    ];

    // When
    let lists = partition(project_id, &tasks);

    // Then
    let titles = |index: usize| -> Vec<String> {
        lists[index].cards.iter().map(|t| t.title.clone()).collect()
    };
    assert_eq!(titles(0), vec!["b", "d"]);
    assert_eq!(titles(1), vec!["c"]);
    assert_eq!(titles(2), vec!["a", "e"]);
}

#[test]
fn given_project_when_partitioned_then_list_ids_carry_project_and_slug() {
    let project_id = Uuid::new_v4();
    let lists = partition(project_id, &[]);

    assert_that!(lists[0].id, eq(&format!("{}-todo", project_id)));
    assert_that!(lists[1].id, eq(&format!("{}-inprogress", project_id)));
    assert_that!(lists[2].id, eq(&format!("{}-done", project_id)));
}

fn status_strategy() -> impl Strategy<Value = TaskStatus> {
    prop_oneof![
        Just(TaskStatus::Todo),
        Just(TaskStatus::InProgress),
        Just(TaskStatus::Done),
    ]
}

fn tasks_from(project_id: Uuid, statuses: &[TaskStatus]) -> Vec<Task> {
    statuses
        .iter()
        .enumerate()
        .map(|(index, status)| task_with_status(project_id, &format!("task-{index}"), *status))
        .collect()
}

proptest! {
    #[test]
    fn prop_partition_is_complete_and_disjoint(statuses in prop::collection::vec(status_strategy(), 0..40)) {
        let project_id = Uuid::new_v4();
        let tasks = tasks_from(project_id, &statuses);

        let lists = partition(project_id, &tasks);

        for (list, status) in lists.iter().zip(TaskStatus::ALL) {
            prop_assert_eq!(list.status, status);
            let expected: Vec<Task> = tasks.iter().filter(|t| t.status == status).cloned().collect();
            prop_assert_eq!(&list.cards, &expected);
        }

        let total: usize = lists.iter().map(|list| list.cards.len()).sum();
        prop_assert_eq!(total, tasks.len());

        let mut seen = std::collections::HashSet::new();
        for list in &lists {
            for card in &list.cards {
                prop_assert!(seen.insert(card.id), "task {} appears twice", card.id);
            }
        }
    }

    #[test]
    fn prop_partition_is_idempotent(statuses in prop::collection::vec(status_strategy(), 0..40)) {
        let project_id = Uuid::new_v4();
        let tasks = tasks_from(project_id, &statuses);

        let once = partition(project_id, &tasks);
        let flattened: Vec<Task> = once.iter().flat_map(|list| list.cards.clone()).collect();
        let twice = partition(project_id, &flattened);

        prop_assert_eq!(once, twice);
    }
}
