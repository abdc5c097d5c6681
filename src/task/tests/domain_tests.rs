//! Domain tests for task construction, status parsing, and update merging.

use crate::task::domain::{
    ParseTaskStatusError, Task, TaskDomainError, TaskStatus, TaskTitle, TaskUpdate,
};
use rstest::rstest;

#[rstest]
#[case(TaskStatus::NotStarted, "NOT_STARTED")]
#[case(TaskStatus::InProgress, "IN_PROGRESS")]
#[case(TaskStatus::Completed, "COMPLETED")]
#[case(TaskStatus::Cancelled, "CANCELLED")]
fn status_round_trips_through_canonical_literal(
    #[case] status: TaskStatus,
    #[case] literal: &str,
) {
    assert_eq!(status.as_str(), literal);
    assert_eq!(TaskStatus::try_from(literal), Ok(status));
}

#[rstest]
#[case(TaskStatus::NotStarted, "\"NOT_STARTED\"")]
#[case(TaskStatus::InProgress, "\"IN_PROGRESS\"")]
#[case(TaskStatus::Completed, "\"COMPLETED\"")]
#[case(TaskStatus::Cancelled, "\"CANCELLED\"")]
fn status_serializes_to_wire_literal(#[case] status: TaskStatus, #[case] json: &str) {
    let serialized = serde_json::to_string(&status).expect("status serializes");
    assert_eq!(serialized, json);
    let deserialized: TaskStatus = serde_json::from_str(json).expect("status deserializes");
    assert_eq!(deserialized, status);
}

#[rstest]
#[case("not_started")]
#[case("DONE")]
#[case("")]
fn unknown_status_literal_is_rejected(#[case] literal: &str) {
    assert_eq!(
        TaskStatus::try_from(literal),
        Err(ParseTaskStatusError(literal.to_owned()))
    );
}

#[rstest]
#[case("")]
#[case("   ")]
#[case("\t\n")]
fn blank_title_is_rejected(#[case] raw: &str) {
    assert_eq!(TaskTitle::new(raw), Err(TaskDomainError::EmptyTitle));
}

#[rstest]
fn title_preserves_original_value() {
    let title = TaskTitle::new("Write report").expect("valid title");
    assert_eq!(title.as_str(), "Write report");
}

fn sample_task() -> Task {
    let title = TaskTitle::new("Write report").expect("valid title");
    Task::new(title, Some("Quarterly summary".to_owned()), TaskStatus::NotStarted)
}

#[rstest]
fn new_task_gets_a_fresh_identifier() {
    let first = sample_task();
    let second = sample_task();
    assert_ne!(first.id(), second.id());
}

#[rstest]
fn empty_update_is_a_no_op() {
    let mut task = sample_task();
    let before = task.clone();
    task.apply_update(TaskUpdate::default());
    assert_eq!(task, before);
}

#[rstest]
fn update_with_only_description_changes_exactly_description() {
    let mut task = sample_task();
    let before = task.clone();

    task.apply_update(TaskUpdate {
        description: Some("Annual summary".to_owned()),
        ..TaskUpdate::default()
    });

    assert_eq!(task.id(), before.id());
    assert_eq!(task.title(), before.title());
    assert_eq!(task.status(), before.status());
    assert_eq!(task.description(), Some("Annual summary"));
}

#[rstest]
fn update_replaces_every_supplied_field() {
    let mut task = sample_task();
    let id_before = task.id();

    task.apply_update(TaskUpdate {
        title: Some(TaskTitle::new("Publish report").expect("valid title")),
        description: Some("Done and dusted".to_owned()),
        status: Some(TaskStatus::Completed),
    });

    assert_eq!(task.id(), id_before);
    assert_eq!(task.title().as_str(), "Publish report");
    assert_eq!(task.description(), Some("Done and dusted"));
    assert_eq!(task.status(), TaskStatus::Completed);
}

#[rstest]
fn update_with_identical_values_leaves_task_equal() {
    let mut task = sample_task();
    let before = task.clone();

    task.apply_update(TaskUpdate {
        title: Some(before.title().clone()),
        description: before.description().map(ToOwned::to_owned),
        status: Some(before.status()),
    });

    assert_eq!(task, before);
}
