//! End-to-end burndown scenarios with a fixed clock.

use chrono::{DateTime, Utc};
use iterplan_core::burndown::parse_timestamp;
use iterplan_core::{calculate_burndown_progress, BurndownStatus, CaseEstimate, TShirtSize, Task, TaskStatus};

fn at(s: &str) -> DateTime<Utc> {
    parse_timestamp("now", s).unwrap()
}

fn mixed_tasks() -> Vec<Task> {
    vec![
        Task::new("Task 1", TaskStatus::Completed)
            .with_id("task1")
            .with_estimate(TShirtSize::Md),
        Task::new("Task 2", TaskStatus::InProgress)
            .with_id("task2")
            .with_estimate(TShirtSize::Lg),
        Task::new("Task 3", TaskStatus::Pending)
            .with_id("task3")
            .with_estimate(TShirtSize::Xlg),
    ]
}

fn with_status(tasks: Vec<Task>, status: TaskStatus) -> Vec<Task> {
    tasks
        .into_iter()
        .map(|mut task| {
            task.status = status;
            task
        })
        .collect()
}

#[test]
fn halfway_with_mixed_tasks_is_at_risk() {
    let report = calculate_burndown_progress("2024-01-10", Some("2024-01-20"), &mixed_tasks(), at("2024-01-15"));
    assert_eq!(report.time_progress, 50);
    assert_eq!(report.effort_progress, CaseEstimate::new(35, 34, 35));
    assert_eq!(report.status, BurndownStatus::AtRisk);
    assert_eq!(report.total_effort, CaseEstimate::new(10.0, 16.0, 26.0));
    assert_eq!(report.completed_effort, CaseEstimate::new(2.0, 3.0, 5.0));
    assert_eq!(report.in_progress_effort, CaseEstimate::new(3.0, 5.0, 8.0));
    assert_eq!(report.expected_end_date.likely, at("2024-01-25"));
}

#[test]
fn past_end_with_work_left_is_behind() {
    let report = calculate_burndown_progress("2024-01-10", Some("2024-01-20"), &mixed_tasks(), at("2024-01-25"));
    assert_eq!(report.time_progress, 100);
    assert_eq!(report.status, BurndownStatus::Behind);
}

#[test]
fn completed_early_is_ahead() {
    let tasks = with_status(mixed_tasks(), TaskStatus::Completed);
    let report = calculate_burndown_progress("2024-01-10", Some("2024-01-20"), &tasks, at("2024-01-12"));
    assert_eq!(report.time_progress, 20);
    assert_eq!(report.effort_progress.likely, 100);
    assert_eq!(report.status, BurndownStatus::Ahead);
}

#[test]
fn completed_after_deadline_is_on_track() {
    let tasks = with_status(mixed_tasks(), TaskStatus::Completed);
    let report = calculate_burndown_progress("2024-01-10", Some("2024-01-20"), &tasks, at("2024-01-22"));
    assert_eq!(report.status, BurndownStatus::OnTrack);
}

#[test]
fn open_ended_uses_projected_end() {
    let start = at("2024-01-10");
    let report = calculate_burndown_progress("2024-01-10", None, &mixed_tasks(), at("2024-01-15"));
    assert!(report.time_progress > 0 && report.time_progress < 100);
    assert!(report.expected_end_date.likely > start);
    // 5 of 15 projected days elapsed
    assert_eq!(report.time_progress, 33);
}

#[test]
fn open_ended_all_completed_is_ahead() {
    let tasks = with_status(mixed_tasks(), TaskStatus::Completed);
    let report = calculate_burndown_progress("2024-01-10", None, &tasks, at("2024-01-15"));
    assert_eq!(report.effort_progress.likely, 100);
    assert_eq!(report.status, BurndownStatus::Ahead);
}

#[test]
fn open_ended_without_progress_is_behind() {
    let tasks = with_status(mixed_tasks(), TaskStatus::Pending);
    let report = calculate_burndown_progress("2024-01-10", None, &tasks, at("2024-01-15"));
    assert_eq!(report.effort_progress.likely, 0);
    assert_eq!(report.status, BurndownStatus::Behind);
}

#[test]
fn future_start_is_on_track() {
    let report = calculate_burndown_progress("2024-01-10", None, &mixed_tasks(), at("2024-01-05"));
    assert_eq!(report.time_progress, 0);
    assert_eq!(report.status, BurndownStatus::OnTrack);
}

#[test]
fn empty_task_list_is_complete() {
    let report = calculate_burndown_progress("2024-01-10", Some("2024-01-20"), &[], at("2024-01-15"));
    assert_eq!(report.effort_progress, CaseEstimate::splat(100));
    assert_eq!(report.total_effort, CaseEstimate::ZERO);
    assert_eq!(report.status, BurndownStatus::Ahead);
}

#[test]
fn unestimated_tasks_are_complete() {
    let tasks: Vec<Task> = mixed_tasks()
        .into_iter()
        .map(|mut task| {
            task.estimate = None;
            task
        })
        .collect();
    let report = calculate_burndown_progress("2024-01-10", Some("2024-01-20"), &tasks, at("2024-01-15"));
    assert_eq!(report.effort_progress, CaseEstimate::splat(100));
}

#[test]
fn invalid_start_date_degrades_gracefully() {
    let now = at("2024-01-15");
    let report = calculate_burndown_progress("invalid date", None, &mixed_tasks(), now);
    assert_eq!(report.time_progress, 0);
    assert_eq!(report.status, BurndownStatus::OnTrack);
    assert_eq!(report.expected_end_date, CaseEstimate::splat(now));
    // effort is still reported
    assert_eq!(report.effort_progress.likely, 34);
}

#[test]
fn identical_inputs_give_identical_output() {
    let now = at("2024-01-15T08:45:12.250Z");
    let first = calculate_burndown_progress("2024-01-10", None, &mixed_tasks(), now);
    let second = calculate_burndown_progress("2024-01-10", None, &mixed_tasks(), now);
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}
