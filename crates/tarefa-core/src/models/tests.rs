use std::str::FromStr;

use jiff::{civil::date, Timestamp};

use super::*;
use crate::params::{AddTask, EditTask};

fn create_test_task(id: u64, completed: bool) -> Task {
    Task {
        id,
        text: format!("Task {id}"),
        description: String::new(),
        completed,
        priority: Priority::Simple,
        day: None,
        date: None,
        created_at: Timestamp::from_second(1704585600).unwrap(), // 2024-01-07 00:00:00 UTC
    }
}

#[test]
fn test_priority_cycle_order() {
    assert_eq!(Priority::Simple.next(), Priority::Medium);
    assert_eq!(Priority::Medium.next(), Priority::Urgent);
    assert_eq!(Priority::Urgent.next(), Priority::Simple);
}

#[test]
fn test_priority_cycle_returns_after_three_steps() {
    for priority in Priority::ALL {
        assert_eq!(priority.next().next().next(), priority);
    }
}

#[test]
fn test_priority_rank() {
    assert!(Priority::Urgent.rank() < Priority::Medium.rank());
    assert!(Priority::Medium.rank() < Priority::Simple.rank());
}

#[test]
fn test_priority_from_str() {
    assert_eq!(Priority::from_str("URGENT").unwrap(), Priority::Urgent);
    assert_eq!(Priority::from_str(" medium ").unwrap(), Priority::Medium);
    assert!(Priority::from_str("critical").is_err());
}

#[test]
fn test_priority_serializes_lowercase() {
    assert_eq!(
        serde_json::to_string(&Priority::Urgent).unwrap(),
        "\"urgent\""
    );
}

#[test]
fn test_weekday_from_civil_date() {
    assert_eq!(Weekday::from(date(2024, 1, 7)), Weekday::Domingo);
    assert_eq!(Weekday::from(date(2024, 1, 8)), Weekday::Segunda);
    assert_eq!(Weekday::from(date(2024, 1, 13)), Weekday::Sabado);
}

#[test]
fn test_weekday_round_trips_through_str() {
    for name in [
        "domingo", "segunda", "terca", "quarta", "quinta", "sexta", "sabado",
    ] {
        assert_eq!(Weekday::from_str(name).unwrap().as_str(), name);
    }
    assert_eq!(Weekday::Terca.label(), "Terça-feira");
}

#[test]
fn test_set_date_derives_day() {
    let mut task = create_test_task(1, false);
    task.set_date(Some(date(2024, 1, 10)));
    assert_eq!(task.day, Some(Weekday::Quarta));

    task.set_date(None);
    assert_eq!(task.day, None);
    assert_eq!(task.date, None);
}

#[test]
fn test_task_serializes_storage_field_names() {
    let mut task = create_test_task(1704585600000, false);
    task.set_date(Some(date(2024, 1, 7)));
    let value = serde_json::to_value(&task).unwrap();

    assert_eq!(value["id"], 1704585600000u64);
    assert_eq!(value["priority"], "simple");
    assert_eq!(value["day"], "domingo");
    assert_eq!(value["date"], "2024-01-07");
    assert!(value.get("createdAt").is_some());
    assert!(value.get("created_at").is_none());
}

#[test]
fn test_filter_mode_matches() {
    let open = create_test_task(1, false);
    let done = create_test_task(2, true);

    assert!(FilterMode::All.matches(&open) && FilterMode::All.matches(&done));
    assert!(FilterMode::Active.matches(&open));
    assert!(!FilterMode::Active.matches(&done));
    assert!(FilterMode::Completed.matches(&done));
    assert!(!FilterMode::Completed.matches(&open));
}

#[test]
fn test_filter_mode_from_str() {
    assert_eq!(FilterMode::from_str("active").unwrap(), FilterMode::Active);
    assert_eq!(FilterMode::from_str("done").unwrap(), FilterMode::Completed);
    assert!(FilterMode::from_str("archived").is_err());
}

#[test]
fn test_task_stats_from_iter() {
    let tasks = [
        create_test_task(1, false),
        create_test_task(2, true),
        create_test_task(3, false),
    ];
    let stats: TaskStats = tasks.iter().collect();

    assert_eq!(stats.total, 3);
    assert_eq!(stats.active, 2);
    assert_eq!(stats.completed, 1);
    assert!(stats.has_completed());
}

#[test]
fn test_new_task_defaults() {
    let params = AddTask {
        text: "  Buy milk  ".to_string(),
        ..Default::default()
    };
    let task = NewTask::from_params(&params, false).unwrap();

    assert_eq!(task.text, "Buy milk");
    assert_eq!(task.description, "");
    assert_eq!(task.priority, Priority::Simple);
    assert_eq!(task.date, None);
}

#[test]
fn test_new_task_requires_date_in_dated_mode() {
    let mut params = AddTask {
        text: "Dentist".to_string(),
        ..Default::default()
    };
    match NewTask::from_params(&params, true).unwrap_err() {
        crate::TodoError::InvalidInput { field, .. } => assert_eq!(field, "date"),
        other => panic!("Expected InvalidInput error, got {other:?}"),
    }

    params.date = Some("2024-03-01".to_string());
    let task = NewTask::from_params(&params, true).unwrap();
    assert_eq!(task.date, Some(date(2024, 3, 1)));
}

#[test]
fn test_new_task_rejects_bad_date_even_when_optional() {
    let params = AddTask {
        text: "Dentist".to_string(),
        date: Some("tomorrow".to_string()),
        ..Default::default()
    };
    assert!(NewTask::from_params(&params, false).is_err());
}

#[test]
fn test_task_changes_date_clear() {
    let params = EditTask {
        id: 1,
        date: Some(String::new()),
        ..Default::default()
    };
    let changes = TaskChanges::from_params(&params, false).unwrap();
    assert_eq!(changes.date, Some(None));

    assert!(TaskChanges::from_params(&params, true).is_err());
}

#[test]
fn test_task_changes_untouched_fields() {
    let params = EditTask {
        id: 1,
        text: Some("New text".to_string()),
        ..Default::default()
    };
    let changes = TaskChanges::from_params(&params, true).unwrap();
    assert_eq!(changes.text.as_deref(), Some("New text"));
    assert_eq!(changes.description, None);
    assert_eq!(changes.date, None);
}
