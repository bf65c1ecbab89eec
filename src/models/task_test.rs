use super::*;

#[test]
fn test_format_due() {
    // 2025-01-01T03:00:00Z is 2:00 PM in Sydney (UTC+11 in January)
    assert_eq!(
        format_due(1735700400000).as_deref(),
        Some("Jan 1, 2025, 2:00 PM")
    );
}

#[test]
fn test_localize_due() {
    let task = Task {
        id: 1,
        summary: "Buy milk".to_string(),
        text: "2%".to_string(),
        priority: 1,
        category: None,
        due: Some(1735700400000),
        timestamp: None,
        due_label: None,
    };
    let task = task.localize_due();
    assert!(task.due_label.as_deref().is_some_and(|l| !l.is_empty()));

    let task = Task {
        due: None,
        due_label: Some("stale".to_string()),
        ..task
    };
    assert_eq!(task.localize_due().due_label, None);
}

#[test]
fn test_draft_due_millis() {
    let draft = DraftTask::default();
    // 2025-01-01 12:00 Sydney is 2025-01-01T01:00:00Z
    assert_eq!(draft.due_millis(), Some(1735693200000));

    let draft = DraftTask {
        due_date: "not-a-date".to_string(),
        ..DraftTask::default()
    };
    assert_eq!(draft.due_millis(), None);

    let draft = DraftTask {
        due_time: "25:99".to_string(),
        ..DraftTask::default()
    };
    assert_eq!(draft.due_millis(), None);
}

#[test]
fn test_task_deserialize_defaults() {
    let task: Task = serde_json::from_str(r#"{"id": 7, "summary": "Essay"}"#).unwrap();
    assert_eq!(task.id, 7);
    assert_eq!(task.text, "");
    assert_eq!(task.priority, 0);
    assert_eq!(task.due, None);
    assert_eq!(task.due_label, None);
}
