use super::*;

fn list_body() -> String {
    serde_json::json!({
        "tasks": [
            {"id": 1, "summary": "Buy milk", "text": "2%", "priority": 1, "due": 1735700400000i64, "timestamp": 1735000000000i64},
            {"id": 2, "summary": "Essay", "text": "COMP2110", "priority": 3, "category": "uni"},
            {"id": 3, "summary": "Gym", "text": "", "priority": 0}
        ]
    })
    .to_string()
}

#[tokio::test]
async fn test_list_tasks() {
    let mut server = mockito::Server::new_async().await;

    let handler = server
        .mock("GET", "/tasks?start=0&count=15")
        .match_header("Authorization", "Bearer test_token")
        .with_status(200)
        .with_body(list_body())
        .create();

    let store = HttpTaskStore::new(&server.url()).with_session(Some(Session::new("test_token")));

    let tasks = store.list_tasks().await.expect("failed to list tasks");
    handler.assert();

    // Server order, untouched
    assert_eq!(tasks.len(), 3);
    assert_eq!(tasks[0].id, 1);
    assert_eq!(tasks[1].id, 2);
    assert_eq!(tasks[2].id, 3);

    // Due label derived only where due is present
    assert!(tasks[0].due_label.as_deref().is_some_and(|l| !l.is_empty()));
    assert_eq!(tasks[1].due_label, None);
    assert_eq!(tasks[2].due_label, None);
}

#[tokio::test]
async fn test_list_tasks_without_session() {
    let mut server = mockito::Server::new_async().await;

    // The request is still attempted, just without an Authorization header
    let handler = server
        .mock("GET", "/tasks?start=0&count=15")
        .match_header("Authorization", mockito::Matcher::Missing)
        .with_status(401)
        .with_body(r#"{"error": "unauthorized"}"#)
        .create();

    let store = HttpTaskStore::new(&server.url());
    let err = store.list_tasks().await.expect_err("expected an error");
    handler.assert();

    let remote = err
        .downcast_ref::<RemoteError>()
        .expect("expected a RemoteError");
    assert_eq!(remote.status, 401);
}

#[tokio::test]
async fn test_list_tasks_server_error() {
    let mut server = mockito::Server::new_async().await;

    let handler = server
        .mock("GET", "/tasks?start=0&count=15")
        .with_status(500)
        .with_body("boom")
        .create();

    let store = HttpTaskStore::new(&server.url()).with_session(Some(Session::new("test_token")));
    let err = store.list_tasks().await.expect_err("expected an error");
    handler.assert();

    let remote = err
        .downcast_ref::<RemoteError>()
        .expect("expected a RemoteError");
    assert_eq!(remote.status, 500);
    assert_eq!(remote.body, "boom");
}

#[tokio::test]
async fn test_create_task() {
    let mut server = mockito::Server::new_async().await;

    let handler = server
        .mock("POST", "/tasks")
        .match_header("Authorization", "Bearer test_token")
        .match_body(mockito::Matcher::Json(serde_json::json!({
            "summary": "Buy milk",
            "text": "2%",
            "priority": 1,
            "due": 1735693200000i64
        })))
        .with_status(201)
        .create();

    let store = HttpTaskStore::new(&server.url()).with_session(Some(Session::new("test_token")));

    let draft = DraftTask {
        title: "Buy milk".to_string(),
        text: "2%".to_string(),
        priority: 1,
        ..DraftTask::default()
    };

    store
        .create_task(CreateTaskRequest::from(&draft))
        .await
        .expect("failed to create task");
    handler.assert();
}

#[tokio::test]
async fn test_delete_task() {
    let mut server = mockito::Server::new_async().await;

    let handler = server
        .mock("DELETE", "/tasks/42")
        .match_header("Authorization", "Bearer test_token")
        .with_status(200)
        .create();

    let store = HttpTaskStore::new(&server.url()).with_session(Some(Session::new("test_token")));

    store.delete_task(42).await.expect("failed to delete task");
    handler.assert();
}
