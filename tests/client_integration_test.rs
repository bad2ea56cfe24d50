use anyhow::Result;
use httpmock::prelude::*;
use restful_client::{
    ClientError, LocalStorage, Method, Outcome, OutputFormat, RequestDescriptor, RequestDispatcher,
    RestfulClient,
};
use tempfile::TempDir;

fn client_for(server: &MockServer, dir: &TempDir) -> RestfulClient<RequestDispatcher, LocalStorage> {
    RestfulClient::new(
        RequestDispatcher::with_base_url(server.base_url()),
        LocalStorage::new(dir.path()),
    )
}

/// get /todos/1 印出狀態碼與 JSON 物件
#[tokio::test]
async fn test_get_todo_prints_status_and_body() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/todos/1");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({
                "userId": 1,
                "id": 1,
                "title": "delectus aut autem",
                "completed": false
            }));
    });

    let client = client_for(&server, &temp_dir);
    let request = RequestDescriptor::new(Method::Get, "/todos/1", None);
    let mut out = Vec::new();

    let outcome = client.run(&request, None, &mut out).await?;

    api_mock.assert();
    let text = String::from_utf8(out)?;
    let mut lines = text.lines();
    assert_eq!(lines.next(), Some("HTTP Status Code: 200"));

    let printed: serde_json::Value = serde_json::from_str(&text["HTTP Status Code: 200\n".len()..])?;
    assert_eq!(printed["title"], "delectus aut autem");
    assert!(matches!(outcome, Outcome::Printed(ref v) if *v == printed));
    Ok(())
}

#[tokio::test]
async fn test_post_creates_resource() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/posts")
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({"title": "a", "body": "b", "userId": 1}));
        then.status(201)
            .json_body(serde_json::json!({"title": "a", "body": "b", "userId": 1, "id": 101}));
    });

    let client = client_for(&server, &temp_dir);
    let request = RequestDescriptor::new(
        Method::Post,
        "/posts",
        Some(r#"{"title":"a","body":"b","userId":1}"#.to_string()),
    );
    let mut out = Vec::new();

    let outcome = client.run(&request, None, &mut out).await?;

    api_mock.assert();
    assert!(String::from_utf8(out)?.starts_with("HTTP Status Code: 201\n"));
    assert!(matches!(outcome, Outcome::Printed(ref v) if v["id"] == 101));
    Ok(())
}

#[tokio::test]
async fn test_not_found_reports_raw_body_and_exit_code_one() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/nonexistent-9999");
        then.status(404).body("{}");
    });

    let client = client_for(&server, &temp_dir);
    let request = RequestDescriptor::new(Method::Get, "/nonexistent-9999", None);
    let mut out = Vec::new();

    let err = client.run(&request, None, &mut out).await.unwrap_err();

    assert_eq!(String::from_utf8(out)?, "HTTP Status Code: 404\nError: {}\n");
    assert_eq!(err.exit_code(), 1);
    Ok(())
}

#[tokio::test]
async fn test_server_errors_are_handled_like_client_errors() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/posts");
        then.status(503).body("Service Unavailable");
    });

    let client = client_for(&server, &temp_dir);
    let request = RequestDescriptor::new(Method::Post, "/posts", None);
    let mut out = Vec::new();

    let err = client.run(&request, None, &mut out).await.unwrap_err();

    assert!(matches!(err, ClientError::RemoteFailure { status: 503, ref body } if body == "Service Unavailable"));
    assert_eq!(err.exit_code(), 1);
    Ok(())
}

#[tokio::test]
async fn test_json_output_round_trips() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let server = MockServer::start();
    let body = serde_json::json!([
        {"postId": 1, "id": 1, "name": "id labore ex et quam laborum", "email": "Eliseo@gardner.biz"},
        {"postId": 1, "id": 2, "name": "quo vero reiciendis", "email": "Jayne_Kuhic@sydney.com"}
    ]);
    server.mock(|when, then| {
        when.method(GET).path("/comments");
        then.status(200).json_body(body.clone());
    });

    let client = client_for(&server, &temp_dir);
    let request = RequestDescriptor::new(Method::Get, "/comments", None);
    let mut out = Vec::new();

    let outcome = client.run(&request, Some("comments.json"), &mut out).await?;

    let path = temp_dir.path().join("comments.json");
    assert_eq!(
        outcome,
        Outcome::Saved {
            path: path.clone(),
            format: OutputFormat::Json
        }
    );
    assert_eq!(String::from_utf8(out)?, "HTTP Status Code: 200\n");

    let written: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(&path)?)?;
    assert_eq!(written, body);
    Ok(())
}

#[tokio::test]
async fn test_csv_output_flattens_records() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/todos");
        then.status(200).json_body(serde_json::json!([
            {"userId": 1, "id": 1, "title": "delectus aut autem", "completed": false},
            {"userId": 1, "id": 2, "title": "quis ut nam facilis", "completed": false},
            {"userId": 2, "id": 3, "title": "fugiat veniam minus", "completed": true}
        ]));
    });

    let client = client_for(&server, &temp_dir);
    let request = RequestDescriptor::new(Method::Get, "/todos", None);
    let mut out = Vec::new();

    client.run(&request, Some("todos.csv"), &mut out).await?;

    let content = std::fs::read_to_string(temp_dir.path().join("todos.csv"))?;
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(
        lines,
        vec![
            "userId,id,title,completed",
            "1,1,delectus aut autem,false",
            "1,2,quis ut nam facilis,false",
            "2,3,fugiat veniam minus,true",
        ]
    );
    Ok(())
}

#[tokio::test]
async fn test_csv_output_of_single_object_fails() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/todos/1");
        then.status(200)
            .json_body(serde_json::json!({"userId": 1, "id": 1, "title": "x", "completed": false}));
    });

    let client = client_for(&server, &temp_dir);
    let request = RequestDescriptor::new(Method::Get, "/todos/1", None);
    let mut out = Vec::new();

    let err = client.run(&request, Some("out.csv"), &mut out).await.unwrap_err();

    assert!(matches!(err, ClientError::InvalidShape { .. }));
    assert!(!temp_dir.path().join("out.csv").exists());
    Ok(())
}

#[tokio::test]
async fn test_csv_output_of_empty_array_fails() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/posts");
        then.status(200).json_body(serde_json::json!([]));
    });

    let client = client_for(&server, &temp_dir);
    let request = RequestDescriptor::new(Method::Get, "/posts", None);
    let mut out = Vec::new();

    let err = client.run(&request, Some("posts.csv"), &mut out).await.unwrap_err();

    assert!(matches!(err, ClientError::InvalidShape { .. }));
    assert!(!temp_dir.path().join("posts.csv").exists());
    Ok(())
}
