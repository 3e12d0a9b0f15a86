//! End-to-end tests: real server on an ephemeral port, real SQLite file, HTTP client

use reqwest::{Client, StatusCode};
use serde_json::{json, Value};
use std::net::SocketAddr;
use tempfile::TempDir;
use todo_server::config::Config;
use todo_server::run_with_listener;
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

struct TestServer {
    base_url: String,
    shutdown: Option<oneshot::Sender<()>>,
    handle: JoinHandle<anyhow::Result<()>>,
}

impl TestServer {
    async fn start(database_url: String) -> Self {
        let mut config = Config::default();
        config.database.url = Some(database_url);

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr: SocketAddr = listener.local_addr().unwrap();
        let (tx, rx) = oneshot::channel::<()>();

        let handle = tokio::spawn(async move {
            run_with_listener(&config, listener, async move {
                let _ = rx.await;
            })
            .await
        });

        let server = Self {
            base_url: format!("http://{addr}"),
            shutdown: Some(tx),
            handle,
        };
        server.wait_until_ready().await;
        server
    }

    async fn wait_until_ready(&self) {
        let client = Client::new();
        for _ in 0..50 {
            if let Ok(response) = client.get(self.url("/health")).send().await {
                if response.status() == StatusCode::OK {
                    return;
                }
            }
            tokio::time::sleep(std::time::Duration::from_millis(50)).await;
        }
        panic!("server at {} never became healthy", self.base_url);
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn stop(mut self) {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
        self.handle.await.unwrap().unwrap();
    }
}

fn file_database(dir: &TempDir) -> String {
    dir.path().join("todos.sqlite").display().to_string()
}

#[tokio::test]
async fn test_buy_milk_round_trip_over_http() {
    let dir = TempDir::new().unwrap();
    let server = TestServer::start(file_database(&dir)).await;
    let client = Client::new();

    let response = client
        .post(server.url("/todos"))
        .json(&json!({ "title": "Buy milk", "description": "2%", "completed": false }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let created: Value = response.json().await.unwrap();
    assert_eq!(
        created,
        json!({ "id": 1, "title": "Buy milk", "description": "2%", "completed": false })
    );

    let response = client.get(server.url("/todos/1")).send().await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.json::<Value>().await.unwrap(), created);

    server.stop().await;
}

#[tokio::test]
async fn test_full_crud_cycle() {
    let dir = TempDir::new().unwrap();
    let server = TestServer::start(file_database(&dir)).await;
    let client = Client::new();

    for title in ["first", "second"] {
        let response = client
            .post(server.url("/todos"))
            .json(&json!({ "title": title }))
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let response = client
        .put(server.url("/todos/2"))
        .json(&json!({ "completed": true }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let updated: Value = response.json().await.unwrap();
    assert_eq!(updated["title"], "second");
    assert_eq!(updated["completed"], true);

    let response = client.delete(server.url("/todos/1")).send().await.unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert!(response.bytes().await.unwrap().is_empty());

    let response = client.delete(server.url("/todos/1")).send().await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let list: Value = client
        .get(server.url("/todos"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(list, json!([updated]));

    server.stop().await;
}

#[tokio::test]
async fn test_validation_and_not_found_over_http() {
    let server = TestServer::start(":memory:".to_string()).await;
    let client = Client::new();

    let response = client
        .post(server.url("/todos"))
        .json(&json!({ "title": "   " }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["error"], "VALIDATION_ERROR");

    let response = client.get(server.url("/todos/42")).send().await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let list: Value = client
        .get(server.url("/todos"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(list, json!([]));

    server.stop().await;
}

#[tokio::test]
async fn test_root_and_health_endpoints() {
    let server = TestServer::start(":memory:".to_string()).await;
    let client = Client::new();

    let root: Value = client.get(server.url("/")).send().await.unwrap().json().await.unwrap();
    assert_eq!(root, json!({ "message": "Hello World" }));

    let health: Value = client
        .get(server.url("/health"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(health["status"], "healthy");
    assert_eq!(health["database"], true);

    server.stop().await;
}

#[tokio::test]
async fn test_data_survives_server_restart() {
    let dir = TempDir::new().unwrap();
    let client = Client::new();

    let server = TestServer::start(file_database(&dir)).await;
    client
        .post(server.url("/todos"))
        .json(&json!({ "title": "keep me" }))
        .send()
        .await
        .unwrap();
    server.stop().await;

    let server = TestServer::start(file_database(&dir)).await;
    let todo: Value = client
        .get(server.url("/todos/1"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(todo["title"], "keep me");
    server.stop().await;
}
