//! End-to-end tests against a server bound to an ephemeral port.

#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::indexing_slicing
)]

use std::time::{Duration, SystemTime};

use eventlog::api;
use eventlog::app_state::AppState;
use eventlog::domain::BackupMonitor;
use eventlog::persistence::SqliteEventStore;
use eventlog::service::EventService;
use serde_json::Value;
use tokio::task::JoinHandle;

struct Server {
    base: String,
    dir: tempfile::TempDir,
    _handle: JoinHandle<()>,
}

async fn start_server() -> Server {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = SqliteEventStore::open(&dir.path().join("data").join("app.db"), 5)
        .await
        .expect("open store");
    let backups = BackupMonitor::new(dir.path().join("backup"), "db");
    let app = api::build_app(AppState::new(EventService::new(store, backups, 50)));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let handle = tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    Server {
        base: format!("http://{addr}"),
        dir,
        _handle: handle,
    }
}

async fn get_json(client: &reqwest::Client, url: String) -> Value {
    let res = client.get(url).send().await.unwrap();
    assert!(res.status().is_success());
    res.json().await.unwrap()
}

#[tokio::test]
async fn write_list_count_round_trip() {
    let server = start_server().await;
    let client = reqwest::Client::new();

    let added = get_json(&client, format!("{}/add?message=hola", server.base)).await;
    assert_eq!(added["status"], "added");
    assert_eq!(added["message"], "hola");
    let ts = added["timestamp"].as_str().unwrap();
    assert!(ts.ends_with('Z'));

    let _ = get_json(&client, format!("{}/add", server.base)).await;

    let list = get_json(&client, format!("{}/consultation", server.base)).await;
    let arr = list.as_array().unwrap();
    assert_eq!(arr.len(), 2);
    assert_eq!(arr[0]["message"], "hello");
    assert_eq!(arr[1]["message"], "hola");
    assert_eq!(arr[1]["timestamp"], ts);
    assert!(arr[0]["id"].as_i64().unwrap() > arr[1]["id"].as_i64().unwrap());

    let count = get_json(&client, format!("{}/count", server.base)).await;
    assert_eq!(count["count"], 2);
}

#[tokio::test]
async fn concurrent_writes_are_all_counted() {
    let server = start_server().await;
    let client = reqwest::Client::new();

    let mut tasks = Vec::new();
    for i in 0..20 {
        let client = client.clone();
        let url = format!("{}/add?message=w{i}", server.base);
        tasks.push(tokio::spawn(async move {
            client.get(url).send().await.unwrap().status()
        }));
    }
    for task in tasks {
        assert!(task.await.unwrap().is_success());
    }

    let count = get_json(&client, format!("{}/count", server.base)).await;
    assert_eq!(count["count"], 20);
}

#[tokio::test]
async fn status_reflects_backup_directory() {
    let server = start_server().await;
    let client = reqwest::Client::new();

    let status = get_json(&client, format!("{}/status", server.base)).await;
    assert_eq!(status["count"], 0);
    assert_eq!(status["last_backup_file"], "Aucun backup");
    assert_eq!(status["backup_age_seconds"], 0);

    let backup_dir = server.dir.path().join("backup");
    std::fs::create_dir_all(&backup_dir).unwrap();
    let now = SystemTime::now();
    let older = std::fs::File::create(backup_dir.join("a.db")).unwrap();
    older.set_modified(now - Duration::from_secs(300)).unwrap();
    let newer = std::fs::File::create(backup_dir.join("b.db")).unwrap();
    newer.set_modified(now - Duration::from_secs(30)).unwrap();

    let status = get_json(&client, format!("{}/status", server.base)).await;
    assert_eq!(status["last_backup_file"], "b.db");
    let age = status["backup_age_seconds"].as_u64().unwrap();
    assert!((30..300).contains(&age));
}
