use std::io::Write;
use std::net::TcpListener;
use std::time::Duration;

use reqwest::{redirect::Policy, Client, StatusCode};
use tempfile::NamedTempFile;
use tokio::time::sleep;

/// Find an available port
fn get_available_port() -> u16 {
    TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap()
        .port()
}

/// Create a minimal valid config
fn minimal_config(port: u16) -> String {
    format!(
        r#"
[server]
host = "127.0.0.1"
port = {}
"#,
        port
    )
}

/// Spawn the server and return a handle
fn spawn_server(config_path: &std::path::Path, workspace: Option<&str>) -> tokio::process::Child {
    let mut command = tokio::process::Command::new(env!("CARGO_BIN_EXE_wcd2reshare"));
    command
        .env("WCD2RESHARE_CONFIG", config_path)
        .env("RUST_LOG", "error") // Quiet logs during tests
        .env_remove("SENTRY_DSN")
        .kill_on_drop(true);
    match workspace {
        Some(ws) => command.env("WORKSPACE", ws),
        None => command.env_remove("WORKSPACE"),
    };
    command.spawn().expect("Failed to spawn server")
}

/// Wait for server to be ready
async fn wait_for_server(port: u16, max_attempts: u32) -> bool {
    let client = Client::new();
    for _ in 0..max_attempts {
        if client
            .get(format!("http://127.0.0.1:{}/health", port))
            .send()
            .await
            .is_ok()
        {
            return true;
        }
        sleep(Duration::from_millis(50)).await;
    }
    false
}

fn write_config(port: u16) -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file
        .write_all(minimal_config(port).as_bytes())
        .unwrap();
    temp_file.flush().unwrap();
    temp_file
}

fn no_redirect_client() -> Client {
    Client::builder().redirect(Policy::none()).build().unwrap()
}

#[tokio::test]
async fn test_bare_redirect() {
    let port = get_available_port();
    let config = write_config(port);
    let mut server = spawn_server(config.path(), Some("2024"));

    assert!(
        wait_for_server(port, 40).await,
        "Server did not start in time"
    );

    let response = no_redirect_client()
        .get(format!("http://127.0.0.1:{}/", port))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(
        response.headers()["location"],
        "https://borrowdirect.reshare.indexdata.com/Search/Results?"
    );

    server.kill().await.unwrap();
}

#[tokio::test]
async fn test_missing_workspace_fails_invocations_not_startup() {
    let port = get_available_port();
    let config = write_config(port);
    let mut server = spawn_server(config.path(), None);

    assert!(
        wait_for_server(port, 40).await,
        "Server did not start in time"
    );

    let response = no_redirect_client()
        .get(format!("http://127.0.0.1:{}/", port))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        response.text().await.unwrap(),
        "WORKSPACE environment variable is required"
    );

    server.kill().await.unwrap();
}
