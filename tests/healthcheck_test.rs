use oldcounty::app::build_router;
use oldcounty::store::NewsletterStore;
use std::net::TcpListener;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::sleep;

/// Find a port nobody is listening on
fn free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    port
}

/// Test that healthcheck succeeds against the real router
#[tokio::test]
async fn test_healthcheck_succeeds_when_server_running() {
    let port = free_port();
    let static_dir = tempfile::TempDir::new().unwrap();
    let app = build_router(
        Arc::new(NewsletterStore::from_entropy()),
        static_dir.path(),
    );

    let server = tokio::spawn(async move {
        let listener = tokio::net::TcpListener::bind(format!("127.0.0.1:{port}"))
            .await
            .unwrap();
        axum::serve(listener, app).await.unwrap();
    });

    // Wait for server to start
    sleep(Duration::from_millis(100)).await;

    let result = oldcounty::healthcheck_with_port(port).await;
    assert!(
        result.is_ok(),
        "Healthcheck should succeed when server is running"
    );

    server.abort();
}

/// Test that healthcheck fails when server is not running
#[tokio::test]
async fn test_healthcheck_fails_when_server_not_running() {
    let port = free_port();

    let result = oldcounty::healthcheck_with_port(port).await;
    assert!(
        result.is_err(),
        "Healthcheck should fail when server is not running"
    );
}

/// Test that healthcheck fails when server returns non-2xx status
#[tokio::test]
async fn test_healthcheck_fails_on_non_success_status() {
    let port = free_port();

    let server = tokio::spawn(async move {
        let app = axum::Router::new().route(
            "/health",
            axum::routing::get(|| async {
                (axum::http::StatusCode::SERVICE_UNAVAILABLE, "Unhealthy")
            }),
        );
        let listener = tokio::net::TcpListener::bind(format!("127.0.0.1:{port}"))
            .await
            .unwrap();
        axum::serve(listener, app).await.unwrap();
    });

    sleep(Duration::from_millis(100)).await;

    let result = oldcounty::healthcheck_with_port(port).await;
    assert!(result.is_err(), "Healthcheck should fail on non-2xx status");
    assert!(result.unwrap_err().to_string().contains("503"));

    server.abort();
}
