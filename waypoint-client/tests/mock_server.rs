//! End-to-end tests against a local waypoint-mock server.

use std::net::SocketAddr;
use std::time::Duration;

use waypoint_client::{
    ClientError, MockApiClient, ResolveError, RouteClient, RouteTransport, StatusOutcome,
    SubmitOutcome, resolve_route,
};
use waypoint_core::domain::policy::RetryPolicy;
use waypoint_core::domain::route::{JobHandle, RouteStatus};
use waypoint_mock::{AppState, Config, create_router};

async fn spawn_mock(pending_polls: u32) -> SocketAddr {
    let state = AppState::new(Config::default().with_pending_polls(pending_polls));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, create_router(state)).await.unwrap();
    });

    addr
}

fn quick_policy(max_retries: u32) -> RetryPolicy {
    RetryPolicy::new(max_retries, Duration::from_millis(10))
}

#[tokio::test]
async fn test_resolves_route_after_pending_polls() {
    let addr = spawn_mock(2).await;
    let client = RouteClient::new(format!("http://{addr}/route"));

    let route = resolve_route(
        &client,
        "Innocentre, Hong Kong",
        "Hong Kong International Airport",
        &quick_policy(5),
    )
    .await
    .unwrap();

    assert_eq!(route.path().len(), 3);
    assert_eq!(route.total_distance(), 20000.0);
    assert_eq!(route.total_time(), 1800.0);
}

#[tokio::test]
async fn test_unreachable_destination_reports_remote_failure() {
    let addr = spawn_mock(1).await;
    let client = RouteClient::new(format!("http://{addr}/route"));

    let err = resolve_route(&client, "Kowloon", "Unreachable Rock", &quick_policy(5))
        .await
        .unwrap_err();

    assert!(matches!(err, ResolveError::RemoteFailure { .. }));
    assert_eq!(err.to_string(), "Location not accessible by car");
}

#[tokio::test]
async fn test_budget_exhausted_when_job_stays_pending() {
    let addr = spawn_mock(10).await;
    let client = RouteClient::new(format!("http://{addr}/route"));

    let err = resolve_route(&client, "A", "B", &quick_policy(3))
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        ResolveError::RetryBudgetExhausted { attempts: 3 }
    ));
    assert_eq!(err.to_string(), "Maximum retries exceeded");
}

#[tokio::test]
async fn test_unknown_token_is_not_found() {
    let addr = spawn_mock(1).await;
    let client = RouteClient::new(format!("http://{addr}/route"));

    let err = client
        .fetch_job_status(&JobHandle::new("does-not-exist"))
        .await
        .unwrap_err();

    assert!(err.is_not_found());
    assert_eq!(err.to_string(), "HTTP error! status: 404");
}

#[tokio::test]
async fn test_token_with_reserved_characters_stays_one_segment() {
    let addr = spawn_mock(1).await;
    let client = RouteClient::new(format!("http://{addr}/route"));

    let err = client
        .fetch_job_status(&JobHandle::new("a/b?c#d"))
        .await
        .unwrap_err();

    // Answered by the status handler, not the router fallback
    match err {
        ClientError::Transport { status, message } => {
            assert_eq!(status, 404);
            assert!(message.contains("Route job a/b?c#d not found"), "{message}");
        }
        other => panic!("expected transport error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_empty_origin_rejected_by_server() {
    let addr = spawn_mock(1).await;
    let client = RouteClient::new(format!("http://{addr}/route"));

    let err = client.submit_job("  ", "B").await.unwrap_err();

    assert_eq!(err.status_code(), Some(400));
}

#[tokio::test]
async fn test_health_endpoint() {
    let addr = spawn_mock(1).await;

    let response = reqwest::get(format!("http://{addr}/health")).await.unwrap();

    assert!(response.status().is_success());
    assert_eq!(response.text().await.unwrap(), "OK");
}

// =============================================================================
// Fixed-outcome endpoints
// =============================================================================

#[tokio::test]
async fn test_mock_api_success() {
    let addr = spawn_mock(1).await;
    let client = MockApiClient::new(format!("http://{addr}/mock/route"));

    let route = resolve_route(&client, "A", "B", &quick_policy(5))
        .await
        .unwrap();

    assert_eq!(route.total_distance(), 20000.0);
}

#[tokio::test]
async fn test_mock_api_submit_server_error() {
    let addr = spawn_mock(1).await;
    let client = MockApiClient::new(format!("http://{addr}/mock/route"))
        .with_submit_outcome(SubmitOutcome::ServerError);

    let err = resolve_route(&client, "A", "B", &quick_policy(5))
        .await
        .unwrap_err();

    assert!(matches!(err, ResolveError::Submit(_)));
    assert_eq!(err.status_code(), Some(500));
    assert_eq!(err.to_string(), "HTTP error! status: 500");
}

#[tokio::test]
async fn test_mock_api_status_server_error() {
    let addr = spawn_mock(1).await;
    let client = MockApiClient::new(format!("http://{addr}/mock/route"))
        .with_status_outcome(StatusOutcome::ServerError);

    let err = resolve_route(&client, "A", "B", &quick_policy(5))
        .await
        .unwrap_err();

    assert!(matches!(err, ResolveError::Poll(_)));
    assert_eq!(err.status_code(), Some(500));
}

#[tokio::test]
async fn test_mock_api_failure() {
    let addr = spawn_mock(1).await;
    let client = MockApiClient::new(format!("http://{addr}/mock/route"))
        .with_status_outcome(StatusOutcome::Failure);

    let err = resolve_route(&client, "A", "B", &quick_policy(5))
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "Location not accessible by car");
}

#[tokio::test]
async fn test_mock_api_in_progress_exhausts_budget() {
    let addr = spawn_mock(1).await;
    let client = MockApiClient::new(format!("http://{addr}/mock/route"))
        .with_status_outcome(StatusOutcome::InProgress);

    let err = resolve_route(&client, "A", "B", &quick_policy(2))
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        ResolveError::RetryBudgetExhausted { attempts: 2 }
    ));
}

#[tokio::test]
async fn test_mock_api_in_progress_wire_shape() {
    let addr = spawn_mock(1).await;
    let client = MockApiClient::new(format!("http://{addr}/mock/route"))
        .with_status_outcome(StatusOutcome::InProgress);

    let status = client
        .fetch_job_status(&JobHandle::new("ignored"))
        .await
        .unwrap();

    assert_eq!(status, RouteStatus::Pending);
}

#[tokio::test]
async fn test_unreachable_server_is_request_failure() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = RouteClient::new(format!("http://{addr}/route"));
    let err = client.submit_job("A", "B").await.unwrap_err();

    assert!(matches!(err, ClientError::RequestFailed(_)));
}
