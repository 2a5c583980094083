//! Integration Tests for the read-through client
//!
//! Runs the real HTTP fetcher against a local mock PokeAPI and counts how
//! many requests reach it.

use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::{Path, RawQuery, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use pokedex_cache::{Cache, Error, FetchError, HttpFetcher, PokeApiClient};
use serde_json::{json, Value};

// == Mock Server ==

#[derive(Clone, Default)]
struct MockState {
    hits: Arc<AtomicUsize>,
}

impl MockState {
    fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }
}

async fn list_handler(
    State(state): State<MockState>,
    RawQuery(query): RawQuery,
) -> Json<Value> {
    state.hits.fetch_add(1, Ordering::SeqCst);
    match query.as_deref() {
        Some("offset=2") => Json(json!({
            "count": 3,
            "next": null,
            "previous": "/location-area",
            "results": [{"name": "pastoria-city-area", "url": "u3"}]
        })),
        _ => Json(json!({
            "count": 3,
            "next": "/location-area?offset=2",
            "previous": null,
            "results": [
                {"name": "canalave-city-area", "url": "u1"},
                {"name": "eterna-city-area", "url": "u2"}
            ]
        })),
    }
}

async fn location_handler(State(state): State<MockState>, Path(name): Path<String>) -> Response {
    state.hits.fetch_add(1, Ordering::SeqCst);
    match name.as_str() {
        "garbage" => "<html>not json</html>".into_response(),
        "slow" => {
            tokio::time::sleep(Duration::from_secs(3)).await;
            Json(json!({"id": 0, "name": "slow"})).into_response()
        }
        "nowhere" => (StatusCode::NOT_FOUND, "Not Found").into_response(),
        _ => Json(json!({
            "id": 1,
            "name": name,
            "pokemon_encounters": [{"pokemon": {"name": "tentacool", "url": "p1"}}]
        }))
        .into_response(),
    }
}

async fn spawn_mock_api() -> (SocketAddr, MockState) {
    let state = MockState::default();
    let app = Router::new()
        .route("/api/v2/location-area", get(list_handler))
        .route("/api/v2/location-area/:name", get(location_handler))
        .with_state(state.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    (addr, state)
}

fn create_client(addr: SocketAddr, interval: Duration, timeout: Duration) -> PokeApiClient {
    let fetcher = HttpFetcher::new(timeout).unwrap();
    PokeApiClient::new(
        Cache::new(interval),
        Arc::new(fetcher),
        format!("http://{}/api/v2", addr),
    )
}

fn page_url(addr: SocketAddr, relative: &str) -> String {
    format!("http://{}/api/v2{}", addr, relative)
}

// == Read-Through Population ==

#[tokio::test]
async fn test_second_lookup_is_served_from_cache() {
    let (addr, mock) = spawn_mock_api().await;
    let client = create_client(addr, Duration::from_secs(60), Duration::from_secs(5));

    let first = client.list_locations(None).await.unwrap();
    let second = client.list_locations(None).await.unwrap();

    assert_eq!(first, second);
    assert_eq!(mock.hits(), 1);
    assert!(client
        .cache
        .get(&page_url(addr, "/location-area"))
        .await
        .is_some());
}

#[tokio::test]
async fn test_pages_are_cached_under_their_own_urls() {
    let (addr, mock) = spawn_mock_api().await;
    let client = create_client(addr, Duration::from_secs(60), Duration::from_secs(5));

    let first = client.list_locations(None).await.unwrap();
    let next = page_url(addr, first.next.as_deref().unwrap());
    let second = client.list_locations(Some(&next)).await.unwrap();
    let again = client.list_locations(Some(&next)).await.unwrap();

    assert_eq!(second.results[0].name, "pastoria-city-area");
    assert_eq!(second, again);
    assert_eq!(mock.hits(), 2);
    assert_eq!(client.cache.len().await, 2);
}

#[tokio::test]
async fn test_cached_bytes_are_the_raw_response() {
    let (addr, _mock) = spawn_mock_api().await;
    let client = create_client(addr, Duration::from_secs(60), Duration::from_secs(5));

    client.get_location("eterna-city-area").await.unwrap();

    let raw = client
        .cache
        .get(&page_url(addr, "/location-area/eterna-city-area"))
        .await
        .unwrap();
    let value: Value = serde_json::from_slice(&raw).unwrap();
    assert_eq!(value["pokemon_encounters"][0]["pokemon"]["name"], "tentacool");
}

// == Failures ==

#[tokio::test]
async fn test_status_failure_propagates_and_is_not_cached() {
    let (addr, mock) = spawn_mock_api().await;
    let client = create_client(addr, Duration::from_secs(60), Duration::from_secs(5));

    let err = client.get_location("nowhere").await.unwrap_err();
    assert!(matches!(
        err,
        Error::Fetch(FetchError::Status { status, .. }) if status == StatusCode::NOT_FOUND
    ));
    assert!(client.cache.is_empty().await);

    let _ = client.get_location("nowhere").await;
    assert_eq!(mock.hits(), 2, "Failures must not be cached");
}

#[tokio::test]
async fn test_undecodable_body_is_a_decode_error() {
    let (addr, _mock) = spawn_mock_api().await;
    let client = create_client(addr, Duration::from_secs(60), Duration::from_secs(5));

    let err = client.get_location("garbage").await.unwrap_err();

    assert!(err.is_decode());
    assert!(client.cache.is_empty().await);
}

#[tokio::test]
async fn test_fetch_honors_timeout() {
    let (addr, _mock) = spawn_mock_api().await;
    let client = create_client(addr, Duration::from_secs(60), Duration::from_millis(500));

    let started = std::time::Instant::now();
    let err = client.get_location("slow").await.unwrap_err();

    assert!(matches!(err, Error::Fetch(FetchError::Timeout { .. })), "got {:?}", err);
    assert!(started.elapsed() < Duration::from_secs(3));
    assert!(client.cache.is_empty().await);
}

#[tokio::test]
async fn test_connection_refused_is_fetch_error() {
    // Bind and drop to get a port nothing listens on
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    let client = create_client(addr, Duration::from_secs(60), Duration::from_secs(2));

    let err = client.list_locations(None).await.unwrap_err();

    assert!(err.is_fetch());
}

// == Expiry ==

#[tokio::test]
async fn test_expired_entries_are_fetched_again() {
    let (addr, mock) = spawn_mock_api().await;
    let client = create_client(addr, Duration::from_millis(150), Duration::from_secs(5));

    client.get_location("canalave-city-area").await.unwrap();
    client.get_location("canalave-city-area").await.unwrap();
    assert_eq!(mock.hits(), 1);

    // Past one interval plus a full reap period
    tokio::time::sleep(Duration::from_millis(450)).await;
    assert!(client.cache.is_empty().await);

    client.get_location("canalave-city-area").await.unwrap();
    assert_eq!(mock.hits(), 2);
}

// == Concurrency ==

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_misses_all_succeed() {
    let (addr, mock) = spawn_mock_api().await;
    let client = create_client(addr, Duration::from_secs(60), Duration::from_secs(5));

    let mut handles = vec![];
    for _ in 0..8 {
        let client = client.clone();
        handles.push(tokio::spawn(async move {
            client.get_location("sunyshore-city-area").await
        }));
    }

    for handle in handles {
        let location = handle.await.unwrap().unwrap();
        assert_eq!(location.name, "sunyshore-city-area");
    }

    // No single-flight: between one and eight requests may reach the server
    assert!((1..=8).contains(&mock.hits()));
    assert_eq!(client.cache.len().await, 1);

    let hits = mock.hits();
    client.get_location("sunyshore-city-area").await.unwrap();
    assert_eq!(mock.hits(), hits);
}
