//! ProxySearchClient against an in-process stub proxy

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use axum::{extract::State, http::StatusCode, response::IntoResponse, routing::post, Json, Router};
use serde_json::{json, Value};

use travel_imagery::error::ProviderError;
use travel_imagery::provider_client::client::{ProxyClientOptions, ProxySearchClient};
use travel_imagery::provider_client::ImageProvider;
use travel_imagery::types::image::{ImageRecord, SearchRequest, TrackRequest};

#[derive(Default)]
struct Stub {
    hits: AtomicUsize,
    last_request: Mutex<Option<(String, usize)>>,
    tracked: Mutex<Vec<String>>,
}

async fn ok_search(State(stub): State<Arc<Stub>>, Json(req): Json<SearchRequest>) -> Json<Value> {
    stub.hits.fetch_add(1, Ordering::SeqCst);
    *stub.last_request.lock().unwrap() = Some((req.query.clone(), req.per_page));
    Json(json!({
        "photos": [
            { "url": "https://img.example/1.jpg", "photographer": "Ana", "profileUrl": "https://unsplash.com/@ana",
              "description": "tram", "downloadLocation": "https://api.unsplash.com/photos/1/download" },
            { "url": "https://img.example/2.jpg" },
            { "url": "   " },
            { "url": "https://img.example/3.jpg" }
        ]
    }))
}

async fn empty_search(State(stub): State<Arc<Stub>>) -> Json<Value> {
    stub.hits.fetch_add(1, Ordering::SeqCst);
    Json(json!({ "photos": [] }))
}

async fn anonymous_search() -> Json<Value> {
    Json(json!({
        "photos": [
            { "url": "https://img.example/a.jpg", "photographer": "" },
            { "url": "https://img.example/b.jpg", "photographer": "  " }
        ]
    }))
}

async fn failing_search() -> impl IntoResponse {
    (StatusCode::SERVICE_UNAVAILABLE, Json(json!({ "error": "not configured" })))
}

async fn malformed_search() -> &'static str {
    "<html>gateway timeout</html>"
}

async fn track(State(stub): State<Arc<Stub>>, Json(req): Json<TrackRequest>) -> StatusCode {
    stub.tracked.lock().unwrap().push(req.download_location);
    StatusCode::NO_CONTENT
}

async fn spawn_stub() -> (String, Arc<Stub>) {
    let stub = Arc::new(Stub::default());
    let app = Router::new()
        .route("/api/proxy/unsplash/search", post(ok_search))
        .route("/api/proxy/unsplash/track", post(track))
        .route("/api/proxy/empty/search", post(empty_search))
        .route("/api/proxy/anon/search", post(anonymous_search))
        .route("/api/proxy/down/search", post(failing_search))
        .route("/api/proxy/broken/search", post(malformed_search))
        .with_state(stub.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    (format!("http://{}", addr), stub)
}

fn client(name: &str, base: &str, tracks_downloads: bool) -> ProxySearchClient {
    ProxySearchClient::new(
        name,
        base,
        ProxyClientOptions {
            timeout_ms: 2000,
            homepage: "https://unsplash.com".into(),
            tracks_downloads,
        },
    )
    .unwrap()
}

#[tokio::test]
async fn search_maps_defaults_and_truncates() {
    let (base, stub) = spawn_stub().await;
    let unsplash = client("unsplash", &base, true);

    let photos = unsplash.search("  Lisbon trams ", 2).await.unwrap();

    assert_eq!(photos.len(), 2);
    assert_eq!(photos[0].photographer, "Ana");
    assert_eq!(photos[0].description.as_deref(), Some("tram"));
    assert_eq!(photos[1].url, "https://img.example/2.jpg");
    assert_eq!(photos[1].photographer, "Unknown");
    assert_eq!(photos[1].profile_url, "https://unsplash.com");
    assert_eq!(photos[1].provider.as_deref(), Some("unsplash"));
    assert_eq!(
        stub.last_request.lock().unwrap().clone(),
        Some(("Lisbon trams".to_string(), 2))
    );
}

#[tokio::test]
async fn blank_urls_are_dropped() {
    let (base, _stub) = spawn_stub().await;
    let photos = client("unsplash", &base, false).search("Lisbon", 10).await.unwrap();
    assert_eq!(photos.len(), 3);
    assert!(photos.iter().all(|p| !p.url.trim().is_empty()));
}

#[tokio::test]
async fn blank_photographer_becomes_unknown() {
    let (base, _stub) = spawn_stub().await;
    let photos = client("anon", &base, false).search("Lisbon", 2).await.unwrap();
    assert_eq!(photos.len(), 2);
    assert!(photos.iter().all(|p| p.photographer == "Unknown"));
}

#[tokio::test]
async fn empty_result_is_not_an_error() {
    let (base, stub) = spawn_stub().await;
    let photos = client("empty", &base, false).search("Lisbon", 3).await.unwrap();
    assert!(photos.is_empty());
    assert_eq!(stub.hits.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn non_success_status_is_an_error() {
    let (base, _stub) = spawn_stub().await;
    let err = client("down", &base, false).search("Lisbon", 3).await.unwrap_err();
    assert!(matches!(err, ProviderError::Status(503)), "got {err:?}");
}

#[tokio::test]
async fn malformed_body_is_an_error() {
    let (base, _stub) = spawn_stub().await;
    let err = client("broken", &base, false).search("Lisbon", 3).await.unwrap_err();
    assert!(matches!(err, ProviderError::Malformed(_)), "got {err:?}");
}

#[tokio::test]
async fn unreachable_proxy_is_an_error() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let err = client("unsplash", &format!("http://{}", addr), false)
        .search("Lisbon", 1)
        .await
        .unwrap_err();
    assert!(matches!(err, ProviderError::Http(_)), "got {err:?}");
}

#[tokio::test]
async fn blank_query_never_hits_the_network() {
    let (base, stub) = spawn_stub().await;
    let err = client("empty", &base, false).search("   ", 3).await.unwrap_err();
    assert!(matches!(err, ProviderError::InvalidQuery));
    assert_eq!(stub.hits.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn download_tracking_posts_location() {
    let (base, stub) = spawn_stub().await;
    let record = ImageRecord {
        download_location: Some("https://api.unsplash.com/photos/1/download".into()),
        ..ImageRecord::fallback("https://img.example/1.jpg", "Ana", "https://unsplash.com/@ana")
    };

    client("unsplash", &base, true).track_download(&record).await.unwrap();
    client("unsplash", &base, false).track_download(&record).await.unwrap();

    assert_eq!(
        stub.tracked.lock().unwrap().clone(),
        vec!["https://api.unsplash.com/photos/1/download".to_string()]
    );
}
