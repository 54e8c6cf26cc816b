// tests/feed_http.rs
//
// HttpFeedClient against a mock feed endpoint, and the controller phases it
// drives.

mod common;

use std::sync::Arc;

use chrono::Utc;
use result_watch::{FeedError, HttpFeedClient, LinkFeed, MemorySelectionStore, TargetInstant};

const FEED_BODY: &str = r##"{
    "resultDate": "2025-04-30T09:00:00+05:30",
    "notificationDate": "Assam HS results on 30th April at 9 AM",
    "links": [
        { "id": 1, "url": "https://resultsassam.nic.in", "status": "live" },
        { "id": 2, "url": "#", "status": "down" }
    ]
}"##;

#[tokio::test]
async fn fetch_parses_feed() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/links.json")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(FEED_BODY)
        .create_async()
        .await;

    let url = format!("{}/links.json", server.url());
    let client = HttpFeedClient::new(url.clone());
    assert_eq!(client.url(), url);
    let feed = client.fetch().await.expect("feed");

    mock.assert_async().await;
    assert_eq!(
        feed.target.instant().map(|t| t.to_rfc3339()),
        Some("2025-04-30T03:30:00+00:00".to_string())
    );
    assert_eq!(
        feed.notification_text.as_deref(),
        Some("Assam HS results on 30th April at 9 AM")
    );
    assert_eq!(feed.links.len(), 2);
    assert!(feed.links[1].is_sentinel());
    assert_ne!(feed.target, TargetInstant::Unset);
}

#[tokio::test]
async fn server_error_reaches_failed_phase() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/links.json")
        .with_status(500)
        .with_body("internal error")
        .expect(1)
        .create_async()
        .await;

    let client = Arc::new(HttpFeedClient::new(format!("{}/links.json", server.url())));
    let controller = common::controller(client, Arc::new(MemorySelectionStore::new()), Utc::now());

    let err = controller.load().await.unwrap_err();
    assert_eq!(err, FeedError::status(500));

    let phase = controller.phase();
    assert_eq!(phase.name(), "failed");
    assert_eq!(phase.error(), Some("Protocol error: HTTP error! Status: 500"));
    assert_eq!(controller.countdown(), None);

    mock.assert_async().await;
}

#[tokio::test]
async fn missing_links_is_protocol_error() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/links.json")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{ "resultDate": "2025-04-30T09:00:00Z", "notificationDate": "soon" }"#)
        .create_async()
        .await;

    let client = Arc::new(HttpFeedClient::new(format!("{}/links.json", server.url())));
    let err = client.fetch().await.unwrap_err();
    assert!(matches!(err, FeedError::Protocol(ref m) if m.contains("links")), "{err}");

    let controller = common::controller(client, Arc::new(MemorySelectionStore::new()), Utc::now());
    assert!(controller.load().await.is_err());
    assert_eq!(controller.phase().name(), "failed");
}

#[tokio::test]
async fn malformed_json_is_protocol_error() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/links.json")
        .with_status(200)
        .with_body("{ not json")
        .create_async()
        .await;

    let client = HttpFeedClient::new(format!("{}/links.json", server.url()));
    let err = client.fetch().await.unwrap_err();
    assert!(matches!(err, FeedError::Protocol(_)), "{err}");
}

#[tokio::test]
async fn unreachable_endpoint_is_network_error() {
    let client = HttpFeedClient::new("http://127.0.0.1:1/links.json");
    let err = client.fetch().await.unwrap_err();
    assert!(matches!(err, FeedError::Network(_)), "{err}");
    assert!(err.to_string().starts_with("Network error"));
}
