//! Integration tests for the HTTP API routes.
//!
//! Routes are exercised end to end with `tower::ServiceExt::oneshot`
//! against the router built by `build_app`.

mod common;

use crate::common::{
    create_featured_test_listing, create_test_listing, create_test_organization, TestHarness,
};
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::Value;
use server_core::domains::job_listing::models::JobListing;
use test_context::test_context;
use tower::ServiceExt;

async fn get(app: &Router, uri: &str) -> (StatusCode, Vec<u8>) {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, body.to_vec())
}

fn listing_titles(body: &[u8]) -> Vec<String> {
    let listings: Value = serde_json::from_slice(body).unwrap();
    listings
        .as_array()
        .unwrap()
        .iter()
        .map(|l| l["title"].as_str().unwrap().to_string())
        .collect()
}

/// The revalidation endpoint acknowledges with the fixed payload on every
/// invocation, regardless of prior state.
#[test_context(TestHarness)]
#[tokio::test]
async fn revalidate_returns_fixed_acknowledgement(ctx: &TestHarness) {
    let app = ctx.app();

    for _ in 0..2 {
        let (status, body) = get(&app, "/api/revalidate").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            std::str::from_utf8(&body).unwrap(),
            r#"{"revalidated":true}"#
        );
    }
}

/// Listing reads are served from the cache until the tag is invalidated,
/// after which the next read sees fresh rows.
#[test_context(TestHarness)]
#[tokio::test]
async fn listings_are_cached_until_revalidated(ctx: &TestHarness) {
    let app = ctx.app();
    let org = create_test_organization(&ctx.db_pool, "Cache Test Org")
        .await
        .unwrap();

    create_test_listing(&ctx.db_pool, &org.id, "Cache Test First")
        .await
        .unwrap();

    // Prime the cache
    let (status, body) = get(&app, "/api/job-listings").await;
    assert_eq!(status, StatusCode::OK);
    assert!(listing_titles(&body).contains(&"Cache Test First".to_string()));

    // Rows written after the cache was primed stay invisible...
    create_test_listing(&ctx.db_pool, &org.id, "Cache Test Second")
        .await
        .unwrap();
    let (_, body) = get(&app, "/api/job-listings").await;
    assert!(!listing_titles(&body).contains(&"Cache Test Second".to_string()));

    // ...until the tag is invalidated
    let (status, _) = get(&app, "/api/revalidate").await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = get(&app, "/api/job-listings").await;
    assert!(listing_titles(&body).contains(&"Cache Test Second".to_string()));
}

/// Featured listings sort ahead of non-featured ones in the public feed.
#[test_context(TestHarness)]
#[tokio::test]
async fn featured_listings_sort_first(ctx: &TestHarness) {
    let org = create_test_organization(&ctx.db_pool, "Order Test Org")
        .await
        .unwrap();
    create_test_listing(&ctx.db_pool, &org.id, "Order Test Plain")
        .await
        .unwrap();
    create_featured_test_listing(&ctx.db_pool, &org.id, "Order Test Featured")
        .await
        .unwrap();

    let listings = JobListing::find_published(&ctx.db_pool).await.unwrap();
    let position = |title: &str| {
        listings
            .iter()
            .position(|l| l.title == title)
            .expect("listing present in feed")
    };

    assert!(position("Order Test Featured") < position("Order Test Plain"));
}

/// Health endpoint reports healthy against a live database.
#[test_context(TestHarness)]
#[tokio::test]
async fn health_endpoint_reports_healthy(ctx: &TestHarness) {
    let (status, body) = get(&ctx.app(), "/health").await;
    assert_eq!(status, StatusCode::OK);

    let health: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(health["status"], "healthy");
    assert_eq!(health["database"]["status"], "ok");
}
