//! Application setup and server configuration.

use std::sync::Arc;

use axum::{
    extract::Extension,
    http::{header::CONTENT_TYPE, Method},
    routing::get,
    Router,
};
use sqlx::PgPool;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::domains::job_listing::cache::JOB_LISTINGS_TAG;
use crate::domains::job_listing::models::JobListing;
use crate::kernel::cache::{TagCache, TagCached};
use crate::server::routes::{health_handler, job_listings_handler, revalidate_handler};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub db_pool: PgPool,
    pub cache_tags: Arc<TagCache>,
    pub published_listings: Arc<TagCached<Vec<JobListing>>>,
}

/// Build the Axum application router
pub fn build_app(pool: PgPool) -> Router {
    let app_state = AppState {
        db_pool: pool,
        cache_tags: Arc::new(TagCache::new()),
        published_listings: Arc::new(TagCached::new(JOB_LISTINGS_TAG)),
    };

    // CORS configuration - allow any origin for development
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET])
        .allow_headers([CONTENT_TYPE]);

    Router::new()
        .route("/api/job-listings", get(job_listings_handler))
        .route("/api/revalidate", get(revalidate_handler))
        // Health check
        .route("/health", get(health_handler))
        // Middleware layers (applied in reverse order - last added runs first)
        .layer(Extension(app_state))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
