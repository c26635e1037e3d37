use axum::{extract::Extension, Json};
use serde::Serialize;

use crate::domains::job_listing::cache::JOB_LISTINGS_TAG;
use crate::server::app::AppState;

#[derive(Serialize)]
pub struct RevalidateResponse {
    revalidated: bool,
}

/// Invalidate the job-listings cache tag.
///
/// Called by the seed binary after rewriting the sample data so cached
/// listing views recompute on their next read. Usage: GET /api/revalidate
pub async fn revalidate_handler(
    Extension(state): Extension<AppState>,
) -> Json<RevalidateResponse> {
    let version = state.cache_tags.invalidate(JOB_LISTINGS_TAG).await;
    tracing::info!(tag = JOB_LISTINGS_TAG, version, "cache tag invalidated");
    Json(RevalidateResponse { revalidated: true })
}
