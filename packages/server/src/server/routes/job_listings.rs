use axum::{extract::Extension, Json};

use crate::domains::job_listing::models::JobListing;
use crate::server::app::AppState;
use crate::server::error::ApiError;

/// Published listings for the public feed, featured first.
///
/// Served through the tag-guarded cache: the database is only queried on
/// the first request after the job-listings tag is invalidated.
pub async fn job_listings_handler(
    Extension(state): Extension<AppState>,
) -> Result<Json<Vec<JobListing>>, ApiError> {
    let pool = state.db_pool.clone();
    let listings = state
        .published_listings
        .get_or_refresh(&state.cache_tags, || async move {
            JobListing::find_published(&pool).await
        })
        .await?;
    Ok(Json((*listings).clone()))
}
