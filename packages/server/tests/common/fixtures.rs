//! Test fixtures for creating test data.
//!
//! These fixtures use the model methods directly to create test data.
//! Organization ids are uniqued per call so parallel tests never collide.

use anyhow::Result;
use chrono::Utc;
use server_core::domains::job_listing::models::{
    ExperienceLevel, JobListing, JobListingStatus, JobListingType, LocationRequirement,
};
use server_core::domains::organization::models::Organization;
use sqlx::PgPool;
use uuid::Uuid;

/// Create an organization with a unique test id
pub async fn create_test_organization(pool: &PgPool, name: &str) -> Result<Organization> {
    Organization::new(format!("test_org_{}", Uuid::new_v4()), name, None)
        .insert(pool)
        .await
}

/// Create a published listing owned by `organization_id`
pub async fn create_test_listing(
    pool: &PgPool,
    organization_id: &str,
    title: &str,
) -> Result<JobListing> {
    base_listing(organization_id, title, false).insert(pool).await
}

/// Create a published listing with the featured flag set
pub async fn create_featured_test_listing(
    pool: &PgPool,
    organization_id: &str,
    title: &str,
) -> Result<JobListing> {
    base_listing(organization_id, title, true).insert(pool).await
}

fn base_listing(organization_id: &str, title: &str, is_featured: bool) -> JobListing {
    let now = Utc::now();
    JobListing {
        id: Uuid::new_v4(),
        organization_id: organization_id.to_string(),
        title: title.to_string(),
        description: "Test description".to_string(),
        wage: None,
        wage_interval: None,
        city: None,
        state_abbreviation: None,
        location_requirement: LocationRequirement::Remote.to_string(),
        experience_level: ExperienceLevel::Junior.to_string(),
        status: JobListingStatus::Published.to_string(),
        listing_type: JobListingType::Internship.to_string(),
        posted_at: Some(now),
        is_featured,
        created_at: now,
        updated_at: now,
    }
}
