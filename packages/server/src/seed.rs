//! Sample data for the Northeast region demo environment.
//!
//! A run clears any prior seed rows (organizations cascade to their
//! listings), then re-inserts two organizations and five opportunities.
//! Organization ids are fixed so reruns can find earlier instances; listing
//! ids are regenerated fresh every run.

use anyhow::{Context, Result};
use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domains::job_listing::models::{
    ExperienceLevel, JobListing, JobListingStatus, JobListingType, LocationRequirement,
    WageInterval,
};
use crate::domains::organization::models::Organization;

/// Fixed ids for the seed organizations
pub const SEED_ORG_IDS: [&str; 2] = ["seed_org_guwahati_tech", "seed_org_northeast_dev"];

/// What a seed run wrote
#[derive(Debug)]
pub struct SeedSummary {
    pub organizations: usize,
    pub listings: usize,
}

/// Clear prior seed rows and re-insert the sample data set.
///
/// Statements run sequentially; the first storage failure aborts the run
/// and surfaces to the caller. There is no transaction spanning the whole
/// sequence, so atomicity is per statement.
pub async fn run(pool: &PgPool) -> Result<SeedSummary> {
    for org_id in SEED_ORG_IDS {
        Organization::delete_by_id(org_id, pool)
            .await
            .with_context(|| format!("Failed to clear seed organization {}", org_id))?;
    }

    let organizations = sample_organizations();
    for org in &organizations {
        org.insert(pool)
            .await
            .with_context(|| format!("Failed to insert organization {}", org.id))?;
    }

    let listings = sample_listings();
    for listing in &listings {
        listing
            .insert(pool)
            .await
            .with_context(|| format!("Failed to insert listing \"{}\"", listing.title))?;
    }

    Ok(SeedSummary {
        organizations: organizations.len(),
        listings: listings.len(),
    })
}

/// Best-effort nudge of the revalidation endpoint so cached listing views
/// pick up the fresh rows. Returns whether the endpoint acknowledged; an
/// unreachable endpoint is reported as `false`, never as an error.
pub async fn notify_revalidate(url: &str) -> bool {
    match reqwest::get(url).await {
        Ok(response) => response.status().is_success(),
        Err(error) => {
            tracing::debug!(%error, "revalidation endpoint unreachable");
            false
        }
    }
}

fn sample_organizations() -> Vec<Organization> {
    vec![
        Organization::new(SEED_ORG_IDS[0], "Guwahati Tech Startup", None),
        Organization::new(SEED_ORG_IDS[1], "Northeast Dev Community", None),
    ]
}

fn sample_listings() -> Vec<JobListing> {
    let now = Utc::now();

    let listing = |organization_id: &str, title: &str, description: &str| JobListing {
        id: Uuid::new_v4(),
        organization_id: organization_id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        wage: None,
        wage_interval: None,
        city: None,
        state_abbreviation: None,
        location_requirement: LocationRequirement::Remote.to_string(),
        experience_level: ExperienceLevel::Junior.to_string(),
        status: JobListingStatus::Published.to_string(),
        listing_type: JobListingType::Internship.to_string(),
        posted_at: Some(now),
        is_featured: false,
        created_at: now,
        updated_at: now,
    };

    vec![
        JobListing {
            wage: Some(15),
            wage_interval: Some(WageInterval::Hourly.to_string()),
            city: Some("Guwahati".to_string()),
            state_abbreviation: Some("AS".to_string()),
            location_requirement: LocationRequirement::Hybrid.to_string(),
            is_featured: true,
            ..listing(
                SEED_ORG_IDS[0],
                "Frontend React Internship",
                "Join our growing product team as a Frontend React Intern! Work on real-world projects building responsive web applications for Northeast India's tech ecosystem.\n\n\
                **What you'll do:**\n\
                - Build and maintain React components\n\
                - Collaborate with designers and backend developers\n\
                - Learn modern tooling (TypeScript, Tailwind, Vite)\n\n\
                **Ideal for:** Students in CS, IT, or related fields. Basic JavaScript knowledge required.",
            )
        },
        JobListing {
            city: Some("Guwahati".to_string()),
            state_abbreviation: Some("AS".to_string()),
            location_requirement: LocationRequirement::InOffice.to_string(),
            listing_type: JobListingType::Hackathon.to_string(),
            is_featured: true,
            ..listing(
                SEED_ORG_IDS[1],
                "Assam Web3 Hackathon",
                "48-hour hackathon focused on Web3, blockchain, and decentralized applications. Compete for prizes, network with developers across the Northeast, and build something innovative!\n\n\
                **Tracks:**\n\
                - DeFi & Payments\n\
                - NFT & Digital Identity\n\
                - DAO & Governance\n\n\
                **Prizes:** \u{20b9}50,000 total prize pool. Food and swag included.",
            )
        },
        JobListing {
            wage: Some(10),
            wage_interval: Some(WageInterval::Hourly.to_string()),
            listing_type: JobListingType::Event.to_string(),
            ..listing(
                SEED_ORG_IDS[0],
                "Campus Ambassador",
                "Represent Guwahati Tech Startup on your campus! Help us connect with talented students, organize events, and grow the Northeast tech community.\n\n\
                **Responsibilities:**\n\
                - Promote our events and opportunities\n\
                - Organize 1-2 campus meetups per semester\n\
                - Share feedback from the student community\n\n\
                **Compensation:** Stipend + swag. Flexible hours, remote-friendly.",
            )
        },
        JobListing {
            city: Some("Shillong".to_string()),
            state_abbreviation: Some("ML".to_string()),
            listing_type: JobListingType::Project.to_string(),
            ..listing(
                SEED_ORG_IDS[1],
                "UI/UX Design Project",
                "Collaborative project to redesign our community website. Work with a small team of designers and developers to create a modern, accessible experience for Northeast developers.\n\n\
                **Scope:**\n\
                - User research and wireframing\n\
                - High-fidelity mockups in Figma\n\
                - Design system documentation\n\n\
                **Duration:** 6-8 weeks. Portfolio piece guaranteed. Unpaid but great for building experience.",
            )
        },
        JobListing {
            wage: Some(25),
            wage_interval: Some(WageInterval::Hourly.to_string()),
            city: Some("Guwahati".to_string()),
            state_abbreviation: Some("AS".to_string()),
            location_requirement: LocationRequirement::Hybrid.to_string(),
            listing_type: JobListingType::StartupRole.to_string(),
            is_featured: true,
            ..listing(
                SEED_ORG_IDS[0],
                "Full-Stack Developer (Startup Role)",
                "Early-stage startup seeking a passionate full-stack developer to help build our MVP. Tech stack: Rust, PostgreSQL, Axum.\n\n\
                **What we offer:**\n\
                - Equity stake for the right candidate\n\
                - Flexible work (hybrid in Guwahati)\n\
                - Mentorship from experienced founders\n\n\
                **Requirements:** 1+ year of experience or strong side projects. Students in final year welcome.",
            )
        },
    ]
}
