use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

/// JobListing - a single posted opportunity (internship, hackathon, event,
/// project, or startup role)
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct JobListing {
    pub id: Uuid,
    pub organization_id: String,

    // Content
    pub title: String,
    pub description: String, // markdown body

    // Compensation (wage and interval travel as a pair)
    pub wage: Option<i32>,
    pub wage_interval: Option<String>, // 'hourly' | 'yearly'

    // Location
    pub city: Option<String>,
    pub state_abbreviation: Option<String>,
    pub location_requirement: String, // 'remote' | 'hybrid' | 'in-office'

    pub experience_level: String, // 'junior' | 'mid-level' | 'senior'
    pub status: String,           // 'draft' | 'published' | 'delisted'
    pub listing_type: String, // 'internship' | 'hackathon' | 'event' | 'project' | 'startup_role'

    pub posted_at: Option<DateTime<Utc>>,
    pub is_featured: bool,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// =============================================================================
// Enums for type-safe edges
// =============================================================================

/// Wage interval enum
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum WageInterval {
    Hourly,
    Yearly,
}

impl WageInterval {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hourly => "hourly",
            Self::Yearly => "yearly",
        }
    }
}

impl std::fmt::Display for WageInterval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for WageInterval {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "hourly" => Ok(Self::Hourly),
            "yearly" => Ok(Self::Yearly),
            _ => Err(anyhow::anyhow!("Invalid wage interval: {}", s)),
        }
    }
}

/// Location requirement enum
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum LocationRequirement {
    Remote,
    Hybrid,
    InOffice,
}

impl LocationRequirement {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Remote => "remote",
            Self::Hybrid => "hybrid",
            Self::InOffice => "in-office",
        }
    }
}

impl std::fmt::Display for LocationRequirement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for LocationRequirement {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "remote" => Ok(Self::Remote),
            "hybrid" => Ok(Self::Hybrid),
            "in-office" => Ok(Self::InOffice),
            _ => Err(anyhow::anyhow!("Invalid location requirement: {}", s)),
        }
    }
}

/// Experience level enum
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum ExperienceLevel {
    Junior,
    MidLevel,
    Senior,
}

impl ExperienceLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Junior => "junior",
            Self::MidLevel => "mid-level",
            Self::Senior => "senior",
        }
    }
}

impl std::fmt::Display for ExperienceLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ExperienceLevel {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "junior" => Ok(Self::Junior),
            "mid-level" => Ok(Self::MidLevel),
            "senior" => Ok(Self::Senior),
            _ => Err(anyhow::anyhow!("Invalid experience level: {}", s)),
        }
    }
}

/// Listing status enum
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum JobListingStatus {
    Draft,
    Published,
    Delisted,
}

impl JobListingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Published => "published",
            Self::Delisted => "delisted",
        }
    }
}

impl std::fmt::Display for JobListingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for JobListingStatus {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "draft" => Ok(Self::Draft),
            "published" => Ok(Self::Published),
            "delisted" => Ok(Self::Delisted),
            _ => Err(anyhow::anyhow!("Invalid listing status: {}", s)),
        }
    }
}

/// Listing type enum
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum JobListingType {
    Internship,
    Hackathon,
    Event,
    Project,
    StartupRole,
}

impl JobListingType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Internship => "internship",
            Self::Hackathon => "hackathon",
            Self::Event => "event",
            Self::Project => "project",
            Self::StartupRole => "startup_role",
        }
    }
}

impl std::fmt::Display for JobListingType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for JobListingType {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "internship" => Ok(Self::Internship),
            "hackathon" => Ok(Self::Hackathon),
            "event" => Ok(Self::Event),
            "project" => Ok(Self::Project),
            "startup_role" => Ok(Self::StartupRole),
            _ => Err(anyhow::anyhow!("Invalid listing type: {}", s)),
        }
    }
}

// =============================================================================
// SQL Queries - ALL queries must be in models/
// =============================================================================

impl JobListing {
    /// Find listing by ID
    pub async fn find_by_id(id: Uuid, pool: &PgPool) -> Result<Option<Self>> {
        let listing = sqlx::query_as::<_, JobListing>("SELECT * FROM job_listings WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(listing)
    }

    /// Published listings for the public feed, featured first, then most
    /// recently posted
    pub async fn find_published(pool: &PgPool) -> Result<Vec<Self>> {
        let listings = sqlx::query_as::<_, JobListing>(
            r#"
            SELECT * FROM job_listings
            WHERE status = 'published'
            ORDER BY is_featured DESC, posted_at DESC NULLS LAST
            "#,
        )
        .fetch_all(pool)
        .await?;
        Ok(listings)
    }

    /// All listings owned by an organization
    pub async fn find_by_organization(organization_id: &str, pool: &PgPool) -> Result<Vec<Self>> {
        let listings = sqlx::query_as::<_, JobListing>(
            "SELECT * FROM job_listings WHERE organization_id = $1 ORDER BY posted_at DESC NULLS LAST",
        )
        .bind(organization_id)
        .fetch_all(pool)
        .await?;
        Ok(listings)
    }

    /// Insert new listing
    pub async fn insert(&self, pool: &PgPool) -> Result<Self> {
        let listing = sqlx::query_as::<_, JobListing>(
            r#"
            INSERT INTO job_listings (
                id, organization_id, title, description, wage, wage_interval,
                city, state_abbreviation, location_requirement, experience_level,
                status, listing_type, posted_at, is_featured, created_at, updated_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16)
            RETURNING *
            "#,
        )
        .bind(self.id)
        .bind(&self.organization_id)
        .bind(&self.title)
        .bind(&self.description)
        .bind(self.wage)
        .bind(&self.wage_interval)
        .bind(&self.city)
        .bind(&self.state_abbreviation)
        .bind(&self.location_requirement)
        .bind(&self.experience_level)
        .bind(&self.status)
        .bind(&self.listing_type)
        .bind(self.posted_at)
        .bind(self.is_featured)
        .bind(self.created_at)
        .bind(self.updated_at)
        .fetch_one(pool)
        .await?;
        Ok(listing)
    }
}
