use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

/// Organization - anchor entity that owns job listings.
///
/// Ids are caller-assigned strings: seed rows use well-known ids so a rerun
/// can find and delete earlier instances before re-inserting.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Organization {
    pub id: String,
    pub name: String,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// =============================================================================
// SQL Queries - ALL queries must be in models/
// =============================================================================

impl Organization {
    /// Build a new organization ready to insert
    pub fn new(id: impl Into<String>, name: impl Into<String>, image_url: Option<String>) -> Self {
        let now = Utc::now();
        Self {
            id: id.into(),
            name: name.into(),
            image_url,
            created_at: now,
            updated_at: now,
        }
    }

    /// Find organization by ID
    pub async fn find_by_id(id: &str, pool: &PgPool) -> Result<Option<Self>> {
        let org = sqlx::query_as::<_, Organization>("SELECT * FROM organizations WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(org)
    }

    /// Count organizations whose id is in the given set
    pub async fn count_by_ids(ids: &[&str], pool: &PgPool) -> Result<i64> {
        let ids: Vec<String> = ids.iter().map(|id| id.to_string()).collect();
        let count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM organizations WHERE id = ANY($1)")
                .bind(&ids)
                .fetch_one(pool)
                .await?;
        Ok(count)
    }

    /// Insert new organization
    pub async fn insert(&self, pool: &PgPool) -> Result<Self> {
        let org = sqlx::query_as::<_, Organization>(
            r#"
            INSERT INTO organizations (id, name, image_url, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(&self.id)
        .bind(&self.name)
        .bind(&self.image_url)
        .bind(self.created_at)
        .bind(self.updated_at)
        .fetch_one(pool)
        .await?;
        Ok(org)
    }

    /// Delete organization by ID. Listings cascade at the schema level.
    /// Returns the number of rows removed (0 when the id was absent).
    pub async fn delete_by_id(id: &str, pool: &PgPool) -> Result<u64> {
        let result = sqlx::query("DELETE FROM organizations WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }
}
